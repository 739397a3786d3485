use chess_client::{
    Move, Position, Square,
    enum_map::SimpleEnumExt,
    frontend::{GameReport, PlyEvent, Renderer},
    transcript,
};
use rules::ChessPosition;
use std::{
    fmt::Display,
    io::{self, Write},
};

/// Draws the board as text, rank 8 on top.
///
/// Each square is a marker followed by the FEN letter of its piece or `.`:
/// `>` for the selected piece, `*` for its legal targets and `'` for the
/// last move.
#[derive(Debug)]
pub struct TextRenderer<W> {
    out: W,
    last_move: Option<Move>,
}

impl TextRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            last_move: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: impl Display) {
        if let Err(e) = write!(self.out, "{text}").and_then(|()| self.out.flush()) {
            log::warn!("Failed to write to terminal: {e}");
        }
    }

    fn draw(&mut self, position: &ChessPosition, selected: Option<Square>, targets: &[Move]) {
        let mut grid = [[(' ', '.'); Square::WIDTH]; Square::HEIGHT];
        for square in Square::all() {
            let marker = if selected == Some(square) {
                '>'
            } else if targets.iter().any(|mov| mov.to() == square) {
                '*'
            } else if self
                .last_move
                .is_some_and(|mov| mov.from() == square || mov.to() == square)
            {
                '\''
            } else {
                ' '
            };
            let piece = position
                .board()
                .square(square)
                .map_or('.', |piece| piece.fen_char());
            grid[square.display_row()][square.file()] = (marker, piece);
        }
        let mut text = String::new();
        for (row, cells) in grid.iter().enumerate() {
            text.push(char::from(b'8' - row as u8));
            for &(marker, piece) in cells {
                text.push(marker);
                text.push(piece);
            }
            text.push('\n');
        }
        text.push_str("  a b c d e f g h\n");
        self.emit(text);
    }
}

impl<W: Write> Renderer<ChessPosition> for TextRenderer<W> {
    fn game_started(&mut self, position: &ChessPosition) {
        self.last_move = None;
        self.draw(position, None, &[]);
        self.emit(format_args!("{} to move\n", position.side_to_move()));
    }

    fn selection_changed(&mut self, position: &ChessPosition, selected: Option<Square>, targets: &[Move]) {
        if selected.is_some() {
            self.draw(position, selected, targets);
        }
    }

    fn ply_applied(&mut self, position: &ChessPosition, event: &PlyEvent) {
        self.last_move = Some(event.mov);
        self.emit(format_args!("{}\n", transcript::numbered(event.ply, &event.san)));
        self.draw(position, None, &[]);
    }

    fn illegal_move(&mut self, _position: &ChessPosition, from: Square, to: Square) {
        self.emit(format_args!("Illegal move {from}{to}\n"));
    }

    fn game_over(&mut self, report: &GameReport) {
        self.emit(report);
    }
}
