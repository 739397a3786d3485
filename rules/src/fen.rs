use crate::{Board, CastlingRights, ChessPosition, ColoredPiece};
use chess_client::{Color, ParseError, PieceKind, Square};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// Forsyth-Edwards Notation. The halfmove clock and fullmove number may be
/// omitted and default to 0 and 1.
impl FromStr for ChessPosition {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        let mut fields = s.split_whitespace();
        let board = parse_placement(fields.next().ok_or(ParseError)?)?;
        let to_move = match fields.next().ok_or(ParseError)? {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(ParseError),
        };
        let castling = CastlingRights::from_str(fields.next().ok_or(ParseError)?)?;
        let en_passant = match fields.next().ok_or(ParseError)? {
            "-" => None,
            square => Some(Square::from_str(square)?),
        };
        let halfmove_clock = fields
            .next()
            .map_or(Ok(0), str::parse::<u32>)
            .map_err(|_| ParseError)?;
        let fullmove_number = fields
            .next()
            .map_or(Ok(1), str::parse::<u32>)
            .map_err(|_| ParseError)?;
        if fields.next().is_some() {
            return Err(ParseError);
        }
        for color in [Color::White, Color::Black] {
            if board.pieces(ColoredPiece::new(color, PieceKind::King)).count() != 1 {
                return Err(ParseError);
            }
        }
        Ok(Self::from_parts(
            board,
            to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        ))
    }
}

fn parse_placement(s: &str) -> Result<Board, ParseError> {
    let mut board = Board::empty();
    let rows: Vec<&str> = s.split('/').collect();
    if rows.len() != Square::HEIGHT {
        return Err(ParseError);
    }
    for (row, text) in rows.into_iter().enumerate() {
        let rank = Square::HEIGHT - 1 - row;
        let mut file = 0;
        for c in text.chars() {
            if let Some(skip) = c.to_digit(10) {
                if skip == 0 {
                    return Err(ParseError);
                }
                file += skip as usize;
            } else {
                if file >= Square::WIDTH {
                    return Err(ParseError);
                }
                let piece = ColoredPiece::from_fen_char(c)?;
                _ = board.put(Square::from_file_rank(file, rank), piece);
                file += 1;
            }
            if file > Square::WIDTH {
                return Err(ParseError);
            }
        }
        if file != Square::WIDTH {
            return Err(ParseError);
        }
    }
    Ok(board)
}

impl Display for ChessPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let board = self.board();
        for rank in (0..Square::HEIGHT).rev() {
            let mut empty = 0;
            for file in 0..Square::WIDTH {
                match board.square(Square::from_file_rank(file, rank)) {
                    Some(piece) => {
                        if empty != 0 {
                            write!(f, "{empty}")?;
                            empty = 0;
                        }
                        write!(f, "{piece}")?;
                    }
                    None => empty += 1,
                }
            }
            if empty != 0 {
                write!(f, "{empty}")?;
            }
            if rank != 0 {
                write!(f, "/")?;
            }
        }
        let side = match self.to_move() {
            Color::White => 'w',
            Color::Black => 'b',
        };
        write!(f, " {side} {}", self.castling_rights())?;
        match self.en_passant() {
            Some(square) => write!(f, " {square}")?,
            None => write!(f, " -")?,
        }
        write!(f, " {} {}", self.halfmove_clock(), self.fullmove_number())
    }
}
