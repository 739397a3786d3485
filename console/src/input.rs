use chess_client::{
    ParseError, Square,
    frontend::{Input, InputEvent},
};
use std::{
    collections::VecDeque,
    io::{self, BufRead, Write},
    str::FromStr,
    sync::mpsc::{self, Receiver, TryRecvError},
    thread,
};

/// One line of user input, already split into clicks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub events: Vec<InputEvent>,
    /// Promotion piece typed after a move, as in `e7e8q`.
    pub promotion: Option<String>,
}

/// Accepts `quit` or `q`, a square (`e2`), or a move (`e2e4`, `e7e8q`).
pub fn parse_line(line: &str) -> Result<ParsedLine, ParseError> {
    let line = line.trim().to_ascii_lowercase();
    if line == "quit" || line == "q" {
        return Ok(ParsedLine {
            events: vec![InputEvent::Quit],
            promotion: None,
        });
    }
    let (squares, promotion) = match line.len() {
        2 | 4 => (line.as_str(), None),
        5 => {
            let (squares, piece) = line.split_at_checked(4).ok_or(ParseError)?;
            (squares, Some(piece.to_string()))
        }
        _ => return Err(ParseError),
    };
    let mut events = Vec::new();
    let mut rest = squares;
    while !rest.is_empty() {
        let (square, tail) = rest.split_at_checked(2).ok_or(ParseError)?;
        events.push(InputEvent::Select(Square::from_str(square)?));
        rest = tail;
    }
    Ok(ParsedLine { events, promotion })
}

/// Line-oriented input. Lines arrive on a channel so that `poll` never
/// blocks; a closed channel means end of input and is treated as quit.
#[derive(Debug)]
pub struct LineInput {
    lines: Receiver<String>,
    pending: VecDeque<InputEvent>,
    promotion: Option<String>,
}

impl LineInput {
    pub fn new(lines: Receiver<String>) -> Self {
        Self {
            lines,
            pending: VecDeque::new(),
            promotion: None,
        }
    }

    /// Reads standard input on a background thread.
    pub fn stdin() -> Self {
        let (sender, receiver) = mpsc::channel();
        _ = thread::spawn(move || {
            for line in io::stdin().lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        log::error!("Failed to read stdin: {e}");
                        break;
                    }
                };
                if sender.send(line).is_err() {
                    break;
                }
            }
            log::debug!("End of input");
        });
        Self::new(receiver)
    }

    fn accept(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }
        match parse_line(line) {
            Ok(parsed) => {
                self.pending.extend(parsed.events);
                self.promotion = parsed.promotion;
            }
            Err(e) => {
                log::warn!("{e}: {line:?}");
                println!("Enter a square (e2), a move (e2e4) or quit");
            }
        }
    }
}

impl Input for LineInput {
    fn poll(&mut self) -> Option<InputEvent> {
        if let Some(event) = self.pending.pop_front() {
            return Some(event);
        }
        match self.lines.try_recv() {
            Ok(line) => {
                self.accept(&line);
                self.pending.pop_front()
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(InputEvent::Quit),
        }
    }

    /// `q` means queen here. Only `quit` quits.
    fn promotion_token(&mut self) -> Option<String> {
        if let Some(token) = self.promotion.take() {
            return Some(token);
        }
        print!("Promote to (q, r, b, n): ");
        if let Err(e) = io::stdout().flush() {
            log::warn!("Failed to flush stdout: {e}");
        }
        let line = self.lines.recv().ok()?;
        match line.trim() {
            "quit" => None,
            token => Some(token.to_string()),
        }
    }
}
