use std::fmt::{self, Display, Formatter};

/// SAN of every ply in the current game, in the order the plies were played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanRecord {
    start_ply: u32,
    sans: Vec<String>,
}

impl SanRecord {
    /// `start_ply` is the absolute ply of the first recorded move; even
    /// plies are white's.
    pub fn new(start_ply: u32) -> Self {
        Self {
            start_ply,
            sans: Vec::new(),
        }
    }

    pub fn start_ply(&self) -> u32 {
        self.start_ply
    }

    /// Absolute ply of the next move to be recorded.
    pub fn next_ply(&self) -> u32 {
        self.start_ply + self.sans.len() as u32
    }

    pub fn push(&mut self, san: String) {
        self.sans.push(san);
    }

    pub fn len(&self) -> usize {
        self.sans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sans.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.sans.last().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.sans.iter().map(String::as_str)
    }

    /// One line per move number: `"12. Nf3 Nc6"`.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        let mut line = String::new();
        for (ply, san) in (self.start_ply..).zip(&self.sans) {
            if is_white_ply(ply) {
                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                }
                line = format!("{}. {san}", move_number(ply));
            } else if line.is_empty() {
                line = format!("{}... {san}", move_number(ply));
            } else {
                line.push(' ');
                line.push_str(san);
            }
        }
        if !line.is_empty() {
            lines.push(line);
        }
        lines
    }
}

impl Display for SanRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

pub fn is_white_ply(ply: u32) -> bool {
    ply % 2 == 0
}

pub fn move_number(ply: u32) -> u32 {
    ply / 2 + 1
}

/// A single ply for live display: `"1. e4"` or `"1... e5"`.
pub fn numbered(ply: u32, san: &str) -> String {
    if is_white_ply(ply) {
        format!("{}. {san}", move_number(ply))
    } else {
        format!("{}... {san}", move_number(ply))
    }
}
