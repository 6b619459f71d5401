//! Input handling and player control.
//!
//! Turns raw characters into commands. Characters arrive whitespace
//! separated, possibly several per line.

use std::collections::VecDeque;
use std::io::BufRead;

/// A parsed player command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move { dx: i32, dy: i32 },
    Attack,
    /// Zero-based ability slot
    Ability(usize),
    Quit,
}

impl Command {
    /// Map one key to a command. Unknown keys yield `None`.
    pub fn parse(key: char) -> Option<Self> {
        let cmd = match key {
            'w' => Command::Move { dx: 0, dy: -1 },
            's' => Command::Move { dx: 0, dy: 1 },
            'a' => Command::Move { dx: -1, dy: 0 },
            'd' => Command::Move { dx: 1, dy: 0 },
            'f' => Command::Attack,
            '1' => Command::Ability(0),
            '2' => Command::Ability(1),
            '3' => Command::Ability(2),
            'q' => Command::Quit,
            _ => return None,
        };
        Some(cmd)
    }
}

/// Reads one non-whitespace character at a time from a line source
pub struct InputSource<R> {
    reader: R,
    pending: VecDeque<char>,
}

impl<R: BufRead> InputSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next key typed, or `None` once the source is exhausted
    pub fn next_key(&mut self) -> std::io::Result<Option<char>> {
        loop {
            if let Some(c) = self.pending.pop_front() {
                return Ok(Some(c));
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.chars().filter(|c| !c.is_whitespace()));
        }
    }
}
