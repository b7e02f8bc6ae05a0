//! Command history with arrow-key navigation.

use serde::Serialize;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub command: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn parse(s: &str) -> Option<Direction> {
        match s.to_ascii_lowercase().as_str() {
            "up" | "arrowup" => Some(Direction::Up),
            "down" | "arrowdown" => Some(Direction::Down),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommandHistory {
    /// Oldest at the front.
    entries: VecDeque<HistoryEntry>,
    /// Index into `entries` while navigating, `None` otherwise.
    cursor: Option<usize>,
    max_size: usize,
}

impl CommandHistory {
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            cursor: None,
            max_size: max_size.max(1),
        }
    }

    /// Records a command. Duplicates are kept so `history` shows every line.
    pub fn push(&mut self, command: &str, timestamp: f64) {
        self.entries.push_back(HistoryEntry {
            command: command.to_string(),
            timestamp,
        });
        while self.entries.len() > self.max_size {
            self.entries.pop_front();
        }
        self.cursor = None;
    }

    pub fn navigate(&mut self, direction: Direction) -> String {
        if self.entries.is_empty() {
            return String::new();
        }
        let newest = self.entries.len() - 1;
        self.cursor = match (direction, self.cursor) {
            (Direction::Up, None) => Some(newest),
            (Direction::Up, Some(i)) => Some(i.saturating_sub(1)),
            (Direction::Down, None) => None,
            (Direction::Down, Some(i)) if i >= newest => None,
            (Direction::Down, Some(i)) => Some(i + 1),
        };
        self.cursor
            .and_then(|i| self.entries.get(i))
            .map(|e| e.command.clone())
            .unwrap_or_default()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}
