use serde::Serialize;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Input,
    Output,
    Error,
    System,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TerminalLine {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: LineKind,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

/// Bounded, append-only line log. Ids keep increasing across clears.
pub struct OutputBuffer {
    lines: VecDeque<TerminalLine>,
    next_id: u64,
    max_lines: usize,
}

impl OutputBuffer {
    pub fn new(max_lines: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            next_id: 1,
            max_lines: max_lines.max(1),
        }
    }

    pub fn push(&mut self, kind: LineKind, text: String, command: Option<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.lines.push_back(TerminalLine {
            id,
            kind,
            text,
            command,
        });
        while self.lines.len() > self.max_lines {
            self.lines.pop_front();
        }
        id
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = &TerminalLine> {
        self.lines.iter()
    }

    pub fn to_json(&self) -> String {
        let lines: Vec<&TerminalLine> = self.lines.iter().collect();
        serde_json::to_string(&lines).unwrap_or_else(|_| "[]".to_string())
    }
}
