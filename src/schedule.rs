//! Delayed output. Tasks live in a queue owned by the terminal and are
//! released by `due` once their time has come, so dropping the queue cancels
//! everything still pending.

use crate::buffer::LineKind;
use crate::i18n::Language;

#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    /// Append a line.
    Line { kind: LineKind, text: String },
    /// Run the localized `tree` command as if typed.
    Demo(Language),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskTag {
    Followup,
    Demo,
}

impl Task {
    pub fn tag(&self) -> TaskTag {
        match self {
            Task::Line { .. } => TaskTag::Followup,
            Task::Demo(_) => TaskTag::Demo,
        }
    }
}

#[derive(Debug)]
struct Pending {
    due_at: f64,
    seq: u64,
    task: Task,
}

#[derive(Debug, Default)]
pub struct TaskQueue {
    pending: Vec<Pending>,
    next_seq: u64,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now_ms: f64, delay_ms: u32, task: Task) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Pending {
            due_at: now_ms + f64::from(delay_ms),
            seq,
            task,
        });
    }

    /// Removes and returns every task due at `now_ms`, earliest first.
    /// Ties keep scheduling order.
    pub fn due(&mut self, now_ms: f64) -> Vec<Task> {
        let (mut ready, rest): (Vec<Pending>, Vec<Pending>) = self
            .pending
            .drain(..)
            .partition(|p| p.due_at <= now_ms);
        self.pending = rest;
        ready.sort_by(|a, b| a.due_at.total_cmp(&b.due_at).then(a.seq.cmp(&b.seq)));
        ready.into_iter().map(|p| p.task).collect()
    }

    pub fn cancel(&mut self, tag: TaskTag) -> usize {
        let before = self.pending.len();
        self.pending.retain(|p| p.task.tag() != tag);
        before - self.pending.len()
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str) -> Task {
        Task::Line {
            kind: LineKind::System,
            text: text.into(),
        }
    }

    #[test]
    fn test_due_respects_delay_and_order() {
        let mut q = TaskQueue::new();
        q.schedule(0.0, 1000, line("late"));
        q.schedule(0.0, 500, Task::Demo(Language::En));
        q.schedule(0.0, 500, line("tie"));
        assert!(q.due(499.0).is_empty());
        assert_eq!(q.due(500.0), vec![Task::Demo(Language::En), line("tie")]);
        assert_eq!(q.len(), 1);
        assert_eq!(q.due(5000.0), vec![line("late")]);
        assert!(q.is_empty());
    }

    #[test]
    fn test_cancel_by_tag() {
        let mut q = TaskQueue::new();
        q.schedule(0.0, 10, Task::Demo(Language::En));
        q.schedule(0.0, 10, line("bye"));
        assert_eq!(q.cancel(TaskTag::Demo), 1);
        assert_eq!(q.due(100.0), vec![line("bye")]);
    }

    #[test]
    fn test_cancel_all() {
        let mut q = TaskQueue::new();
        q.schedule(0.0, 10, line("x"));
        q.cancel_all();
        assert!(q.due(1e9).is_empty());
    }
}
