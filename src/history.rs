//! Linear undo/redo log of abacus snapshots.
//!
//! The log only grows by [`History::commit`]. Undo and redo move a cursor
//! over the stored entries without touching them; committing while the
//! cursor is behind the newest entry discards everything after the cursor.

use tracing::debug;

use crate::snapshot::Snapshot;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<Snapshot>,
    /// Index of the snapshot currently on the board; `None` before the first commit.
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commit(&mut self, snapshot: Snapshot) {
        let keep = self.cursor.map_or(0, |cursor| cursor + 1);
        let dropped = self.entries.len() - keep;
        self.entries.truncate(keep);
        self.entries.push(snapshot);
        self.cursor = Some(self.entries.len() - 1);
        debug!(step = keep, dropped, "history commit");
    }

    /// Steps back one entry and returns it, or `None` at the oldest entry.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if !self.can_undo() {
            return None;
        }
        let cursor = self.cursor? - 1;
        self.cursor = Some(cursor);
        debug!(step = cursor, "history undo");
        self.entries.get(cursor)
    }

    /// Steps forward one entry and returns it, or `None` at the newest entry.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        if !self.can_redo() {
            return None;
        }
        let cursor = self.cursor.map_or(0, |cursor| cursor + 1);
        self.cursor = Some(cursor);
        debug!(step = cursor, "history redo");
        self.entries.get(cursor)
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|cursor| cursor > 0)
    }

    pub fn can_redo(&self) -> bool {
        match self.cursor {
            Some(cursor) => cursor + 1 < self.entries.len(),
            None => !self.entries.is_empty(),
        }
    }

    pub fn current_step(&self) -> Option<usize> {
        self.cursor
    }

    pub fn current(&self) -> Option<&Snapshot> {
        self.entries.get(self.cursor?)
    }

    pub fn entries(&self) -> &[Snapshot] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abacus::Abacus;
    use crate::rod::BeadKind;

    /// Three distinct snapshots: one earth bead, two, three on the ones rod.
    fn snapshots() -> [Snapshot; 3] {
        let mut abacus = Abacus::default();
        std::array::from_fn(|i| {
            abacus.toggle_bead(0, BeadKind::Earth, i).unwrap();
            abacus.snapshot()
        })
    }

    #[test]
    fn starts_empty() {
        let mut history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.current_step(), None);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert!(history.undo().is_none());
        assert!(history.redo().is_none());
    }

    #[test]
    fn single_entry_cannot_be_undone() {
        let [a, _, _] = snapshots();
        let mut history = History::new();
        history.commit(a.clone());
        assert_eq!(history.current_step(), Some(0));
        assert_eq!(history.current(), Some(&a));
        assert!(!history.can_undo());
        assert!(history.undo().is_none());
    }

    #[test]
    fn undo_and_redo_walk_the_log() {
        let [a, b, c] = snapshots();
        let mut history = History::new();
        history.commit(a.clone());
        history.commit(b.clone());
        history.commit(c.clone());

        assert_eq!(history.undo(), Some(&b));
        assert_eq!(history.undo(), Some(&a));
        assert!(history.undo().is_none());
        assert_eq!(history.current_step(), Some(0));

        assert_eq!(history.redo(), Some(&b));
        assert_eq!(history.redo(), Some(&c));
        assert!(history.redo().is_none());
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn commit_after_undo_drops_redo_branch() {
        let [a, b, c] = snapshots();
        let mut history = History::new();
        history.commit(a.clone());
        history.commit(b);
        history.undo();
        history.commit(c.clone());

        assert_eq!(history.entries(), &[a, c]);
        assert!(!history.can_redo());
        assert!(history.can_undo());
        assert_eq!(history.current_step(), Some(1));
    }
}
