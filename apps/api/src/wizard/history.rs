use serde::{Deserialize, Serialize};

use crate::wizard::navigation::ActiveApp;
use crate::wizard::phases::Phase;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryEntry {
    pub active_app: ActiveApp,
    pub phases: Vec<Phase>,
}

/// Result of popping the back-stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackOutcome {
    /// Nothing to go back to; the caller lands on `welcome`.
    Floor,
    /// The popped entry was a home surface; the stack was cleared and the
    /// caller lands on `welcome`.
    RootCollapse,
    /// Restore this snapshot verbatim.
    Restore(HistoryEntry),
}

impl BackOutcome {
    pub fn destination_app(&self) -> ActiveApp {
        match self {
            BackOutcome::Floor | BackOutcome::RootCollapse => ActiveApp::Welcome,
            BackOutcome::Restore(entry) => entry.active_app,
        }
    }
}

/// Append-only undo stack of (app, phases) snapshots. Unbounded; only `back`
/// consumes entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn back(&mut self) -> BackOutcome {
        match self.entries.pop() {
            None => BackOutcome::Floor,
            Some(entry) if entry.active_app.is_root() => {
                self.entries.clear();
                BackOutcome::RootCollapse
            }
            Some(entry) => BackOutcome::Restore(entry),
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn peek(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }
}
