//! Recall navigation over previously typed input.
//!
//! The input history itself is a plain append log; the cursor that walks it
//! belongs to whoever displays it. `InputRecall` works on a snapshot so that
//! appends made while navigating do not shift the entries under the cursor.

/// Cursor over a snapshot of raw inputs.
#[derive(Clone, Debug, Default)]
pub struct InputRecall {
    entries: Vec<String>,
    index: usize,
}

impl InputRecall {
    /// Start past the newest entry, so the first `previous` shows it.
    pub fn new(entries: Vec<String>) -> Self {
        let index = entries.len();
        Self { entries, index }
    }

    /// Replace the snapshot and move the cursor back past the newest entry.
    pub fn reset(&mut self, entries: Vec<String>) {
        self.index = entries.len();
        self.entries = entries;
    }

    /// Step to the older entry. No-op at the oldest one.
    pub fn previous(&mut self) -> Option<&str> {
        if self.index > 0 {
            self.index -= 1;
            return self.entries.get(self.index).map(String::as_str);
        }
        None
    }

    /// Step to the newer entry. No-op at the newest one.
    pub fn next(&mut self) -> Option<&str> {
        if self.index + 1 < self.entries.len() {
            self.index += 1;
            return self.entries.get(self.index).map(String::as_str);
        }
        None
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
