// File: crates/grapher-core/src/history.rs
// Summary: Navigation-history capability and an in-memory implementation with back/forward.

/// Get/set access to the page location.
pub trait History {
    /// Current full location (base plus optional `?query`).
    fn location(&self) -> String;
    /// Replace the current entry, or push a new one when `new_entry` is set.
    fn set_location(&mut self, location: String, new_entry: bool);
}

/// Linear history stack. Pushing discards entries after the cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl MemoryHistory {
    pub fn new(location: impl Into<String>) -> Self {
        Self { entries: vec![location.into()], cursor: 0 }
    }

    pub fn entries(&self) -> &[String] { &self.entries }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Move one entry back. Returns false at the oldest entry.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 { return false; }
        self.cursor -= 1;
        true
    }

    /// Move one entry forward. Returns false at the newest entry.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() { return false; }
        self.cursor += 1;
        true
    }
}

impl History for MemoryHistory {
    fn location(&self) -> String {
        self.entries[self.cursor].clone()
    }

    fn set_location(&mut self, location: String, new_entry: bool) {
        if new_entry {
            self.entries.truncate(self.cursor + 1);
            self.entries.push(location);
            self.cursor = self.entries.len() - 1;
        } else {
            self.entries[self.cursor] = location;
        }
    }
}
