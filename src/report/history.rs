//! In-memory conversion history

/// Ordered, append-only record of completed conversions.
///
/// Entries are already-formatted lines; the store only grows by `push` and
/// only shrinks by `clear`.
#[derive(Debug, Default, Clone)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: impl Into<String>) {
        let entry = entry.into();
        log::debug!("history[{}] <- {}", self.entries.len() + 1, entry);
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        log::debug!("history cleared ({} entries)", self.entries.len());
        self.entries.clear();
    }

    /// Entries prefixed with their 1-based position, e.g. `"1. 150.00 lbs = 68.04 kg"`
    pub fn numbered(&self) -> impl Iterator<Item = String> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| format!("{}. {}", i + 1, entry))
    }
}
