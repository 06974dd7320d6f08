use crate::ProfileReference;

/// Ordered, de-duplicated set of tracked profiles.
///
/// Insertion order is preserved because it is also display order. Entries
/// are never removed at runtime; the set only grows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    entries: Vec<ProfileReference>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the reference unless an equal address is already tracked.
    /// Returns whether the entry was newly added.
    pub fn add(&mut self, reference: ProfileReference) -> bool {
        if self.contains(&reference) {
            return false;
        }
        self.entries.push(reference);
        true
    }

    pub fn contains(&self, reference: &ProfileReference) -> bool {
        self.entries.contains(reference)
    }

    /// Current membership in insertion order.
    pub fn snapshot(&self) -> Vec<ProfileReference> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bulk import of one canonical address per line, trimming whitespace,
    /// skipping empty lines and de-duplicating with the same rule as [`add`].
    /// Returns how many entries were newly added.
    ///
    /// [`add`]: Registry::add
    pub fn load_lines(&mut self, text: &str) -> usize {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter(|line| self.add(ProfileReference::from_address(*line)))
            .count()
    }

    /// Export as one canonical address per line, trailing newline per entry.
    pub fn dump_lines(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(entry.address());
            out.push('\n');
        }
        out
    }
}
