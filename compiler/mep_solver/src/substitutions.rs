//! Ordered textual substitution tables for synonyms and variables.
//!
//! Both are raw substring replacement applied before any parsing. Entries
//! apply in insertion order, and redefining a pattern replaces its value
//! without moving it.

/// An insertion-ordered `pattern -> replacement` table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Substitutions {
    entries: Vec<(String, String)>,
}

impl Substitutions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `pattern` to `replacement`, returning the previous replacement.
    pub fn insert(
        &mut self,
        pattern: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Option<String> {
        let pattern = pattern.into();
        let replacement = replacement.into();
        match self.entries.iter_mut().find(|(p, _)| *p == pattern) {
            Some((_, existing)) => Some(std::mem::replace(existing, replacement)),
            None => {
                self.entries.push((pattern, replacement));
                None
            }
        }
    }

    pub fn get(&self, pattern: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| p == pattern)
            .map(|(_, r)| r.as_str())
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, r)| (p.as_str(), r.as_str()))
    }

    /// Replace every occurrence of each pattern, in insertion order.
    ///
    /// Later entries see the output of earlier ones.
    pub fn apply(&self, text: String) -> String {
        self.entries
            .iter()
            .filter(|(pattern, _)| !pattern.is_empty())
            .fold(text, |text, (pattern, replacement)| {
                text.replace(pattern.as_str(), replacement)
            })
    }
}
