//! Insertion-ordered set of unique strings (made by FontLab https://www.fontlab.com/)

use indexmap::IndexSet;

/// Remembers strings in the order they arrived, without repeats.
///
/// The sync pass fills one of these with every filepath the cache already
/// knows, then asks it "have we met?" once per enumerated face.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringSet {
    members: IndexSet<String>,
}

impl StringSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `value`, returning `false` when it was already present.
    pub fn add(&mut self, value: impl Into<String>) -> bool {
        self.members.insert(value.into())
    }

    pub fn contains(&self, value: &str) -> bool {
        self.members.contains(value)
    }

    /// True when every member of `other` is also a member of `self`.
    pub fn contains_all(&self, other: &StringSet) -> bool {
        other.iter().all(|value| self.contains(value))
    }

    /// Removes `value`, returning `true` if it was present.
    ///
    /// Later members shift down so arrival order survives.
    pub fn remove(&mut self, value: &str) -> bool {
        self.members.shift_remove(value)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }
}

impl<S: Into<String>> FromIterator<S> for StringSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = StringSet::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<S> for StringSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}
