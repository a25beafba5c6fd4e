//! Pressed key and button tracking.

use super::events::{Key, MouseButton};
use std::collections::BTreeSet;
use std::fmt;

/// Order-independent set of held inputs.
///
/// Used both for the live state tracked by the matcher and for the patterns
/// stored in shortcuts, so a shortcut matches when the two sets are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InputSet<T: Ord> {
    items: BTreeSet<T>,
}

/// Keys currently held (or required by a shortcut).
pub type KeySet = InputSet<Key>;

/// Pointer buttons currently held (or required by a shortcut).
pub type ButtonSet = InputSet<MouseButton>;

impl<T: Ord> Default for InputSet<T> {
    fn default() -> Self {
        Self {
            items: BTreeSet::new(),
        }
    }
}

impl<T: Ord + Copy> InputSet<T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            items: BTreeSet::new(),
        }
    }

    /// Adds an item. Returns `false` if it was already present.
    pub fn press(&mut self, item: T) -> bool {
        self.items.insert(item)
    }

    /// Removes an item. Returns `false` if it was not tracked.
    pub fn release(&mut self, item: T) -> bool {
        self.items.remove(&item)
    }

    pub fn contains(&self, item: T) -> bool {
        self.items.contains(&item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.items.iter().copied()
    }

    /// Returns `true` if every item of `self` is also in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.items.is_subset(&other.items)
    }

    /// Returns `true` if `self` plus `item` is exactly `other`.
    ///
    /// This is the "one more press completes the pattern" test used for
    /// stroke readiness and election.
    pub fn completes_with(&self, item: T, other: &Self) -> bool {
        !self.contains(item)
            && other.contains(item)
            && self.len() + 1 == other.len()
            && self.is_subset(other)
    }
}

impl<T: Ord + Copy> FromIterator<T> for InputSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Ord + Copy + fmt::Display> fmt::Display for InputSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for item in &self.items {
            if !first {
                f.write_str("+")?;
            }
            write!(f, "{item}")?;
            first = false;
        }
        Ok(())
    }
}
