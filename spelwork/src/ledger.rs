//! Per-component record containers.
//!
//! Two disciplines are kept apart on purpose:
//!
//! - [`AppendLog`]: ordered history, entries are only ever appended
//! - [`KeyedSlots`]: one current entry per key, a new entry replaces the old

use std::collections::BTreeMap;

/// Ordered, append-only history.
#[derive(Debug, Clone)]
pub struct AppendLog<T> {
    entries: Vec<T>,
}

impl<T> AppendLog<T> {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry and return a reference to it.
    pub fn append(&mut self, entry: T) -> &T {
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    /// Most recently appended entry.
    pub fn latest(&self) -> Option<&T> {
        self.entries.last()
    }

    /// Mutable entry at `position`. Entries may change in place but never move.
    pub fn get_mut(&mut self, position: usize) -> Option<&mut T> {
        self.entries.get_mut(position)
    }

    /// First mutable entry matching `predicate`.
    pub fn find_mut(&mut self, predicate: impl FnMut(&&mut T) -> bool) -> Option<&mut T> {
        self.entries.iter_mut().find(predicate)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }
}

impl<T> Default for AppendLog<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// One current entry per key; inserting under an existing key replaces it.
#[derive(Debug, Clone)]
pub struct KeyedSlots<K: Ord, T> {
    slots: BTreeMap<K, T>,
}

impl<K: Ord, T> KeyedSlots<K, T> {
    /// Create an empty set of slots.
    pub fn new() -> Self {
        Self {
            slots: BTreeMap::new(),
        }
    }

    /// Put `entry` in the slot for `key`, returning whatever it replaced.
    pub fn upsert(&mut self, key: K, entry: T) -> Option<T> {
        self.slots.insert(key, entry)
    }

    pub fn get(&self, key: &K) -> Option<&T> {
        self.slots.get(key)
    }

    /// Entries in key order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.slots.values()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<K: Ord, T> Default for KeyedSlots<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_log_keeps_history() {
        let mut log = AppendLog::new();
        log.append("first");
        log.append("second");

        assert_eq!(log.len(), 2);
        assert_eq!(log.latest(), Some(&"second"));
        assert_eq!(log.as_slice(), &["first", "second"]);
    }

    #[test]
    fn test_keyed_slots_replace() {
        let mut slots = KeyedSlots::new();
        assert!(slots.upsert("competence", 0.7).is_none());
        assert_eq!(slots.upsert("competence", 0.9), Some(0.7));

        assert_eq!(slots.len(), 1);
        assert_eq!(slots.get(&"competence"), Some(&0.9));
    }
}
