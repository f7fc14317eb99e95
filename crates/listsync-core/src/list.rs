use std::collections::VecDeque;

/// Maximum number of entries the shared list may hold.
pub const MAX_ENTRIES: usize = 10;

/// Ordered, capacity-bounded string list. Most recent insert sits at
/// index 0; once the list grows past [`MAX_ENTRIES`], the tail entry
/// is evicted.
#[derive(Debug, Default)]
pub struct BoundedList {
    entries: VecDeque<String>,
}

impl BoundedList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from existing values, front first. Values past the
    /// capacity are dropped.
    pub fn from_values(values: impl IntoIterator<Item = String>) -> Self {
        Self {
            entries: values.into_iter().take(MAX_ENTRIES).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Prepend a value, evicting the tail entry when the cap is
    /// exceeded. After return `len() <= MAX_ENTRIES` always holds.
    pub fn insert_front(&mut self, value: String) {
        self.entries.push_front(value);
        if self.entries.len() > MAX_ENTRIES {
            // Removes index MAX_ENTRIES, the last valid index of the
            // over-full list. Off-by-one here would silently break the cap.
            self.entries.remove(MAX_ENTRIES);
        }
    }

    /// Overwrite the entry at `index`. Returns false without touching
    /// the list when the index is out of range.
    pub fn set(&mut self, index: usize, value: String) -> bool {
        match self.entries.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Remove the entry at `index`, shifting later entries left.
    /// Returns the removed value, or None when out of range.
    pub fn remove_at(&mut self, index: usize) -> Option<String> {
        self.entries.remove(index)
    }

    /// Independent copy of the current entries, safe to hand to other
    /// tasks while this list keeps mutating.
    pub fn snapshot(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(values: &[&str]) -> BoundedList {
        BoundedList::from_values(values.iter().map(|s| s.to_string()))
    }

    #[test]
    fn insert_front_puts_value_at_index_zero() {
        let mut list = list_of(&["b", "c"]);
        list.insert_front("a".into());
        assert_eq!(list.snapshot(), vec!["a", "b", "c"]);
    }

    #[test]
    fn cap_holds_for_any_insert_sequence() {
        let mut list = BoundedList::new();
        for i in 0..100 {
            list.insert_front(format!("v{i}"));
            assert!(list.len() <= MAX_ENTRIES);
        }
    }

    #[test]
    fn eleventh_insert_evicts_the_oldest() {
        let mut list = BoundedList::new();
        for i in 1..=11 {
            list.insert_front(format!("v{i}"));
        }
        let expected: Vec<String> = (2..=11).rev().map(|i| format!("v{i}")).collect();
        assert_eq!(list.len(), 10);
        assert_eq!(list.snapshot(), expected);
    }

    #[test]
    fn set_out_of_range_is_a_no_op() {
        let mut list = list_of(&["a", "b"]);
        assert!(!list.set(2, "x".into()));
        assert_eq!(list.snapshot(), vec!["a", "b"]);
    }

    #[test]
    fn remove_shifts_later_entries_left() {
        let mut list = list_of(&["a", "b", "c"]);
        assert_eq!(list.remove_at(1).as_deref(), Some("b"));
        assert_eq!(list.snapshot(), vec!["a", "c"]);
        assert_eq!(list.remove_at(5), None);
    }

    #[test]
    fn snapshot_is_detached_from_the_live_list() {
        let mut list = list_of(&["a"]);
        let snap = list.snapshot();
        list.insert_front("b".into());
        assert_eq!(snap, vec!["a"]);
    }
}
