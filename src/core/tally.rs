use std::collections::HashMap;

/// Counter keyed by label that remembers first-encounter order.
///
/// Ranking is a stable sort by descending count, so equal counts keep the
/// order in which their labels first appeared.
#[derive(Debug, Default, Clone)]
pub(crate) struct Tally {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl Tally {
    pub(crate) fn add(&mut self, label: &str, n: u64) {
        match self.index.get(label) {
            Some(&i) => self.entries[i].1 += n,
            None => {
                self.index.insert(label.to_string(), self.entries.len());
                self.entries.push((label.to_string(), n));
            }
        }
    }

    pub(crate) fn increment(&mut self, label: &str) {
        self.add(label, 1);
    }

    /// Append `other` as if its labels were encountered after ours.
    pub(crate) fn merge(&mut self, other: Tally) {
        for (label, n) in other.entries {
            self.add(&label, n);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn total(&self) -> u64 {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    pub(crate) fn ranked(&self) -> Vec<(&str, u64)> {
        let mut ranked: Vec<(&str, u64)> = self
            .entries
            .iter()
            .map(|(label, n)| (label.as_str(), *n))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranked_is_descending_and_stable() {
        let mut t = Tally::default();
        for label in ["b", "a", "c", "a", "c", "d"] {
            t.increment(label);
        }
        assert_eq!(t.ranked(), vec![("a", 2), ("c", 2), ("b", 1), ("d", 1)]);
        assert_eq!(t.total(), 6);
        assert_eq!(t.len(), 4);
        assert!(!t.is_empty());
    }

    #[test]
    fn merge_appends_new_labels_after_existing() {
        let mut left = Tally::default();
        left.increment("x");
        let mut right = Tally::default();
        right.add("y", 5);
        right.add("x", 2);
        left.merge(right);
        assert_eq!(left.ranked(), vec![("y", 5), ("x", 3)]);
    }

    #[test]
    fn empty_tally() {
        let t = Tally::default();
        assert_eq!(t.len(), 0);
        assert!(t.is_empty());
        assert!(t.ranked().is_empty());
        assert_eq!(t.total(), 0);
    }
}
