use std::ops::BitOr;

use crate::term::TermId;

/// A set of [`TermId`]s
///
/// Each term can occur only once in the group. The ids are kept sorted,
/// so iteration order is deterministic.
///
/// This group is used e.g. for the seed terms of a subgraph
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TermGroup {
    ids: Vec<TermId>,
}

impl TermGroup {
    /// Constructs a new, empty [`TermGroup`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a new, empty [`TermGroup`] with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: Vec::with_capacity(capacity),
        }
    }

    /// Returns `true` if the group contains no [`TermId`]s
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns the number of [`TermId`]s in the group
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Adds a new [`TermId`] to the group
    ///
    /// Returns whether the `TermId` was newly inserted. That is:
    ///
    /// - If the group did not previously contain this `TermId`, true is returned.
    /// - If the group already contained this `TermId`, false is returned.
    ///
    pub fn insert(&mut self, id: TermId) -> bool {
        match self.ids.binary_search(&id) {
            Ok(_) => false,
            Err(idx) => {
                self.ids.insert(idx, id);
                true
            }
        }
    }

    /// Removes a [`TermId`] from the group, returns `true` if it was present
    pub fn remove(&mut self, id: &TermId) -> bool {
        match self.ids.binary_search(id) {
            Ok(idx) => {
                self.ids.remove(idx);
                true
            }
            Err(_) => false,
        }
    }

    /// Returns `true` if the group contains the [`TermId`]
    pub fn contains(&self, id: &TermId) -> bool {
        self.ids.binary_search(id).is_ok()
    }

    /// Returns an Iterator of the [`TermId`]s inside the group
    pub fn iter(&self) -> TermIds<'_> {
        TermIds::new(self.ids.iter())
    }
}

impl<T: Into<TermId>> FromIterator<T> for TermGroup {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut group = TermGroup::new();
        for id in iter {
            group.insert(id.into());
        }
        group
    }
}

impl<'a> IntoIterator for &'a TermGroup {
    type Item = &'a TermId;
    type IntoIter = TermIds<'a>;

    fn into_iter(self) -> TermIds<'a> {
        TermIds::new(self.ids.iter())
    }
}

impl IntoIterator for TermGroup {
    type Item = TermId;
    type IntoIter = std::vec::IntoIter<TermId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.into_iter()
    }
}

/// An iterator over [`TermId`]s
pub struct TermIds<'a> {
    inner: std::slice::Iter<'a, TermId>,
}

impl<'a> TermIds<'a> {
    fn new(inner: std::slice::Iter<'a, TermId>) -> Self {
        Self { inner }
    }
}

impl<'a> Iterator for TermIds<'a> {
    type Item = &'a TermId;
    fn next(&mut self) -> Option<&'a TermId> {
        self.inner.next()
    }
}

impl BitOr for &TermGroup {
    type Output = TermGroup;

    fn bitor(self, rhs: &TermGroup) -> TermGroup {
        let mut group = self.clone();
        for id in &rhs.ids {
            group.insert(id.clone());
        }
        group
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_sorted_and_unique() {
        let mut group = TermGroup::new();
        assert!(group.insert("GO:3".into()));
        assert!(group.insert("GO:1".into()));
        assert!(!group.insert("GO:3".into()));

        let ids: Vec<&TermId> = group.iter().collect();
        assert_eq!(ids, vec![&TermId::from("GO:1"), &TermId::from("GO:3")]);
    }

    #[test]
    fn remove() {
        let mut group: TermGroup = ["GO:1", "GO:2"].into_iter().collect();
        assert!(group.remove(&"GO:1".into()));
        assert!(!group.remove(&"GO:1".into()));
        assert_eq!(group.len(), 1);
    }

    #[test]
    fn test_bitor() {
        let group1: TermGroup = ["GO:1", "GO:2", "GO:3"].into_iter().collect();
        let group2: TermGroup = ["GO:2", "GO:4"].into_iter().collect();

        let result = &group1 | &group2;
        let expected: TermGroup = ["GO:1", "GO:2", "GO:3", "GO:4"].into_iter().collect();
        assert_eq!(result, expected);
    }
}
