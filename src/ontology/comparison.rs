//! Compare two releases of the Gene Ontology to each other
//!
//! Enrichment workflows often run against several annual releases.
//! The comparison shows which terms were added, removed or re-wired.
//!
//! # Examples
//!
//! ```rust
//! use godag::Ontology;
//!
//! let old_ontology = Ontology::default();
//! let new_ontology = Ontology::from_obo("tests/mini_go.obo").unwrap();
//!
//! let comparison = old_ontology.compare(&new_ontology);
//!
//! for term in comparison.added_terms() {
//!     println!("New term: {}", term.id());
//! }
//!
//! for delta in comparison.changed_terms() {
//!     println!("Changed term: {}", delta.id());
//! }
//! ```
use std::collections::BTreeSet;
use std::fmt::Display;

use crate::term::{GoTerm, RelationType, TermId};
use crate::Ontology;

/// Compares the content of two Ontologies
///
/// The first one, `lhs`, is considered the `old` release,
/// the second one, `rhs`, the `new` release.
#[derive(Debug)]
pub struct Comparison<'a> {
    lhs: &'a Ontology,
    rhs: &'a Ontology,
}

impl Display for Comparison<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Version\t{}\t{}\nTerms\t{}\t{}\nAdded\t{}\nRemoved\t{}\nChanged\t{}",
            self.lhs.version(),
            self.rhs.version(),
            self.lhs.len(),
            self.rhs.len(),
            self.added_terms().len(),
            self.removed_terms().len(),
            self.changed_terms().len()
        )
    }
}

impl<'a> Comparison<'a> {
    /// Constructs a new [`Comparison`] from two [`Ontology`]
    pub fn new(lhs: &'a Ontology, rhs: &'a Ontology) -> Self {
        Self { lhs, rhs }
    }

    /// Returns all [`GoTerm`]s that are exclusively in the `new` Ontology,
    /// sorted by id
    pub fn added_terms(&self) -> Vec<GoTerm<'a>> {
        Self::exclusive(self.rhs, self.lhs)
    }

    /// Returns all [`GoTerm`]s that are exclusively in the `old` Ontology,
    /// sorted by id
    pub fn removed_terms(&self) -> Vec<GoTerm<'a>> {
        Self::exclusive(self.lhs, self.rhs)
    }

    /// Returns a [`TermDelta`] for every term that is different
    /// between the `old` and `new` Ontology, sorted by id
    ///
    /// Differences are defined as either:
    /// - Changed name
    /// - Changed direct parents or relation types
    /// - Changed obsolete state
    pub fn changed_terms(&self) -> Vec<TermDelta> {
        let mut res: Vec<TermDelta> = self
            .lhs
            .terms()
            .filter_map(|term| TermDelta::new(term, self.rhs.term(term.id())?))
            .collect();
        res.sort_by(|a, b| a.id().cmp(b.id()));
        res
    }

    fn exclusive(base: &'a Ontology, other: &Ontology) -> Vec<GoTerm<'a>> {
        let mut res: Vec<GoTerm<'a>> = base
            .terms()
            .filter(|term| other.term(term.id()).is_none())
            .collect();
        res.sort_by(|a, b| a.id().cmp(b.id()));
        res
    }
}

/// Differences between two versions of a [`GoTerm`]
#[derive(Debug)]
pub struct TermDelta {
    term_id: TermId,
    changed_name: (String, String),
    added_parents: Vec<(TermId, RelationType)>,
    removed_parents: Vec<(TermId, RelationType)>,
    obsolete: (bool, bool),
}

impl TermDelta {
    /// Constructs a new [`TermDelta`] by comparing two [`GoTerm`]s
    ///
    /// Returns `None` if both are identical
    pub fn new(lhs: GoTerm, rhs: GoTerm) -> Option<Self> {
        let changed_name = (lhs.name().to_string(), rhs.name().to_string());

        let lhs_parents: BTreeSet<(TermId, RelationType)> =
            lhs.parent_ids().iter().cloned().collect();
        let rhs_parents: BTreeSet<(TermId, RelationType)> =
            rhs.parent_ids().iter().cloned().collect();

        let removed_parents: Vec<(TermId, RelationType)> =
            lhs_parents.difference(&rhs_parents).cloned().collect();
        let added_parents: Vec<(TermId, RelationType)> =
            rhs_parents.difference(&lhs_parents).cloned().collect();

        let obsolete = (lhs.obsolete(), rhs.obsolete());

        if changed_name.0 != changed_name.1
            || !removed_parents.is_empty()
            || !added_parents.is_empty()
            || obsolete.0 != obsolete.1
        {
            Some(Self {
                term_id: lhs.id().clone(),
                changed_name,
                added_parents,
                removed_parents,
                obsolete,
            })
        } else {
            None
        }
    }

    /// Returns the [`TermId`] of the term
    pub fn id(&self) -> &TermId {
        &self.term_id
    }

    /// Returns all parent relations of the `new` term that
    /// are not present in the `old` term
    ///
    /// Returns `None` if no such relations exist
    pub fn added_parents(&self) -> Option<&Vec<(TermId, RelationType)>> {
        if self.added_parents.is_empty() {
            None
        } else {
            Some(&self.added_parents)
        }
    }

    /// Returns all parent relations of the `old` term that
    /// are not present in the `new` term
    ///
    /// Returns `None` if no such relations exist
    pub fn removed_parents(&self) -> Option<&Vec<(TermId, RelationType)>> {
        if self.removed_parents.is_empty() {
            None
        } else {
            Some(&self.removed_parents)
        }
    }

    /// Returns the `old` and `new` name if they are different
    pub fn changed_name(&self) -> Option<&(String, String)> {
        if self.changed_name.0 == self.changed_name.1 {
            None
        } else {
            Some(&self.changed_name)
        }
    }

    /// Returns the `old` and `new` obsolete states if they are different
    pub fn changed_obsolete(&self) -> Option<(bool, bool)> {
        if self.obsolete.0 == self.obsolete.1 {
            None
        } else {
            Some(self.obsolete)
        }
    }
}

#[cfg(test)]
mod test {
    use crate::{Builder, Ontology, RelationType, TermId};

    fn release(name_of_two: &str, relation: RelationType, with_three: bool) -> Ontology {
        let mut builder = Builder::new();
        builder.add_term("GO:1", "one");
        builder.add_term("GO:2", name_of_two);
        if with_three {
            builder.add_term("GO:3", "three");
        }
        let mut builder = builder.terms_complete();
        builder.add_relation("GO:2", "GO:1", relation).unwrap();
        builder.connect_all_terms().build()
    }

    #[test]
    fn added_and_removed() {
        let old = release("two", RelationType::IsA, false);
        let new = release("two", RelationType::IsA, true);
        let cmp = old.compare(&new);

        assert_eq!(cmp.added_terms().len(), 1);
        assert_eq!(cmp.added_terms()[0].id(), &TermId::from("GO:3"));
        assert!(cmp.removed_terms().is_empty());
        // only parents are compared, new children do not count as change
        assert_eq!(cmp.changed_terms().len(), 0);
    }

    #[test]
    fn renamed_and_rewired() {
        let old = release("two", RelationType::IsA, false);
        let new = release("second", RelationType::PartOf, false);
        let cmp = old.compare(&new);

        let changed = cmp.changed_terms();
        assert_eq!(changed.len(), 1);
        let delta = &changed[0];
        assert_eq!(delta.id(), &TermId::from("GO:2"));
        assert_eq!(
            delta.changed_name(),
            Some(&("two".to_string(), "second".to_string()))
        );
        assert_eq!(
            delta.added_parents(),
            Some(&vec![("GO:1".into(), RelationType::PartOf)])
        );
        assert_eq!(
            delta.removed_parents(),
            Some(&vec![("GO:1".into(), RelationType::IsA)])
        );
        assert!(delta.changed_obsolete().is_none());
    }

    #[test]
    fn display_summary() {
        let old = release("two", RelationType::IsA, false);
        let new = release("two", RelationType::IsA, true);
        let summary = old.compare(&new).to_string();
        assert!(summary.contains("Added\t1"));
        assert!(summary.contains("Terms\t3\t4"));
    }
}
