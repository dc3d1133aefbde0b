//! The lookup capability a [`Subgraph`](crate::Subgraph) is built from
//!
//! The subgraph builder never accesses global state. All ontology data is
//! provided through an [`OntologySource`], usually an in-memory [`Ontology`]
//! snapshot owned by the caller.

use crate::term::{Relations, TermId};
use crate::Ontology;

/// Read-only access to the relations, labels and depths of ontology terms
///
/// Lookups of unknown terms are not errors: they return empty relations or `None`.
pub trait OntologySource {
    /// Returns the direct parents of `term` and the relation types connecting them
    fn parents_of(&self, term: &TermId) -> Relations;

    /// Returns the direct children of `term` and the relation types connecting them
    fn children_of(&self, term: &TermId) -> Relations;

    /// Returns the human readable name of `term`
    fn label_of(&self, term: &TermId) -> Option<&str>;

    /// Returns the level of `term` in the DAG
    fn depth_of(&self, term: &TermId) -> Option<u32>;
}

impl OntologySource for Ontology {
    fn parents_of(&self, term: &TermId) -> Relations {
        self.get(term)
            .map(|term| term.parents().clone())
            .unwrap_or_default()
    }

    fn children_of(&self, term: &TermId) -> Relations {
        self.get(term)
            .map(|term| term.children().clone())
            .unwrap_or_default()
    }

    fn label_of(&self, term: &TermId) -> Option<&str> {
        self.get(term).map(|term| term.name())
    }

    fn depth_of(&self, term: &TermId) -> Option<u32> {
        self.get(term).and_then(|term| term.depth())
    }
}

impl<T: OntologySource + ?Sized> OntologySource for &T {
    fn parents_of(&self, term: &TermId) -> Relations {
        (**self).parents_of(term)
    }

    fn children_of(&self, term: &TermId) -> Relations {
        (**self).children_of(term)
    }

    fn label_of(&self, term: &TermId) -> Option<&str> {
        (**self).label_of(term)
    }

    fn depth_of(&self, term: &TermId) -> Option<u32> {
        (**self).depth_of(term)
    }
}
