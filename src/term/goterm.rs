use crate::term::internal::TermInternal;
use crate::term::{Namespace, RelationType, Relations, TermId};
use crate::{GoError, GoResult, Ontology};

/// The `GoTerm` represents a single term from the Gene Ontology
///
/// It borrows all data from the [`Ontology`] and is cheap to copy.
#[derive(Debug, Clone, Copy)]
pub struct GoTerm<'a> {
    term: &'a TermInternal,
    ontology: &'a Ontology,
}

impl<'a> GoTerm<'a> {
    /// Constructs a new [`GoTerm`]
    ///
    /// # Errors
    ///
    /// If the given [`TermId`] does not match an existing term
    /// it returns an Error
    pub fn try_new(ontology: &'a Ontology, term: &TermId) -> GoResult<GoTerm<'a>> {
        let term = ontology
            .get(term)
            .ok_or_else(|| GoError::DoesNotExist(term.to_string()))?;
        Ok(GoTerm::new(ontology, term))
    }

    pub(crate) fn new(ontology: &'a Ontology, term: &'a TermInternal) -> GoTerm<'a> {
        GoTerm { term, ontology }
    }

    /// Returns the [`TermId`] of the term
    ///
    /// e.g.: `GO:0000280`
    pub fn id(&self) -> &'a TermId {
        self.term.id()
    }

    /// Returns the name of the term
    ///
    /// e.g.: `nuclear division`
    pub fn name(&self) -> &'a str {
        self.term.name()
    }

    /// Returns the sub-ontology the term belongs to
    pub fn namespace(&self) -> Namespace {
        self.term.namespace()
    }

    /// Returns the level of the term in the DAG
    ///
    /// The namespace roots have depth 1, `None` for terms that
    /// are not connected (e.g. obsolete terms)
    pub fn depth(&self) -> Option<u32> {
        self.term.depth()
    }

    /// Returns `true` if the term is flagged as obsolete
    pub fn obsolete(&self) -> bool {
        self.term.obsolete()
    }

    /// Returns `true` if the term is the universal root sentinel
    pub fn is_root_sentinel(&self) -> bool {
        self.id().is_root_sentinel()
    }

    /// Returns the [`TermId`]s and [`RelationType`]s of the direct parents
    pub fn parent_ids(&self) -> &'a Relations {
        self.term.parents()
    }

    /// Returns the [`TermId`]s and [`RelationType`]s of the direct children
    pub fn children_ids(&self) -> &'a Relations {
        self.term.children()
    }

    /// Returns an iterator of the direct parents of the term
    pub fn parents(&self) -> Relatives<'a> {
        Relatives::new(self.term.parents(), self.ontology)
    }

    /// Returns an iterator of the direct children of the term
    pub fn children(&self) -> Relatives<'a> {
        Relatives::new(self.term.children(), self.ontology)
    }
}

impl PartialEq for GoTerm<'_> {
    fn eq(&self, other: &GoTerm) -> bool {
        self.id() == other.id()
    }
}

impl Eq for GoTerm<'_> {}

/// Iterates the direct parents or children of a [`GoTerm`]
///
/// Every item is the related term together with the type of relation
pub struct Relatives<'a> {
    inner: std::slice::Iter<'a, (TermId, RelationType)>,
    ontology: &'a Ontology,
}

impl<'a> Relatives<'a> {
    fn new(relations: &'a Relations, ontology: &'a Ontology) -> Self {
        Self {
            inner: relations.iter(),
            ontology,
        }
    }
}

impl<'a> Iterator for Relatives<'a> {
    type Item = (GoTerm<'a>, RelationType);
    fn next(&mut self) -> Option<Self::Item> {
        for (id, relation) in self.inner.by_ref() {
            if let Some(term) = self.ontology.term(id) {
                return Some((term, *relation));
            }
        }
        None
    }
}

impl std::fmt::Debug for Relatives<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Relatives")
    }
}
