use std::collections::VecDeque;
use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::ontology::termarena::Arena;
use crate::term::internal::TermInternal;
use crate::term::{Namespace, RelationType, TermId};
use crate::{GoError, GoResult, Ontology};

/// Builder state: Terms can be added
pub struct LooseCollection;
/// Builder state: All terms are added, relations can be added
pub struct AllTerms;
/// Builder state: Terms are linked to the root sentinel and have a depth
pub struct ConnectedTerms;

fn transition_state<TX, TY>(builder: Builder<TX>) -> Builder<TY> {
    Builder::<TY> {
        terms: builder.terms,
        version: builder.version,
        state: PhantomData,
    }
}

/// Assembles an [`Ontology`] snapshot step by step
///
/// The builder ensures the correct order of operations:
///
/// 1. Add all terms ([`Builder::add_term`])
/// 2. Connect terms to their parents ([`Builder::add_relation`])
/// 3. Link the top-level terms to the universal root sentinel and
///    calculate the depth of every term ([`Builder::connect_all_terms`])
/// 4. [`Builder::build`] the [`Ontology`]
///
/// # Examples
///
/// ```
/// use godag::{Builder, RelationType};
///
/// let mut builder = Builder::new();
/// builder.add_term("GO:0008150", "biological_process");
/// builder.add_term("GO:0009987", "cellular process");
///
/// let mut builder = builder.terms_complete();
/// builder.add_relation("GO:0009987", "GO:0008150", RelationType::IsA).unwrap();
///
/// let ontology = builder.connect_all_terms().build();
///
/// // The root sentinel is added automatically
/// assert_eq!(ontology.len(), 3);
/// assert_eq!(ontology.term("GO:0009987").unwrap().depth(), Some(2));
/// ```
pub struct Builder<T> {
    terms: Arena,
    version: String,
    state: PhantomData<T>,
}

impl Builder<LooseCollection> {
    /// Constructs a new, empty builder
    pub fn new() -> Builder<LooseCollection> {
        Builder::<LooseCollection> {
            terms: Arena::default(),
            version: String::new(),
            state: PhantomData,
        }
    }

    /// Adds a new term to the ontology and returns its [`TermId`]
    ///
    /// If a term with the same id already exists, it is replaced
    pub fn add_term<I: Into<TermId>>(&mut self, id: I, name: &str) -> TermId {
        self.insert_term(TermInternal::new(id, name))
    }

    /// Insert a `TermInternal` to the ontology
    ///
    /// This method does not link the term to its parents
    pub(crate) fn insert_term(&mut self, term: TermInternal) -> TermId {
        let id = term.id().clone();
        if self.terms.contains(&id) {
            debug!("Replacing duplicate term {}", id);
        }
        self.terms.insert(term);
        id
    }

    /// Sets the namespace of a term
    ///
    /// # Errors
    ///
    /// [`GoError::DoesNotExist`] if the term was not added before
    pub fn set_namespace(&mut self, id: &TermId, namespace: Namespace) -> GoResult<()> {
        *self.term_mut(id)?.namespace_mut() = namespace;
        Ok(())
    }

    /// Flags a term as obsolete
    ///
    /// Obsolete terms stay in the ontology, but are not linked
    /// to the root sentinel and have no depth.
    ///
    /// # Errors
    ///
    /// [`GoError::DoesNotExist`] if the term was not added before
    pub fn set_obsolete(&mut self, id: &TermId) -> GoResult<()> {
        *self.term_mut(id)?.obsolete_mut() = true;
        Ok(())
    }

    /// Finishes the term-adding phase
    #[must_use]
    pub fn terms_complete(self) -> Builder<AllTerms> {
        transition_state(self)
    }
}

impl Default for Builder<LooseCollection> {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder<AllTerms> {
    /// Add a typed connection from a term to its parent
    ///
    /// Adding the same relation twice has no effect.
    ///
    /// # Errors
    ///
    /// [`GoError::DoesNotExist`] if either the child or the parent term is not present
    pub fn add_relation<I: Into<TermId>, J: Into<TermId>>(
        &mut self,
        child_id: I,
        parent_id: J,
        relation: RelationType,
    ) -> GoResult<()> {
        let child_id = child_id.into();
        let parent_id = parent_id.into();
        if !self.terms.contains(&child_id) {
            return Err(GoError::DoesNotExist(child_id.to_string()));
        }
        self.term_mut(&parent_id)?.add_child(child_id.clone(), relation);
        self.term_mut(&child_id)?.add_parent(parent_id, relation);
        Ok(())
    }

    /// Links every top-level term to the universal root sentinel
    /// and calculates the depth of all terms
    ///
    /// The depth is the shortest number of parent-steps from a term to the
    /// root sentinel, following any relation type. The sentinel itself has
    /// depth `0`, the namespace roots (`biological_process` etc.) have depth `1`.
    #[must_use]
    pub fn connect_all_terms(mut self) -> Builder<ConnectedTerms> {
        let sentinel = TermId::root_sentinel();
        if !self.terms.contains(&sentinel) {
            self.terms.insert(TermInternal::root_sentinel());
        }

        let mut top_level: Vec<TermId> = self
            .terms
            .values()
            .filter(|term| {
                !term.obsolete() && term.parents().is_empty() && !term.id().is_root_sentinel()
            })
            .map(|term| term.id().clone())
            .collect();
        top_level.sort();

        for id in top_level {
            trace!("Linking {} to the root sentinel", id);
            if let Some(term) = self.terms.get_mut(&id) {
                term.add_parent(sentinel.clone(), RelationType::IsA);
            }
            if let Some(root) = self.terms.get_mut(&sentinel) {
                root.add_child(id, RelationType::IsA);
            }
        }

        self.calculate_depth(&sentinel);
        transition_state(self)
    }

    fn calculate_depth(&mut self, root: &TermId) {
        for term in self.terms.values_mut() {
            *term.depth_mut() = None;
        }

        let mut queue: VecDeque<(TermId, u32)> = VecDeque::new();
        queue.push_back((root.clone(), 0));

        while let Some((id, depth)) = queue.pop_front() {
            let Some(term) = self.terms.get_mut(&id) else {
                continue;
            };
            if term.depth().is_some() {
                continue;
            }
            *term.depth_mut() = Some(depth);
            for (child, _) in term.children().clone() {
                queue.push_back((child, depth + 1));
            }
        }
    }
}

impl Builder<ConnectedTerms> {
    /// Returns the final [`Ontology`]
    pub fn build(self) -> Ontology {
        debug!("Building ontology with {} terms", self.terms.len());
        Ontology::new(self.terms, self.version)
    }
}

impl<T> Builder<T> {
    /// Sets the release version of the ontology, e.g. `releases/2023-01-01`
    pub fn set_version(&mut self, version: &str) {
        self.version = version.to_string();
    }

    /// Returns the number of terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns `true` if no terms are added
    pub fn is_empty(&self) -> bool {
        self.terms.len() == 0
    }

    fn term_mut(&mut self, id: &TermId) -> GoResult<&mut TermInternal> {
        self.terms
            .get_mut(id)
            .ok_or_else(|| GoError::DoesNotExist(id.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn chain() -> Builder<AllTerms> {
        let mut builder = Builder::new();
        builder.add_term("A", "a");
        builder.add_term("B", "b");
        builder.add_term("C", "c");
        builder.add_term("D", "d");
        let mut builder = builder.terms_complete();
        builder.add_relation("B", "A", RelationType::IsA).unwrap();
        builder.add_relation("C", "B", RelationType::PartOf).unwrap();
        builder.add_relation("D", "C", RelationType::IsA).unwrap();
        builder.add_relation("D", "A", RelationType::Regulates).unwrap();
        builder
    }

    #[test]
    fn relation_to_missing_term_fails() {
        let mut builder = chain();
        assert!(matches!(
            builder.add_relation("B", "X", RelationType::IsA),
            Err(GoError::DoesNotExist(id)) if id == "X"
        ));
        assert!(builder.add_relation("X", "B", RelationType::IsA).is_err());
    }

    #[test]
    fn sentinel_is_linked() {
        let ontology = chain().connect_all_terms().build();
        let a = ontology.term("A").unwrap();
        assert_eq!(a.parent_ids().len(), 1);
        assert!(a.parent_ids()[0].0.is_root_sentinel());

        let root = ontology.term("all").unwrap();
        assert_eq!(root.children_ids().len(), 1);
    }

    #[test]
    fn depth_is_shortest_path() {
        let ontology = chain().connect_all_terms().build();
        assert_eq!(ontology.term("all").unwrap().depth(), Some(0));
        assert_eq!(ontology.term("A").unwrap().depth(), Some(1));
        assert_eq!(ontology.term("C").unwrap().depth(), Some(3));
        // D is a child of C, but also directly regulates A
        assert_eq!(ontology.term("D").unwrap().depth(), Some(2));
    }

    #[test]
    fn obsolete_terms_stay_isolated() {
        let mut builder = Builder::new();
        let id = builder.add_term("GO:0000001", "obsolete thing");
        builder.set_obsolete(&id).unwrap();
        let ontology = builder.terms_complete().connect_all_terms().build();

        let term = ontology.term("GO:0000001").unwrap();
        assert!(term.obsolete());
        assert!(term.parent_ids().is_empty());
        assert_eq!(term.depth(), None);
    }

    #[test]
    fn version_is_kept() {
        let mut builder = Builder::new();
        builder.set_version("releases/2023-01-01");
        let ontology = builder.terms_complete().connect_all_terms().build();
        assert_eq!(ontology.version(), "releases/2023-01-01");
    }
}
