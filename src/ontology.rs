use core::fmt::Debug;
use std::path::Path;

use crate::parser;
use crate::term::internal::TermInternal;
use crate::term::{GoTerm, TermId};
use crate::GoResult;

mod builder;
pub mod comparison;
mod termarena;
pub use builder::{AllTerms, Builder, ConnectedTerms, LooseCollection};
use comparison::Comparison;
use termarena::Arena;

#[cfg_attr(doc, aquamarine::aquamarine)]
/// `Ontology` is an in-memory snapshot of one Gene Ontology release
///
/// It holds all [`GoTerm`]s and their typed parent/child relations and is the
/// default implementation of [`OntologySource`](crate::OntologySource).
///
/// # Examples
///
/// ```
/// use godag::Ontology;
///
/// let ontology = Ontology::from_obo("tests/mini_go.obo").unwrap();
///
/// let term = ontology.term("GO:0000280").unwrap();
/// assert_eq!(term.name(), "nuclear division");
///
/// assert!(ontology.term("GO:9999999").is_none());
///
/// for term in &ontology {
///     println!("{}\t{}", term.id(), term.name());
/// }
/// ```
///
/// # Construction
///
/// 1. Parse an OBO release with [`Ontology::from_obo`] or [`Ontology::from_obo_str`]
/// 2. Assemble it yourself using the [`Builder`]
///
/// # Layout
///
/// Every term belongs to one of the three namespaces. The namespace roots are
/// connected to the universal root sentinel `all`, so that every connected
/// term has a path to the sentinel.
///
/// ```mermaid
/// graph BT
/// BP["GO:0008150<br>biological_process"] --> all
/// MF["GO:0003674<br>molecular_function"] --> all
/// CC["GO:0005575<br>cellular_component"] --> all
/// CP["GO:0009987<br>cellular process"] -- is_a --> BP
/// ND["GO:0000280<br>nuclear division"] -- is_a --> OD
/// OD["GO:0048285<br>organelle fission"] -- is_a --> CP
/// ```
#[derive(Default)]
pub struct Ontology {
    terms: Arena,
    version: String,
}

impl Debug for Ontology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ontology with {} terms", self.terms.len())
    }
}

impl Ontology {
    pub(crate) fn new(terms: Arena, version: String) -> Self {
        Self { terms, version }
    }

    /// Parses an OBO file, e.g. `go-basic.obo`
    ///
    /// # Errors
    ///
    /// - [`GoError::CannotOpenFile`](crate::GoError::CannotOpenFile) if the file is not readable
    /// - [`GoError::InvalidInput`](crate::GoError::InvalidInput) if a term stanza has no `id`
    pub fn from_obo<P: AsRef<Path>>(filename: P) -> GoResult<Self> {
        parser::go_obo::read_obo_file(filename)
    }

    /// Parses the content of an OBO file
    ///
    /// # Errors
    ///
    /// [`GoError::InvalidInput`](crate::GoError::InvalidInput) if a term stanza has no `id`
    ///
    /// # Examples
    ///
    /// ```
    /// use godag::Ontology;
    ///
    /// let obo = "format-version: 1.2\n\n[Term]\nid: GO:0008150\nname: biological_process\nnamespace: biological_process\n";
    /// let ontology = Ontology::from_obo_str(obo).unwrap();
    /// assert_eq!(ontology.len(), 2);
    /// ```
    pub fn from_obo_str(content: &str) -> GoResult<Self> {
        parser::go_obo::parse_obo(content)
    }

    /// Returns the number of terms, including the root sentinel
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns `true` if the Ontology does not contain any terms
    ///
    /// # Examples
    ///
    /// ```
    /// use godag::Ontology;
    /// let ontology = Ontology::default();
    /// assert!(ontology.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the [`GoTerm`] of the provided [`TermId`]
    ///
    /// If no such term is present in the Ontology, `None` is returned
    pub fn term<I: Into<TermId>>(&self, term_id: I) -> Option<GoTerm<'_>> {
        GoTerm::try_new(self, &term_id.into()).ok()
    }

    /// Returns an Iterator of all [`GoTerm`]s from the Ontology
    pub fn terms(&self) -> Iter<'_> {
        self.into_iter()
    }

    /// Returns the release version, as given in the `data-version` header
    ///
    /// e.g. `releases/2023-01-01`
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Compares `self` to another release to identify added, removed
    /// and changed terms
    ///
    /// # Examples
    ///
    /// ```
    /// use godag::Ontology;
    ///
    /// let ontology_1 = Ontology::from_obo("tests/mini_go.obo").unwrap();
    /// let ontology_2 = Ontology::default();
    ///
    /// let compare = ontology_1.compare(&ontology_2);
    /// assert_eq!(compare.added_terms().len(), 0);
    /// assert_eq!(compare.removed_terms().len(), ontology_1.len());
    /// ```
    pub fn compare<'a>(&'a self, other: &'a Ontology) -> Comparison<'a> {
        Comparison::new(self, other)
    }

    pub(crate) fn get(&self, term_id: &TermId) -> Option<&TermInternal> {
        self.terms.get(term_id)
    }
}

/// Iterates all [`GoTerm`]s of an [`Ontology`]
pub struct Iter<'a> {
    inner: std::collections::hash_map::Values<'a, TermId, TermInternal>,
    ontology: &'a Ontology,
}

impl<'a> std::iter::Iterator for Iter<'a> {
    type Item = GoTerm<'a>;
    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|term| GoTerm::new(self.ontology, term))
    }
}

impl<'a> IntoIterator for &'a Ontology {
    type Item = GoTerm<'a>;
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: self.terms.values(),
            ontology: self,
        }
    }
}
