//! `godag` builds Gene Ontology subgraphs for visualization
//!
//! Starting from a set of seed terms, e.g. the significantly enriched terms of an
//! over-representation analysis, it extracts all ancestors (or descendants) from
//! an [`OntologySource`], keeps the typed relations between them and annotates
//! every node with its enrichment significance.
//!
//! ```
//! use godag::{Ontology, Subgraph, Direction, TermId};
//!
//! let ontology = Ontology::from_obo("tests/mini_go.obo").unwrap();
//! let seeds = [TermId::from("GO:0000280")];
//!
//! let graph = Subgraph::build(seeds, &ontology, Direction::Ancestors);
//! assert!(graph.contains(&TermId::from("GO:0008150")));
//! assert!(!graph.contains(&TermId::from("all")));
//!
//! println!("{}", graph.as_mermaid());
//! ```
#![warn(missing_docs)]

use core::fmt::Debug;
use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

pub mod color;
pub mod enrichment;
pub mod parser;
pub mod source;
pub mod subgraph;
pub mod term;
mod ontology;

pub use ontology::comparison;
pub use ontology::{AllTerms, Builder, ConnectedTerms, LooseCollection, Ontology};
pub use source::OntologySource;
pub use subgraph::{build_subgraph, Direction, Subgraph};
pub use term::{GoTerm, RelationType, TermId};

/// Identifier of the pseudo-term that is the parent of every namespace root
///
/// The sentinel is present in an [`Ontology`], but never part of a [`Subgraph`]
pub const ROOT_SENTINEL: &str = "all";

/// Column width to which node labels are wrapped
pub const LABEL_WIDTH: usize = 20;

/// Number of color buckets used for enrichment coloring
pub const GRADIENT_BINS: usize = 100;

const DEFAULT_NUM_PARENTS: usize = 4;
const DEFAULT_NUM_TERMS: usize = 50_000;

/// Main Error type for this crate
#[derive(Error, Debug)]
pub enum GoError {
    /// The term does not exist in the ontology
    #[error("term {0} does not exist")]
    DoesNotExist(String),
    /// A relationship type that is not part of [`RelationType`]
    #[error("unknown relation type: {0}")]
    UnknownRelation(String),
    /// Failed to parse an integer
    #[error("unable to parse Integer")]
    ParseIntError,
    /// Failed to parse a float
    #[error("unable to parse Float")]
    ParseFloatError,
    /// An input file could not be opened or read
    #[error("cannot open file {0}")]
    CannotOpenFile(String),
    /// The input data is malformed
    #[error("invalid input data: {0}")]
    InvalidInput(String),
}

impl From<ParseIntError> for GoError {
    fn from(_: ParseIntError) -> Self {
        GoError::ParseIntError
    }
}

impl From<ParseFloatError> for GoError {
    fn from(_: ParseFloatError) -> Self {
        GoError::ParseFloatError
    }
}

/// Shortcut for `Result<T, GoError>`
pub type GoResult<T> = Result<T, GoError>;
