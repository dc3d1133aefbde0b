//! [`GoTerm`]s are the central data points of the Gene Ontology
//!
//! Every term has a unique [`TermId`], a name and a namespace. Terms are
//! connected to their parents by typed [`RelationType`] edges.

use std::fmt::Display;
use std::str::FromStr;

use smallvec::SmallVec;

use crate::{GoError, DEFAULT_NUM_PARENTS};

mod goterm;
mod group;
pub(crate) mod internal;
mod relation;
mod termid;

pub use goterm::{GoTerm, Relatives};
pub use group::{TermGroup, TermIds};
pub use relation::RelationType;
pub use termid::TermId;

/// The direct parents (or children) of a term together with the type of
/// relation that connects them
pub type Relations = SmallVec<[(TermId, RelationType); DEFAULT_NUM_PARENTS]>;

/// The three sub-ontologies of GO
///
/// The universal root sentinel does not belong to any of them and
/// uses [`Namespace::Unknown`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// `biological_process`
    BiologicalProcess,
    /// `molecular_function`
    MolecularFunction,
    /// `cellular_component`
    CellularComponent,
    /// Missing or unrecognized namespace
    #[default]
    Unknown,
}

impl FromStr for Namespace {
    type Err = GoError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "biological_process" => Ok(Namespace::BiologicalProcess),
            "molecular_function" => Ok(Namespace::MolecularFunction),
            "cellular_component" => Ok(Namespace::CellularComponent),
            _ => Err(GoError::InvalidInput(format!("unknown namespace {s}"))),
        }
    }
}

impl Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Namespace::BiologicalProcess => "biological_process",
            Namespace::MolecularFunction => "molecular_function",
            Namespace::CellularComponent => "cellular_component",
            Namespace::Unknown => "unknown",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn namespace_roundtrip_names() {
        assert_eq!(
            "biological_process".parse::<Namespace>().unwrap(),
            Namespace::BiologicalProcess
        );
        assert_eq!(
            Namespace::CellularComponent.to_string(),
            "cellular_component"
        );
        assert!("external".parse::<Namespace>().is_err());
    }
}
