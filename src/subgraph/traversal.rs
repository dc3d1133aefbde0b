use std::collections::{BTreeSet, HashSet, VecDeque};

use tracing::trace;

use crate::subgraph::Direction;
use crate::term::{RelationType, TermId};
use crate::OntologySource;

/// A typed edge from a `child` to its `parent`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct Triple {
    pub child: TermId,
    pub parent: TermId,
    pub relation: RelationType,
}

/// The transitive closure of a set of seed terms
pub(crate) struct Closure {
    /// All relations between the terms of the closure
    pub triples: BTreeSet<Triple>,
    /// Seeds and every term reached from them, without the root sentinel
    pub terms: BTreeSet<TermId>,
}

/// Collects all terms and relations of the transitive closure of `seeds`
///
/// Breadth-first traversal over a worklist. Every term is expanded at most
/// once, so the traversal terminates even if the source contains cycles.
/// Relations that touch the universal root sentinel are dropped, the sentinel
/// itself is still traversed (relevant for [`Direction::Descendants`]).
/// Terms reached only through the sentinel are part of the closure.
pub(crate) fn closure<I, S>(seeds: I, source: &S, direction: Direction) -> Closure
where
    I: IntoIterator<Item = TermId>,
    S: OntologySource + ?Sized,
{
    let mut visited: HashSet<TermId> = HashSet::new();
    let mut queue: VecDeque<TermId> = VecDeque::new();
    for seed in seeds {
        if visited.insert(seed.clone()) {
            queue.push_back(seed);
        }
    }

    let mut triples = BTreeSet::new();
    while let Some(term) = queue.pop_front() {
        let relatives = match direction {
            Direction::Ancestors => source.parents_of(&term),
            Direction::Descendants => source.children_of(&term),
        };
        for (relative, relation) in relatives {
            if relative.is_root_sentinel() || term.is_root_sentinel() {
                trace!("Dropping {} relation {} - {}", relation, term, relative);
            } else {
                let triple = match direction {
                    Direction::Ancestors => Triple {
                        child: term.clone(),
                        parent: relative.clone(),
                        relation,
                    },
                    Direction::Descendants => Triple {
                        child: relative.clone(),
                        parent: term.clone(),
                        relation,
                    },
                };
                triples.insert(triple);
            }
            if visited.insert(relative.clone()) {
                queue.push_back(relative);
            }
        }
    }

    let terms = visited
        .into_iter()
        .filter(|id| !id.is_root_sentinel())
        .collect();
    Closure { triples, terms }
}
