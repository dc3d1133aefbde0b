//! Ancestor and descendant subgraphs of GO terms
//!
//! A [`Subgraph`] contains a set of seed terms, all terms that are reachable
//! from them and the typed relations between those terms. It is the data that
//! is handed over to a renderer, e.g. as [Mermaid](Subgraph::as_mermaid) code.

use tracing::debug;

use crate::color::{Color, Gradient};
use crate::enrichment::{minus_log10, EnrichmentTable, Ratio};
use crate::term::{RelationType, TermGroup, TermId};
use crate::{OntologySource, LABEL_WIDTH};

mod render;
pub(crate) mod traversal;

/// The relation to follow when building a [`Subgraph`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// Follow parent relations: the seeds and all their ancestors
    #[default]
    Ancestors,
    /// Follow child relations: the seeds and all their descendants
    Descendants,
}

/// The enrichment result joined onto a [`Node`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeEnrichment {
    gene_ratio: Option<Ratio>,
    bg_ratio: Option<Ratio>,
    qvalue: f64,
}

impl NodeEnrichment {
    /// Default for terms that are not part of the enrichment results
    fn not_enriched() -> Self {
        Self {
            gene_ratio: None,
            bg_ratio: None,
            qvalue: 1.0,
        }
    }

    /// Fraction of study genes annotated to the term, if tested
    pub fn gene_ratio(&self) -> Option<Ratio> {
        self.gene_ratio
    }

    /// Fraction of background genes annotated to the term, if tested
    pub fn bg_ratio(&self) -> Option<Ratio> {
        self.bg_ratio
    }

    /// q-value, `1.0` if the term was not tested
    pub fn qvalue(&self) -> f64 {
        self.qvalue
    }

    /// `-log10(q)`
    pub fn significance(&self) -> f64 {
        minus_log10(self.qvalue)
    }
}

/// A term of a [`Subgraph`] with all data needed for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: TermId,
    name: String,
    label: String,
    level: Option<u32>,
    seed: bool,
    color: Color,
    enrichment: Option<NodeEnrichment>,
}

impl Node {
    /// The term id
    pub fn id(&self) -> &TermId {
        &self.id
    }

    /// The term name, empty if the ontology does not know the term
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The term name, wrapped to [`LABEL_WIDTH`] columns with `\n`
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The depth of the term in the ontology
    pub fn level(&self) -> Option<u32> {
        self.level
    }

    /// `true` if the term is one of the seeds of the subgraph
    pub fn is_seed(&self) -> bool {
        self.seed
    }

    /// The background color
    pub fn color(&self) -> Color {
        self.color
    }

    /// The enrichment data, `None` before [`Subgraph::annotate`]
    pub fn enrichment(&self) -> Option<&NodeEnrichment> {
        self.enrichment.as_ref()
    }
}

/// A typed relation from a child term to its parent
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    from: TermId,
    to: TermId,
    relation: RelationType,
}

impl Edge {
    /// The child term
    pub fn from(&self) -> &TermId {
        &self.from
    }

    /// The parent term
    pub fn to(&self) -> &TermId {
        &self.to
    }

    /// The type of relation
    pub fn relation(&self) -> RelationType {
        self.relation
    }

    /// The line color, defined by the relation type
    pub fn color(&self) -> Color {
        self.relation.color()
    }
}

#[cfg_attr(doc, aquamarine::aquamarine)]
/// The induced subgraph of a set of seed terms
///
/// The subgraph contains the seed terms, all terms reachable from them
/// in the chosen [`Direction`] and every relation between those terms.
///
/// - Every edge connects two nodes of the subgraph
/// - There are no duplicate edges
/// - The universal root sentinel is never a node
/// - Nodes are sorted by id, edges by child, parent and relation type,
///   building the same subgraph twice gives identical results
///
/// A subgraph is not modified after construction. [`Subgraph::annotate`]
/// consumes it and returns an annotated copy.
///
/// # Examples
///
/// ```
/// use godag::{Ontology, Subgraph, Direction, RelationType};
/// use godag::color::Color;
///
/// let ontology = Ontology::from_obo("tests/mini_go.obo").unwrap();
///
/// let graph = Subgraph::build(["GO:0000280"], &ontology, Direction::Ancestors);
/// assert_eq!(graph.len(), 6);
/// assert_eq!(graph.edges().len(), 5);
///
/// let seed = graph.node(&"GO:0000280".into()).unwrap();
/// assert!(seed.is_seed());
/// assert_eq!(seed.color(), Color::WHITE);
/// assert_eq!(seed.level(), Some(6));
///
/// let root = graph.node(&"GO:0008150".into()).unwrap();
/// assert_eq!(root.color(), Color::NEUTRAL);
///
/// assert!(graph.edges().iter().all(|e| e.relation() == RelationType::IsA));
/// ```
///
/// The ancestor subgraph of `nuclear division`:
///
/// ```mermaid
/// graph BT
/// n0["GO:0000280<br>nuclear division"] -- is_a --> n5
/// n5["GO:0048285<br>organelle fission"] -- is_a --> n1
/// n1["GO:0006996<br>organelle<br>organization"] -- is_a --> n4
/// n4["GO:0016043<br>cellular component<br>organization"] -- is_a --> n3
/// n3["GO:0009987<br>cellular process"] -- is_a --> n2
/// n2["GO:0008150<br>biological_process"]
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Subgraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    direction: Direction,
}

impl Subgraph {
    /// Builds the subgraph of `seeds` and all terms reachable from them
    ///
    /// Unknown seed terms are kept as nodes without label and level.
    /// An empty seed set gives an empty subgraph.
    pub fn build<I, T, S>(seeds: I, source: &S, direction: Direction) -> Subgraph
    where
        I: IntoIterator<Item = T>,
        T: Into<TermId>,
        S: OntologySource + ?Sized,
    {
        let seeds: TermGroup = seeds.into_iter().map(Into::into).collect();
        let closure = traversal::closure(seeds.iter().cloned(), source, direction);

        let nodes: Vec<Node> = closure
            .terms
            .iter()
            .map(|id| {
                let name = source.label_of(id).unwrap_or_default().to_string();
                let seed = seeds.contains(id);
                Node {
                    id: id.clone(),
                    label: wrap_label(&name),
                    name,
                    level: source.depth_of(id),
                    seed,
                    color: if seed { Color::WHITE } else { Color::NEUTRAL },
                    enrichment: None,
                }
            })
            .collect();

        let edges: Vec<Edge> = closure
            .triples
            .into_iter()
            .map(|triple| Edge {
                from: triple.child,
                to: triple.parent,
                relation: triple.relation,
            })
            .collect();

        debug!(
            "Built subgraph of {} seeds with {} nodes and {} edges",
            seeds.len(),
            nodes.len(),
            edges.len()
        );
        Subgraph {
            nodes,
            edges,
            direction,
        }
    }

    /// Joins enrichment results onto the nodes and colors them by significance
    ///
    /// Uses the default light blue to orange [`Gradient`], see
    /// [`Subgraph::annotate_with`].
    ///
    /// # Examples
    ///
    /// ```
    /// use godag::{Ontology, build_subgraph};
    /// use godag::color::{Color, Gradient};
    /// use godag::enrichment::EnrichmentTable;
    ///
    /// let ontology = Ontology::from_obo("tests/mini_go.obo").unwrap();
    /// let enrichment = EnrichmentTable::from_tsv("tests/enrichment.tsv").unwrap();
    ///
    /// let graph = build_subgraph(enrichment.significant(0.05), &ontology)
    ///     .annotate(&enrichment);
    ///
    /// // the root term is not enriched
    /// let root = graph.node(&"GO:0008150".into()).unwrap();
    /// assert_eq!(root.enrichment().unwrap().qvalue(), 1.0);
    /// assert_eq!(root.color(), Color::LIGHT_BLUE);
    /// ```
    #[must_use]
    pub fn annotate(self, enrichment: &EnrichmentTable) -> Subgraph {
        self.annotate_with(enrichment, &Gradient::default())
    }

    /// Joins enrichment results onto the nodes and colors them on `gradient`
    ///
    /// Nodes without enrichment result are treated as not significant (`q = 1`).
    /// The colors are binned over the range of `-log10(q)` of all nodes.
    #[must_use]
    pub fn annotate_with(mut self, enrichment: &EnrichmentTable, gradient: &Gradient) -> Subgraph {
        for node in &mut self.nodes {
            let annotation = match enrichment.get(&node.id) {
                Some(record) => NodeEnrichment {
                    gene_ratio: Some(record.gene_ratio()),
                    bg_ratio: Some(record.bg_ratio()),
                    qvalue: record.qvalue(),
                },
                None => NodeEnrichment::not_enriched(),
            };
            node.enrichment = Some(annotation);
        }

        let (min, max) = self
            .nodes
            .iter()
            .filter_map(|node| node.enrichment.map(|e| e.significance()))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
                (min.min(value), max.max(value))
            });

        for node in &mut self.nodes {
            if let Some(annotation) = node.enrichment {
                node.color = gradient.color_for(annotation.significance(), min, max);
            }
        }
        self
    }

    /// Returns all nodes, sorted by id
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns all edges, sorted by child, parent and relation type
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the node of `id`
    pub fn node(&self, id: &TermId) -> Option<&Node> {
        self.position(id).map(|idx| &self.nodes[idx])
    }

    /// Index of the node of `id` in [`Subgraph::nodes`]
    fn position(&self, id: &TermId) -> Option<usize> {
        self.nodes.binary_search_by(|node| node.id.cmp(id)).ok()
    }

    /// Returns `true` if `id` is a node of the subgraph
    pub fn contains(&self, id: &TermId) -> bool {
        self.node(id).is_some()
    }

    /// Returns the seed nodes
    pub fn seeds(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|node| node.seed)
    }

    /// Returns the number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the subgraph contains no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The direction the subgraph was built in
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

/// Builds the ancestor [`Subgraph`] of `seeds`
///
/// Shortcut for `Subgraph::build(seeds, source, Direction::Ancestors)`
pub fn build_subgraph<I, T, S>(seeds: I, source: &S) -> Subgraph
where
    I: IntoIterator<Item = T>,
    T: Into<TermId>,
    S: OntologySource + ?Sized,
{
    Subgraph::build(seeds, source, Direction::Ancestors)
}

fn wrap_label(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }
    textwrap::wrap(name, LABEL_WIDTH).join("\n")
}
