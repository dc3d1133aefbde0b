use godag::color::{Color, Gradient};
use godag::enrichment::EnrichmentTable;
use godag::subgraph::Node;
use godag::{build_subgraph, Direction, Ontology, RelationType, Subgraph, TermId};

fn ontology() -> Ontology {
    Ontology::from_obo("tests/mini_go.obo").unwrap()
}

fn enrichment() -> EnrichmentTable {
    EnrichmentTable::from_tsv("tests/enrichment.tsv").unwrap()
}

fn node<'a>(graph: &'a Subgraph, id: &str) -> &'a Node {
    graph.node(&TermId::from(id)).unwrap()
}

#[test]
fn enriched_terms_to_mermaid() {
    let ontology = ontology();
    let enrichment = enrichment();

    let seeds = enrichment.significant(0.05);
    assert_eq!(seeds.len(), 3);

    let graph = build_subgraph(&seeds, &ontology).annotate(&enrichment);
    let ids: Vec<&str> = graph.nodes().iter().map(|n| n.id().as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "GO:0000280",
            "GO:0006996",
            "GO:0007049",
            "GO:0008150",
            "GO:0009987",
            "GO:0016043",
            "GO:0048285",
        ]
    );
    assert_eq!(graph.edges().len(), 6);
    assert!(graph
        .edges()
        .iter()
        .all(|edge| edge.relation() == RelationType::IsA));
    assert_eq!(graph.seeds().count(), 3);

    // the most significant terms get the last gradient color
    assert_eq!(node(&graph, "GO:0000280").color(), Color::ORANGE);
    assert_eq!(node(&graph, "GO:0048285").color(), Color::ORANGE);
    assert_eq!(
        node(&graph, "GO:0007049").color(),
        Gradient::default().colors()[49]
    );
    assert_eq!(node(&graph, "GO:0008150").color(), Color::LIGHT_BLUE);

    let gene_ratio = node(&graph, "GO:0007049")
        .enrichment()
        .unwrap()
        .gene_ratio()
        .unwrap();
    assert_eq!(gene_ratio.to_string(), "20/80");

    let code = graph.as_mermaid();
    assert!(code.starts_with("graph BT\n"));
    // nodes are numbered in the order of `ids` above
    assert!(code.contains("n2 -- is_a --> n4\n"));
    assert!(code.contains("n5[\"GO:0016043<br>cellular component<br>organization\"]\n"));
    assert!(code.contains("style n0 fill:#FFA500\n"));
    assert_eq!(code.matches("linkStyle").count(), 6);
}

#[test]
fn regulators_of_nuclear_division() {
    let graph = Subgraph::build(["GO:0000280"], &ontology(), Direction::Descendants);
    let relations: Vec<(&str, RelationType)> = graph
        .edges()
        .iter()
        .filter(|edge| edge.to() == &TermId::from("GO:0000280"))
        .map(|edge| (edge.from().as_str(), edge.relation()))
        .collect();
    assert_eq!(
        relations,
        vec![
            ("GO:0051783", RelationType::Regulates),
            ("GO:0051784", RelationType::NegativelyRegulates),
            ("GO:0051785", RelationType::PositivelyRegulates),
            ("GO:0140014", RelationType::IsA),
        ]
    );
}

#[test]
fn cellular_component_relations() {
    // `nucleus has_part chromosome`, the part is drawn as a parent
    let graph = build_subgraph(["GO:0005634"], &ontology());
    assert!(graph.contains(&TermId::from("GO:0005694")));
    assert_eq!(graph.len(), 4);
    let edge = graph
        .edges()
        .iter()
        .find(|edge| edge.relation() == RelationType::HasPart)
        .unwrap();
    assert_eq!(edge.from(), &TermId::from("GO:0005634"));
    assert_eq!(edge.to(), &TermId::from("GO:0005694"));
    assert_eq!(edge.color(), Color::PURPLE);

    let graph = build_subgraph(["GO:0005694"], &ontology());
    assert!(!graph.contains(&TermId::from("GO:0005634")));

    let graph = Subgraph::build(["GO:0005694"], &ontology(), Direction::Descendants);
    assert_eq!(graph.len(), 2);
    assert_eq!(graph.edges()[0].relation(), RelationType::HasPart);
}

#[test]
fn obsolete_terms_stay_isolated() {
    let ontology = ontology();
    let graph = build_subgraph(["GO:0000001"], &ontology);
    assert_eq!(graph.len(), 1);
    assert!(graph.edges().is_empty());
    assert_eq!(node(&graph, "GO:0000001").level(), None);
}

#[test]
fn subgraph_from_trait_object() {
    let ontology = ontology();
    let source: &dyn godag::OntologySource = &ontology;
    let graph = build_subgraph(["GO:0022402"], source);
    assert!(graph
        .edges()
        .iter()
        .any(|edge| edge.relation() == RelationType::PartOf));
}
