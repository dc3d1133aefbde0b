use std::process;

use godag::enrichment::EnrichmentTable;
use godag::{Direction, Ontology, Subgraph};
use simple_logger::SimpleLogger;

fn main() {
    SimpleLogger::new().env().init().unwrap();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        println!("Prints Mermaid code of the ancestors of all enriched GO terms\n\n");
        println!("Usage\nsubgraph <OBO FILE> <ENRICHMENT TSV> [<Q-VALUE CUTOFF>] [descendants]");
        println!("\nsubgraph tests/mini_go.obo tests/enrichment.tsv 0.01\n");
        process::exit(1)
    }

    let ontology = Ontology::from_obo(&args[1]).expect("unable to parse the OBO file");
    let enrichment =
        EnrichmentTable::from_tsv(&args[2]).expect("unable to parse the enrichment results");

    let cutoff = args
        .get(3)
        .map(|arg| arg.parse::<f64>().expect("invalid q-value cutoff"))
        .unwrap_or(0.05);
    let direction = match args.get(4).map(String::as_str) {
        Some("descendants") => Direction::Descendants,
        _ => Direction::Ancestors,
    };

    let seeds = enrichment.significant(cutoff);
    if seeds.is_empty() {
        eprintln!("No terms with q < {cutoff}");
        process::exit(1)
    }

    let graph = Subgraph::build(&seeds, &ontology, direction).annotate(&enrichment);
    eprintln!(
        "{} seeds, {} terms, {} relations (GO {})",
        seeds.len(),
        graph.len(),
        graph.edges().len(),
        ontology.version()
    );
    println!("{}", graph.as_mermaid());
}
