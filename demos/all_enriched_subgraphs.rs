use rayon::prelude::*;

use godag::enrichment::EnrichmentTable;
use godag::{build_subgraph, Ontology, TermId};

/// Builds one subgraph per enriched term and writes it to `<OUT DIR>/<term>.mmd`
fn main() {
    let mut args = std::env::args();
    let (Some(obo), Some(tsv), Some(outdir)) = (args.nth(1), args.next(), args.next()) else {
        println!("Writes the ancestor subgraph of every enriched GO term as Mermaid code\n\n");
        println!("Usage\nall_enriched_subgraphs <OBO FILE> <ENRICHMENT TSV> <OUT DIR>");
        std::process::exit(1)
    };

    let ontology = Ontology::from_obo(obo).unwrap();
    let enrichment = EnrichmentTable::from_tsv(tsv).unwrap();
    let terms: Vec<&TermId> = enrichment.sorted().into_iter().map(|record| record.id()).collect();

    let relations: usize = terms
        .par_iter()
        .map(|term| {
            let graph = build_subgraph([*term], &ontology).annotate(&enrichment);
            let filename = format!("{}/{}.mmd", outdir, term.as_str().replace(':', "_"));
            std::fs::write(&filename, graph.as_mermaid()).unwrap();
            graph.edges().len()
        })
        .sum();

    println!("Wrote {} subgraphs with {} relations", terms.len(), relations);
}
