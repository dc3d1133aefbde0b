use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use godag::enrichment::{EnrichmentRecord, EnrichmentTable, Ratio};
use godag::{Builder, Direction, Ontology, RelationType, Subgraph, TermId};

/// Builds a layered ontology where every term has up to three parents
/// in the layer above it
fn synthetic_ontology(layers: usize, width: usize) -> Ontology {
    let id = |layer: usize, idx: usize| format!("GO:{:07}", layer * width + idx);

    let mut builder = Builder::new();
    for layer in 0..layers {
        for idx in 0..width {
            builder.add_term(id(layer, idx), &format!("term {layer}-{idx}"));
        }
    }
    let mut builder = builder.terms_complete();
    for layer in 1..layers {
        for idx in 0..width {
            let relations = [
                (idx, RelationType::IsA),
                ((idx + 1) % width, RelationType::PartOf),
                ((idx * 7) % width, RelationType::Regulates),
            ];
            for (parent, relation) in relations {
                builder
                    .add_relation(id(layer, idx), id(layer - 1, parent), relation)
                    .unwrap();
            }
        }
    }
    builder.connect_all_terms().build()
}

fn seeds(layers: usize, width: usize, count: usize) -> Vec<TermId> {
    (0..count)
        .map(|idx| TermId::from(format!("GO:{:07}", (layers - 1) * width + idx * 3 % width)))
        .collect()
}

fn subgraph_benchmark(c: &mut Criterion) {
    let ontology = synthetic_ontology(12, 500);
    let mut group = c.benchmark_group("subgraph");
    for count in [1, 10, 100] {
        let seeds = seeds(12, 500, count);
        group.bench_with_input(BenchmarkId::new("ancestors", count), &seeds, |b, seeds| {
            b.iter(|| {
                Subgraph::build(
                    black_box(seeds.iter().cloned()),
                    &ontology,
                    Direction::Ancestors,
                )
            })
        });
    }
    group.bench_function("descendants", |b| {
        b.iter(|| Subgraph::build(black_box(["GO:0000000"]), &ontology, Direction::Descendants))
    });
    group.finish();
}

fn annotate_benchmark(c: &mut Criterion) {
    let ontology = synthetic_ontology(12, 500);
    let seeds = seeds(12, 500, 100);
    let table: EnrichmentTable = seeds
        .iter()
        .enumerate()
        .map(|(idx, id)| {
            EnrichmentRecord::new(
                id,
                Ratio::new(idx as u64 + 1, 200),
                Ratio::new(50, 20000),
                1e-10 * (idx as f64 + 1.0),
                1e-8 * (idx as f64 + 1.0),
            )
        })
        .collect();
    let graph = Subgraph::build(seeds, &ontology, Direction::Ancestors);

    c.bench_function("annotate 100 seeds", |b| {
        b.iter(|| black_box(graph.clone()).annotate(&table))
    });
    c.bench_function("mermaid 100 seeds", |b| b.iter(|| graph.as_mermaid()));
}

criterion_group!(subgraph, subgraph_benchmark, annotate_benchmark);
criterion_main!(subgraph);
