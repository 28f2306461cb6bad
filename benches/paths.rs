use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gosim::{Ontology, PathKind};

fn all_paths(ontology: &Ontology, kind: PathKind) -> usize {
    ontology
        .into_iter()
        .map(|term| term.paths(kind).unwrap().len())
        .sum()
}

fn distances(ontology: &Ontology) -> usize {
    let mut count = 0usize;
    for term1 in ontology {
        for term2 in ontology {
            if term1.distance(&term2).unwrap().score().is_some() {
                count += 1;
            }
        }
    }
    count
}

fn paths_benchmark(c: &mut Criterion) {
    let ontology = Ontology::from_obo("tests/go_2012.obo").unwrap();

    c.bench_function("plain paths", |b| {
        b.iter(|| all_paths(black_box(&ontology), PathKind::Plain))
    });

    c.bench_function("detailed paths", |b| {
        b.iter(|| all_paths(black_box(&ontology), PathKind::Detailed))
    });

    c.bench_function("distance all pairs", |b| {
        b.iter(|| distances(black_box(&ontology)))
    });
}

criterion_group!(paths, paths_benchmark);
criterion_main!(paths);
