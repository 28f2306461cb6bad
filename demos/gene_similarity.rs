use rayon::prelude::*;
use std::time::SystemTime;

use gosim::similarity::{GroupSimilarity, StandardCombiner};
use gosim::{GSesame, GoSet, Ontology};

/// Parses a comma separated list of GO term ids into a `GoSet`
fn gene<'a>(ontology: &'a Ontology, terms: &str) -> GoSet<'a> {
    let ids: Vec<&str> = terms.split(',').map(str::trim).collect();
    GoSet::try_new(ontology, &ids).expect("Invalid term id")
}

/// Calculates the G-SESAME similarity of two genes
///
/// Usage: `gene_similarity <OBO FILE> <TERM,TERM,..> <TERM,TERM,..>`
///
/// All combiners are calculated in parallel to show
/// that the ontology can be shared between threads.
fn main() {
    simple_logger::SimpleLogger::new().env().init().unwrap();

    let mut args = std::env::args();
    let filename = args.nth(1).expect("Specify the path to an obo file");
    let ontology = Ontology::from_obo(filename).unwrap();

    let gene_a = gene(&ontology, &args.next().expect("The first gene is missing"));
    let gene_b = gene(&ontology, &args.next().expect("The second gene is missing"));

    let start = SystemTime::now();
    let results: Vec<(StandardCombiner, f64)> = [
        StandardCombiner::Bma,
        StandardCombiner::FunSimAvg,
        StandardCombiner::FunSimMax,
    ]
    .into_par_iter()
    .map(|combiner| {
        let sim = GroupSimilarity::new(combiner, GSesame::default());
        (combiner, sim.calculate(&gene_a, &gene_b).unwrap())
    })
    .collect();
    let end = SystemTime::now();
    let duration = end.duration_since(start).expect("Clock went backwards");

    for (combiner, score) in results {
        println!("{combiner:?}\t{score}");
    }
    println!("Took {}ms", duration.as_millis());
}
