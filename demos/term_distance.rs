use std::env::Args;

use gosim::{Distance, Ontology};

/// Prints the edge-count distance and G-SESAME similarity of two terms
///
/// Usage: `term_distance <OBO FILE> <TERM ID> <TERM ID>`
fn compare_two_terms(ontology: &Ontology, mut args: Args) {
    let id1 = args.next().expect("The first term id is missing");
    let id2 = args.next().expect("The second term id is missing");

    match ontology.distance(&id1, &id2).unwrap() {
        Distance::Unrelated => println!("{id1} and {id2} have no common ancestor"),
        distance => println!("Distance: {distance} ({distance:?})"),
    }

    for id in [&id1, &id2] {
        println!("Semantic value of {id}: {}", ontology.semantic_value(id).unwrap());
    }
    println!("Similarity: {}", ontology.similarity(&id1, &id2).unwrap());
}

fn main() {
    simple_logger::SimpleLogger::new().env().init().unwrap();

    let mut args = std::env::args();
    let filename = args.nth(1).expect("Specify the path to an obo file");
    let ontology = Ontology::from_obo(filename).unwrap();
    println!("{ontology:?}");

    compare_two_terms(&ontology, args);
}
