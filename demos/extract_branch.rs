use gosim::Ontology;

const BIOLOGICAL_PROCESS: &str = "GO:0008150";

/// Writes all terms below a root term into a new obo file
///
/// Usage: `extract_branch <OBO FILE> <OUTPUT FILE> [ROOT ID]`
///
/// The root defaults to `biological_process`.
fn main() {
    simple_logger::SimpleLogger::new().env().init().unwrap();

    let mut args = std::env::args();
    let filename = args.nth(1).expect("Specify the path to an obo file");
    let output = args.next().expect("Specify the output file");
    let root = args.next().unwrap_or_else(|| BIOLOGICAL_PROCESS.to_string());

    let ontology = Ontology::from_obo(filename).unwrap();
    let branch = ontology.branch(&root).unwrap();
    branch.write_obo(&output).unwrap();

    println!("Wrote {} of {} terms to {output}", branch.len(), ontology.len());
}
