use gosim::{Distance, GoError, GoTerm, Ontology, PathKind};

fn ontology() -> Ontology {
    Ontology::from_obo("tests/test.obo").unwrap()
}

fn score(ontology: &Ontology, id1: &str, id2: &str) -> Option<f64> {
    ontology.distance(id1, id2).unwrap().score()
}

#[test]
fn single_path() {
    let ont = ontology();
    let term = GoTerm::try_new(&ont, "4").unwrap();
    let paths = term.paths(PathKind::Plain).unwrap();
    assert_eq!(paths.len(), 1);
    let ids: Vec<&str> = paths[0].terms().map(|id| id.as_str()).collect();
    assert_eq!(ids, ["4", "2", "1", "0"]);
}

#[test]
fn lineage() {
    let ont = ontology();
    assert_eq!(score(&ont, "11", "0"), Some(5.5));
    assert_eq!(score(&ont, "11", "1"), Some(4.4));
    assert_eq!(score(&ont, "0", "11"), Some(5.5));
    assert_eq!(
        ont.distance("11", "1").unwrap(),
        Distance::Lineage { steps: 4 }
    );
}

#[test]
fn cousins() {
    let ont = ontology();
    assert_eq!(score(&ont, "9", "5"), Some(6.0));
    assert_eq!(score(&ont, "7", "5"), Some(5.1));
    assert_eq!(score(&ont, "8", "5"), Some(6.0));
    assert_eq!(score(&ont, "5", "7"), Some(5.1));
}

#[test]
fn alt_ids() {
    let ont = ontology();
    assert_eq!(ont.term("12").unwrap().id(), "7");
    assert_eq!(ont.term("13").unwrap().id(), "8");
    assert_eq!(score(&ont, "12", "5"), Some(5.1));
    assert_eq!(score(&ont, "13", "5"), Some(6.0));
    assert_eq!(
        ont.distance("12", "5").unwrap(),
        ont.distance("7", "5").unwrap()
    );
}

#[test]
fn unknown_term() {
    let ont = ontology();
    assert_eq!(
        ont.distance("11", "666"),
        Err(GoError::UnknownTerm("666".to_string()))
    );
}

#[test]
fn unrelated_terms() {
    let mut ont = ontology();
    ont.insert_term("island");
    let distance = ont.distance("island", "5").unwrap();
    assert_eq!(distance, Distance::Unrelated);
    assert_eq!(distance.score(), None);
}

// Only the first common term of each pair of paths is used and
// the first pair wins on equal steps, even with a larger level delta.
const TIE: &str = "[Term]\nid: r\n\n[Term]\nid: s\n\n\
    [Term]\nid: m\nis_a: s\n\n\
    [Term]\nid: b\nis_a: r\n\n[Term]\nid: a\nis_a: b\n\n[Term]\nid: n\nis_a: s\n\n\
    [Term]\nid: y\nis_a: a\nis_a: n\n\n";

#[test]
fn cousins_tie_keeps_first_pair() {
    let ont = Ontology::from_obo_str(&format!("{TIE}[Term]\nid: x\nis_a: r\nis_a: m\n")).unwrap();
    assert_eq!(
        ont.distance("x", "y").unwrap(),
        Distance::Cousins {
            steps: 4,
            level_delta: 2
        }
    );
    assert_eq!(score(&ont, "x", "y"), Some(4.2));

    let ont = Ontology::from_obo_str(&format!("{TIE}[Term]\nid: x\nis_a: m\nis_a: r\n")).unwrap();
    assert_eq!(score(&ont, "x", "y"), Some(4.0));
}

#[test]
fn cyclic_ontology() {
    let ont = Ontology::from_obo_str(
        "[Term]\nid: a\nis_a: b\n\n[Term]\nid: b\nis_a: a\n\n[Term]\nid: c\n",
    )
    .unwrap();
    assert!(matches!(
        ont.distance("a", "c"),
        Err(GoError::CyclicRelation(_))
    ));
}
