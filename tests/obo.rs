use gosim::{GoError, Ontology, PathKind, Relation};

#[test]
fn load_fixtures() {
    let ont = Ontology::from_obo("tests/test.obo").unwrap();
    assert_eq!(ont.len(), 12);
    assert_eq!(ont.term("0").unwrap().name(), Some("zero"));
    assert_eq!(ont.term("11").unwrap().namespace(), Some("test"));
    assert!(ont.term("part_of").is_none());

    let ont = Ontology::from_obo("tests/go_2012.obo").unwrap();
    assert_eq!(ont.len(), 9);
    let term = ont.term("GO:0044424").unwrap();
    assert_eq!(term.name(), Some("intracellular part"));
    assert_eq!(
        term.parent_ids(Relation::PartOf).collect::<Vec<_>>(),
        ["GO:0005622"]
    );
    assert_eq!(ont.term("GO:0008372").unwrap().id(), "GO:0005575");
}

#[test]
fn write_and_reload() {
    let ont = Ontology::from_obo("tests/go_2012.obo").unwrap();
    let filename = std::env::temp_dir().join("gosim_write_and_reload.obo");
    ont.write_obo(&filename).unwrap();

    let copy = Ontology::from_obo(&filename).unwrap();
    std::fs::remove_file(&filename).unwrap();

    assert_eq!(copy.len(), ont.len());
    for (term, copied) in ont.terms().zip(copy.terms()) {
        assert_eq!(term.id(), copied.id());
        assert_eq!(term.alt_ids(), copied.alt_ids());
        assert_eq!(term.attributes().collect::<Vec<_>>(), copied.attributes().collect::<Vec<_>>());
        assert_eq!(
            term.paths(PathKind::Detailed).unwrap(),
            copied.paths(PathKind::Detailed).unwrap()
        );
    }
    assert_eq!(
        copy.similarity("GO:0043229", "GO:0043231").unwrap(),
        0.8259052924791086
    );
}

#[test]
fn cannot_write() {
    let ont = Ontology::from_obo("tests/test.obo").unwrap();
    assert!(matches!(
        ont.write_obo("tests/no_such_folder/test.obo"),
        Err(GoError::CannotOpenFile(_))
    ));
}

#[test]
fn branch() {
    let ont = Ontology::from_obo("tests/test.obo").unwrap();

    let branch = ont.branch("10").unwrap();
    assert!(branch.is_empty());

    let branch = ont.branch("0").unwrap();
    assert_eq!(branch.len(), 12);
    assert_eq!(branch.term("13").unwrap().id(), "8");
    assert_eq!(branch.distance("9", "5").unwrap().score(), Some(6.0));

    assert_eq!(
        ont.branch("666").unwrap_err(),
        GoError::UnknownTerm("666".to_string())
    );
}

#[test]
fn namespace_branch() {
    let ont = Ontology::from_obo_str(
        "[Term]\nid: GO:0008150\nname: biological_process\n\n\
         [Term]\nid: GO:0005575\nname: cellular_component\n\n\
         [Term]\nid: GO:0009987\nname: cellular process\nis_a: GO:0008150\n\n\
         [Term]\nid: GO:0005623\nname: cell\nis_a: GO:0005575\n\n\
         [Term]\nid: GO:0051301\nname: cell division\nis_a: GO:0009987\n",
    )
    .unwrap();
    let branch = ont.branch("GO:0008150").unwrap();
    let ids: Vec<&str> = branch.terms().map(|term| term.id().as_str()).collect();
    assert_eq!(ids, ["GO:0008150", "GO:0009987", "GO:0051301"]);
}
