use std::fs;
use std::path::Path;

use tracing::{info, trace, warn};

use crate::term::internal::GoTermInternal;
use crate::term::Relation;
use crate::{GoError, GoResult, Ontology};

const FORMAT_VERSION: &str = "format-version: 1.2";

pub(crate) fn read_obo_file<P: AsRef<Path>>(filename: P, ontology: &mut Ontology) -> GoResult<()> {
    let name = filename.as_ref().display().to_string();
    let content = fs::read_to_string(filename).map_err(|_| GoError::CannotOpenFile(name))?;
    read_obo_str(&content, ontology)
}

pub(crate) fn read_obo_str(content: &str, ontology: &mut Ontology) -> GoResult<()> {
    let mut count = 0usize;
    for stanza in stanzas(content) {
        match stanza.split_first() {
            Some((header, lines)) if header.trim() == "[Term]" => {
                if ontology.add_term(term_from_obo(lines)?) {
                    count += 1;
                }
            }
            Some((header, _)) => trace!("Ignoring stanza {}", header.trim()),
            None => {}
        }
    }
    info!("Read {} terms and {} alternative ids", count, ontology.aliases());
    Ok(())
}

/// Splits the content into records separated by blank lines
///
/// Comment lines starting with `!` are dropped.
fn stanzas(content: &str) -> Vec<Vec<&str>> {
    let mut stanzas = Vec::new();
    let mut current = Vec::new();
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if !current.is_empty() {
                stanzas.push(std::mem::take(&mut current));
            }
        } else if !trimmed.starts_with('!') {
            current.push(line);
        }
    }
    if !current.is_empty() {
        stanzas.push(current);
    }
    stanzas
}

fn term_from_obo(lines: &[&str]) -> GoResult<GoTermInternal> {
    let mut id: Option<&str> = None;
    let mut alt_ids: Vec<&str> = Vec::new();
    let mut parents: Vec<(Relation, &str)> = Vec::new();
    let mut attributes: Vec<(&str, &str)> = Vec::new();

    for line in lines {
        let Some((key, value)) = parse_line(line) else {
            warn!("Unable to parse: {}", line);
            continue;
        };
        match key {
            "id" => {
                if id.is_none() {
                    id = Some(value);
                }
            }
            "alt_id" => alt_ids.push(value),
            "is_a" => parents.push((Relation::IsA, value)),
            "part_of" => parents.push((Relation::PartOf, value)),
            "relationship" => match value.split_once(char::is_whitespace) {
                Some(("part_of", parent)) => parents.push((Relation::PartOf, parent)),
                _ => attributes.push((key, value)),
            },
            _ => attributes.push((key, value)),
        }
    }

    let id = id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| GoError::InvalidInput(format!("[Term] without id: {}", lines.join(" | "))))?;

    let mut term = GoTermInternal::new(id);
    for alt_id in alt_ids {
        term.add_alt_id(alt_id);
    }
    for (relation, parent) in parents {
        term.add_parent(relation, parent);
    }
    for (key, value) in attributes {
        term.add_attribute(key, value);
    }
    Ok(term)
}

/// Splits a `key: value` line on the first `:`
fn parse_line(line: &str) -> Option<(&str, &str)> {
    line.split_once(':')
        .map(|(key, value)| (key.trim(), value.trim()))
}

pub(crate) fn obo_string(ontology: &Ontology) -> String {
    let mut out = String::from(FORMAT_VERSION);
    out.push('\n');
    for term in ontology {
        out.push('\n');
        out.push_str(&term_to_obo(term.internal()));
    }
    out
}

pub(crate) fn write_obo_file<P: AsRef<Path>>(ontology: &Ontology, filename: P) -> GoResult<()> {
    let name = filename.as_ref().display().to_string();
    fs::write(filename, obo_string(ontology)).map_err(|_| GoError::CannotOpenFile(name))
}

fn term_to_obo(term: &GoTermInternal) -> String {
    let mut lines = vec!["[Term]".to_string(), format!("id: {}", term.id())];
    lines.extend(term.alt_ids().iter().map(|alt_id| format!("alt_id: {alt_id}")));
    lines.extend(
        term.attributes()
            .iter()
            .map(|(key, value)| format!("{key}: {value}")),
    );
    lines.extend(
        term.parent_refs(Relation::IsA)
            .iter()
            .map(|parent| format!("is_a: {parent}")),
    );
    lines.extend(
        term.parent_refs(Relation::PartOf)
            .iter()
            .map(|parent| format!("relationship: part_of {parent}")),
    );
    lines.push(String::new());
    lines.join("\n")
}

#[cfg(test)]
mod test {
    use super::*;

    const OBO: &str = "format-version: 1.2\n\
        ontology: go\n\
        \n\
        [Term]\n\
        id: GO:0043229\n\
        name: intracellular organelle\n\
        namespace: cellular_component\n\
        alt_id: GO:0000001\n\
        is_a: GO:0043226 ! organelle\n\
        relationship: part_of GO:0005622 ! intracellular\n\
        relationship: regulates GO:0000002\n\
        \n\
        [Typedef]\n\
        id: part_of\n\
        name: part of\n\
        \n\
        [Term]\n\
        id: GO:0043226\n\
        name: organelle\n\
        ! a comment line\n\
        part_of: GO:0005575\n";

    #[test]
    fn split_terms() {
        let ont = Ontology::from_obo_str(OBO).unwrap();
        assert_eq!(ont.len(), 2);
        assert!(ont.term("part_of").is_none());

        let term = ont.term("GO:0000001").unwrap();
        assert_eq!(term.id(), "GO:0043229");
        assert_eq!(term.name(), Some("intracellular organelle"));
        assert_eq!(term.namespace(), Some("cellular_component"));
        assert_eq!(
            term.parent_ids(Relation::IsA).collect::<Vec<_>>(),
            ["GO:0043226"]
        );
        assert_eq!(
            term.parent_ids(Relation::PartOf).collect::<Vec<_>>(),
            ["GO:0005622"]
        );
        assert_eq!(term.attribute("relationship"), Some("regulates GO:0000002"));

        let term = ont.term("GO:0043226").unwrap();
        assert_eq!(
            term.parent_ids(Relation::PartOf).collect::<Vec<_>>(),
            ["GO:0005575"]
        );
        assert_eq!(term.attributes().count(), 1);
    }

    #[test]
    fn raw_parent_refs_are_kept() {
        let ont = Ontology::from_obo_str(OBO).unwrap();
        let term = ont.term("GO:0043229").unwrap();
        let raw: Vec<&str> = term
            .internal()
            .parent_refs(Relation::IsA)
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(raw, ["GO:0043226 ! organelle"]);
    }

    #[test]
    fn parse_line_splits_on_first_colon() {
        assert_eq!(parse_line("id: GO:0005575"), Some(("id", "GO:0005575")));
        assert_eq!(parse_line("def: \"a: b\" []"), Some(("def", "\"a: b\" []")));
        assert_eq!(parse_line("is_obsolete:true"), Some(("is_obsolete", "true")));
        assert_eq!(parse_line("no separator"), None);
    }

    #[test]
    fn blank_lines_with_whitespace_separate_records() {
        let ont = Ontology::from_obo_str("[Term]  \nid: 1\n   \n[Term]\r\nid: 2\r\n").unwrap();
        assert_eq!(ont.len(), 2);
    }

    #[test]
    fn first_id_wins() {
        let ont = Ontology::from_obo_str(
            "[Term]\nid: 1\nname: first\n\n[Term]\nid: 1\nname: second\n\n[Term]\nid: 2\nid: 3\n",
        )
        .unwrap();
        assert_eq!(ont.len(), 2);
        assert_eq!(ont.term("1").unwrap().name(), Some("first"));
        assert!(ont.term("2").is_some());
        assert!(ont.term("3").is_none());
    }

    #[test]
    fn missing_id() {
        assert!(matches!(
            Ontology::from_obo_str("[Term]\nname: nameless\n"),
            Err(GoError::InvalidInput(_))
        ));
        assert!(matches!(
            Ontology::from_obo_str("[Term]\nid:\n"),
            Err(GoError::InvalidInput(_))
        ));
    }

    #[test]
    fn missing_file() {
        assert_eq!(
            Ontology::from_obo("tests/does_not_exist.obo").unwrap_err(),
            GoError::CannotOpenFile("tests/does_not_exist.obo".to_string())
        );
    }

    #[test]
    fn write_and_read() {
        let ont = Ontology::from_obo_str(OBO).unwrap();
        let obo = ont.to_obo_string();
        assert!(obo.starts_with("format-version: 1.2\n\n[Term]\nid: GO:0043229\nalt_id: GO:0000001\n"));
        assert!(obo.contains("relationship: part_of GO:0005622 ! intracellular\n"));
        assert!(obo.contains("\n[Term]\nid: GO:0043226\nname: organelle\nrelationship: part_of GO:0005575\n"));

        let copy = Ontology::from_obo_str(&obo).unwrap();
        assert_eq!(copy.to_obo_string(), obo);
    }
}
