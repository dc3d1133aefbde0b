use tracing::{debug, trace, warn};

use crate::ontology::Builder;
use crate::parser::{read_to_string, Path};
use crate::term::internal::TermInternal;
use crate::term::{Namespace, RelationType, TermId};
use crate::{GoError, GoResult, Ontology};

/// Child - Parent - Relation
type Connections = Vec<(TermId, TermId, RelationType)>;

pub(crate) fn read_obo_file<P: AsRef<Path>>(filename: P) -> GoResult<Ontology> {
    let content = read_to_string(filename)?;
    parse_obo(&content)
}

pub(crate) fn parse_obo(content: &str) -> GoResult<Ontology> {
    let mut builder = Builder::new();
    let mut connections: Connections = Vec::new();

    let content = content.replace("\r\n", "\n");
    for stanza in content.split("\n\n") {
        let stanza = stanza.trim_matches('\n');
        if stanza.is_empty() {
            continue;
        }
        if let Some(term) = stanza.strip_prefix("[Term]\n") {
            let (raw_term, parents) = term_from_obo(term)?;
            let obsolete = raw_term.obsolete();
            let id = builder.insert_term(raw_term);
            if !obsolete {
                for (parent, relation) in parents {
                    connections.push((id.clone(), parent, relation));
                }
            }
        } else if stanza.starts_with('[') {
            trace!("Ignoring: {}", stanza.lines().next().unwrap_or_default());
        } else {
            for line in stanza.lines() {
                if let Some(version) = line.strip_prefix("data-version:") {
                    builder.set_version(version.trim());
                }
            }
        }
    }
    debug!("Parsed {} terms", builder.len());

    let mut builder = builder.terms_complete();
    for (child, parent, relation) in connections {
        if let Err(err) = builder.add_relation(child.clone(), parent, relation) {
            warn!("Skipping {} relation of {}: {}", relation, child, err);
        }
    }

    Ok(builder.connect_all_terms().build())
}

fn term_from_obo(term: &str) -> GoResult<(TermInternal, Vec<(TermId, RelationType)>)> {
    let mut id: Option<&str> = None;
    let mut name: Option<&str> = None;
    let mut namespace = Namespace::Unknown;
    let mut obsolete = false;
    let mut parents = Vec::new();

    for line in term.lines() {
        let Some((key, value)) = line.split_once(": ") else {
            trace!("Ignoring line {}", line);
            continue;
        };
        match key {
            "id" => id = Some(value.trim()),
            "name" => name = Some(value.trim()),
            "namespace" => namespace = value.trim().parse().unwrap_or_default(),
            "is_obsolete" => obsolete = value.trim() == "true",
            "is_a" => {
                if let Some(parent) = value.split_whitespace().next() {
                    parents.push((TermId::from(parent), RelationType::IsA));
                }
            }
            "relationship" => {
                let mut cols = value.split_whitespace();
                if let (Some(kind), Some(parent)) = (cols.next(), cols.next()) {
                    match kind.parse::<RelationType>() {
                        Ok(relation) => parents.push((TermId::from(parent), relation)),
                        Err(_) => warn!("Unsupported relation {} in {}", kind, line),
                    }
                }
            }
            _ => (),
        }
    }

    let id = id.ok_or_else(|| {
        GoError::InvalidInput(format!(
            "term without id: {}",
            term.lines().next().unwrap_or_default()
        ))
    })?;
    let name = name.unwrap_or_else(|| {
        warn!("Term {} has no name", id);
        ""
    });

    let mut raw_term = TermInternal::new(id, name);
    *raw_term.namespace_mut() = namespace;
    *raw_term.obsolete_mut() = obsolete;
    Ok((raw_term, parents))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::OntologySource;

    #[test]
    fn parse_fixture() {
        let ont = read_obo_file("tests/mini_go.obo").unwrap();

        // 22 terms + root sentinel
        assert_eq!(ont.len(), 23);
        assert_eq!(ont.version(), "releases/2023-01-01");

        let term = ont.term("GO:0000280").unwrap();
        assert_eq!(term.name(), "nuclear division");
        assert_eq!(term.namespace(), Namespace::BiologicalProcess);
        // the occurs_in relation is skipped
        assert_eq!(term.parents().count(), 1);
        assert_eq!(term.depth(), Some(6));
    }

    #[test]
    fn typed_relations() {
        let ont = read_obo_file("tests/mini_go.obo").unwrap();
        let parents = ont.parents_of(&"GO:0051785".into());
        assert!(parents.contains(&("GO:0051783".into(), RelationType::IsA)));
        assert!(parents.contains(&("GO:0000280".into(), RelationType::PositivelyRegulates)));
    }

    #[test]
    fn namespace_roots_link_to_sentinel() {
        let ont = read_obo_file("tests/mini_go.obo").unwrap();
        for root in ["GO:0008150", "GO:0003674", "GO:0005575"] {
            let parents = ont.parents_of(&root.into());
            assert_eq!(parents.as_slice(), &[(TermId::root_sentinel(), RelationType::IsA)]);
            assert_eq!(ont.depth_of(&root.into()), Some(1));
        }
    }

    #[test]
    fn obsolete_term() {
        let ont = read_obo_file("tests/mini_go.obo").unwrap();
        let term = ont.term("GO:0000001").unwrap();
        assert!(term.obsolete());
        assert_eq!(term.parents().count(), 0);
    }

    #[test]
    fn stanza_without_id() {
        let obo = "[Term]\nname: nameless\n";
        assert!(matches!(parse_obo(obo), Err(GoError::InvalidInput(_))));
    }

    #[test]
    fn relation_to_unknown_parent_is_skipped() {
        let obo = "[Term]\nid: GO:1\nname: one\nis_a: GO:2 ! missing\n\n[Term]\nid: GO:3\nname: three\nis_a: GO:1\n";
        let ont = parse_obo(obo).unwrap();
        let one = ont.term("GO:1").unwrap();
        assert!(one.parent_ids()[0].0.is_root_sentinel());
        assert_eq!(ont.term("GO:3").unwrap().depth(), Some(2));
    }

    #[test]
    fn windows_line_endings() {
        let obo = "data-version: v1\r\n\r\n[Term]\r\nid: GO:1\r\nname: one\r\n";
        let ont = parse_obo(obo).unwrap();
        assert_eq!(ont.version(), "v1");
        assert_eq!(ont.term("GO:1").unwrap().name(), "one");
    }
}
