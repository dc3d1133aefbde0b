//! Parsing the Gene Ontology and enrichment input files

use std::path::Path;

use crate::{GoError, GoResult};

/// Module to parse GO `.obo` releases, e.g. `go-basic.obo`
pub(crate) mod go_obo;

/// Module to parse tab separated enrichment results
pub mod enrichment_tsv;

fn read_to_string<P: AsRef<Path>>(filename: P) -> GoResult<String> {
    std::fs::read_to_string(filename.as_ref())
        .map_err(|_| GoError::CannotOpenFile(filename.as_ref().display().to_string()))
}

/// Iterates the non-empty, non-comment lines of a file
fn data_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn missing_file() {
        let err = read_to_string("tests/does_not_exist.tsv").unwrap_err();
        assert!(matches!(err, GoError::CannotOpenFile(name) if name.ends_with("does_not_exist.tsv")));
    }

    #[test]
    fn skip_comments_and_blank_lines() {
        let lines: Vec<&str> = data_lines("#header\n\nfoo\r\n  \nbar").collect();
        assert_eq!(lines, vec!["foo", "bar"]);
    }
}
