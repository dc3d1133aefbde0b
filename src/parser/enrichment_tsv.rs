//! Tab separated enrichment results
//!
//! The expected format is the one written by common enrichment engines
//! (e.g. `clusterProfiler`). Columns are identified by their header name,
//! their order does not matter and additional columns are ignored:
//!
//! | Column        | Required | Content                            |
//! |---------------|----------|------------------------------------|
//! | `ID`          | yes      | Term id, e.g. `GO:0000280`         |
//! | `Description` | no       | Term name                          |
//! | `GeneRatio`   | yes      | `hits/total` of the study set      |
//! | `BgRatio`     | yes      | `hits/total` of the background     |
//! | `pvalue`      | yes      | Unadjusted p-value                 |
//! | `p.adjust`    | no       | Adjusted p-value                   |
//! | `qvalue`      | no       | q-value, falls back to `p.adjust`  |
//! | `geneID`      | no       | `/`-separated study genes          |
//!
//! Either `qvalue` or `p.adjust` must be present. `NA` q-values are read as `1`.
//!
//! If the header has one column less than the data rows, the first data
//! column is treated as row name and skipped.

use std::path::Path;

use tracing::debug;

use crate::enrichment::{EnrichmentRecord, EnrichmentTable};
use crate::parser::{data_lines, read_to_string};
use crate::{GoError, GoResult};

struct Columns {
    id: usize,
    description: Option<usize>,
    gene_ratio: usize,
    bg_ratio: usize,
    pvalue: usize,
    qvalue: usize,
    genes: Option<usize>,
}

impl Columns {
    fn from_header(header: &str) -> GoResult<Self> {
        let names: Vec<&str> = header.split('\t').map(str::trim).collect();
        let find = |name: &str| names.iter().position(|col| *col == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| {
                GoError::InvalidInput(format!("enrichment table has no column {name}"))
            })
        };

        let qvalue = find("qvalue")
            .or_else(|| find("p.adjust"))
            .ok_or_else(|| {
                GoError::InvalidInput("enrichment table needs qvalue or p.adjust".to_string())
            })?;

        Ok(Self {
            id: require("ID")?,
            description: find("Description"),
            gene_ratio: require("GeneRatio")?,
            bg_ratio: require("BgRatio")?,
            pvalue: require("pvalue")?,
            qvalue,
            genes: find("geneID"),
        })
    }
}

fn parse_probability(value: &str) -> GoResult<f64> {
    match value.trim() {
        "NA" | "" => Ok(1.0),
        value => Ok(value.parse::<f64>()?),
    }
}

fn record_from_line(line: &str, columns: &Columns, offset: usize) -> GoResult<EnrichmentRecord> {
    let cols: Vec<&str> = line.split('\t').skip(offset).collect();
    let get = |idx: usize| {
        cols.get(idx)
            .copied()
            .ok_or_else(|| GoError::InvalidInput(line.to_string()))
    };

    let mut record = EnrichmentRecord::new(
        get(columns.id)?,
        get(columns.gene_ratio)?.parse()?,
        get(columns.bg_ratio)?.parse()?,
        parse_probability(get(columns.pvalue)?)?,
        parse_probability(get(columns.qvalue)?)?,
    );
    if let Some(idx) = columns.description {
        record = record.with_description(get(idx)?.trim());
    }
    if let Some(idx) = columns.genes {
        let genes = get(idx)?
            .split('/')
            .map(str::trim)
            .filter(|gene| !gene.is_empty())
            .map(String::from)
            .collect();
        record = record.with_genes(genes);
    }
    Ok(record)
}

/// Parses the content of an enrichment result table
///
/// # Errors
///
/// [`GoError::InvalidInput`] if required columns are missing or values
/// cannot be parsed
///
/// # Examples
///
/// ```
/// use godag::parser::enrichment_tsv::parse;
///
/// let tsv = "ID\tDescription\tGeneRatio\tBgRatio\tpvalue\tp.adjust\tqvalue\n\
///            GO:0000280\tnuclear division\t12/80\t300/18000\t1e-8\t3e-6\t2e-6\n";
///
/// let table = parse(tsv).unwrap();
/// let record = table.get(&"GO:0000280".into()).unwrap();
/// assert_eq!(record.description(), "nuclear division");
/// assert_eq!(record.qvalue(), 2e-6);
/// ```
pub fn parse(content: &str) -> GoResult<EnrichmentTable> {
    let mut lines = data_lines(content);
    let header = lines
        .next()
        .ok_or_else(|| GoError::InvalidInput("empty enrichment table".to_string()))?;
    let columns = Columns::from_header(header)?;
    let n_header = header.split('\t').count();

    let mut table = EnrichmentTable::new();
    for line in lines {
        let offset = usize::from(line.split('\t').count() == n_header + 1);
        let record = record_from_line(line, &columns, offset)?;
        table.insert(record);
    }
    debug!("Parsed {} enrichment records", table.len());
    Ok(table)
}

pub(crate) fn read_enrichment_file<P: AsRef<Path>>(filename: P) -> GoResult<EnrichmentTable> {
    let content = read_to_string(filename)?;
    parse(&content)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::enrichment::Ratio;

    #[test]
    fn parse_fixture() {
        let table = read_enrichment_file("tests/enrichment.tsv").unwrap();
        assert_eq!(table.len(), 4);

        let record = table.get(&"GO:0000280".into()).unwrap();
        assert_eq!(record.gene_ratio(), Ratio::new(12, 80));
        assert_eq!(record.bg_ratio(), Ratio::new(300, 18000));
        assert_eq!(record.pvalue(), 1.2e-8);
        assert_eq!(record.qvalue(), 2.5e-6);
        assert_eq!(record.genes().len(), 3);
        assert_eq!(record.genes()[0], "CDK1");
    }

    #[test]
    fn na_qvalue_is_not_significant() {
        let table = read_enrichment_file("tests/enrichment.tsv").unwrap();
        let record = table.get(&"GO:0051783".into()).unwrap();
        assert_eq!(record.qvalue(), 1.0);
    }

    #[test]
    fn falls_back_to_padjust() {
        let tsv = "ID\tGeneRatio\tBgRatio\tpvalue\tp.adjust\nGO:1\t1/2\t3/4\t0.01\t0.02\n";
        let table = parse(tsv).unwrap();
        assert_eq!(table.get(&"GO:1".into()).unwrap().qvalue(), 0.02);
    }

    #[test]
    fn row_names_are_skipped() {
        let tsv = "ID\tGeneRatio\tBgRatio\tpvalue\tqvalue\nGO:1\tGO:1\t1/2\t3/4\t0.01\t0.02\n";
        let table = parse(tsv).unwrap();
        assert_eq!(table.get(&"GO:1".into()).unwrap().gene_ratio(), Ratio::new(1, 2));
    }

    #[test]
    fn missing_columns() {
        assert!(parse("ID\tGeneRatio\tpvalue\tqvalue\n").is_err());
        assert!(parse("ID\tGeneRatio\tBgRatio\tpvalue\n").is_err());
        assert!(parse("").is_err());
    }

    #[test]
    fn malformed_values() {
        let tsv = "ID\tGeneRatio\tBgRatio\tpvalue\tqvalue\nGO:1\t1-2\t3/4\t0.01\t0.02\n";
        assert!(parse(tsv).is_err());
        let tsv = "ID\tGeneRatio\tBgRatio\tpvalue\tqvalue\nGO:1\t1/2\t3/4\tlow\t0.02\n";
        assert!(parse(tsv).is_err());
        let tsv = "ID\tGeneRatio\tBgRatio\tpvalue\tqvalue\nGO:1\t1/2\n";
        assert!(parse(tsv).is_err());
    }
}
