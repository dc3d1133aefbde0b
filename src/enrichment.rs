//! Results of an enrichment analysis
//!
//! An [`EnrichmentTable`] holds one [`EnrichmentRecord`] per tested term.
//! It is produced by an external enrichment engine and parsed with
//! [`EnrichmentTable::from_tsv`] or assembled from records.

use std::collections::HashMap;
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

use crate::term::{TermGroup, TermId};
use crate::{parser, GoError, GoResult};

/// A fraction `hits / total`, e.g. `GeneRatio = 3/50`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ratio {
    hits: u64,
    total: u64,
}

impl Ratio {
    /// Constructs a new [`Ratio`]
    pub fn new(hits: u64, total: u64) -> Self {
        Self { hits, total }
    }

    /// The numerator
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// The denominator
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Returns the ratio as float, `0.0` for an empty total
    pub fn as_f64(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.hits as f64 / self.total as f64
        }
    }
}

impl Display for Ratio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.hits, self.total)
    }
}

impl FromStr for Ratio {
    type Err = GoError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hits, total) = s
            .trim()
            .split_once('/')
            .ok_or_else(|| GoError::InvalidInput(format!("invalid ratio {s}")))?;
        Ok(Ratio::new(hits.trim().parse()?, total.trim().parse()?))
    }
}

/// The enrichment result of a single term
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichmentRecord {
    id: TermId,
    description: String,
    gene_ratio: Ratio,
    bg_ratio: Ratio,
    pvalue: f64,
    qvalue: f64,
    genes: Vec<String>,
}

impl EnrichmentRecord {
    /// Constructs a new [`EnrichmentRecord`]
    pub fn new<I: Into<TermId>>(
        id: I,
        gene_ratio: Ratio,
        bg_ratio: Ratio,
        pvalue: f64,
        qvalue: f64,
    ) -> Self {
        Self {
            id: id.into(),
            description: String::new(),
            gene_ratio,
            bg_ratio,
            pvalue,
            qvalue,
            genes: Vec::new(),
        }
    }

    /// Sets the term description
    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Sets the genes of the study set that are annotated to the term
    #[must_use]
    pub fn with_genes(mut self, genes: Vec<String>) -> Self {
        self.genes = genes;
        self
    }

    /// The tested term
    pub fn id(&self) -> &TermId {
        &self.id
    }

    /// The term name as reported by the enrichment engine
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Fraction of study genes annotated to the term
    pub fn gene_ratio(&self) -> Ratio {
        self.gene_ratio
    }

    /// Fraction of background genes annotated to the term
    pub fn bg_ratio(&self) -> Ratio {
        self.bg_ratio
    }

    /// Unadjusted p-value
    pub fn pvalue(&self) -> f64 {
        self.pvalue
    }

    /// Adjusted p-value (q-value)
    pub fn qvalue(&self) -> f64 {
        self.qvalue
    }

    /// Study genes annotated to the term
    pub fn genes(&self) -> &[String] {
        &self.genes
    }

    /// Returns `-log10(q)`, the value used for coloring
    ///
    /// A q-value of `0` is clamped to the smallest positive `f64`
    /// to keep the result finite.
    pub fn significance(&self) -> f64 {
        minus_log10(self.qvalue)
    }

    /// Fold enrichment: `gene_ratio / bg_ratio`
    pub fn fold_enrichment(&self) -> f64 {
        let background = self.bg_ratio.as_f64();
        if background == 0.0 {
            0.0
        } else {
            self.gene_ratio.as_f64() / background
        }
    }
}

pub(crate) fn minus_log10(qvalue: f64) -> f64 {
    if qvalue.is_nan() {
        return 0.0;
    }
    let q = qvalue.clamp(f64::MIN_POSITIVE, 1.0);
    -q.log10()
}

/// A collection of [`EnrichmentRecord`]s, indexed by [`TermId`]
///
/// # Examples
///
/// ```
/// use godag::enrichment::{EnrichmentRecord, EnrichmentTable, Ratio};
///
/// let mut table = EnrichmentTable::new();
/// table.insert(EnrichmentRecord::new(
///     "GO:0000280",
///     Ratio::new(5, 50),
///     Ratio::new(100, 18000),
///     1e-6,
///     1e-4,
/// ));
///
/// let record = table.get(&"GO:0000280".into()).unwrap();
/// assert_eq!(record.gene_ratio().to_string(), "5/50");
/// assert!((record.significance() - 4.0).abs() < 1e-9);
/// assert_eq!(table.significant(0.05).len(), 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct EnrichmentTable {
    records: HashMap<TermId, EnrichmentRecord>,
}

impl EnrichmentTable {
    /// Constructs a new, empty [`EnrichmentTable`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a tab separated enrichment result file
    ///
    /// See [`parser::enrichment_tsv`] for the expected columns
    ///
    /// # Errors
    ///
    /// - [`GoError::CannotOpenFile`] if the file is not readable
    /// - [`GoError::InvalidInput`] for missing columns or malformed values
    pub fn from_tsv<P: AsRef<Path>>(filename: P) -> GoResult<Self> {
        parser::enrichment_tsv::read_enrichment_file(filename)
    }

    /// Adds a record, replacing a previous record of the same term
    pub fn insert(&mut self, record: EnrichmentRecord) -> Option<EnrichmentRecord> {
        self.records.insert(record.id().clone(), record)
    }

    /// Returns the record of `id`
    pub fn get(&self, id: &TermId) -> Option<&EnrichmentRecord> {
        self.records.get(id)
    }

    /// Returns the number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the table contains no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates all records in arbitrary order
    pub fn iter(&self) -> std::collections::hash_map::Values<'_, TermId, EnrichmentRecord> {
        self.records.values()
    }

    /// Returns all records, sorted by ascending q-value and then by id
    pub fn sorted(&self) -> Vec<&EnrichmentRecord> {
        let mut res: Vec<&EnrichmentRecord> = self.records.values().collect();
        res.sort_by(|a, b| {
            a.qvalue()
                .total_cmp(&b.qvalue())
                .then_with(|| a.id().cmp(b.id()))
        });
        res
    }

    /// Returns the ids of all terms with `qvalue <= cutoff`
    ///
    /// These are usually the seed terms of a [`Subgraph`](crate::Subgraph)
    pub fn significant(&self, cutoff: f64) -> TermGroup {
        self.records
            .values()
            .filter(|record| record.qvalue() <= cutoff)
            .map(|record| record.id().clone())
            .collect()
    }
}

impl FromIterator<EnrichmentRecord> for EnrichmentTable {
    fn from_iter<I: IntoIterator<Item = EnrichmentRecord>>(iter: I) -> Self {
        let mut table = EnrichmentTable::new();
        for record in iter {
            table.insert(record);
        }
        table
    }
}

impl<'a> IntoIterator for &'a EnrichmentTable {
    type Item = &'a EnrichmentRecord;
    type IntoIter = std::collections::hash_map::Values<'a, TermId, EnrichmentRecord>;
    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}
