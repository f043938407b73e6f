//! CSV dataset reader
//!
//! Expects four leading fields per row: decade, title, budget, gross.
//! Extra trailing fields are ignored. Rows that are short or whose budget or
//! gross is not a number are skipped and reported.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dataset::{MovieDataset, MovieRecord};
use crate::reader::{IoError, IoResult, LoadOptions};

const DECADE: usize = 0;
const TITLE: usize = 1;
const BUDGET: usize = 2;
const GROSS: usize = 3;
const REQUIRED_FIELDS: usize = 4;

/// Why a row was left out of the dataset
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum SkipReason {
    #[error("expected at least 4 fields, found {found}")]
    MissingFields { found: usize },

    #[error("{field} value {value:?} is not a number")]
    InvalidNumber { field: String, value: String },

    #[error("malformed record: {0}")]
    Malformed(String),
}

/// Diagnostic for a row that was not loaded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedRow {
    /// 1-based line number in the file
    pub line: u64,
    /// The row's fields joined back together
    pub raw: String,
    pub reason: SkipReason,
}

/// A loaded dataset plus the rows that were skipped
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub dataset: MovieDataset,
    pub skipped: Vec<SkippedRow>,
}

/// Loads the movie dataset from delimited text
#[derive(Debug, Clone, Default)]
pub struct DatasetLoader {
    options: LoadOptions,
}

impl DatasetLoader {
    pub fn new(options: LoadOptions) -> Self {
        Self { options }
    }

    /// Load a dataset file
    ///
    /// Fails with [`IoError::FileNotFound`] if `path` does not exist.
    pub fn load_path(&self, path: impl AsRef<Path>) -> IoResult<LoadReport> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(IoError::FileNotFound(path.display().to_string()));
        }

        let file = File::open(path).map_err(|e| IoError::OpenFailed(e.to_string()))?;
        let report = self.load_reader(BufReader::new(file));

        tracing::info!(
            path = %path.display(),
            movies = report.dataset.len(),
            decades = report.dataset.decades().len(),
            skipped = report.skipped.len(),
            "Loaded dataset"
        );
        Ok(report)
    }

    /// Load a dataset from any reader
    pub fn load_reader<R: Read>(&self, input: R) -> LoadReport {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.options.delimiter)
            .has_headers(self.options.has_header)
            .flexible(true)
            .from_reader(input);

        let mut records = Vec::new();
        let mut skipped = Vec::new();

        for result in reader.records() {
            let outcome = match result {
                Ok(record) => {
                    let line = record.position().map(|p| p.line()).unwrap_or_default();
                    parse_record(&record).map_err(|reason| SkippedRow {
                        line,
                        raw: join_fields(&record, self.options.delimiter),
                        reason,
                    })
                }
                Err(e) => Err(SkippedRow {
                    line: e.position().map(|p| p.line()).unwrap_or_default(),
                    raw: String::new(),
                    reason: SkipReason::Malformed(e.to_string()),
                }),
            };

            match outcome {
                Ok(record) => records.push(record),
                Err(row) => {
                    tracing::warn!(line = row.line, raw = %row.raw, "Skipping row: {}", row.reason);
                    skipped.push(row);
                }
            }
        }

        LoadReport {
            dataset: MovieDataset::from_records(records),
            skipped,
        }
    }
}

/// Load a comma-separated dataset file with a header line
pub fn load_dataset(path: impl AsRef<Path>) -> IoResult<LoadReport> {
    DatasetLoader::default().load_path(path)
}

fn parse_record(record: &csv::StringRecord) -> Result<MovieRecord, SkipReason> {
    if record.len() < REQUIRED_FIELDS {
        return Err(SkipReason::MissingFields {
            found: record.len(),
        });
    }

    let budget = parse_amount(record, BUDGET, "budget")?;
    let gross = parse_amount(record, GROSS, "gross")?;

    Ok(MovieRecord {
        decade: record[DECADE].to_string(),
        title: record[TITLE].to_string(),
        budget,
        gross,
    })
}

fn parse_amount(record: &csv::StringRecord, index: usize, field: &str) -> Result<f64, SkipReason> {
    let value = &record[index];
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| SkipReason::InvalidNumber {
            field: field.to_string(),
            value: value.to_string(),
        })
}

fn join_fields(record: &csv::StringRecord, delimiter: u8) -> String {
    let separator = (delimiter as char).to_string();
    record.iter().collect::<Vec<_>>().join(&separator)
}
