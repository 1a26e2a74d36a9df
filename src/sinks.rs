//! Reference `Sink` implementation: CSV-appending.

use std::fs::OpenOptions;
use std::sync::Mutex;

use matching::CompanyMatch;
use pairing::{PairingError, Sink};
use serde::Serialize;

/// A sink that appends matches to a CSV file, buffering writes and
/// flushing them on [`Sink::flush`] or on drop.
///
/// Wrapped in a [`Mutex`] rather than requiring `&mut self` because
/// `SourcesMatcher`'s result-collection loop holds a single shared `Arc<dyn
/// Sink>` across however many pairs complete.
pub struct CsvSink {
    path: String,
    writer: Mutex<csv::Writer<std::fs::File>>,
}

#[derive(Serialize)]
struct CsvMatchRow<'a> {
    company_a_source: &'a str,
    company_a_id: &'a str,
    company_b_source: &'a str,
    company_b_id: &'a str,
    score: f64,
    success_criteria: String,
}

impl CsvSink {
    /// Create (or truncate) the output file and write the header row.
    pub fn create(path: impl Into<String>) -> Result<Self, PairingError> {
        let path = path.into();
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .map_err(|err| PairingError::Sink(format!("opening {path}: {err}")))?;
        let writer = csv::Writer::from_writer(file);
        Ok(Self {
            path,
            writer: Mutex::new(writer),
        })
    }

    fn write_row(&self, result: &CompanyMatch) -> Result<(), PairingError> {
        let row = CsvMatchRow {
            company_a_source: &result.company_a.source_name,
            company_a_id: &result.company_a.source_id,
            company_b_source: &result.company_b.source_name,
            company_b_id: &result.company_b.source_id,
            score: result.score,
            success_criteria: result.success_criteria.join(";"),
        };
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        writer
            .serialize(row)
            .map_err(|err| PairingError::Sink(format!("writing to {}: {err}", self.path)))
    }
}

impl Sink for CsvSink {
    fn add(&self, result: CompanyMatch) -> Result<(), PairingError> {
        self.write_row(&result)
    }

    fn add_all(&self, results: Vec<CompanyMatch>) -> Result<(), PairingError> {
        for result in &results {
            self.write_row(result)?;
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), PairingError> {
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        writer
            .flush()
            .map_err(|err| PairingError::Sink(format!("flushing {}: {err}", self.path)))
    }
}
