//! Reference `Source` implementations: in-memory and CSV-backed.

use matching::Company;
use pairing::Source;
use serde::Deserialize;
use tracing::warn;

/// A source backed by a `Vec<Company>` already held in memory. Mostly
/// useful for tests and small one-off runs.
pub struct InMemorySource {
    companies: Vec<Company>,
}

impl InMemorySource {
    pub fn new(companies: Vec<Company>) -> Self {
        Self { companies }
    }
}

impl Source for InMemorySource {
    fn load(&self) -> Box<dyn Iterator<Item = Company> + Send + '_> {
        Box::new(self.companies.clone().into_iter())
    }
}

/// A source that reads a CSV file.
///
/// Expected header: `source_id,source_name,name,website,email,phone,address,
/// postal_code,city,country`. Empty cells are treated as missing rather
/// than an empty-string value, consistent with how [`normalize::normalize_text`]
/// treats blank fields.
///
/// `load` re-reads the file from disk on every call, since `SourcesMatcher`
/// loads `source_b` once per `source_a` row; callers with very large
/// second sources should front it with [`InMemorySource`] instead.
pub struct CsvSource {
    path: String,
}

impl CsvSource {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    source_id: String,
    source_name: String,
    name: String,
    website: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    address: Option<String>,
    postal_code: Option<String>,
    city: Option<String>,
    country: Option<String>,
}

fn blank_to_none(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.trim().is_empty())
}

impl From<CsvRow> for Company {
    fn from(row: CsvRow) -> Self {
        Company {
            source_id: row.source_id,
            source_name: row.source_name,
            name: row.name,
            website: blank_to_none(row.website),
            email: blank_to_none(row.email),
            phone: blank_to_none(row.phone),
            address: blank_to_none(row.address),
            postal_code: blank_to_none(row.postal_code),
            city: blank_to_none(row.city),
            country: blank_to_none(row.country),
        }
    }
}

impl Source for CsvSource {
    fn load(&self) -> Box<dyn Iterator<Item = Company> + Send + '_> {
        let companies = match csv::Reader::from_path(&self.path) {
            Ok(mut reader) => reader
                .deserialize::<CsvRow>()
                .filter_map(|record| match record {
                    Ok(row) => Some(Company::from(row)),
                    Err(err) => {
                        warn!(path = %self.path, error = %err, "skipping malformed CSV row");
                        None
                    }
                })
                .collect::<Vec<_>>(),
            Err(err) => {
                warn!(path = %self.path, error = %err, "failed to open CSV source");
                Vec::new()
            }
        };
        Box::new(companies.into_iter())
    }
}
