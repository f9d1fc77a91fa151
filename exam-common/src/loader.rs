//! CSV record loading
//!
//! Reads the exam results file once at startup. The header row must name
//! the `sbd` column; subject columns are optional and extra columns are
//! ignored. Empty cells load as absent values.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::subject::Subject;
use crate::{Error, Result};

/// One raw row of the results file
///
/// Values are kept exactly as they appear in the file. Typed scores are
/// derived from them by [`crate::score::Candidate`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExamRecord {
    pub sbd: String,
    pub toan: Option<String>,
    pub ngu_van: Option<String>,
    pub ngoai_ngu: Option<String>,
    pub vat_li: Option<String>,
    pub hoa_hoc: Option<String>,
    pub sinh_hoc: Option<String>,
    pub lich_su: Option<String>,
    pub dia_li: Option<String>,
    pub gdcd: Option<String>,
}

impl ExamRecord {
    /// Create a record with no subject values
    pub fn new(sbd: impl Into<String>) -> Self {
        Self {
            sbd: sbd.into(),
            ..Self::default()
        }
    }

    /// Builder-style setter for a subject value
    pub fn with(mut self, subject: Subject, value: impl Into<String>) -> Self {
        *self.slot_mut(subject) = Some(value.into());
        self
    }

    /// Raw value stored for a subject
    pub fn raw(&self, subject: Subject) -> Option<&str> {
        let slot = match subject {
            Subject::Math => &self.toan,
            Subject::Literature => &self.ngu_van,
            Subject::ForeignLanguage => &self.ngoai_ngu,
            Subject::Physics => &self.vat_li,
            Subject::Chemistry => &self.hoa_hoc,
            Subject::Biology => &self.sinh_hoc,
            Subject::History => &self.lich_su,
            Subject::Geography => &self.dia_li,
            Subject::Civics => &self.gdcd,
        };
        slot.as_deref()
    }

    fn slot_mut(&mut self, subject: Subject) -> &mut Option<String> {
        match subject {
            Subject::Math => &mut self.toan,
            Subject::Literature => &mut self.ngu_van,
            Subject::ForeignLanguage => &mut self.ngoai_ngu,
            Subject::Physics => &mut self.vat_li,
            Subject::Chemistry => &mut self.hoa_hoc,
            Subject::Biology => &mut self.sinh_hoc,
            Subject::History => &mut self.lich_su,
            Subject::Geography => &mut self.dia_li,
            Subject::Civics => &mut self.gdcd,
        }
    }
}

/// Load all records from a CSV file on disk
pub fn load_csv(path: &Path) -> Result<Vec<ExamRecord>> {
    let file = File::open(path)?;
    read_records(file)
}

/// Read records from any CSV source, preserving file order
///
/// Rows that cannot be decoded are logged and skipped.
pub fn read_records<R: Read>(source: R) -> Result<Vec<ExamRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    if !headers.iter().any(|h| h == "sbd") {
        return Err(Error::MissingColumn("sbd".to_string()));
    }
    for subject in Subject::ALL {
        if !headers.iter().any(|h| h == subject.code()) {
            debug!("Column {} not present, values will load as absent", subject.code());
        }
    }

    let mut records = Vec::new();
    for row in reader.deserialize::<ExamRecord>() {
        match row {
            Ok(record) => records.push(record),
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or_default();
                warn!("Skipping malformed row at line {}: {}", line, e);
            }
        }
    }

    Ok(records)
}
