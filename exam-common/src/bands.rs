//! Score band histograms
//!
//! Bands, lower edges inclusive:
//! - band1: score >= 8
//! - band2: 6 <= score < 8
//! - band3: 4 <= score < 6
//! - band4: score < 4
//!
//! Only parseable values are counted, so a histogram's total is the number
//! of candidates with a score for that subject, not the dataset size.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::loader::ExamRecord;
use crate::score::parse_score;
use crate::subject::Subject;

/// Ordinal performance band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Band1,
    Band2,
    Band3,
    Band4,
}

impl Band {
    /// Classify a finite score; first matching threshold wins
    pub fn classify(score: f64) -> Band {
        if score >= 8.0 {
            Band::Band1
        } else if score >= 6.0 {
            Band::Band2
        } else if score >= 4.0 {
            Band::Band3
        } else {
            Band::Band4
        }
    }
}

/// Running band counts for one subject
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct SubjectHistogram {
    pub band1: u64,
    pub band2: u64,
    pub band3: u64,
    pub band4: u64,
}

impl SubjectHistogram {
    pub fn add_score(&mut self, score: f64) {
        match Band::classify(score) {
            Band::Band1 => self.band1 += 1,
            Band::Band2 => self.band2 += 1,
            Band::Band3 => self.band3 += 1,
            Band::Band4 => self.band4 += 1,
        }
    }

    /// Number of scores classified so far
    pub fn total(&self) -> u64 {
        self.band1 + self.band2 + self.band3 + self.band4
    }
}

/// Histograms for all nine subjects, in subject enumeration order
///
/// Serializes as a JSON object keyed by subject code.
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectReport {
    entries: Vec<(Subject, SubjectHistogram)>,
}

impl SubjectReport {
    pub fn get(&self, subject: Subject) -> Option<&SubjectHistogram> {
        self.entries
            .iter()
            .find(|(s, _)| *s == subject)
            .map(|(_, h)| h)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Subject, SubjectHistogram)> {
        self.entries.iter()
    }
}

impl Serialize for SubjectReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (subject, histogram) in &self.entries {
            map.serialize_entry(subject.code(), histogram)?;
        }
        map.end()
    }
}

/// Build the per-subject band report from raw records
///
/// Each subject is independent: one record contributes to every subject
/// it has a parseable value for.
pub fn subject_report(records: &[ExamRecord]) -> SubjectReport {
    let entries = Subject::ALL
        .into_iter()
        .map(|subject| {
            let mut histogram = SubjectHistogram::default();
            for score in records.iter().filter_map(|r| parse_score(r.raw(subject))) {
                histogram.add_score(score);
            }
            (subject, histogram)
        })
        .collect();

    SubjectReport { entries }
}
