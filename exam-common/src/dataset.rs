//! Immutable in-memory snapshot of the loaded results file

use crate::bands::{subject_report, SubjectReport};
use crate::loader::ExamRecord;
use crate::lookup::{lookup, LookupOutcome};
use crate::ranking::{top_by_group, GroupRanking};
use crate::score::Candidate;

/// Raw records in file order plus their scored candidates
///
/// Built once after loading and never mutated. Aggregates are computed
/// on demand from the snapshot and not cached.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<ExamRecord>,
    candidates: Vec<Candidate>,
}

impl Dataset {
    pub fn from_records(records: Vec<ExamRecord>) -> Self {
        let candidates = records.iter().map(Candidate::from_record).collect();
        Self { records, candidates }
    }

    pub const fn empty() -> Self {
        Self {
            records: Vec::new(),
            candidates: Vec::new(),
        }
    }

    pub fn records(&self) -> &[ExamRecord] {
        &self.records
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn lookup(&self, sbd: &str) -> LookupOutcome {
        lookup(&self.records, sbd)
    }

    pub fn subject_report(&self) -> SubjectReport {
        subject_report(&self.records)
    }

    pub fn top_by_group(&self) -> GroupRanking {
        top_by_group(&self.candidates)
    }
}
