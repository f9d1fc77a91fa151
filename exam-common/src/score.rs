//! Score model
//!
//! Turns raw record values into typed scores and computes admission group
//! totals. An absent score is never treated as zero: a candidate missing
//! any of a group's subjects has no total for that group.

use crate::loader::ExamRecord;
use crate::subject::{AdmissionGroup, Subject};

/// Parse a raw cell into a score
///
/// Surrounding whitespace is ignored. Absent, empty, unparsable and
/// non-finite values all yield `None`.
pub fn parse_score(raw: Option<&str>) -> Option<f64> {
    let value = raw?.trim().parse::<f64>().ok()?;
    value.is_finite().then_some(value)
}

/// A candidate with typed subject scores, immutable after construction
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    sbd: String,
    scores: [Option<f64>; 9],
}

impl Candidate {
    pub fn from_record(record: &ExamRecord) -> Self {
        Self {
            sbd: record.sbd.clone(),
            scores: Subject::ALL.map(|subject| parse_score(record.raw(subject))),
        }
    }

    pub fn sbd(&self) -> &str {
        &self.sbd
    }

    pub fn score(&self, subject: Subject) -> Option<f64> {
        self.scores[subject_index(subject)]
    }

    /// Sum of the group's three subjects, or `None` if any is absent
    pub fn score_for_group(&self, group: AdmissionGroup) -> Option<f64> {
        let [a, b, c] = group.subjects();
        Some(self.score(a)? + self.score(b)? + self.score(c)?)
    }

    /// Same as [`Candidate::score_for_group`], keyed by group code
    ///
    /// Unknown codes yield `None`.
    pub fn score_for_group_code(&self, code: &str) -> Option<f64> {
        AdmissionGroup::from_code(code).and_then(|group| self.score_for_group(group))
    }
}

fn subject_index(subject: Subject) -> usize {
    match subject {
        Subject::Math => 0,
        Subject::Literature => 1,
        Subject::ForeignLanguage => 2,
        Subject::Physics => 3,
        Subject::Chemistry => 4,
        Subject::Biology => 5,
        Subject::History => 6,
        Subject::Geography => 7,
        Subject::Civics => 8,
    }
}
