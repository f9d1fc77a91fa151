//! Candidate lookup by registration number
//!
//! Lookup is the only user-visible miss in the service. A hit renders a
//! plain-text block with the always-shown subjects plus a track section
//! when the candidate sat natural or social science electives.

use std::fmt::Write;

use crate::loader::ExamRecord;
use crate::subject::Subject;

/// Message returned when no record matches
pub const NOT_FOUND_MESSAGE: &str = "❌ Không tìm thấy thí sinh.";

const ALWAYS_SHOWN: [Subject; 3] = [Subject::Math, Subject::Literature, Subject::ForeignLanguage];

/// Elective track of a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    Natural,
    Social,
}

impl Track {
    pub fn subjects(self) -> [Subject; 3] {
        match self {
            Track::Natural => [Subject::Physics, Subject::Chemistry, Subject::Biology],
            Track::Social => [Subject::History, Subject::Geography, Subject::Civics],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Track::Natural => "Tự nhiên",
            Track::Social => "Xã hội",
        }
    }

    /// Detect the track from which elective cells are filled in
    ///
    /// A cell counts when its raw text is non-empty, so a recorded "0"
    /// still selects the track. Natural sciences take precedence.
    pub fn detect(record: &ExamRecord) -> Option<Track> {
        let filled = |subject: Subject| record.raw(subject).is_some_and(|v| !v.is_empty());

        [Track::Natural, Track::Social]
            .into_iter()
            .find(|track| track.subjects().into_iter().any(filled))
    }
}

/// Result of a lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    NotFound,
    Found(String),
}

/// First record whose identifier matches exactly
pub fn find_record<'a>(records: &'a [ExamRecord], sbd: &str) -> Option<&'a ExamRecord> {
    records.iter().find(|r| r.sbd == sbd)
}

/// Render the text block for a record
///
/// Values are shown exactly as stored; absent values render empty.
pub fn render_record(record: &ExamRecord) -> String {
    let mut out = format!("🎓 SBD: {}", record.sbd);
    push_subjects(&mut out, record, &ALWAYS_SHOWN);

    if let Some(track) = Track::detect(record) {
        let _ = write!(out, "\n📚 Khối: {}", track.label());
        push_subjects(&mut out, record, &track.subjects());
    }

    out
}

fn push_subjects(out: &mut String, record: &ExamRecord, subjects: &[Subject]) {
    for subject in subjects {
        let _ = write!(out, "\n{}: {}", subject.label(), record.raw(*subject).unwrap_or(""));
    }
}

/// Find a record and render it
pub fn lookup(records: &[ExamRecord], sbd: &str) -> LookupOutcome {
    match find_record(records, sbd) {
        Some(record) => LookupOutcome::Found(render_record(record)),
        None => LookupOutcome::NotFound,
    }
}
