//! Top-N ranking per admission group
//!
//! Candidates without a total for a group are left out of that group's
//! list. Ordering is by descending unrounded total; ties keep dataset order.

use std::cmp::Ordering;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::score::Candidate;
use crate::subject::{AdmissionGroup, Subject};

/// Leaderboard length per group
pub const TOP_N: usize = 10;

/// One leaderboard row
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct GroupEntry {
    pub sbd: String,
    /// Group total with exactly two decimals
    pub total: String,
    pub subjects: CoreScores,
}

/// The six core subject scores of a candidate, `null` when absent
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CoreScores {
    pub toan: Option<f64>,
    pub ngu_van: Option<f64>,
    pub ngoai_ngu: Option<f64>,
    pub vat_li: Option<f64>,
    pub hoa_hoc: Option<f64>,
    pub sinh_hoc: Option<f64>,
}

impl CoreScores {
    pub fn of(candidate: &Candidate) -> Self {
        Self {
            toan: candidate.score(Subject::Math),
            ngu_van: candidate.score(Subject::Literature),
            ngoai_ngu: candidate.score(Subject::ForeignLanguage),
            vat_li: candidate.score(Subject::Physics),
            hoa_hoc: candidate.score(Subject::Chemistry),
            sinh_hoc: candidate.score(Subject::Biology),
        }
    }
}

/// Leaderboards for every admission group, in group enumeration order
///
/// Serializes as a JSON object keyed by group code.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupRanking {
    groups: Vec<(AdmissionGroup, Vec<GroupEntry>)>,
}

impl GroupRanking {
    pub fn get(&self, group: AdmissionGroup) -> &[GroupEntry] {
        self.groups
            .iter()
            .find(|(g, _)| *g == group)
            .map(|(_, entries)| entries.as_slice())
            .unwrap_or_default()
    }
}

impl Serialize for GroupRanking {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (group, entries) in &self.groups {
            map.serialize_entry(group.code(), entries)?;
        }
        map.end()
    }
}

/// Format a group total for display
pub fn format_total(total: f64) -> String {
    format!("{:.2}", total)
}

/// Rank eligible candidates of one group, keeping at most `limit`
pub fn rank_group(candidates: &[Candidate], group: AdmissionGroup, limit: usize) -> Vec<GroupEntry> {
    let mut eligible: Vec<(&Candidate, f64)> = candidates
        .iter()
        .filter_map(|c| c.score_for_group(group).map(|total| (c, total)))
        .collect();

    // sort_by is stable: equal totals keep dataset order
    eligible.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    eligible
        .into_iter()
        .take(limit)
        .map(|(candidate, total)| GroupEntry {
            sbd: candidate.sbd().to_string(),
            total: format_total(total),
            subjects: CoreScores::of(candidate),
        })
        .collect()
}

/// Top [`TOP_N`] candidates for each admission group
pub fn top_by_group(candidates: &[Candidate]) -> GroupRanking {
    let groups = AdmissionGroup::ALL
        .into_iter()
        .map(|group| (group, rank_group(candidates, group, TOP_N)))
        .collect();

    GroupRanking { groups }
}
