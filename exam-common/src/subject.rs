//! Exam subjects and admission groups
//!
//! Both sets are closed. Their enumeration order is the order used for
//! report keys and leaderboard keys.

use serde::Serialize;

/// One of the nine examined subjects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Subject {
    #[serde(rename = "toan")]
    Math,
    #[serde(rename = "ngu_van")]
    Literature,
    #[serde(rename = "ngoai_ngu")]
    ForeignLanguage,
    #[serde(rename = "vat_li")]
    Physics,
    #[serde(rename = "hoa_hoc")]
    Chemistry,
    #[serde(rename = "sinh_hoc")]
    Biology,
    #[serde(rename = "lich_su")]
    History,
    #[serde(rename = "dia_li")]
    Geography,
    #[serde(rename = "gdcd")]
    Civics,
}

impl Subject {
    /// All subjects in report order
    pub const ALL: [Subject; 9] = [
        Subject::Math,
        Subject::Literature,
        Subject::ForeignLanguage,
        Subject::Physics,
        Subject::Chemistry,
        Subject::Biology,
        Subject::History,
        Subject::Geography,
        Subject::Civics,
    ];

    /// Subjects that take part in group scoring
    pub const CORE: [Subject; 6] = [
        Subject::Math,
        Subject::Literature,
        Subject::ForeignLanguage,
        Subject::Physics,
        Subject::Chemistry,
        Subject::Biology,
    ];

    /// CSV column name, also used as the JSON key
    pub fn code(self) -> &'static str {
        match self {
            Subject::Math => "toan",
            Subject::Literature => "ngu_van",
            Subject::ForeignLanguage => "ngoai_ngu",
            Subject::Physics => "vat_li",
            Subject::Chemistry => "hoa_hoc",
            Subject::Biology => "sinh_hoc",
            Subject::History => "lich_su",
            Subject::Geography => "dia_li",
            Subject::Civics => "gdcd",
        }
    }

    /// Short label used in the lookup text block
    pub fn label(self) -> &'static str {
        match self {
            Subject::Math => "Toán",
            Subject::Literature => "Ngữ văn",
            Subject::ForeignLanguage => "Ngoại ngữ",
            Subject::Physics => "Lý",
            Subject::Chemistry => "Hóa",
            Subject::Biology => "Sinh",
            Subject::History => "Sử",
            Subject::Geography => "Địa",
            Subject::Civics => "GDCD",
        }
    }

    pub fn from_code(code: &str) -> Option<Subject> {
        Subject::ALL.into_iter().find(|s| s.code() == code)
    }

    pub fn is_core(self) -> bool {
        Subject::CORE.contains(&self)
    }
}

/// University admission group: a fixed combination of three subjects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AdmissionGroup {
    A,
    A1,
    B,
    D,
}

impl AdmissionGroup {
    /// All groups in leaderboard order
    pub const ALL: [AdmissionGroup; 4] = [
        AdmissionGroup::A,
        AdmissionGroup::A1,
        AdmissionGroup::B,
        AdmissionGroup::D,
    ];

    pub fn code(self) -> &'static str {
        match self {
            AdmissionGroup::A => "A",
            AdmissionGroup::A1 => "A1",
            AdmissionGroup::B => "B",
            AdmissionGroup::D => "D",
        }
    }

    /// Parse a group code. Unknown codes yield `None`.
    pub fn from_code(code: &str) -> Option<AdmissionGroup> {
        AdmissionGroup::ALL.into_iter().find(|g| g.code() == code)
    }

    /// The three subjects summed for this group
    pub fn subjects(self) -> [Subject; 3] {
        match self {
            AdmissionGroup::A => [Subject::Math, Subject::Physics, Subject::Chemistry],
            AdmissionGroup::A1 => [Subject::Math, Subject::Physics, Subject::ForeignLanguage],
            AdmissionGroup::B => [Subject::Math, Subject::Chemistry, Subject::Biology],
            AdmissionGroup::D => [Subject::Math, Subject::Literature, Subject::ForeignLanguage],
        }
    }
}
