// Core structs: SourceRow, OutputRecord, CanonicalCategory and the error taxonomy
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Credits assigned to every general-education course.
pub const DEFAULT_CREDITS: u32 = 3;

/// The attribute values accepted by the `courses` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CanonicalCategory {
    #[serde(rename = "Engl. Communication")]
    EnglishCommunication,
    #[serde(rename = "Arab. Communication")]
    ArabicCommunication,
    #[serde(rename = "Human Values")]
    HumanValues,
    #[serde(rename = "Cultures & Histories")]
    CulturesHistories,
    #[serde(rename = "Societies & Individuals")]
    SocietiesIndividuals,
    #[serde(rename = "Understanding the World")]
    UnderstandingTheWorld,
    #[serde(rename = "Elective")]
    Elective,
    #[serde(rename = "CEL")]
    CommunityEngagedLearning,
}

impl CanonicalCategory {
    #[cfg(test)]
    pub const ALL: [CanonicalCategory; 8] = [
        CanonicalCategory::EnglishCommunication,
        CanonicalCategory::ArabicCommunication,
        CanonicalCategory::HumanValues,
        CanonicalCategory::CulturesHistories,
        CanonicalCategory::SocietiesIndividuals,
        CanonicalCategory::UnderstandingTheWorld,
        CanonicalCategory::Elective,
        CanonicalCategory::CommunityEngagedLearning,
    ];

    /// Database spelling of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalCategory::EnglishCommunication => "Engl. Communication",
            CanonicalCategory::ArabicCommunication => "Arab. Communication",
            CanonicalCategory::HumanValues => "Human Values",
            CanonicalCategory::CulturesHistories => "Cultures & Histories",
            CanonicalCategory::SocietiesIndividuals => "Societies & Individuals",
            CanonicalCategory::UnderstandingTheWorld => "Understanding the World",
            CanonicalCategory::Elective => "Elective",
            CanonicalCategory::CommunityEngagedLearning => "CEL",
        }
    }
}

impl fmt::Display for CanonicalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of the source CSV. Extra columns are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceRow {
    pub course: String,
    pub title: String,
    pub fall_2023_attribute: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    pub code: String,
    pub name: String,
    pub credits: u32,
    pub attribute: Option<CanonicalCategory>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing Supabase env vars: {0}")]
    Missing(String),
}

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("CSV not found at: {0}")]
    NotFound(String),
    #[error("CSV is missing columns: {0:?}")]
    MissingColumns(Vec<String>),
    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error, PartialEq)]
pub enum NormalizeError {
    #[error("Unknown fall_2023_attribute value (not mappable to bucket): {0:?}")]
    Unmappable(String),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("request timed out")]
    Timeout,
    #[error("Supabase error {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Any condition that terminates a seeding run.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Parser(#[from] ParserError),
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_serializes_to_database_spelling() {
        for category in CanonicalCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }

    #[test]
    fn record_serializes_with_null_attribute() {
        let record = OutputRecord {
            code: "ENGL".into(),
            name: "Composition".into(),
            credits: DEFAULT_CREDITS,
            attribute: None,
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "code": "ENGL",
                "name": "Composition",
                "credits": 3,
                "attribute": null,
            })
        );
    }
}
