//! Case payloads. Identifiers are opaque server strings serialized as `_id`.

use crate::features::suspects::types::Suspect;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseStatus {
    Open,
    #[serde(rename = "Under Investigation")]
    UnderInvestigation,
    Closed,
    /// Any status this client does not know about.
    #[default]
    #[serde(other)]
    Unknown,
}

impl CaseStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::UnderInvestigation => "Under Investigation",
            Self::Closed => "Closed",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for CaseStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "open" => Ok(Self::Open),
            "under investigation" => Ok(Self::UnderInvestigation),
            "closed" => Ok(Self::Closed),
            _ => Err(format!(
                "invalid case status '{value}', expected Open, Under Investigation or Closed"
            )),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WitnessStatement {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub statement: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

/// A suspect linked to a case: populated on detail responses, a bare id on
/// listings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SuspectLink {
    Record(Suspect),
    Id(String),
}

impl SuspectLink {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Record(suspect) => &suspect.id,
            Self::Id(id) => id,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Case {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: CaseStatus,
    #[serde(default)]
    pub evidence: Vec<Evidence>,
    #[serde(default, rename = "witnessStatements")]
    pub witness_statements: Vec<WitnessStatement>,
    #[serde(default)]
    pub suspects: Vec<SuspectLink>,
}

#[derive(Clone, Debug, Serialize)]
pub struct NewCase {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CaseStatus>,
}

#[derive(Clone, Debug, Serialize)]
pub struct CaseStatusUpdate {
    pub status: CaseStatus,
}

#[derive(Clone, Debug, Serialize)]
pub struct NewEvidence {
    pub description: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct NewWitnessStatement {
    pub name: String,
    pub statement: String,
}
