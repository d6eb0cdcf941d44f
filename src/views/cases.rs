use super::{format_date, or_fallback, Section};
use crate::{
    features::cases::types::{Case, CaseStatus, Evidence, SuspectLink, WitnessStatement},
    routes::Route,
};
use serde::Serialize;

/// Badge color for a case status; unknown statuses are neutral gray.
#[must_use]
pub fn status_color(status: CaseStatus) -> &'static str {
    match status {
        CaseStatus::Open => "#dc2626",
        CaseStatus::UnderInvestigation => "#f59e0b",
        CaseStatus::Closed => "#10b981",
        CaseStatus::Unknown => "#6b7280",
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CaseRow {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: String,
    pub status_color: &'static str,
    pub link: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SuspectLinkRow {
    pub id: String,
    pub name: String,
    pub alibi: String,
    pub link: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EvidenceRow {
    pub id: String,
    pub description: String,
    pub date: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WitnessRow {
    pub id: String,
    pub name: String,
    pub statement: String,
    pub date: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CaseDetailView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: String,
    pub status_color: &'static str,
    pub suspects: Section<SuspectLinkRow>,
    pub evidence: Section<EvidenceRow>,
    pub witnesses: Section<WitnessRow>,
}

/// Maps the cases listing, keeping server order.
#[must_use]
pub fn list_view(cases: &[Case]) -> Section<CaseRow> {
    let rows = cases.iter().map(case_row).collect();
    Section::new(rows, "No cases found. Open a new case to get started.")
}

#[must_use]
pub fn detail_view(case: &Case) -> CaseDetailView {
    CaseDetailView {
        id: case.id.clone(),
        title: case.title.clone(),
        description: or_fallback(case.description.as_deref(), "No description"),
        status: case.status.to_string(),
        status_color: status_color(case.status),
        suspects: Section::new(
            case.suspects.iter().map(suspect_link_row).collect(),
            "No suspects linked to this case.",
        ),
        evidence: Section::new(
            case.evidence.iter().map(evidence_row).collect(),
            "No evidence recorded.",
        ),
        witnesses: Section::new(
            case.witness_statements.iter().map(witness_row).collect(),
            "No witness statements recorded.",
        ),
    }
}

fn case_row(case: &Case) -> CaseRow {
    CaseRow {
        id: case.id.clone(),
        title: case.title.clone(),
        description: or_fallback(case.description.as_deref(), "No description"),
        status: case.status.to_string(),
        status_color: status_color(case.status),
        link: Route::Case {
            id: case.id.clone(),
        }
        .path(),
    }
}

fn suspect_link_row(link: &SuspectLink) -> SuspectLinkRow {
    let (name, alibi) = match link {
        SuspectLink::Record(suspect) => (
            or_fallback(Some(suspect.name.as_str()), link.id()),
            or_fallback(suspect.alibi.as_deref(), "No alibi"),
        ),
        SuspectLink::Id(id) => (id.clone(), "No alibi".to_string()),
    };

    SuspectLinkRow {
        id: link.id().to_string(),
        name,
        alibi,
        link: Route::Suspect {
            id: link.id().to_string(),
        }
        .path(),
    }
}

fn evidence_row(evidence: &Evidence) -> EvidenceRow {
    EvidenceRow {
        id: evidence.id.clone(),
        description: evidence.description.clone(),
        date: format_date(evidence.date.as_ref()),
    }
}

fn witness_row(witness: &WitnessStatement) -> WitnessRow {
    WitnessRow {
        id: witness.id.clone(),
        name: witness.name.clone(),
        statement: witness.statement.clone(),
        date: format_date(witness.date.as_ref()),
    }
}
