use crate::{features::cases::types::CaseStatus, routes::Route};

#[derive(Debug)]
pub enum Command {
    List,
    Show {
        id: Option<String>,
    },
    Add {
        title: String,
        description: Option<String>,
        status: Option<CaseStatus>,
    },
    SetStatus {
        id: String,
        status: Option<CaseStatus>,
    },
    Delete {
        id: String,
    },
    AddEvidence {
        case_id: String,
        description: String,
    },
    DeleteEvidence {
        case_id: String,
        evidence_id: String,
    },
    AddWitness {
        case_id: String,
        name: String,
        statement: String,
    },
    DeleteWitness {
        case_id: String,
        witness_id: String,
    },
}

impl Command {
    #[must_use]
    pub fn route(&self) -> Route {
        match self {
            Self::List => Route::Cases,
            Self::Add { .. } => Route::AddCase,
            Self::Show { id: None } => Route::Cases,
            Self::Show { id: Some(id) }
            | Self::SetStatus { id, .. }
            | Self::Delete { id }
            | Self::AddEvidence { case_id: id, .. }
            | Self::DeleteEvidence { case_id: id, .. }
            | Self::AddWitness { case_id: id, .. }
            | Self::DeleteWitness { case_id: id, .. } => Route::Case { id: id.clone() },
        }
    }
}
