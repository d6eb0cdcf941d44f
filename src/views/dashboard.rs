use crate::features::{
    cases::types::{Case, CaseStatus},
    suspects::types::Suspect,
};
use serde::Serialize;

/// Case counts shown on the landing view after sign-in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub total_cases: usize,
    pub open: usize,
    pub under_investigation: usize,
    pub closed: usize,
    pub suspects: usize,
}

#[must_use]
pub fn summary(cases: &[Case], suspects: &[Suspect]) -> DashboardView {
    let count = |status: CaseStatus| cases.iter().filter(|case| case.status == status).count();

    DashboardView {
        total_cases: cases.len(),
        open: count(CaseStatus::Open),
        under_investigation: count(CaseStatus::UnderInvestigation),
        closed: count(CaseStatus::Closed),
        suspects: suspects.len(),
    }
}
