//! Text and JSON rendering of view models and workflow outcomes. Results go
//! to stdout; notices about redirects and failures go to stderr.

use crate::{
    cli::globals::OutputFormat,
    flow::{FlowError, Outcome},
    views::{
        cases::{CaseDetailView, CaseRow},
        dashboard::DashboardView,
        suspects::{SuspectDetailView, SuspectRow},
        Section,
    },
};
use anyhow::Result;
use serde::Serialize;
use serde_json::json;
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy)]
pub(super) struct Printer {
    format: OutputFormat,
}

impl Printer {
    pub(super) fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub(super) fn view<T: Serialize>(&self, value: &T, text: fn(&T) -> String) -> Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
            OutputFormat::Text => print!("{}", text(value)),
        }
        Ok(())
    }

    pub(super) fn outcome(&self, outcome: &Outcome) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                let value = match outcome {
                    Outcome::Navigate { to, notice } => {
                        json!({ "outcome": "navigate", "to": to.path(), "notice": notice })
                    }
                    Outcome::Declined => json!({ "outcome": "declined" }),
                };
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
            OutputFormat::Text => match outcome {
                Outcome::Navigate { to, notice } => {
                    if let Some(notice) = notice {
                        println!("{notice}");
                    }
                    println!("-> {to}");
                }
                Outcome::Declined => println!("Cancelled."),
            },
        }
        Ok(())
    }

    pub(super) fn failure(&self, err: &FlowError) {
        match self.format {
            OutputFormat::Json => {
                let value = json!({
                    "error": err.to_string(),
                    "status": err.status(),
                    "redirect": err.redirect_to().map(crate::routes::Route::path),
                });
                eprintln!("{value}");
            }
            OutputFormat::Text => {
                eprintln!("{err}");
                if let Some(to) = err.redirect_to() {
                    eprintln!("-> {to}");
                }
            }
        }
    }
}

fn empty_or<T>(section: &Section<T>, out: &mut String) -> bool {
    if let Some(message) = &section.empty_message {
        let _ = writeln!(out, "  {message}");
        return true;
    }
    false
}

pub(super) fn case_list(section: &Section<CaseRow>) -> String {
    let mut out = String::new();
    if empty_or(section, &mut out) {
        return out;
    }
    for row in &section.items {
        let _ = writeln!(out, "[{}] {}  ({})", row.status, row.title, row.id);
        let _ = writeln!(out, "    {}", row.description);
    }
    out
}

pub(super) fn case_detail(view: &CaseDetailView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}  ({})", view.title, view.id);
    let _ = writeln!(out, "Status: {}", view.status);
    let _ = writeln!(out, "{}", view.description);

    let _ = writeln!(out, "\nSuspects:");
    if !empty_or(&view.suspects, &mut out) {
        for row in &view.suspects.items {
            let _ = writeln!(out, "  {} - {}  ({})", row.name, row.alibi, row.id);
        }
    }

    let _ = writeln!(out, "\nEvidence:");
    if !empty_or(&view.evidence, &mut out) {
        for row in &view.evidence.items {
            let _ = writeln!(out, "  {}  {}  ({})", row.date, row.description, row.id);
        }
    }

    let _ = writeln!(out, "\nWitness statements:");
    if !empty_or(&view.witnesses, &mut out) {
        for row in &view.witnesses.items {
            let _ = writeln!(
                out,
                "  {}  {}: {}  ({})",
                row.date, row.name, row.statement, row.id
            );
        }
    }
    out
}

pub(super) fn suspect_list(section: &Section<SuspectRow>) -> String {
    let mut out = String::new();
    if empty_or(section, &mut out) {
        return out;
    }
    for row in &section.items {
        let _ = writeln!(out, "{}  ({})", row.name, row.id);
        let _ = writeln!(out, "    {}", row.description);
        let _ = writeln!(out, "    Alibi: {}", row.alibi);
    }
    out
}

pub(super) fn suspect_detail(view: &SuspectDetailView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}  ({})", view.name, view.id);
    let _ = writeln!(out, "Description: {}", view.description);
    let _ = writeln!(out, "Alibi: {}", view.alibi);
    let _ = writeln!(out, "Last known location: {}", view.last_known_location);
    out
}

pub(super) fn dashboard(view: &DashboardView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Cases: {}", view.total_cases);
    let _ = writeln!(out, "  Open: {}", view.open);
    let _ = writeln!(out, "  Under Investigation: {}", view.under_investigation);
    let _ = writeln!(out, "  Closed: {}", view.closed);
    let _ = writeln!(out, "Suspects: {}", view.suspects);
    out
}
