use crate::cli::actions::{auth, cases, suspects, Action};
use crate::features::cases::types::CaseStatus;
use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;

/// # Errors
/// Returns an error if no subcommand was given or a value cannot be parsed.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    match matches.subcommand() {
        Some(("login", sub_m)) => Ok(Action::Auth(auth::Command::Login {
            username: text(sub_m, "username"),
            password: text(sub_m, "password"),
        })),
        Some(("register", sub_m)) => Ok(Action::Auth(auth::Command::Register {
            email: text(sub_m, "email"),
            username: text(sub_m, "username"),
            password: text(sub_m, "password"),
        })),
        Some(("verify", sub_m)) => Ok(Action::Auth(auth::Command::Verify {
            location: verification_location(&text(sub_m, "link")),
        })),
        Some(("logout", _)) => Ok(Action::Auth(auth::Command::Logout)),
        Some(("dashboard", _)) => Ok(Action::Dashboard),
        Some(("cases", sub_m)) => cases_handler(sub_m).map(Action::Cases),
        Some(("suspects", sub_m)) => suspects_handler(sub_m).map(Action::Suspects),
        _ => Err(anyhow!("missing command, see --help")),
    }
}

fn cases_handler(matches: &ArgMatches) -> Result<cases::Command> {
    let command = match matches.subcommand() {
        Some(("list", _)) => cases::Command::List,
        Some(("show", sub_m)) => cases::Command::Show {
            id: optional(sub_m, "id"),
        },
        Some(("add", sub_m)) => cases::Command::Add {
            title: text(sub_m, "title"),
            description: optional(sub_m, "description"),
            status: status(sub_m)?,
        },
        Some(("status", sub_m)) => cases::Command::SetStatus {
            id: required(sub_m, "id")?,
            status: status(sub_m)?,
        },
        Some(("delete", sub_m)) => cases::Command::Delete {
            id: required(sub_m, "id")?,
        },
        Some(("add-evidence", sub_m)) => cases::Command::AddEvidence {
            case_id: required(sub_m, "case-id")?,
            description: text(sub_m, "description"),
        },
        Some(("delete-evidence", sub_m)) => cases::Command::DeleteEvidence {
            case_id: required(sub_m, "case-id")?,
            evidence_id: required(sub_m, "evidence-id")?,
        },
        Some(("add-witness", sub_m)) => cases::Command::AddWitness {
            case_id: required(sub_m, "case-id")?,
            name: text(sub_m, "name"),
            statement: text(sub_m, "statement"),
        },
        Some(("delete-witness", sub_m)) => cases::Command::DeleteWitness {
            case_id: required(sub_m, "case-id")?,
            witness_id: required(sub_m, "witness-id")?,
        },
        _ => return Err(anyhow!("missing cases command, see `casefile cases --help`")),
    };

    Ok(command)
}

fn suspects_handler(matches: &ArgMatches) -> Result<suspects::Command> {
    let command = match matches.subcommand() {
        Some(("list", _)) => suspects::Command::List,
        Some(("show", sub_m)) => suspects::Command::Show {
            id: optional(sub_m, "id"),
        },
        Some(("add", sub_m)) => suspects::Command::Add {
            name: text(sub_m, "name"),
            description: optional(sub_m, "description"),
            alibi: optional(sub_m, "alibi"),
            last_known_location: optional(sub_m, "location"),
        },
        Some(("delete", sub_m)) => suspects::Command::Delete {
            id: required(sub_m, "id")?,
        },
        _ => {
            return Err(anyhow!(
                "missing suspects command, see `casefile suspects --help`"
            ))
        }
    };

    Ok(command)
}

/// Free-text argument; missing values become empty so the workflows can
/// report them like a blank form field.
fn text(matches: &ArgMatches, id: &str) -> String {
    matches.get_one::<String>(id).cloned().unwrap_or_default()
}

fn optional(matches: &ArgMatches, id: &str) -> Option<String> {
    matches.get_one::<String>(id).cloned()
}

fn required(matches: &ArgMatches, id: &str) -> Result<String> {
    matches
        .get_one::<String>(id)
        .cloned()
        .with_context(|| format!("missing required argument: <{id}>"))
}

fn status(matches: &ArgMatches) -> Result<Option<CaseStatus>> {
    matches
        .get_one::<String>("status")
        .map(|value| value.parse::<CaseStatus>().map_err(|err| anyhow!(err)))
        .transpose()
}

/// Accepts a full link, a query string or a bare token.
fn verification_location(input: &str) -> String {
    let input = input.trim();
    if input.is_empty() || input.contains("token=") {
        input.to_string()
    } else {
        let query: String = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("token", input)
            .finish();
        format!("?{query}")
    }
}
