use super::{auth, cases, output, output::Printer, suspects, Action};
use crate::{
    api::ApiClient,
    cli::globals::GlobalArgs,
    features::{
        auth::{flows as auth_flows, require_auth},
        cases::flows as case_flows,
        suspects::flows as suspect_flows,
    },
    flow::{Confirm, FlowError, Outcome, SIGNED_OUT_MESSAGE},
    token_store::{FileTokenStore, TokenStore},
    views,
};
use anyhow::{Context, Result};
use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
    sync::Arc,
};
use tracing::debug;

/// Asks on stderr and reads the answer from stdin unless `--yes` was given.
struct PromptConfirm {
    assume_yes: bool,
}

impl Confirm for PromptConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        eprint!("{prompt} [y/N] ");
        let _ = io::stderr().flush();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

/// Runs `action` and prints any workflow failure once, on stderr.
///
/// Workflow failures become a failing exit code; only errors outside the
/// workflows (client setup, writing output) are returned.
pub(super) async fn execute(action: Action, globals: &GlobalArgs) -> Result<ExitCode> {
    let printer = Printer::new(globals.output);
    let confirm = PromptConfirm {
        assume_yes: globals.assume_yes,
    };

    match run(action, globals, &printer, &confirm).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(Failure::Flow(err)) => {
            printer.failure(&err);
            Ok(ExitCode::FAILURE)
        }
        Err(Failure::Output(err)) => Err(err),
    }
}

async fn run(
    action: Action,
    globals: &GlobalArgs,
    printer: &Printer,
    confirm: &PromptConfirm,
) -> Result<(), Failure> {
    let tokens: Arc<dyn TokenStore> = Arc::new(FileTokenStore::new(&globals.config.token_file));
    let api = ApiClient::new(&globals.config, tokens).context("failed to build API client")?;

    let route = action.route();
    debug!("running command for {route}");

    if let Some(to) = require_auth(&route.path(), api.tokens()) {
        return Err(FlowError::redirect(to, SIGNED_OUT_MESSAGE).into());
    }

    match action {
        Action::Auth(command) => run_auth(&api, printer, command).await,
        Action::Dashboard => run_dashboard(&api, printer).await,
        Action::Cases(command) => run_cases(&api, printer, confirm, command).await,
        Action::Suspects(command) => run_suspects(&api, printer, confirm, command).await,
    }
}

/// Workflow errors are printed for the user; output errors are not theirs.
enum Failure {
    Flow(FlowError),
    Output(anyhow::Error),
}

impl From<FlowError> for Failure {
    fn from(err: FlowError) -> Self {
        Self::Flow(err)
    }
}

impl From<anyhow::Error> for Failure {
    fn from(err: anyhow::Error) -> Self {
        Self::Output(err)
    }
}

async fn run_auth(api: &ApiClient, printer: &Printer, command: auth::Command) -> Result<(), Failure> {
    let outcome = match command {
        auth::Command::Login { username, password } => {
            auth_flows::login(api, &username, &password).await?
        }
        auth::Command::Register {
            email,
            username,
            password,
        } => auth_flows::register(api, &email, &username, &password).await?,
        auth::Command::Verify { location } => auth_flows::verify_email(api, &location).await?,
        auth::Command::Logout => auth_flows::logout(api)?,
    };
    printer.outcome(&outcome)?;
    Ok(())
}

async fn run_dashboard(api: &ApiClient, printer: &Printer) -> Result<(), Failure> {
    let cases = case_flows::list_cases(api).await?;
    let suspects = suspect_flows::list_suspects(api).await?;
    printer.view(&views::dashboard::summary(&cases, &suspects), output::dashboard)?;
    Ok(())
}

async fn run_cases(
    api: &ApiClient,
    printer: &Printer,
    confirm: &PromptConfirm,
    command: cases::Command,
) -> Result<(), Failure> {
    let outcome: Outcome = match command {
        cases::Command::List => {
            let cases = case_flows::list_cases(api).await?;
            printer.view(&views::cases::list_view(&cases), output::case_list)?;
            return Ok(());
        }
        cases::Command::Show { id } => {
            let case = case_flows::load_case(api, id.as_deref()).await?;
            printer.view(&views::cases::detail_view(&case), output::case_detail)?;
            return Ok(());
        }
        cases::Command::Add {
            title,
            description,
            status,
        } => case_flows::add_case(api, &title, description.as_deref(), status).await?,
        cases::Command::SetStatus { id, status } => {
            case_flows::update_case_status(api, &id, status).await?
        }
        cases::Command::Delete { id } => case_flows::delete_case(api, &id, confirm).await?,
        cases::Command::AddEvidence {
            case_id,
            description,
        } => case_flows::add_evidence(api, &case_id, &description).await?,
        cases::Command::DeleteEvidence {
            case_id,
            evidence_id,
        } => case_flows::delete_evidence(api, &case_id, &evidence_id, confirm).await?,
        cases::Command::AddWitness {
            case_id,
            name,
            statement,
        } => case_flows::add_witness(api, &case_id, &name, &statement).await?,
        cases::Command::DeleteWitness {
            case_id,
            witness_id,
        } => case_flows::delete_witness(api, &case_id, &witness_id, confirm).await?,
    };
    printer.outcome(&outcome)?;
    Ok(())
}

async fn run_suspects(
    api: &ApiClient,
    printer: &Printer,
    confirm: &PromptConfirm,
    command: suspects::Command,
) -> Result<(), Failure> {
    let outcome = match command {
        suspects::Command::List => {
            let suspects = suspect_flows::list_suspects(api).await?;
            printer.view(&views::suspects::list_view(&suspects), output::suspect_list)?;
            return Ok(());
        }
        suspects::Command::Show { id } => {
            let suspect = suspect_flows::load_suspect(api, id.as_deref()).await?;
            printer.view(&views::suspects::detail_view(&suspect), output::suspect_detail)?;
            return Ok(());
        }
        suspects::Command::Add {
            name,
            description,
            alibi,
            last_known_location,
        } => {
            suspect_flows::add_suspect(
                api,
                &name,
                description.as_deref(),
                alibi.as_deref(),
                last_known_location.as_deref(),
            )
            .await?
        }
        suspects::Command::Delete { id } => suspect_flows::delete_suspect(api, &id, confirm).await?,
    };
    printer.outcome(&outcome)?;
    Ok(())
}
