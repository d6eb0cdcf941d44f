pub mod auth;
pub mod cases;
pub mod suspects;

mod output;
// The match over every action lives in `run` so this module only declares
// what the CLI can do.
mod run;

use crate::cli::globals::GlobalArgs;
use crate::routes::Route;
use std::process::ExitCode;

#[derive(Debug)]
pub enum Action {
    Auth(auth::Command),
    Dashboard,
    Cases(cases::Command),
    Suspects(suspects::Command),
}

impl Action {
    /// View this action belongs to; the page guard runs against it.
    #[must_use]
    pub fn route(&self) -> Route {
        match self {
            Self::Auth(command) => command.route(),
            Self::Dashboard => Route::Dashboard,
            Self::Cases(command) => command.route(),
            Self::Suspects(command) => command.route(),
        }
    }

    /// Execute the action. Workflow failures are printed and reported as a
    /// failing exit code.
    /// # Errors
    /// Returns an error if the API client cannot be built or output cannot
    /// be written.
    pub async fn execute(self, globals: &GlobalArgs) -> anyhow::Result<ExitCode> {
        run::execute(self, globals).await
    }
}
