use crate::cli::{
    actions::Action,
    commands::{self, logging},
    dispatch::handler,
    globals::GlobalArgs,
    telemetry,
};
use anyhow::Result;

/// Start the CLI
///
/// # Errors
/// Returns an error if logging cannot be initialized or the arguments do not
/// describe a command.
pub fn start() -> Result<(Action, GlobalArgs)> {
    let matches = commands::new().get_matches();

    let verbosity = matches
        .get_one::<u8>(logging::ARG_VERBOSITY)
        .copied()
        .unwrap_or(0);
    telemetry::init(
        Some(telemetry::level_from_verbosity(verbosity)),
        matches.get_flag(logging::ARG_LOG_JSON),
    )?;

    let globals = GlobalArgs::from_matches(&matches);
    let action = handler(&matches)?;

    Ok((action, globals))
}
