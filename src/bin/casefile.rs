use anyhow::Result;
use casefile::cli::start;
use std::process::ExitCode;

// Main function
#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Parse arguments and set up logging
    let (action, globals) = start()?;

    // Run the command; failures were already printed
    action.execute(&globals).await
}
