pub mod logging;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ArgAction, ColorChoice, Command,
};

pub const ARG_API_URL: &str = "api-url";
pub const ARG_TOKEN_FILE: &str = "token-file";
pub const ARG_TIMEOUT: &str = "timeout";
pub const ARG_OUTPUT: &str = "output";
pub const ARG_YES: &str = "yes";

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let command = Command::new("casefile")
        .about("Detective case management client")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(ARG_API_URL)
                .long("api-url")
                .help("Base URL of the casefile API, example: http://localhost:5000/api")
                .env("CASEFILE_API_URL")
                .global(true),
        )
        .arg(
            Arg::new(ARG_TOKEN_FILE)
                .long("token-file")
                .help("Path of the credential storage file")
                .env("CASEFILE_TOKEN_FILE")
                .global(true),
        )
        .arg(
            Arg::new(ARG_TIMEOUT)
                .long("timeout")
                .help("Request timeout in seconds (default: none)")
                .env("CASEFILE_TIMEOUT")
                .global(true)
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new(ARG_OUTPUT)
                .short('o')
                .long("output")
                .help("Output format")
                .env("CASEFILE_OUTPUT")
                .global(true)
                .default_value("text")
                .value_parser(["text", "json"]),
        )
        .arg(
            Arg::new(ARG_YES)
                .short('y')
                .long("yes")
                .help("Answer yes to confirmation prompts")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("login")
                .about("Sign in and store the bearer token")
                .arg(
                    Arg::new("username")
                        .short('u')
                        .long("username")
                        .env("CASEFILE_USERNAME"),
                )
                .arg(
                    Arg::new("password")
                        .short('p')
                        .long("password")
                        .env("CASEFILE_PASSWORD")
                        .hide_env_values(true),
                ),
        )
        .subcommand(
            Command::new("register")
                .about("Create an account; a verification email follows")
                .arg(Arg::new("email").long("email"))
                .arg(Arg::new("username").short('u').long("username"))
                .arg(
                    Arg::new("password")
                        .short('p')
                        .long("password")
                        .env("CASEFILE_PASSWORD")
                        .hide_env_values(true),
                ),
        )
        .subcommand(
            Command::new("verify")
                .about("Verify an email address")
                .arg(
                    Arg::new("link")
                        .help("Verification link, its query string, or the bare token"),
                ),
        )
        .subcommand(Command::new("logout").about("Forget the stored bearer token"))
        .subcommand(Command::new("dashboard").about("Summary of cases and suspects"))
        .subcommand(cases_command())
        .subcommand(suspects_command());

    logging::with_args(command)
}

fn id_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).help(help).required(true)
}

fn cases_command() -> Command {
    Command::new("cases")
        .about("Manage cases, evidence and witness statements")
        .subcommand_required(true)
        .subcommand(Command::new("list").about("List cases"))
        .subcommand(
            Command::new("show")
                .about("Show a case with its suspects, evidence and witnesses")
                .arg(Arg::new("id").help("Case id")),
        )
        .subcommand(
            Command::new("add")
                .about("Open a new case")
                .arg(Arg::new("title").short('t').long("title"))
                .arg(Arg::new("description").short('d').long("description"))
                .arg(
                    Arg::new("status")
                        .short('s')
                        .long("status")
                        .help("Open, Under Investigation or Closed"),
                ),
        )
        .subcommand(
            Command::new("status")
                .about("Change the status of a case")
                .arg(id_arg("id", "Case id"))
                .arg(Arg::new("status").help("Open, Under Investigation or Closed")),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a case and everything recorded on it")
                .arg(id_arg("id", "Case id")),
        )
        .subcommand(
            Command::new("add-evidence")
                .about("Record evidence on a case")
                .arg(id_arg("case-id", "Case id"))
                .arg(Arg::new("description").short('d').long("description")),
        )
        .subcommand(
            Command::new("delete-evidence")
                .about("Remove evidence from a case")
                .arg(id_arg("case-id", "Case id"))
                .arg(id_arg("evidence-id", "Evidence id")),
        )
        .subcommand(
            Command::new("add-witness")
                .about("Record a witness statement on a case")
                .arg(id_arg("case-id", "Case id"))
                .arg(Arg::new("name").short('n').long("name"))
                .arg(Arg::new("statement").short('s').long("statement")),
        )
        .subcommand(
            Command::new("delete-witness")
                .about("Remove a witness statement from a case")
                .arg(id_arg("case-id", "Case id"))
                .arg(id_arg("witness-id", "Witness statement id")),
        )
}

fn suspects_command() -> Command {
    Command::new("suspects")
        .about("Manage the suspect registry")
        .subcommand_required(true)
        .subcommand(Command::new("list").about("List suspects"))
        .subcommand(
            Command::new("show")
                .about("Show a suspect")
                .arg(Arg::new("id").help("Suspect id")),
        )
        .subcommand(
            Command::new("add")
                .about("Register a suspect")
                .arg(Arg::new("name").short('n').long("name"))
                .arg(Arg::new("description").short('d').long("description"))
                .arg(Arg::new("alibi").short('a').long("alibi"))
                .arg(Arg::new("location").short('l').long("location")),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a suspect")
                .arg(id_arg("id", "Suspect id")),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "casefile");
        assert_eq!(
            command.get_about().unwrap().to_string(),
            "Detective case management client"
        );
        assert_eq!(
            command.get_version().unwrap().to_string(),
            env!("CARGO_PKG_VERSION")
        );
    }

    #[test]
    fn test_command_definition_is_consistent() {
        new().debug_assert();
    }

    #[test]
    fn test_global_args_after_subcommand() {
        temp_env::with_vars(
            [
                ("CASEFILE_API_URL", None::<&str>),
                ("CASEFILE_OUTPUT", None::<&str>),
            ],
            || {
                let matches = new().get_matches_from(vec![
                    "casefile",
                    "cases",
                    "list",
                    "--api-url",
                    "https://cases.example/api",
                    "-o",
                    "json",
                ]);

                assert_eq!(
                    matches.get_one::<String>(ARG_API_URL).map(String::as_str),
                    Some("https://cases.example/api")
                );
                assert_eq!(
                    matches.get_one::<String>(ARG_OUTPUT).map(String::as_str),
                    Some("json")
                );
            },
        );
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("CASEFILE_API_URL", Some("https://cases.example/api")),
                ("CASEFILE_TOKEN_FILE", Some("/tmp/casefile.json")),
                ("CASEFILE_TIMEOUT", Some("15")),
                ("CASEFILE_LOG_LEVEL", Some("info")),
            ],
            || {
                let matches = new().get_matches_from(vec!["casefile", "logout"]);
                assert_eq!(
                    matches.get_one::<String>(ARG_API_URL).map(String::as_str),
                    Some("https://cases.example/api")
                );
                assert_eq!(
                    matches.get_one::<String>(ARG_TOKEN_FILE).map(String::as_str),
                    Some("/tmp/casefile.json")
                );
                assert_eq!(matches.get_one::<u64>(ARG_TIMEOUT).copied(), Some(15));
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(2)
                );
            },
        );
    }

    #[test]
    fn test_delete_requires_id() {
        let result = new().try_get_matches_from(vec!["casefile", "cases", "delete"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_output_is_rejected() {
        temp_env::with_vars([("CASEFILE_OUTPUT", None::<&str>)], || {
            let result =
                new().try_get_matches_from(vec!["casefile", "-o", "yaml", "suspects", "list"]);
            assert!(result.is_err());
        });
    }
}
