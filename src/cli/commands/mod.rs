use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ColorChoice, Command,
};

pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            // Successfully parsed as a number
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

fn password_arg() -> Arg {
    Arg::new("password")
        .short('p')
        .long("password")
        .help("Account password")
        .env("ACCEDI_PASSWORD")
        .hide_env_values(true)
        .required(true)
}

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("accedi")
        .about("Bearer-token session client for the activities API")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("url")
                .short('u')
                .long("url")
                .help("Authentication Service base URL, example: https://api.school.tld")
                .env("ACCEDI_URL")
                .global(true),
        )
        .arg(
            Arg::new("token-file")
                .short('t')
                .long("token-file")
                .help("Path of the persisted session token (default: $HOME/.accedi/token)")
                .env("ACCEDI_TOKEN_FILE")
                .global(true),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("ACCEDI_LOG_LEVEL")
                .global(true)
                .action(clap::ArgAction::Count)
                .value_parser(validator_log_level()),
        )
        .subcommand(
            Command::new("login")
                .about("Exchange credentials for a session token")
                .arg(Arg::new("email").help("Account email").required(true))
                .arg(password_arg()),
        )
        .subcommand(
            Command::new("register")
                .about("Create an account and log in with it")
                .arg(Arg::new("email").help("Account email").required(true))
                .arg(password_arg())
                .arg(
                    Arg::new("full-name")
                        .short('n')
                        .long("full-name")
                        .help("Full name shown on the account"),
                ),
        )
        .subcommand(Command::new("logout").about("Clear the session and the persisted token"))
        .subcommand(
            Command::new("whoami").about("Validate the persisted token and show the profile"),
        )
}
