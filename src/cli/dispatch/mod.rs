use crate::cli::{actions::Action, globals::GlobalArgs};
use anyhow::{Context, Result};
use secrecy::SecretString;
use std::path::PathBuf;

fn default_token_file() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".accedi")
        .join("token")
}

fn password(matches: &clap::ArgMatches) -> Result<SecretString> {
    matches
        .get_one::<String>("password")
        .map(|s| SecretString::from(s.to_string()))
        .context("missing required argument: --password")
}

fn email(matches: &clap::ArgMatches) -> Result<String> {
    matches
        .get_one::<String>("email")
        .map(String::to_string)
        .context("missing required argument: email")
}

pub fn handler(matches: &clap::ArgMatches) -> Result<(Action, GlobalArgs)> {
    // Closure to return subcommand matches
    let sub_m = |subcommand| -> Result<&clap::ArgMatches> {
        matches
            .subcommand_matches(subcommand)
            .context("arguments not found")
    };

    let globals = GlobalArgs::new(
        matches
            .get_one("url")
            .map(|s: &String| s.to_string())
            .ok_or_else(|| anyhow::anyhow!("missing required argument: --url"))?,
        matches
            .get_one("token-file")
            .map(|s: &String| PathBuf::from(s))
            .unwrap_or_else(default_token_file),
    );

    let action = match matches.subcommand_name() {
        Some("login") => {
            let matches = sub_m("login")?;
            Action::Login {
                email: email(matches)?,
                password: password(matches)?,
            }
        }
        Some("register") => {
            let matches = sub_m("register")?;
            Action::Register {
                email: email(matches)?,
                password: password(matches)?,
                full_name: matches.get_one::<String>("full-name").map(String::to_string),
            }
        }
        Some("logout") => Action::Logout,
        Some("whoami") => Action::Whoami,
        _ => return Err(anyhow::anyhow!("unknown subcommand")),
    };

    Ok((action, globals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;
    use secrecy::ExposeSecret;

    #[test]
    fn test_handler_login() {
        let matches = commands::new().get_matches_from(vec![
            "accedi",
            "--url",
            "http://localhost:8080",
            "--token-file",
            "/tmp/accedi-token",
            "login",
            "user@example.com",
            "--password",
            "pw123",
        ]);

        let (action, globals) = handler(&matches).unwrap();
        assert_eq!(globals.url, "http://localhost:8080");
        assert_eq!(globals.token_file, PathBuf::from("/tmp/accedi-token"));

        match action {
            Action::Login { email, password } => {
                assert_eq!(email, "user@example.com");
                assert_eq!(password.expose_secret(), "pw123");
            }
            _ => panic!("expected login action"),
        }
    }

    #[test]
    fn test_handler_register_without_full_name() {
        let matches = commands::new().get_matches_from(vec![
            "accedi",
            "--url",
            "http://localhost:8080",
            "register",
            "new@example.com",
            "--password",
            "pw456",
        ]);

        let (action, _globals) = handler(&matches).unwrap();

        match action {
            Action::Register { full_name, .. } => assert_eq!(full_name, None),
            _ => panic!("expected register action"),
        }
    }

    #[test]
    fn test_handler_requires_url() {
        let matches = temp_env::with_vars_unset(["ACCEDI_URL", "ACCEDI_TOKEN_FILE"], || {
            commands::new().get_matches_from(vec!["accedi", "logout"])
        });
        assert!(handler(&matches).is_err());
    }

    #[test]
    fn test_default_token_file_under_home() {
        let path = temp_env::with_var("HOME", Some("/home/ada"), default_token_file);
        assert_eq!(path, PathBuf::from("/home/ada/.accedi/token"));
    }
}
