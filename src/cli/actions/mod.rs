pub mod login;
pub mod logout;
pub mod register;
pub mod whoami;

use crate::cli::globals::GlobalArgs;
use crate::session::{AuthClient, SessionManager};
use crate::store::FileStore;
use anyhow::Result;
use secrecy::SecretString;

/// Build a session manager over the configured service and token file.
fn session(globals: &GlobalArgs) -> Result<SessionManager<FileStore>> {
    let client = AuthClient::new(&globals.url, &globals.user_agent)?;
    let store = FileStore::new(globals.token_file.clone());

    Ok(SessionManager::new(client, store)?)
}

#[derive(Debug)]
pub enum Action {
    Login {
        email: String,
        password: SecretString,
    },
    Register {
        email: String,
        password: SecretString,
        full_name: Option<String>,
    },
    Logout,
    Whoami,
}
