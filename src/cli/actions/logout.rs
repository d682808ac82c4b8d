use crate::cli::{actions::Action, globals::GlobalArgs};
use anyhow::{anyhow, Result};

/// Handle the logout action
pub async fn handle(action: Action, globals: &GlobalArgs) -> Result<()> {
    let Action::Logout = action else {
        return Err(anyhow!("unexpected action"));
    };

    let mut session = super::session(globals)?;
    session.logout();

    println!("Logged out");

    Ok(())
}
