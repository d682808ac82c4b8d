use crate::cli::{actions::Action, globals::GlobalArgs};
use anyhow::{anyhow, Result};

/// Handle the login action
pub async fn handle(action: Action, globals: &GlobalArgs) -> Result<()> {
    let Action::Login { email, password } = action else {
        return Err(anyhow!("unexpected action"));
    };

    let mut session = super::session(globals)?;
    let profile = session.login(&email, &password).await?;

    println!("Logged in as: {} ({})", profile.display_name(), profile.role);

    Ok(())
}
