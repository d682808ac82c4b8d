use crate::cli::{actions::Action, globals::GlobalArgs};
use anyhow::{anyhow, Result};

/// Handle the register action
pub async fn handle(action: Action, globals: &GlobalArgs) -> Result<()> {
    let Action::Register {
        email,
        password,
        full_name,
    } = action
    else {
        return Err(anyhow!("unexpected action"));
    };

    let mut session = super::session(globals)?;
    let created = session
        .register(&email, &password, full_name.as_deref())
        .await?;

    if session.is_logged_in() {
        println!("Logged in as: {} ({})", created.display_name(), created.role);
    } else {
        // Auto-login did not take; the account itself exists.
        println!("Registration successful! You can now login.");
    }

    Ok(())
}
