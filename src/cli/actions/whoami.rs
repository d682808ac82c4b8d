use crate::cli::{actions::Action, globals::GlobalArgs};
use anyhow::{anyhow, Result};

/// Handle the whoami action
pub async fn handle(action: Action, globals: &GlobalArgs) -> Result<()> {
    let Action::Whoami = action else {
        return Err(anyhow!("unexpected action"));
    };

    let mut session = super::session(globals)?;

    match session.resume().await? {
        Some(profile) => {
            println!("Logged in as: {} ({})", profile.display_name(), profile.role);
        }
        None => println!("Not logged in"),
    }

    Ok(())
}
