use accedi::cli::{actions, actions::Action, start};
use anyhow::Result;

// Main function
#[tokio::main]
async fn main() -> Result<()> {
    // Start the program
    let (action, globals) = start()?;

    // Handle the action
    match action {
        Action::Login { .. } => actions::login::handle(action, &globals).await?,
        Action::Register { .. } => actions::register::handle(action, &globals).await?,
        Action::Logout => actions::logout::handle(action, &globals).await?,
        Action::Whoami => actions::whoami::handle(action, &globals).await?,
    }

    Ok(())
}
