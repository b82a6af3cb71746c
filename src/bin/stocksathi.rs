use anyhow::Result;
use stocksathi::cli::{actions, actions::Action, start};

// Main function
#[tokio::main]
async fn main() -> Result<()> {
    // Start the program
    let (globals, action) = start()?;

    // Handle the action
    match action {
        Action::CalcSip(_)
        | Action::CalcSwp(_)
        | Action::CalcMargin(_)
        | Action::CalcBrokerage(_) => actions::calc::handle(action)?,
        Action::FixUserIndexes { .. } => actions::maintenance::handle(action).await?,
        _ => actions::auth::handle(action, &globals).await?,
    }

    Ok(())
}
