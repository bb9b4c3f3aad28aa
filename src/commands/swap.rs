use async_trait::async_trait;

use super::{Command, CommandResult, Session};

pub struct SwapCommand;

#[async_trait]
impl Command for SwapCommand {
    fn name(&self) -> &str {
        "/swap"
    }

    fn description(&self) -> &str {
        "swap source and destination"
    }

    async fn execute(&self, _args: &str, session: &Session<'_>) -> CommandResult {
        let mut state = session.refresher.state().write().await;
        state.swap();
        println!("  ✓ now converting {}", state.pair());
        CommandResult::Handled
    }
}
