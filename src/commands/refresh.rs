use async_trait::async_trait;

use super::{Command, CommandResult, Session};

pub struct RefreshCommand;

#[async_trait]
impl Command for RefreshCommand {
    fn name(&self) -> &str {
        "/refresh"
    }

    fn aliases(&self) -> &[&str] {
        &["/r"]
    }

    fn description(&self) -> &str {
        "fetch the rate now instead of waiting for the next cycle"
    }

    async fn execute(&self, _args: &str, session: &Session<'_>) -> CommandResult {
        if session.refresher.state().read().await.loading {
            println!("  a refresh is already in flight");
            return CommandResult::Handled;
        }
        session.refresher.state().write().await.progress.reset();
        session.refresher.spawn_refresh();
        CommandResult::Handled
    }
}
