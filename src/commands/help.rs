use async_trait::async_trait;

use super::{Command, CommandResult, Session};

/// Listed in help; output is produced by the registry itself.
pub struct HelpCommand;

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &str {
        "/help"
    }

    fn aliases(&self) -> &[&str] {
        &["/h", "/?"]
    }

    fn description(&self) -> &str {
        "show this help"
    }

    async fn execute(&self, _args: &str, _session: &Session<'_>) -> CommandResult {
        CommandResult::Handled
    }
}
