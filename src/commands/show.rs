use async_trait::async_trait;

use super::{Command, CommandResult, Session};
use crate::page;

pub struct ShowCommand;

#[async_trait]
impl Command for ShowCommand {
    fn name(&self) -> &str {
        "/show"
    }

    fn aliases(&self) -> &[&str] {
        &["/s"]
    }

    fn description(&self) -> &str {
        "render the conversion page"
    }

    async fn execute(&self, _args: &str, session: &Session<'_>) -> CommandResult {
        let state = session.refresher.snapshot().await;
        print!("\n{}", page::render(&state, 0));
        CommandResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::test_refresher;

    #[tokio::test]
    async fn returns_handled() {
        let r = test_refresher(vec![]);
        let session = Session { refresher: &r };
        assert_eq!(ShowCommand.execute("", &session).await, CommandResult::Handled);
    }
}
