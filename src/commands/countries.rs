use async_trait::async_trait;

use super::{Command, CommandResult, Session};
use crate::countries::COUNTRIES;

pub struct CountriesCommand;

/// One line per country: `AU  AUD  Australia`, with the current
/// selection marked.
pub fn country_list(from: &str, to: &str) -> String {
    let mut out = String::new();
    for c in COUNTRIES {
        let marker = if c.code == from {
            "  ← from"
        } else if c.code == to {
            "  ← to"
        } else {
            ""
        };
        out.push_str(&format!("  {}  {}  {}{marker}\n", c.code, c.currency, c.name));
    }
    out
}

#[async_trait]
impl Command for CountriesCommand {
    fn name(&self) -> &str {
        "/countries"
    }

    fn aliases(&self) -> &[&str] {
        &["/c"]
    }

    fn description(&self) -> &str {
        "list selectable countries and currencies"
    }

    async fn execute(&self, _args: &str, session: &Session<'_>) -> CommandResult {
        let state = session.refresher.state().read().await;
        print!("{}", country_list(state.from.code, state.to.code));
        CommandResult::Handled
    }
}
