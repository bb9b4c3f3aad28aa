use async_trait::async_trait;

use super::{Command, CommandResult, Session};
use crate::components::Input;
use crate::conversion::format_converted;

/// Type `input` into the amount field and leave it.
///
/// Rejected input keeps the previous amount and stays flagged on the page
/// until the next valid entry. Returns whether it was taken.
pub async fn enter_amount(input: &str, session: &Session<'_>) -> bool {
    let mut state = session.refresher.state().write().await;
    if !state.amount.input(input) {
        let field =
            Input::new("Amount", state.amount.as_str()).rejected(state.amount.rejected());
        eprintln!("  {} (digits, up to two decimals)", field.render(0));
        return false;
    }
    state.amount.commit();
    println!(
        "  {} {} = {} {} ({} without markup)",
        state.amount.as_str(),
        state.from.currency,
        format_converted(state.converted_with_markup()),
        state.to.currency,
        format_converted(state.converted()),
    );
    true
}

pub struct AmountCommand;

#[async_trait]
impl Command for AmountCommand {
    fn name(&self) -> &str {
        "/amount"
    }

    fn aliases(&self) -> &[&str] {
        &["/a"]
    }

    fn usage(&self) -> &str {
        "<number>"
    }

    fn description(&self) -> &str {
        "set the amount to convert"
    }

    async fn execute(&self, args: &str, session: &Session<'_>) -> CommandResult {
        enter_amount(args, session).await;
        CommandResult::Handled
    }
}
