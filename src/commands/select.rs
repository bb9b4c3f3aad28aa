//! `/from` and `/to`: pick the source or destination country.

use async_trait::async_trait;

use super::{Command, CommandResult, Session};
use crate::countries;

#[derive(Clone, Copy)]
enum Side {
    From,
    To,
}

async fn select(side: Side, args: &str, session: &Session<'_>) -> CommandResult {
    if args.is_empty() {
        eprintln!("  ✗ expected a country or currency code (see /countries)");
        return CommandResult::Handled;
    }
    let Some(country) = countries::find(args) else {
        eprintln!("  ✗ unknown country or currency: {args}");
        return CommandResult::Handled;
    };

    let mut state = session.refresher.state().write().await;
    match side {
        Side::From => state.from = country,
        Side::To => state.to = country,
    }
    println!(
        "  ✓ {} {} ({}), rate updates on next refresh",
        match side {
            Side::From => "from",
            Side::To => "to",
        },
        country.currency,
        country.name
    );
    CommandResult::Handled
}

pub struct FromCommand;

#[async_trait]
impl Command for FromCommand {
    fn name(&self) -> &str {
        "/from"
    }

    fn usage(&self) -> &str {
        "<code>"
    }

    fn description(&self) -> &str {
        "set the source country or currency"
    }

    async fn execute(&self, args: &str, session: &Session<'_>) -> CommandResult {
        select(Side::From, args, session).await
    }
}

pub struct ToCommand;

#[async_trait]
impl Command for ToCommand {
    fn name(&self) -> &str {
        "/to"
    }

    fn usage(&self) -> &str {
        "<code>"
    }

    fn description(&self) -> &str {
        "set the destination country or currency"
    }

    async fn execute(&self, args: &str, session: &Session<'_>) -> CommandResult {
        select(Side::To, args, session).await
    }
}
