//! Built-in REPL commands prefixed with `/`.
//!
//! Commands implement the [`Command`] trait and are registered in a
//! [`CommandRegistry`]. The registry handles dispatch, alias resolution,
//! and dynamic help generation. Anything that isn't a command is left to
//! the caller, which treats it as an amount entry.

mod amount;
mod countries;
mod help;
mod quit;
mod refresh;
mod select;
mod show;
mod swap;

pub use amount::enter_amount;
pub use countries::country_list;

use async_trait::async_trait;
use std::sync::Arc;

use crate::refresh::Refresher;

/// What commands get to work with.
pub struct Session<'a> {
    pub refresher: &'a Arc<Refresher>,
}

/// What the REPL should do after a command runs.
#[derive(Debug, PartialEq)]
pub enum CommandResult {
    /// Not a command — treat input as an amount.
    NotACommand,
    /// Command handled, continue the REPL loop.
    Handled,
    /// Exit the REPL.
    Quit,
}

/// A REPL command. Implement this trait to add new commands.
#[async_trait]
pub trait Command: Send + Sync {
    /// Primary name, e.g. `"/from"`.
    fn name(&self) -> &str;

    /// Alternative names, e.g. `&["/h", "/?"]`.
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// Argument hint shown in help, e.g. `"<code>"`.
    fn usage(&self) -> &str {
        ""
    }

    /// One-line description for `/help`.
    fn description(&self) -> &str;

    /// Run the command with everything after its name as `args`.
    async fn execute(&self, args: &str, session: &Session<'_>) -> CommandResult;
}

/// Holds registered commands.
pub struct CommandRegistry {
    commands: Vec<Arc<dyn Command>>,
}

impl CommandRegistry {
    /// Create a registry with all built-in commands.
    pub fn new() -> Self {
        let commands: Vec<Arc<dyn Command>> = vec![
            Arc::new(help::HelpCommand),
            Arc::new(show::ShowCommand),
            Arc::new(select::FromCommand),
            Arc::new(select::ToCommand),
            Arc::new(swap::SwapCommand),
            Arc::new(amount::AmountCommand),
            Arc::new(refresh::RefreshCommand),
            Arc::new(countries::CountriesCommand),
            Arc::new(quit::QuitCommand),
        ];
        Self { commands }
    }

    pub fn register(&mut self, command: Arc<dyn Command>) {
        self.commands.push(command);
    }

    /// Dispatch input to a matching command, or return `NotACommand`.
    pub async fn dispatch(&self, input: &str, session: &Session<'_>) -> CommandResult {
        let input = input.trim();
        let (cmd, args) = input.split_once(char::is_whitespace).unwrap_or((input, ""));
        let args = args.trim();

        for command in &self.commands {
            if cmd == command.name() || command.aliases().contains(&cmd) {
                // /help is special — it needs the registry to list all commands
                if command.name() == "/help" {
                    print!("{}", self.help_text());
                    return CommandResult::Handled;
                }
                return command.execute(args, session).await;
            }
        }

        if cmd.starts_with('/') {
            println!("unknown command: {cmd}");
            println!("type /help for available commands");
            return CommandResult::Handled;
        }

        CommandResult::NotACommand
    }

    /// Generate help text from all registered commands.
    pub fn help_text(&self) -> String {
        let entries: Vec<(String, &str)> = self
            .commands
            .iter()
            .map(|c| (format_label(c.name(), c.usage(), c.aliases()), c.description()))
            .collect();

        let max_width = entries
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(10);

        let mut out = String::new();
        for (label, desc) in &entries {
            out.push_str(&format!("  {label:<max_width$}  {desc}\n"));
        }
        out.push_str(&format!(
            "  {:<max_width$}  set the amount\n",
            "<number>"
        ));
        out
    }

    /// All registered command names (for testing).
    pub fn names(&self) -> Vec<&str> {
        self.commands.iter().map(|c| c.name()).collect()
    }

    /// All registered names and aliases (for duplicate detection).
    pub fn all_triggers(&self) -> Vec<&str> {
        let mut triggers = Vec::new();
        for cmd in &self.commands {
            triggers.push(cmd.name());
            triggers.extend_from_slice(cmd.aliases());
        }
        triggers
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn format_label(name: &str, usage: &str, aliases: &[&str]) -> String {
    let mut label = name.to_string();
    if !usage.is_empty() {
        label.push(' ');
        label.push_str(usage);
    }
    if !aliases.is_empty() {
        label.push_str(&format!(" ({})", aliases.join(", ")));
    }
    label
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::events::EventBus;
    use crate::provider::mock::MockProvider;
    use crate::refresh::RefreshConfig;
    use crate::state::ConversionState;
    use std::time::Duration;

    /// A refresher over a scripted provider with no fetch delay.
    pub(crate) fn test_refresher(results: Vec<Result<f64, String>>) -> Arc<Refresher> {
        Arc::new(Refresher::new(
            ConversionState::default(),
            Arc::new(MockProvider::new(results)),
            Arc::new(EventBus::default()),
            RefreshConfig {
                fetch_delay: Duration::ZERO,
                ..RefreshConfig::default()
            },
        ))
    }

    #[test]
    fn all_builtins_registered() {
        let reg = CommandRegistry::new();
        let names = reg.names();
        for name in [
            "/help",
            "/show",
            "/from",
            "/to",
            "/swap",
            "/amount",
            "/refresh",
            "/countries",
            "/quit",
        ] {
            assert!(names.contains(&name), "missing {name}");
        }
    }

    #[test]
    fn no_duplicate_triggers() {
        let reg = CommandRegistry::new();
        let triggers = reg.all_triggers();
        let mut seen = Vec::new();
        for t in &triggers {
            assert!(!seen.contains(t), "duplicate trigger: {t}");
            seen.push(t);
        }
    }

    #[test]
    fn help_text_includes_all_commands_and_aliases() {
        let reg = CommandRegistry::new();
        let text = reg.help_text();
        for trigger in reg.all_triggers() {
            assert!(text.contains(trigger), "help missing: {trigger}");
        }
        assert!(text.contains("/from <code>"));
    }

    #[tokio::test]
    async fn unknown_slash_command_is_handled() {
        let reg = CommandRegistry::new();
        let r = test_refresher(vec![]);
        let session = Session { refresher: &r };
        assert_eq!(
            reg.dispatch("/foobar", &session).await,
            CommandResult::Handled
        );
    }

    #[tokio::test]
    async fn non_command_passes_through() {
        let reg = CommandRegistry::new();
        let r = test_refresher(vec![]);
        let session = Session { refresher: &r };
        assert_eq!(
            reg.dispatch("12.50", &session).await,
            CommandResult::NotACommand
        );
    }

    #[tokio::test]
    async fn dispatch_passes_arguments() {
        let reg = CommandRegistry::new();
        let r = test_refresher(vec![]);
        let session = Session { refresher: &r };
        assert_eq!(
            reg.dispatch("  /to   gb ", &session).await,
            CommandResult::Handled
        );
        assert_eq!(r.snapshot().await.to.code, "GB");
    }

    #[tokio::test]
    async fn plugin_command_works() {
        struct PingCommand;

        #[async_trait]
        impl Command for PingCommand {
            fn name(&self) -> &str {
                "/ping"
            }
            fn description(&self) -> &str {
                "pong"
            }
            async fn execute(&self, _args: &str, _session: &Session<'_>) -> CommandResult {
                CommandResult::Quit
            }
        }

        let mut reg = CommandRegistry::new();
        reg.register(Arc::new(PingCommand));
        let r = test_refresher(vec![]);
        let session = Session { refresher: &r };
        assert_eq!(reg.dispatch("/ping", &session).await, CommandResult::Quit);
        assert!(reg.help_text().contains("/ping"));
    }

    #[test]
    fn format_label_variants() {
        assert_eq!(format_label("/swap", "", &[]), "/swap");
        assert_eq!(format_label("/help", "", &["/h", "/?"]), "/help (/h, /?)");
        assert_eq!(format_label("/from", "<code>", &[]), "/from <code>");
    }
}
