use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use rates::banner::{BannerInfo, print_banner, print_session_summary};
use rates::commands::{CommandRegistry, CommandResult, Session, country_list, enter_amount};
use rates::config::{Config, Preferences, initial_state};
use rates::consts::{DEFAULT_API_URL, DEFAULT_FROM, DEFAULT_TO, default_db_path};
use rates::conversion::format_converted;
use rates::events::{Event, EventBus};
use rates::page;
use rates::provider::paytron::PaytronProvider;
use rates::refresh::{RefreshConfig, Refresher};
use rates::spinner::spin_while;

const PROMPT: &str = "rates> ";

/// Redraw interval for `--watch`.
const WATCH_REDRAW: Duration = Duration::from_millis(100);

#[derive(Parser)]
#[command(
    name = "rates",
    version,
    about = "Live currency conversion, with and without markup."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Source country or currency code (e.g. AU, AUD)
    #[arg(short, long)]
    from: Option<String>,

    /// Destination country or currency code (e.g. US, USD)
    #[arg(short, long)]
    to: Option<String>,

    /// Amount to convert (digits, up to two decimals)
    #[arg(short, long)]
    amount: Option<String>,

    /// Rates API base URL
    #[arg(long, env = "RATES_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// SQLite database for remembered selections (use :memory: for ephemeral)
    #[arg(short, long)]
    db: Option<String>,

    /// Pause before each rate request, in milliseconds
    #[arg(long, default_value_t = 2000)]
    fetch_delay_ms: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// Forget the remembered selection before starting
    #[arg(long)]
    forget: bool,

    /// Fetch one rate, print the conversion, and exit
    #[arg(long, conflicts_with = "watch")]
    once: bool,

    /// Redraw the conversion page in place until Ctrl+C
    #[arg(short, long)]
    watch: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List selectable countries and their currencies
    Countries,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log_level))
        .with_writer(io::stderr)
        .init();

    if let Some(Command::Countries) = &cli.command {
        print!("{}", country_list(DEFAULT_FROM, DEFAULT_TO));
        return Ok(());
    }

    let db_path = match &cli.db {
        Some(path) => path.clone(),
        None => {
            let path = default_db_path()?;
            if let Some(dir) = path.parent() {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("failed to create {}", dir.display()))?;
            }
            path.to_string_lossy().into_owned()
        }
    };
    let config = Config::open(&db_path)?;
    if cli.forget {
        config.forget_preferences()?;
    }
    let stored = config.preferences()?;

    let flags = Preferences {
        from: cli.from.clone(),
        to: cli.to.clone(),
        amount: cli.amount.clone(),
    };
    let state = initial_state(&flags, &stored)?;
    let events = Arc::new(EventBus::default());
    let refresher = Arc::new(Refresher::new(
        state,
        Arc::new(PaytronProvider::new(cli.api_url.clone())),
        Arc::clone(&events),
        RefreshConfig {
            fetch_delay: Duration::from_millis(cli.fetch_delay_ms),
            ..RefreshConfig::default()
        },
    ));

    if cli.once {
        return run_once(&refresher).await;
    }

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let animation = tokio::spawn(Arc::clone(&refresher).run(shutdown_rx));
    refresher.spawn_refresh();

    if cli.watch {
        run_watch(&refresher).await;
    } else {
        let pair = refresher.snapshot().await.pair().to_string();
        let config_label = if db_path == ":memory:" {
            "ephemeral"
        } else {
            db_path.as_str()
        };
        print_banner(&BannerInfo {
            api_url: &cli.api_url,
            pair: &pair,
            config: config_label,
        });
        run_repl(&refresher, &events).await?;
    }

    let _ = shutdown_tx.send(true);
    let _ = animation.await;

    let state = refresher.snapshot().await;
    config.save_preferences(&Preferences {
        from: Some(state.from.code.to_string()),
        to: Some(state.to.code.to_string()),
        amount: Some(state.amount.as_str().to_string()),
    })?;
    print_session_summary(state.stats);
    Ok(())
}

async fn run_once(refresher: &Arc<Refresher>) -> anyhow::Result<()> {
    let pair = refresher.snapshot().await.pair();
    let (_, elapsed) = spin_while(pair, refresher.refresh()).await;
    debug!(%pair, ?elapsed, "one-shot refresh done");

    let state = refresher.snapshot().await;
    if let Some(error) = &state.error {
        bail!("{error}");
    }
    println!("rate      {}", state.exchange_rate);
    println!(
        "amount    {} {}",
        state.amount.as_str(),
        state.from.currency
    );
    println!(
        "markup    {} {}",
        format_converted(state.converted_with_markup()),
        state.to.currency
    );
    println!(
        "no markup {} {}",
        format_converted(state.converted()),
        state.to.currency
    );
    Ok(())
}

async fn run_watch(refresher: &Arc<Refresher>) {
    let mut interval = tokio::time::interval(WATCH_REDRAW);
    let mut frame = 0usize;
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    loop {
        tokio::select! {
            _ = interval.tick() => {}
            _ = &mut ctrl_c => break,
        }
        let state = refresher.snapshot().await;
        // Home the cursor and clear the screen before each redraw
        print!("\x1b[H\x1b[2J{}", page::render(&state, frame));
        let _ = io::stdout().flush();
        frame += 1;
    }
    println!();
}

async fn run_repl(refresher: &Arc<Refresher>, events: &EventBus) -> anyhow::Result<()> {
    let notices = tokio::spawn(print_notices(events.subscribe()));
    let registry = CommandRegistry::new();
    let session = Session { refresher };

    // Async stdin so Ctrl+C is caught at the prompt too
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("\n{PROMPT}");
        io::stdout().flush()?;

        let line = tokio::select! {
            result = lines.next_line() => {
                match result {
                    Ok(Some(line)) => line,
                    Ok(None) => {
                        // Ctrl+D (EOF)
                        println!();
                        break;
                    }
                    Err(e) => {
                        eprintln!("input error: {}", e);
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        };

        let input = line.trim();
        if input.is_empty() {
            let state = refresher.snapshot().await;
            print!("\n{}", page::render(&state, 0));
            continue;
        }

        match registry.dispatch(input, &session).await {
            CommandResult::Quit => break,
            CommandResult::Handled => {}
            CommandResult::NotACommand => {
                enter_amount(input, &session).await;
            }
        }
    }

    notices.abort();
    Ok(())
}

/// Print one line per refresh outcome, then restore the prompt.
async fn print_notices(mut rx: tokio::sync::broadcast::Receiver<Event>) {
    use tokio::sync::broadcast::error::RecvError;

    loop {
        let line = match rx.recv().await {
            Ok(Event::RateUpdated { pair, rate }) => format!("↻ {pair} {rate}"),
            Ok(Event::FetchFailed { pair, message }) => format!("✗ {pair}: {message}"),
            Ok(Event::FetchStarted { .. }) | Err(RecvError::Lagged(_)) => continue,
            Err(RecvError::Closed) => break,
        };
        // Clear the pending prompt line, print, then redraw the prompt
        print!("\x1b[2K\r  {line}\n{PROMPT}");
        let _ = io::stdout().flush();
    }
}
