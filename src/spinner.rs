//! The "fetching" loader: one line shared by the page and `--once`.

use std::future::Future;
use std::io::Write;
use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior};

use crate::state::CurrencyPair;

const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const INTERVAL: Duration = Duration::from_millis(80);

/// The spinner glyph for animation step `i` (wraps around).
pub fn frame(i: usize) -> &'static str {
    FRAMES[i % FRAMES.len()]
}

/// `⠋ fetching AUD→USD`
pub fn loader_line(i: usize, pair: CurrencyPair) -> String {
    format!("{} fetching {pair}", frame(i))
}

/// Drive `work` to completion while animating the loader line on stderr.
///
/// The line carries the time spent so far and is cleared once `work`
/// finishes. Returns the output together with the total time taken.
pub async fn spin_while<F: Future>(pair: CurrencyPair, work: F) -> (F::Output, Duration) {
    let started = Instant::now();
    let mut ticks = tokio::time::interval(INTERVAL);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
    tokio::pin!(work);

    let mut i = 0;
    let output = loop {
        tokio::select! {
            output = &mut work => break output,
            _ = ticks.tick() => {
                let elapsed = started.elapsed().as_secs_f64();
                eprint!("\x1b[2K\r{} {elapsed:.1}s", loader_line(i, pair));
                let _ = std::io::stderr().flush();
                i += 1;
            }
        }
    };
    eprint!("\x1b[2K\r");
    let _ = std::io::stderr().flush();

    (output, started.elapsed())
}
