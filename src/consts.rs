//! Project-wide constants.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
pub const HOMEPAGE: &str = env!("CARGO_PKG_HOMEPAGE");
pub const REPO: &str = env!("CARGO_PKG_REPOSITORY");

/// Public rates endpoint host. The path and query are appended per request.
pub const DEFAULT_API_URL: &str = "https://rates.staging.api.paytron.com";

/// Country selected as the source when nothing is configured.
pub const DEFAULT_FROM: &str = "AU";

/// Country selected as the destination when nothing is configured.
pub const DEFAULT_TO: &str = "US";

/// Amount shown before the user types anything.
pub const DEFAULT_AMOUNT: &str = "0.00";

/// Placeholder AUD→USD rate displayed until the first fetch lands.
pub const INITIAL_RATE: f64 = 0.7456;

/// Markup applied to the converted amount, in percent.
pub const MARK_UP: f64 = 0.05;

/// Progress gained per elapsed millisecond of animation.
pub const PROGRESS_PER_MS: f64 = 0.0001;

/// Progress value past which the next tick wraps and refreshes.
pub const PROGRESS_WRAP: f64 = 0.997;

/// Pause before each rate request, so the loader is visible.
pub const FETCH_DELAY: Duration = Duration::from_millis(2000);

/// Animation frame interval (~60 fps).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Default database path: `~/.rates/rates.db`.
pub fn default_db_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("cannot determine home directory")?;
    Ok(home.join(".rates").join("rates.db"))
}

/// Format a number with comma separators (e.g. 1,234,567).
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(c);
    }
    result
}
