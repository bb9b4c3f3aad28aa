//! Startup banner and session summary display.

use crate::consts::{AUTHOR, HOMEPAGE, REPO, format_number};
use crate::state::RefreshStats;

/// Session configuration for display in the startup banner.
pub struct BannerInfo<'a> {
    pub api_url: &'a str,
    pub pair: &'a str,
    pub config: &'a str,
}

/// Print the startup banner with session info.
pub fn print_banner(info: &BannerInfo) {
    println!(
        r#"
   ╔═══════════════════════════════════════╗
   ║               R A T E S               ║
   ║  currency conversion, refreshed live  ║
   ╚═══════════════════════════════════════╝

   version   {}
   by        {}
   home      {}
   repo      {}
   api       {}
   pair      {}
   config    {}

   type /help for commands, a number to convert
"#,
        env!("CARGO_PKG_VERSION"),
        AUTHOR,
        HOMEPAGE,
        REPO,
        info.api_url,
        info.pair,
        info.config,
    );
}

/// Print the session summary (refresh counts + farewell).
pub fn print_session_summary(stats: RefreshStats) {
    if stats.total() > 0 {
        println!(
            "session: {} refresh(es), {} ok, {} failed",
            format_number(stats.total()),
            format_number(stats.succeeded),
            format_number(stats.failed),
        );
    }
    println!("goodbye.");
}
