//! Key-value configuration storage backed by SQLite.
//!
//! Remembers the last selection (source, destination, amount) between
//! sessions. [`Preferences`] is the typed view over the raw keys, and
//! [`initial_state`] layers command-line flags over it.

use anyhow::{Context, Result, bail};
use rusqlite::Connection;
use std::sync::Mutex;
use tracing::warn;

use crate::amount::{AmountField, is_valid_input};
use crate::consts::{DEFAULT_FROM, DEFAULT_TO};
use crate::countries::{self, Country};
use crate::state::ConversionState;

const KEY_FROM: &str = "from";
const KEY_TO: &str = "to";
const KEY_AMOUNT: &str = "amount";

/// Persistent key-value configuration store.
pub struct Config {
    conn: Mutex<Connection>,
}

impl Config {
    /// Open or create the config table in the given database.
    /// Use `":memory:"` for tests.
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path).context("failed to open config database")?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS config (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
        )
        .context("failed to create config table")?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Get a config value by key.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare("SELECT value FROM config WHERE key = ?1")?;
        let mut rows = stmt.query([key])?;
        match rows.next()? {
            Some(row) => Ok(Some(row.get(0)?)),
            None => Ok(None),
        }
    }

    /// Set a config value (upsert).
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO config (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            [key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute("DELETE FROM config WHERE key = ?1", [key])?;
        Ok(())
    }

    pub fn preferences(&self) -> Result<Preferences> {
        Ok(Preferences {
            from: self.get(KEY_FROM)?,
            to: self.get(KEY_TO)?,
            amount: self.get(KEY_AMOUNT)?,
        })
    }

    /// Drop the remembered selection so the next session starts from defaults.
    pub fn forget_preferences(&self) -> Result<()> {
        for key in [KEY_FROM, KEY_TO, KEY_AMOUNT] {
            self.remove(key)?;
        }
        Ok(())
    }

    /// Store every field that is set; unset fields are left untouched.
    pub fn save_preferences(&self, prefs: &Preferences) -> Result<()> {
        for (key, value) in [
            (KEY_FROM, &prefs.from),
            (KEY_TO, &prefs.to),
            (KEY_AMOUNT, &prefs.amount),
        ] {
            if let Some(value) = value {
                self.set(key, value)?;
            }
        }
        Ok(())
    }
}

/// The remembered selection. Country codes for `from`/`to`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Preferences {
    pub from: Option<String>,
    pub to: Option<String>,
    pub amount: Option<String>,
}

/// Starting page state: `flags` first, then `stored`, then the defaults.
///
/// A bad flag is an error. A bad stored country is logged and skipped, and a
/// bad stored amount falls back to the default.
pub fn initial_state(flags: &Preferences, stored: &Preferences) -> Result<ConversionState> {
    let from = resolve_country(flags.from.as_deref(), stored.from.as_deref(), DEFAULT_FROM)?;
    let to = resolve_country(flags.to.as_deref(), stored.to.as_deref(), DEFAULT_TO)?;

    let amount = match (&flags.amount, &stored.amount) {
        (Some(amount), _) if !is_valid_input(amount) => {
            bail!("invalid amount: {amount} (digits, up to two decimals)")
        }
        (Some(amount), _) | (None, Some(amount)) => AmountField::new(amount),
        (None, None) => AmountField::default(),
    };

    Ok(ConversionState::new(from, to, amount))
}

fn resolve_country(
    flag: Option<&str>,
    stored: Option<&str>,
    default: &str,
) -> Result<&'static Country> {
    if let Some(code) = flag {
        return countries::find(code)
            .with_context(|| format!("unknown country or currency: {code}"));
    }
    if let Some(code) = stored {
        match countries::find(code) {
            Some(country) => return Ok(country),
            None => warn!(code, "ignoring unknown stored country"),
        }
    }
    countries::find(default).with_context(|| format!("default country missing: {default}"))
}
