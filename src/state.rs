//! Conversion page state.

use std::fmt;

use crate::amount::AmountField;
use crate::consts::{DEFAULT_FROM, DEFAULT_TO, INITIAL_RATE};
use crate::conversion::{with_markup, without_markup};
use crate::countries::{self, Country};
use crate::refresh::progress::Progress;

/// Sell/buy currency codes for one rate request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyPair {
    pub sell: &'static str,
    pub buy: &'static str,
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}→{}", self.sell, self.buy)
    }
}

/// Refresh outcomes over the session.
#[derive(Debug, Clone, Copy, Default)]
pub struct RefreshStats {
    pub succeeded: u64,
    pub failed: u64,
}

impl RefreshStats {
    pub fn total(&self) -> u64 {
        self.succeeded + self.failed
    }
}

/// Everything the conversion page displays.
#[derive(Debug, Clone)]
pub struct ConversionState {
    pub from: &'static Country,
    pub to: &'static Country,
    pub amount: AmountField,
    pub exchange_rate: f64,
    pub progress: Progress,
    /// A rate request is in flight.
    pub loading: bool,
    /// Message from the last failed refresh, cleared on success.
    pub error: Option<String>,
    pub stats: RefreshStats,
}

impl ConversionState {
    pub fn new(from: &'static Country, to: &'static Country, amount: AmountField) -> Self {
        Self {
            from,
            to,
            amount,
            exchange_rate: INITIAL_RATE,
            progress: Progress::default(),
            loading: false,
            error: None,
            stats: RefreshStats::default(),
        }
    }

    pub fn pair(&self) -> CurrencyPair {
        CurrencyPair {
            sell: self.from.currency,
            buy: self.to.currency,
        }
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
    }

    pub fn converted_with_markup(&self) -> f64 {
        with_markup(self.amount.value_f64(), self.exchange_rate)
    }

    pub fn converted(&self) -> f64 {
        without_markup(self.amount.value_f64(), self.exchange_rate)
    }
}

impl Default for ConversionState {
    fn default() -> Self {
        // Both defaults are in the static table.
        let from = countries::find(DEFAULT_FROM).unwrap_or(&countries::COUNTRIES[0]);
        let to = countries::find(DEFAULT_TO).unwrap_or(&countries::COUNTRIES[1]);
        Self::new(from, to, AmountField::default())
    }
}
