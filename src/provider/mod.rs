pub mod mock;
pub mod paytron;

use anyhow::Result;
use async_trait::async_trait;

use crate::state::CurrencyPair;

/// A rate quote for one currency pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    /// Rate offered to retail customers; this is what gets displayed.
    pub retail_rate: f64,
    pub wholesale_rate: Option<f64>,
}

impl Quote {
    pub fn retail(rate: f64) -> Self {
        Self {
            retail_rate: rate,
            wholesale_rate: None,
        }
    }
}

/// Where exchange rates come from. Could be a REST API or a test script.
#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn fetch_rate(&self, pair: &CurrencyPair) -> Result<Quote>;
}
