use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{Quote, RateProvider};
use crate::state::CurrencyPair;

/// A scripted provider for tests. Returns pre-defined results in order.
///
/// `Ok(rate)` yields a retail quote, `Err(message)` fails with that message.
pub struct MockProvider {
    results: Vec<Result<f64, String>>,
    index: AtomicUsize,
    requests: Mutex<Vec<CurrencyPair>>,
}

impl MockProvider {
    pub fn new(results: Vec<Result<f64, String>>) -> Self {
        Self {
            results,
            index: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Pairs requested so far, in call order.
    pub fn requests(&self) -> Vec<CurrencyPair> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl RateProvider for MockProvider {
    async fn fetch_rate(&self, pair: &CurrencyPair) -> Result<Quote> {
        self.requests.lock().unwrap().push(*pair);
        let i = self.index.fetch_add(1, Ordering::SeqCst);
        match self.results.get(i) {
            Some(Ok(rate)) => Ok(Quote::retail(*rate)),
            Some(Err(message)) => Err(anyhow!("{message}")),
            None => Err(anyhow!(
                "MockProvider: no more results (called {} times)",
                i + 1
            )),
        }
    }
}
