//! Public retail-rate endpoint.
//!
//! `GET {base}/rate/public?sellCurrency=AUD&buyCurrency=USD` answers with a
//! JSON quote. Failures carry a `detail` field, either a plain string or a
//! list of validation errors.

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::{Quote, RateProvider};
use crate::consts::DEFAULT_API_URL;
use crate::state::CurrencyPair;

const RATE_PATH: &str = "/rate/public";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RateResponse {
    retail_rate: f64,
    #[serde(default)]
    wholesale_rate: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    detail: Option<Detail>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Detail {
    Message(String),
    Validation(Vec<ValidationError>),
}

#[derive(Debug, Deserialize)]
struct ValidationError {
    msg: String,
}

/// Fetches retail rates from the public rates API.
pub struct PaytronProvider {
    client: Client,
    base_url: String,
}

impl PaytronProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Full request URL for a pair.
    pub fn rate_url(&self, pair: &CurrencyPair) -> Result<Url> {
        let base = self.base_url.trim_end_matches('/');
        Url::parse_with_params(
            &format!("{base}{RATE_PATH}"),
            [("sellCurrency", pair.sell), ("buyCurrency", pair.buy)],
        )
        .with_context(|| format!("invalid rates API url: {}", self.base_url))
    }
}

impl Default for PaytronProvider {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[async_trait]
impl RateProvider for PaytronProvider {
    async fn fetch_rate(&self, pair: &CurrencyPair) -> Result<Quote> {
        let url = self.rate_url(pair)?;
        debug!(%url, "requesting rate");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        parse_response(status, &body)
    }
}

/// Turn a status + body into a quote, or an error carrying the message
/// the user should see.
pub fn parse_response(status: StatusCode, body: &str) -> Result<Quote> {
    if !status.is_success() {
        let detail = serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(|e| e.detail)
            .and_then(detail_message);
        match detail {
            Some(message) => bail!("{message}"),
            None => bail!("Error fetching data {}", status.as_u16()),
        }
    }

    let rate: RateResponse =
        serde_json::from_str(body).context("failed to parse rate response")?;
    Ok(Quote {
        retail_rate: rate.retail_rate,
        wholesale_rate: rate.wholesale_rate,
    })
}

fn detail_message(detail: Detail) -> Option<String> {
    let message = match detail {
        Detail::Message(message) => message,
        Detail::Validation(errors) => errors
            .into_iter()
            .map(|e| e.msg)
            .collect::<Vec<_>>()
            .join("; "),
    };
    if message.is_empty() {
        None
    } else {
        Some(message)
    }
}
