//! The polling loop. Wires together page state, a RateProvider, and the
//! event bus.
//!
//! Each animation frame advances a [`Progress`](progress::Progress)
//! counter; when it wraps a refresh is spawned. A `loading` flag in the
//! state de-duplicates refreshes and pauses the animation while a request
//! is in flight.

pub mod progress;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{RwLock, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::debug;

use crate::consts::{FETCH_DELAY, FRAME_INTERVAL};
use crate::events::{Event, EventBus};
use crate::provider::RateProvider;
use crate::state::ConversionState;

pub struct RefreshConfig {
    /// Pause between raising the loading flag and sending the request.
    pub fetch_delay: Duration,
    pub frame: Duration,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            fetch_delay: FETCH_DELAY,
            frame: FRAME_INTERVAL,
        }
    }
}

pub struct Refresher {
    state: RwLock<ConversionState>,
    provider: Arc<dyn RateProvider>,
    events: Arc<EventBus>,
    config: RefreshConfig,
}

impl Refresher {
    pub fn new(
        state: ConversionState,
        provider: Arc<dyn RateProvider>,
        events: Arc<EventBus>,
        config: RefreshConfig,
    ) -> Self {
        Self {
            state: RwLock::new(state),
            provider,
            events,
            config,
        }
    }

    /// Shared page state. Views read it, commands edit the selection.
    pub fn state(&self) -> &RwLock<ConversionState> {
        &self.state
    }

    /// A copy of the current state, for rendering.
    pub async fn snapshot(&self) -> ConversionState {
        self.state.read().await.clone()
    }

    /// Advance one animation frame.
    ///
    /// Paused while loading. When the progress wraps, a refresh is spawned
    /// and its handle returned.
    pub async fn tick(self: &Arc<Self>, delta: Duration) -> Option<JoinHandle<bool>> {
        let wrapped = {
            let mut state = self.state.write().await;
            if state.loading {
                return None;
            }
            state.progress.advance(delta)
        };
        wrapped.then(|| self.spawn_refresh())
    }

    /// Run [`refresh`](Self::refresh) in the background.
    pub fn spawn_refresh(self: &Arc<Self>) -> JoinHandle<bool> {
        let this = Arc::clone(self);
        tokio::spawn(async move { this.refresh().await })
    }

    /// Fetch the rate for the current selection and store the outcome.
    ///
    /// Returns `false` without doing anything if a refresh is already in
    /// flight. The loading flag is cleared whether the fetch succeeds or not.
    pub async fn refresh(&self) -> bool {
        let pair = {
            let mut state = self.state.write().await;
            if state.loading {
                debug!("refresh already in flight, skipping");
                return false;
            }
            state.loading = true;
            state.pair()
        };
        self.events.emit(Event::FetchStarted { pair });
        debug!(%pair, "refresh started");

        tokio::time::sleep(self.config.fetch_delay).await;
        let result = self.provider.fetch_rate(&pair).await;

        let mut state = self.state.write().await;
        match result {
            Ok(quote) => {
                state.error = None;
                state.stats.succeeded += 1;
                if state.pair() == pair {
                    state.exchange_rate = quote.retail_rate;
                    self.events.emit(Event::RateUpdated {
                        pair,
                        rate: quote.retail_rate,
                    });
                    debug!(%pair, rate = quote.retail_rate, "rate updated");
                } else {
                    debug!(%pair, current = %state.pair(), "selection changed mid-flight, dropping rate");
                }
            }
            Err(e) => {
                let message = e.to_string();
                // Surfaced through `error` and FetchFailed.
                debug!(%pair, error = %message, "rate fetch failed");
                state.error = Some(message.clone());
                state.stats.failed += 1;
                self.events.emit(Event::FetchFailed { pair, message });
            }
        }
        state.loading = false;
        true
    }

    /// Drive [`tick`](Self::tick) once per frame until `shutdown` flips.
    pub async fn run(self: Arc<Self>, mut shutdown: watch::Receiver<bool>) {
        let mut interval = tokio::time::interval(self.config.frame);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut last = Instant::now();

        loop {
            tokio::select! {
                _ = interval.tick() => {}
                _ = shutdown.changed() => break,
            }
            let now = Instant::now();
            let delta = now - last;
            last = now;
            // Detached: the loading flag keeps later ticks from piling up.
            let _ = self.tick(delta).await;
        }
    }
}
