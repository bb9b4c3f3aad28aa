use std::sync::Arc;
use std::time::Duration;

use rates::consts::INITIAL_RATE;
use rates::countries;
use rates::events::{Event, EventBus};
use rates::provider::mock::MockProvider;
use rates::refresh::progress::Progress;
use rates::refresh::{RefreshConfig, Refresher};
use rates::state::{ConversionState, CurrencyPair};

const FRAME: Duration = Duration::from_millis(16);

fn build(
    results: Vec<Result<f64, String>>,
    fetch_delay: Duration,
) -> (Arc<Refresher>, Arc<MockProvider>, Arc<EventBus>) {
    let provider = Arc::new(MockProvider::new(results));
    let events = Arc::new(EventBus::default());
    let refresher = Refresher::new(
        ConversionState::default(),
        provider.clone(),
        Arc::clone(&events),
        RefreshConfig {
            fetch_delay,
            ..RefreshConfig::default()
        },
    );
    (Arc::new(refresher), provider, events)
}

#[tokio::test]
async fn wrap_triggers_one_fetch() {
    let (r, provider, _) = build(vec![Ok(0.6612)], Duration::ZERO);
    r.state().write().await.progress = Progress::new(0.998);

    let handle = r.tick(FRAME).await.expect("wrap should spawn a refresh");
    assert!(handle.await.unwrap());

    let state = r.snapshot().await;
    assert_eq!(state.exchange_rate, 0.6612);
    assert_eq!(state.progress.value(), 0.0);
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(
        provider.requests(),
        vec![CurrencyPair {
            sell: "AUD",
            buy: "USD"
        }]
    );
}

#[tokio::test]
async fn ticks_complete_a_cycle_in_about_ten_seconds() {
    let (r, provider, _) = build(vec![Ok(1.1)], Duration::ZERO);

    let mut frames = 0;
    let handle = loop {
        frames += 1;
        if let Some(handle) = r.tick(FRAME).await {
            break handle;
        }
        assert!(frames < 1_000, "never wrapped");
    };
    handle.await.unwrap();

    // 625 frames of 16ms
    assert!((600..650).contains(&frames), "wrapped after {frames} frames");
    assert_eq!(provider.requests().len(), 1);
}

#[tokio::test]
async fn concurrent_refreshes_are_deduplicated() {
    let (r, provider, _) = build(vec![Ok(1.0), Ok(2.0)], Duration::from_millis(50));

    let (first, second) = tokio::join!(r.refresh(), r.refresh());
    assert!(first);
    assert!(!second);
    assert_eq!(provider.requests().len(), 1);
    assert_eq!(r.snapshot().await.exchange_rate, 1.0);
}

#[tokio::test]
async fn ticks_are_paused_while_loading() {
    let (r, _provider, _) = build(vec![Ok(1.0)], Duration::from_millis(50));

    let handle = r.spawn_refresh();
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(r.snapshot().await.loading);

    for _ in 0..5 {
        assert!(r.tick(FRAME).await.is_none());
    }
    assert_eq!(r.snapshot().await.progress.value(), 0.0);

    handle.await.unwrap();
    assert!(!r.snapshot().await.loading);
    assert!(r.tick(FRAME).await.is_none());
    assert!(r.snapshot().await.progress.value() > 0.0);
}

#[tokio::test]
async fn failure_keeps_rate_and_shows_error() {
    let (r, _provider, _) = build(
        vec![Err("Error fetching data 500".to_string()), Ok(0.7)],
        Duration::ZERO,
    );

    assert!(r.refresh().await);
    let state = r.snapshot().await;
    assert_eq!(state.error.as_deref(), Some("Error fetching data 500"));
    assert_eq!(state.exchange_rate, INITIAL_RATE);
    assert!(!state.loading);
    assert_eq!(state.stats.failed, 1);

    assert!(r.refresh().await);
    let state = r.snapshot().await;
    assert!(state.error.is_none());
    assert_eq!(state.exchange_rate, 0.7);
    assert_eq!(state.stats.succeeded, 1);
}

#[tokio::test]
async fn selection_change_mid_flight_drops_stale_rate() {
    let (r, provider, _) = build(vec![Ok(150.0)], Duration::from_millis(50));

    let handle = r.spawn_refresh();
    tokio::time::sleep(Duration::from_millis(10)).await;
    r.state().write().await.to = countries::find("GB").unwrap();
    assert!(handle.await.unwrap());

    let state = r.snapshot().await;
    assert_eq!(state.exchange_rate, INITIAL_RATE);
    assert!(!state.loading);
    assert_eq!(provider.requests()[0].buy, "USD");
}

#[tokio::test]
async fn refresh_fetches_current_selection() {
    let (r, provider, _) = build(vec![Ok(0.5)], Duration::ZERO);
    r.state().write().await.swap();

    r.refresh().await;
    assert_eq!(
        provider.requests(),
        vec![CurrencyPair {
            sell: "USD",
            buy: "AUD"
        }]
    );
}

#[tokio::test]
async fn refresh_emits_lifecycle_events() {
    let (r, _provider, events) = build(vec![Ok(0.9), Err("nope".to_string())], Duration::ZERO);
    let mut rx = events.subscribe();

    r.refresh().await;
    r.refresh().await;

    assert!(matches!(rx.recv().await.unwrap(), Event::FetchStarted { .. }));
    match rx.recv().await.unwrap() {
        Event::RateUpdated { rate, .. } => assert_eq!(rate, 0.9),
        other => panic!("unexpected event: {other:?}"),
    }
    assert!(matches!(rx.recv().await.unwrap(), Event::FetchStarted { .. }));
    match rx.recv().await.unwrap() {
        Event::FetchFailed { message, .. } => assert_eq!(message, "nope"),
        other => panic!("unexpected event: {other:?}"),
    }
}

#[tokio::test]
async fn exhausted_provider_surfaces_as_error() {
    let (r, _provider, _) = build(vec![], Duration::ZERO);
    r.refresh().await;
    let error = r.snapshot().await.error.unwrap();
    assert!(error.contains("no more results"));
}
