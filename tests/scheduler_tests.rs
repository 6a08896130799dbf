use std::sync::Arc;
use std::time::Duration;
use tzglance::config::{MemoryStore, SettingsService, UpdateFrequency};
use tzglance::core::clock::FixedClock;
use tzglance::core::logic::Core;
use tzglance::core::scheduler::Ticker;
use tzglance::errors::AppError;

mod common;
use common::{defaults, instant};

const WAIT: Duration = Duration::from_secs(5);

fn service() -> Arc<SettingsService> {
    Arc::new(SettingsService::new(MemoryStore::default()))
}

fn fixed() -> Arc<FixedClock> {
    Arc::new(FixedClock(instant("2025-10-18T10:00:00Z")))
}

#[test]
fn test_builder_requires_settings() {
    let result = Ticker::builder().clock(fixed()).build();
    assert!(matches!(result, Err(AppError::MissingSettings)));
}

#[test]
fn test_builder_rejects_zero_interval() {
    let result = Ticker::builder()
        .settings(service())
        .interval(Duration::ZERO)
        .build();
    assert!(matches!(result, Err(AppError::Scheduler(_))));
}

#[test]
fn test_first_snapshot_is_published_immediately() {
    let mut ticker = Ticker::builder()
        .settings(service())
        .clock(fixed())
        .build()
        .unwrap();
    let rx = ticker.subscribe();
    ticker.start().unwrap();

    // Standard frequency ticks once a minute; the first one must not wait.
    let snap = rx.recv_timeout(WAIT).expect("initial snapshot");
    let expected = Core::build_snapshot(instant("2025-10-18T10:00:00Z"), &defaults());
    assert_eq!(*snap, expected);
    assert_eq!(*snap, ticker.snapshot_now());
}

#[test]
fn test_every_subscriber_receives_each_tick() {
    let mut ticker = Ticker::builder()
        .settings(service())
        .clock(fixed())
        .interval(Duration::from_millis(20))
        .build()
        .unwrap();
    let a = ticker.subscribe();
    let b = ticker.subscribe();
    ticker.start().unwrap();

    for _ in 0..3 {
        let from_a = a.recv_timeout(WAIT).expect("tick on a");
        let from_b = b.recv_timeout(WAIT).expect("tick on b");
        assert_eq!(from_a.instant, from_b.instant);
    }
}

#[test]
fn test_ticks_see_latest_settings() {
    let settings = service();
    let mut ticker = Ticker::builder()
        .settings(Arc::clone(&settings))
        .clock(fixed())
        .interval(Duration::from_millis(20))
        .build()
        .unwrap();
    let rx = ticker.subscribe();
    ticker.start().unwrap();

    let first = rx.recv_timeout(WAIT).unwrap();
    assert_eq!(first.ireland.formatted_time, "11:00");

    settings.update(|s| s.use_24_hour = false).unwrap();

    let updated = (0..50)
        .filter_map(|_| rx.recv_timeout(WAIT).ok())
        .find(|s| s.ireland.formatted_time == "11:00 AM");
    assert!(updated.is_some(), "no snapshot reflected the new setting");
}

#[test]
fn test_frequency_change_rearms_timer() {
    let settings = service();
    let mut ticker = Ticker::builder()
        .settings(Arc::clone(&settings))
        .clock(fixed())
        .build()
        .unwrap();
    let rx = ticker.subscribe();
    ticker.start().unwrap();
    rx.recv_timeout(WAIT).expect("initial snapshot");

    // Standard would not tick again for a minute.
    settings
        .update(|s| s.update_frequency = UpdateFrequency::Smooth)
        .unwrap();

    let next = rx.recv_timeout(Duration::from_millis(2500));
    assert!(next.is_ok(), "smooth tick did not arrive after the switch");
}

#[test]
fn test_start_twice_fails() {
    let mut ticker = Ticker::builder().settings(service()).build().unwrap();
    ticker.start().unwrap();
    assert!(ticker.is_running());
    assert!(matches!(ticker.start(), Err(AppError::Scheduler(_))));

    ticker.stop();
    assert!(!ticker.is_running());
}

#[test]
fn test_dropping_ticker_ends_subscriptions() {
    let mut ticker = Ticker::builder()
        .settings(service())
        .clock(fixed())
        .interval(Duration::from_millis(10))
        .build()
        .unwrap();
    let rx = ticker.subscribe();
    ticker.start().unwrap();
    rx.recv_timeout(WAIT).unwrap();

    drop(ticker);

    // Buffered snapshots drain, then the channel reports disconnection.
    let drained = rx.iter().count();
    assert!(drained < 1000);
    assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());
}
