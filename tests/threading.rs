//! The machine used from threads outside the runtime, with real time.

pub mod common;

use common::harness::RecordingHarness;
use pseudo_connection::{Config, ConnectionState::*};
use std::{sync::Arc, thread};
use tokio::time::{Duration, sleep};

fn short_delay() -> Config {
    Config::default().with_connect_delay(Duration::from_millis(50))
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_operations_from_non_runtime_thread() {
    let harness = Arc::new(RecordingHarness::with_config(short_delay()));

    let ui = harness.clone();
    thread::spawn(move || ui.connection.toggle())
        .join()
        .unwrap();

    sleep(Duration::from_millis(300)).await;
    assert_eq!(harness.connection.state(), Connected);

    let ui = harness.clone();
    thread::spawn(move || ui.connection.toggle())
        .join()
        .unwrap();

    assert_eq!(harness.seen(), vec![Connecting, Connected, Disconnected]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_disconnect_racing_timer_never_connects_late() {
    let harness = RecordingHarness::with_config(
        Config::default().with_connect_delay(Duration::from_millis(5)),
    );

    for _ in 0..50 {
        harness.connection.connect();
        sleep(Duration::from_millis(5)).await;
        harness.connection.disconnect();
    }

    sleep(Duration::from_millis(100)).await;
    assert_eq!(harness.connection.state(), Disconnected);

    // Every cycle ends with a disconnect and no Connected ever follows one.
    let seen = harness.seen();
    assert_eq!(seen.last(), Some(&Disconnected));
    for pair in seen.windows(2) {
        assert_ne!(pair, [Disconnected, Connected]);
    }
}
