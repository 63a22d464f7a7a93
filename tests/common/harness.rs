//! tests/common/harness.rs
use pseudo_connection::{Config, ConnectionState, PseudoConnection};
use std::sync::{Arc, Mutex, Once};
use tracing_subscriber::fmt::format::FmtSpan;

/// Initializes tracing for tests, ensuring it's only done once.
pub fn init_tracing() {
    static TRACING_INIT: Once = Once::new();
    TRACING_INIT.call_once(|| {
        let filter = std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "pseudo_connection=debug".to_string());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_span_events(FmtSpan::FULL)
            .with_test_writer()
            .init();
    });
}

/// A connection whose observer records every notification it receives.
pub struct RecordingHarness {
    pub connection: PseudoConnection,
    recorded: Arc<Mutex<Vec<ConnectionState>>>,
}

impl RecordingHarness {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        init_tracing();
        let recorded = Arc::new(Mutex::new(Vec::new()));
        let sink = recorded.clone();
        let connection = PseudoConnection::with_config(config, move |state: ConnectionState| {
            sink.lock().unwrap().push(state);
        })
        .unwrap();

        Self {
            connection,
            recorded,
        }
    }

    /// Every notification so far, in order.
    pub fn seen(&self) -> Vec<ConnectionState> {
        self.recorded.lock().unwrap().clone()
    }
}
