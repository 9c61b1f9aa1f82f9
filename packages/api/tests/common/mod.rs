// ABOUTME: Shared helpers for the API integration tests
// ABOUTME: Builds clients against a wiremock server or an address nobody listens on

#![allow(dead_code)]

use freelink_api::{DataSource, MarketplaceApi};
use freelink_core::RecordingNotifier;
use std::net::TcpListener;
use std::sync::Arc;
use wiremock::MockServer;

/// Client pointed at `<mock server>/api` with a recording notifier
pub fn remote_api(server: &MockServer) -> (MarketplaceApi, RecordingNotifier) {
    let notifier = RecordingNotifier::new();
    let api = MarketplaceApi::new(
        format!("{}/api", server.uri()),
        DataSource::Remote,
        Arc::new(notifier.clone()),
    );
    (api, notifier)
}

/// Client pointed at a local port that refuses connections
pub fn unreachable_api() -> (MarketplaceApi, RecordingNotifier) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let notifier = RecordingNotifier::new();
    let api = MarketplaceApi::new(
        format!("http://127.0.0.1:{}/api", port),
        DataSource::Remote,
        Arc::new(notifier.clone()),
    );
    (api, notifier)
}

/// Client that serves demo data; the base URL is never contacted
pub fn fallback_api() -> (MarketplaceApi, RecordingNotifier) {
    let notifier = RecordingNotifier::new();
    let api = MarketplaceApi::new(
        "http://localhost:5000/api",
        DataSource::Fallback,
        Arc::new(notifier.clone()),
    );
    (api, notifier)
}
