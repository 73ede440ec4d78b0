//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use zeus_client::mocks::MockTransport;
use zeus_client::transport::HttpTransport;
use zeus_client::ZeusClient;

pub const TOKEN: &str = "ZeUsRoCkS";

/// Builds a client whose requests go to a fresh mock transport.
pub fn mock_client() -> (ZeusClient, Arc<MockTransport>) {
    let transport = Arc::new(MockTransport::new());
    let client = ZeusClient::builder()
        .token(TOKEN)
        .endpoint("zeus.rocks")
        .transport(Arc::clone(&transport) as Arc<dyn HttpTransport>)
        .build()
        .unwrap();
    (client, transport)
}
