//! Full fetch-parse-report cycle against a mock version service.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use pretty_assertions::assert_eq;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wownow::{RunError, build_report};
use wownow_protocol::{ClientConfig, ProtocolError, VersionsClient};

const WOW: &str = "Region!STRING:0|BuildConfig!HEX:16|CDNConfig!HEX:16|KeyRing!HEX:16|BuildId!DEC:4|VersionsName!String:0|ProductConfig!HEX:16
## seqn = 12345
us|6f7a7a4a0c8e1e3b8e0e7d1d1d5e4f3c|c1f2a3b4c5d6e7f8091a2b3c4d5e6f70||12345|10.2.5.12345|53020d32e1a25648c8e1eafd5771935f
eu|6f7a7a4a0c8e1e3b8e0e7d1d1d5e4f3c|c1f2a3b4c5d6e7f8091a2b3c4d5e6f70||12345|10.2.5.12345|53020d32e1a25648c8e1eafd5771935f
";

const WOW_CLASSIC: &str = "Region!STRING:0|BuildConfig!HEX:16|CDNConfig!HEX:16|KeyRing!HEX:16|BuildId!DEC:4|VersionsName!String:0|ProductConfig!HEX:16
## seqn = 67890
us|ae66faee0ac786fdd7d8b4cf90a8d5b9|63eee50d456a6ddf3b630957c024dda0||1|1.0.0.1|53020d32e1a25648c8e1eafd5771935f
";

async fn mount(server: &MockServer, product: &str, body: &str, delay: Duration) {
    Mock::given(method("GET"))
        .and(path(format!("/{product}/versions")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .set_delay(delay),
        )
        .mount(server)
        .await;
}

fn client_for(server: &MockServer) -> VersionsClient {
    let config = ClientConfig {
        base_url: server.uri(),
        ..ClientConfig::default()
    };
    VersionsClient::from_config(&config).expect("Failed to create versions client")
}

#[tokio::test]
async fn two_products_report_in_listing_order() {
    let server = MockServer::start().await;
    // The first product answers last
    mount(&server, "wow", WOW, Duration::from_millis(200)).await;
    mount(&server, "wow_classic", WOW_CLASSIC, Duration::ZERO).await;

    let client = client_for(&server);
    let products = vec!["wow".to_string(), "wow_classic".to_string()];
    let report = build_report(&client, &products)
        .await
        .expect("Failed to build report");

    let json = report.to_json(true).expect("Failed to serialize report");
    let wow_at = json.find("\"wow\":").expect("wow key missing");
    let classic_at = json.find("\"wow_classic\":").expect("wow_classic key missing");
    assert!(wow_at < classic_at, "products out of order:\n{json}");

    let parsed: serde_json::Value = serde_json::from_str(&json).expect("Report is not JSON");
    assert_eq!(parsed["products"]["wow"]["sequence_number"], 12345);
    assert_eq!(parsed["products"]["wow_classic"]["sequence_number"], 67890);
    assert_eq!(
        parsed["products"]["wow"]["versions"],
        serde_json::json!([
            {"region": "us", "version": "10.2.5", "build": "12345", "interface": "100205"},
            {"region": "eu", "version": "10.2.5", "build": "12345", "interface": "100205"},
        ])
    );
    assert_eq!(
        parsed["products"]["wow_classic"]["versions"],
        serde_json::json!([
            {"region": "us", "version": "1.0.0", "build": "1", "interface": "10000"},
        ])
    );

    let timestamp = parsed["retrieval_datetime"]
        .as_str()
        .expect("Timestamp should be a string");
    assert_eq!(timestamp.len(), "2026-10-19T08:30:05Z".len());
    assert!(timestamp.ends_with('Z'));
}

#[tokio::test]
async fn one_failing_product_fails_the_run() {
    let server = MockServer::start().await;
    mount(&server, "wow", WOW, Duration::ZERO).await;
    Mock::given(method("GET"))
        .and(path("/wow_classic/versions"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let products = vec!["wow".to_string(), "wow_classic".to_string()];
    let err = build_report(&client, &products)
        .await
        .expect_err("A failing product should abort the run");

    assert!(matches!(
        err,
        RunError::Protocol(ProtocolError::ServerError(status)) if status.as_u16() == 500
    ));
}
