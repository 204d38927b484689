use std::net::SocketAddr;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use leadhook::config::Config;

/// A running test server instance.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
}

/// Config pointing the record store at `notion_base_url`; SMTP off, so mail
/// outcomes report skipped.
pub fn test_config(notion_base_url: &str) -> Config {
    Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        max_body_size: 1_048_576,
        log_level: "warn".to_string(),
        notion_secret: Some("test-secret".to_string()),
        notion_db_id: Some("test-db-id".to_string()),
        notion_base_url: notion_base_url.to_string(),
        smtp: None,
        mail_to: None,
        mail_from_name: "Lead Desk".to_string(),
        calendar_url: "https://example.com/book".to_string(),
        crm_bcc: "crm-import@example.com".to_string(),
    }
}

/// Spawn the app on a random port with the given config.
pub async fn spawn_app(config: Config) -> TestApp {
    let app = leadhook::build_app(config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        client: Client::new(),
    }
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Submit a lead payload (JSON), return (body, status).
    pub async fn post_lead(&self, payload: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/lead"))
            .json(payload)
            .send()
            .await
            .expect("lead request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}
