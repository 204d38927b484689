use serde_json::json;

use crate::config::Config;
use crate::error::AppError;
use crate::lead::{text, LeadSubmission};

/// Schema version the property mapping below is written against.
pub const NOTION_VERSION: &str = "2022-06-28";

/// Client for the leads database. Expected columns: Name (Title),
/// Company (Text), Email (Email), Profile (Text), Q1-Q4 (Text); formulas
/// and relations are computed on the store side.
pub struct NotionClient {
    http: reqwest::Client,
    base_url: String,
    secret: Option<String>,
    database_id: Option<String>,
}

impl NotionClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.notion_base_url.trim_end_matches('/').to_string(),
            secret: config.notion_secret.clone(),
            database_id: config.notion_db_id.clone(),
        }
    }

    /// Create one page for the submission. Returns the created page id.
    /// Credentials are checked before any network call; missing configuration
    /// is a distinct error from an upstream failure.
    pub async fn create_lead(&self, lead: &LeadSubmission) -> Result<String, AppError> {
        let secret = self
            .secret
            .as_deref()
            .ok_or_else(|| AppError::Config("NOTION_SECRET missing".to_string()))?;
        let database_id = self
            .database_id
            .as_deref()
            .ok_or_else(|| AppError::Config("NOTION_DB_ID missing".to_string()))?;

        let title = match text(&lead.name).trim() {
            "" => "Unbekannt",
            trimmed => trimmed,
        };
        let answers = lead.answers();

        let body = json!({
            "parent": { "database_id": database_id },
            "properties": {
                "Name":    { "title": [{ "text": { "content": title } }] },
                "Company": { "rich_text": [{ "text": { "content": text(&lead.company) } }] },
                "Email":   { "email": text(&lead.email) },
                "Profile": { "rich_text": [{ "text": { "content": text(&lead.profile) } }] },
                "Q1":      { "rich_text": [{ "text": { "content": text(&answers.q1_invest) } }] },
                "Q2":      { "rich_text": [{ "text": { "content": text(&answers.q2_gtm) } }] },
                "Q3":      { "rich_text": [{ "text": { "content": text(&answers.q3_ratings) } }] },
                "Q4":      { "rich_text": [{ "text": { "content": text(&answers.q4_growth) } }] },
            }
        });

        let resp = self
            .http
            .post(format!("{}/pages", self.base_url))
            .bearer_auth(secret)
            .header("Notion-Version", NOTION_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AppError::Upstream {
                endpoint: "pages".to_string(),
                method: "POST",
                status: status.as_u16(),
                body,
            });
        }

        let page: serde_json::Value = resp.json().await?;
        Ok(page["id"].as_str().unwrap_or_default().to_string())
    }
}
