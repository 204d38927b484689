use std::sync::Arc;

use crate::config::Config;
use crate::email::Mailer;
use crate::notion::NotionClient;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub notion: NotionClient,
    /// None when SMTP credentials are not configured; sends report skipped.
    pub mailer: Option<Mailer>,
}
