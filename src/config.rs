use std::net::IpAddr;

/// Salesforce email-to-lead import mailbox. Fixed by contract with the CRM
/// deployment, so it is a constant rather than an environment setting; tests
/// substitute it through `Config`.
pub const CRM_BCC: &str = "emailtosalesforce@l-2lps5na8lrt30zhe2o1n3dig6gdxmkk1cgnvjajf5dltn151ew.j6-jmpqmaw.eu50.le.salesforce.com";

pub const DEFAULT_CALENDAR_URL: &str =
    "https://outlook.office.com/book/techconsultGmbHNilsHoltel@techconsult.de/";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub log_level: String,
    /// Absence is a request-time configuration error, not a startup failure:
    /// the service still serves preflight and validation responses.
    pub notion_secret: Option<String>,
    pub notion_db_id: Option<String>,
    pub notion_base_url: String,
    pub smtp: Option<SmtpConfig>,
    /// Team digest recipient; falls back to the SMTP account when unset.
    pub mail_to: Option<String>,
    pub mail_from_name: String,
    pub calendar_url: String,
    pub crm_bcc: String,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let host: IpAddr = env_or("LEADHOOK_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid LEADHOOK_HOST: {e}"))?;

        let port: u16 = env_or("LEADHOOK_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid LEADHOOK_PORT: {e}"))?;

        let max_body_size: usize = env_or("LEADHOOK_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid LEADHOOK_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("LEADHOOK_LOG_LEVEL", "info");

        let notion_secret = std::env::var("NOTION_SECRET").ok();
        let notion_db_id = std::env::var("NOTION_DB_ID").ok();
        let notion_base_url = env_or("NOTION_BASE_URL", "https://api.notion.com/v1");

        let smtp = match (
            std::env::var("SMTP_USER").ok(),
            std::env::var("SMTP_PASS").ok(),
        ) {
            (Some(user), Some(pass)) => Some(SmtpConfig {
                host: env_or("SMTP_HOST", "smtp.office365.com"),
                port: env_or("SMTP_PORT", "587")
                    .parse()
                    .map_err(|e| format!("Invalid SMTP_PORT: {e}"))?,
                user,
                pass,
            }),
            _ => None,
        };

        Ok(Config {
            host,
            port,
            max_body_size,
            log_level,
            notion_secret,
            notion_db_id,
            notion_base_url,
            smtp,
            mail_to: std::env::var("MAIL_TO").ok(),
            mail_from_name: env_or("MAIL_FROM_NAME", "techconsult Lead Desk"),
            calendar_url: env_or("CALENDAR_URL", DEFAULT_CALENDAR_URL),
            crm_bcc: CRM_BCC.to_string(),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
