pub mod templates;

use chrono::{DateTime, Utc};
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use serde_json::{json, Value};

use crate::config::{Config, SmtpConfig};

/// Result of one best-effort send. Sends never fail the request; the
/// response only records what happened to each of them.
#[derive(Debug, Clone)]
pub enum MailOutcome {
    /// For the team digest, `bcc` reports whether the CRM blind-copy was
    /// applied; the customer confirmation carries no flag.
    Sent { bcc: Option<bool> },
    Skipped { reason: String },
    Failed { error: String },
}

impl MailOutcome {
    pub fn skipped(reason: &str) -> Self {
        MailOutcome::Skipped {
            reason: reason.to_string(),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            MailOutcome::Sent { bcc: Some(applied) } => json!({ "ok": true, "bcc": applied }),
            MailOutcome::Sent { bcc: None } => json!({ "ok": true }),
            MailOutcome::Skipped { reason } => {
                json!({ "ok": false, "skipped": true, "reason": reason })
            }
            MailOutcome::Failed { error } => {
                json!({ "ok": false, "skipped": true, "error": error })
            }
        }
    }
}

pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    team_to: String,
    crm_bcc: String,
    calendar_url: String,
}

impl Mailer {
    /// Implicit TLS on the standard submissions port, STARTTLS otherwise.
    pub fn new(config: &Config, smtp: &SmtpConfig) -> Result<Self, String> {
        let creds = Credentials::new(smtp.user.clone(), smtp.pass.clone());

        let transport = if smtp.port == 465 {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&smtp.host)
                .map_err(|e| format!("SMTP relay error: {e}"))?
                .port(smtp.port)
                .credentials(creds)
                .build()
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp.host)
                .map_err(|e| format!("SMTP starttls error: {e}"))?
                .port(smtp.port)
                .credentials(creds)
                .build()
        };

        let from: Mailbox = format!("\"{}\" <{}>", config.mail_from_name, smtp.user)
            .parse()
            .map_err(|e| format!("Invalid from address: {e}"))?;

        Ok(Self {
            transport,
            from,
            team_to: config.mail_to.clone().unwrap_or_else(|| smtp.user.clone()),
            crm_bcc: config.crm_bcc.clone(),
            calendar_url: config.calendar_url.clone(),
        })
    }

    /// CSV digest to the sales team, blind-copied to the CRM import mailbox.
    /// The body carries the raw CSV for quick reading; the attachment carries
    /// the same text under a collision-free name.
    pub async fn team_digest(&self, csv: &str, at: DateTime<Utc>) -> MailOutcome {
        match self.send_team_digest(csv, at).await {
            Ok(bcc) => MailOutcome::Sent { bcc: Some(bcc) },
            Err(e) => {
                tracing::warn!("team digest failed: {e}");
                MailOutcome::Failed { error: e }
            }
        }
    }

    async fn send_team_digest(&self, csv: &str, at: DateTime<Utc>) -> Result<bool, String> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(self
                .team_to
                .parse()
                .map_err(|e| format!("Invalid to address: {e}"))?)
            .subject("Neuer Lead (CSV)");

        let bcc = match self.crm_bcc.parse() {
            Ok(addr) => {
                builder = builder.bcc(addr);
                true
            }
            Err(e) => {
                tracing::warn!("CRM bcc address rejected: {e}");
                false
            }
        };

        let attachment = Attachment::new(format!("lead_{}.csv", at.timestamp_millis())).body(
            csv.to_string(),
            ContentType::parse("text/csv; charset=utf-8")
                .map_err(|e| format!("Invalid attachment content type: {e}"))?,
        );

        let message = builder
            .multipart(
                MultiPart::mixed()
                    .singlepart(SinglePart::plain(csv.to_string()))
                    .singlepart(attachment),
            )
            .map_err(|e| format!("Failed to build email: {e}"))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| format!("Failed to send email: {e}"))?;

        Ok(bcc)
    }

    /// Early-access confirmation to the submitter.
    pub async fn customer_confirmation(&self, name: &str, email: &str) -> MailOutcome {
        if email.is_empty() {
            return MailOutcome::skipped("No recipient email");
        }

        match self.send_customer_confirmation(name, email).await {
            Ok(()) => MailOutcome::Sent { bcc: None },
            Err(e) => {
                tracing::warn!("customer confirmation failed: {e}");
                MailOutcome::Failed { error: e }
            }
        }
    }

    async fn send_customer_confirmation(&self, name: &str, email: &str) -> Result<(), String> {
        let greet = match name.trim() {
            "" => "und Team",
            trimmed => trimmed,
        };

        let message = Message::builder()
            .from(self.from.clone())
            .to(email
                .parse()
                .map_err(|e| format!("Invalid to address: {e}"))?)
            .subject(templates::CONFIRMATION_SUBJECT)
            .multipart(MultiPart::alternative_plain_html(
                templates::confirmation_text(greet, &self.calendar_url),
                templates::confirmation_html(greet, &self.calendar_url),
            ))
            .map_err(|e| format!("Failed to build email: {e}"))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| format!("Failed to send email: {e}"))?;

        Ok(())
    }
}
