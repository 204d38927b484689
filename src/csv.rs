use chrono::{DateTime, SecondsFormat, Utc};

use crate::lead::{text, LeadSubmission};

pub const HEADER: &str = "timestamp,name,company,email,profile,q1,q2,q3,q4";

/// Two-line snapshot of a submission: the fixed header plus one data row
/// stamped with the send-time instant.
pub fn snapshot(lead: &LeadSubmission, at: DateTime<Utc>) -> String {
    let answers = lead.answers();
    let row = [
        at.to_rfc3339_opts(SecondsFormat::Millis, true),
        text(&lead.name).to_string(),
        text(&lead.company).to_string(),
        text(&lead.email).to_string(),
        text(&lead.profile).to_string(),
        text(&answers.q1_invest).to_string(),
        text(&answers.q2_gtm).to_string(),
        text(&answers.q3_ratings).to_string(),
        text(&answers.q4_growth).to_string(),
    ];

    format!("{HEADER}\n{}", csv_line(&row))
}

/// Every value double-quoted, embedded quotes doubled.
fn csv_line(values: &[String]) -> String {
    values
        .iter()
        .map(|v| format!("\"{}\"", v.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(",")
}
