use serde::Deserialize;

/// One inbound form submission. Constructed from the request body, forwarded
/// to the record store and the mailer, then discarded.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LeadSubmission {
    pub name: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub profile: Option<String>,
    pub answers: Option<Answers>,
}

/// Survey answers under their fixed question keys.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Answers {
    pub q1_invest: Option<String>,
    pub q2_gtm: Option<String>,
    pub q3_ratings: Option<String>,
    pub q4_growth: Option<String>,
}

impl LeadSubmission {
    /// Required fields must be present and non-empty. Whitespace-only values
    /// pass; the record store applies its own trim-and-fallback on the title.
    pub fn has_required(&self) -> bool {
        !text(&self.name).is_empty()
            && !text(&self.company).is_empty()
            && !text(&self.email).is_empty()
    }

    pub fn answers(&self) -> Answers {
        self.answers.clone().unwrap_or_default()
    }
}

/// Absent and null fields read as empty strings.
pub fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

/// Parse a request body based on Content-Type header.
pub fn parse_body(content_type: Option<&str>, body: &[u8]) -> Result<LeadSubmission, String> {
    let ct = content_type.unwrap_or("application/json");

    if ct.contains("application/json") {
        serde_json::from_slice(body).map_err(|e| format!("Invalid JSON: {e}"))
    } else if ct.contains("application/x-www-form-urlencoded") {
        Ok(parse_form(body))
    } else {
        // Try JSON first, then form-urlencoded
        match serde_json::from_slice(body) {
            Ok(lead) => Ok(lead),
            Err(_) => Ok(parse_form(body)),
        }
    }
}

/// Landing pages post flat key/value pairs; answers arrive under their
/// question keys directly.
fn parse_form(body: &[u8]) -> LeadSubmission {
    let mut lead = LeadSubmission::default();
    let mut answers = Answers::default();

    for (key, value) in form_urlencoded::parse(body) {
        let value = value.into_owned();
        match key.as_ref() {
            "name" => lead.name = Some(value),
            "company" => lead.company = Some(value),
            "email" => lead.email = Some(value),
            "profile" => lead.profile = Some(value),
            "q1_invest" => answers.q1_invest = Some(value),
            "q2_gtm" => answers.q2_gtm = Some(value),
            "q3_ratings" => answers.q3_ratings = Some(value),
            "q4_growth" => answers.q4_growth = Some(value),
            _ => {}
        }
    }

    lead.answers = Some(answers);
    lead
}
