use chrono::{DateTime, TimeZone, Utc};
use leadhook::csv;
use leadhook::email::templates;
use leadhook::lead::{Answers, LeadSubmission};

fn sample_lead() -> LeadSubmission {
    LeadSubmission {
        name: Some("Erika Mustermann".to_string()),
        company: Some("Acme GmbH".to_string()),
        email: Some("erika@acme.example".to_string()),
        profile: Some("Scale-up".to_string()),
        answers: Some(Answers {
            q1_invest: Some("A".to_string()),
            q2_gtm: Some("B".to_string()),
            q3_ratings: Some("C".to_string()),
            q4_growth: Some("D".to_string()),
        }),
    }
}

fn sample_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 7, 12, 30, 45).unwrap()
}

/// Parse one row where every field is double-quoted, per RFC 4180.
fn parse_quoted_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        assert_eq!(c, '"', "field must start with a quote: {line}");
        let mut field = String::new();
        loop {
            match chars.next() {
                Some('"') => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        break;
                    }
                }
                Some(c) => field.push(c),
                None => panic!("unterminated field: {line}"),
            }
        }
        fields.push(field);
        match chars.next() {
            Some(',') | None => {}
            Some(c) => panic!("unexpected character after field: {c}"),
        }
    }

    fields
}

// ── CSV snapshot ────────────────────────────────────────────────

#[test]
fn snapshot_round_trips_under_csv_parsing() {
    let out = csv::snapshot(&sample_lead(), sample_instant());
    let mut lines = out.lines();

    assert_eq!(lines.next().unwrap(), csv::HEADER);

    let fields = parse_quoted_line(lines.next().unwrap());
    assert_eq!(fields.len(), 9);
    assert!(
        DateTime::parse_from_rfc3339(&fields[0]).is_ok(),
        "timestamp not RFC 3339: {}",
        fields[0]
    );
    assert_eq!(
        &fields[1..],
        [
            "Erika Mustermann",
            "Acme GmbH",
            "erika@acme.example",
            "Scale-up",
            "A",
            "B",
            "C",
            "D"
        ]
    );
    assert!(lines.next().is_none());
}

#[test]
fn embedded_quotes_are_doubled_and_round_trip() {
    let mut lead = sample_lead();
    lead.company = Some(r#"Acme "Inc""#.to_string());

    let out = csv::snapshot(&lead, sample_instant());
    let row = out.lines().nth(1).unwrap();

    assert!(row.contains(r#""Acme ""Inc""""#), "got: {row}");

    let fields = parse_quoted_line(row);
    assert_eq!(fields[2], r#"Acme "Inc""#);
}

#[test]
fn missing_values_render_as_empty_fields() {
    let lead = LeadSubmission {
        name: Some("Max".to_string()),
        company: Some("Acme".to_string()),
        email: Some("max@acme.example".to_string()),
        ..Default::default()
    };

    let out = csv::snapshot(&lead, sample_instant());
    let fields = parse_quoted_line(out.lines().nth(1).unwrap());

    assert_eq!(fields[4], "");
    assert_eq!(&fields[5..], ["", "", "", ""]);
}

// ── Confirmation templates ──────────────────────────────────────

#[test]
fn html_body_neutralizes_markup_in_name() {
    let html = templates::confirmation_html("<script>alert(1)</script>", "https://example.com/book");

    assert!(html.contains("&lt;script&gt;"), "got: {html}");
    assert!(!html.contains("<script>"));
}

#[test]
fn html_body_escapes_url_in_attribute() {
    let html = templates::confirmation_html("Erika", r#"https://example.com/"><script>"#);

    assert!(!html.contains(r#""><script>"#), "got: {html}");
}

#[test]
fn text_body_contains_greeting_and_link() {
    let text = templates::confirmation_text("Erika", "https://example.com/book");

    assert!(text.starts_with("Liebe/r Erika,"));
    assert!(text.contains("https://example.com/book"));
}
