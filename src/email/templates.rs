pub const CONFIRMATION_SUBJECT: &str =
    "Willkommen zum Early Access: Ihre Insights folgen in Kürze";

pub fn confirmation_text(greet_name: &str, calendar_url: &str) -> String {
    format!(
        "Liebe/r {greet_name},

herzlichen Glückwunsch – Ihr Zugang zu den exklusiven Markt- und HR-Insights 2026 ist gesichert.
Damit gehören Sie zu den Ersten, die vor der offiziellen Veröffentlichung erfahren, welche Trends, Benchmarks und Wettbewerbsentwicklungen die nächsten Jahre prägen werden.

Was Sie erwartet:

📊 Erste Benchmark-Ergebnisse, die aktuelle Bewegungen am Markt sichtbar machen
🚀 Ihr persönliches Zukunftsprofil 2026
💡 Frühindikatoren für HR- und Go-to-Market-Strategien, die andere Unternehmen erst später erkennen

👉 In wenigen Tagen erhalten Sie die ersten Insights direkt in Ihr Postfach.

Falls Sie Ihre Ergebnisse gleich im persönlichen Gespräch vertiefen möchten, können Sie hier einen Termin wählen:
Jetzt 30-Minuten-Benchmark-Gespräch sichern: {calendar_url}

Wir freuen uns, Ihnen den entscheidenden Vorsprung zu verschaffen!

Beste Grüße
Ihr techconsult Team"
    )
}

/// Name and URL are attacker-influenced; both are escaped so markup in
/// either cannot break out of the surrounding HTML.
pub fn confirmation_html(greet_name: &str, calendar_url: &str) -> String {
    let name = htmlescape::encode_minimal(greet_name);
    let url = htmlescape::encode_attribute(calendar_url);

    format!(
        r#"<div style="font-family:system-ui,-apple-system,Segoe UI,Roboto,Arial,sans-serif;font-size:15px;line-height:1.6;color:#0f172a">
  <p>Liebe/r {name},</p>
  <p>herzlichen Glückwunsch – Ihr Zugang zu den exklusiven Markt- und HR-Insights 2026 ist gesichert.<br/>
  Damit gehören Sie zu den Ersten, die vor der offiziellen Veröffentlichung erfahren, welche Trends, Benchmarks und Wettbewerbsentwicklungen die nächsten Jahre prägen werden.</p>

  <p><strong>Was Sie erwartet:</strong></p>
  <ul style="margin-top:6px">
    <li>📊 Erste Benchmark-Ergebnisse, die aktuelle Bewegungen am Markt sichtbar machen</li>
    <li>🚀 Ihr persönliches Zukunftsprofil 2026</li>
    <li>💡 Frühindikatoren für HR- und Go-to-Market-Strategien, die andere Unternehmen erst später erkennen</li>
  </ul>

  <p>👉 In wenigen Tagen erhalten Sie die ersten Insights direkt in Ihr Postfach.</p>

  <p>Falls Sie Ihre Ergebnisse gleich im persönlichen Gespräch vertiefen möchten, können Sie hier einen Termin wählen:</p>
  <p>
    <a href="{url}"
       style="display:inline-block;padding:10px 14px;border-radius:8px;text-decoration:none;background:#2563eb;color:#fff">
       🔹 Jetzt 30-Minuten-Benchmark-Gespräch sichern
    </a>
  </p>

  <p>Wir freuen uns, Ihnen den entscheidenden Vorsprung zu verschaffen!</p>

  <p>Beste Grüße<br/>Ihr techconsult Team</p>
</div>"#
    )
}
