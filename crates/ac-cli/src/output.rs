//! Plain-text and JSON rendering of suggestion lists.

use ac_core::Suggestion;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use unicode_width::UnicodeWidthStr;

/// `never` for unused words, RFC 3339 UTC otherwise.
pub fn format_last_used(last_used: u64) -> String {
    if last_used == 0 {
        return "never".to_string();
    }
    i64::try_from(last_used)
        .ok()
        .and_then(|secs| OffsetDateTime::from_unix_timestamp(secs).ok())
        .and_then(|t| t.format(&Rfc3339).ok())
        .unwrap_or_else(|| last_used.to_string())
}

/// One row per suggestion, word column padded by display width.
pub fn render_table(suggestions: &[Suggestion]) -> String {
    if suggestions.is_empty() {
        return "(no matches)\n".to_string();
    }
    let width = suggestions
        .iter()
        .map(|s| UnicodeWidthStr::width(s.word.as_str()))
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for (i, s) in suggestions.iter().enumerate() {
        let pad = width - UnicodeWidthStr::width(s.word.as_str());
        out.push_str(&format!(
            "{:>2}. {}{}  score={:.3}  freq={}  last_used={}\n",
            i + 1,
            s.word,
            " ".repeat(pad),
            s.score,
            s.frequency,
            format_last_used(s.last_used),
        ));
    }
    out
}

pub fn render_json(suggestions: &[Suggestion]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(suggestions)
}
