use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimestampMode {
    #[default]
    Relative,
    Absolute,
}

impl TimestampMode {
    pub fn toggle(self) -> Self {
        match self {
            TimestampMode::Relative => TimestampMode::Absolute,
            TimestampMode::Absolute => TimestampMode::Relative,
        }
    }
}

fn fmt_ts_abs(ts: &str) -> Option<String> {
    let dt = OffsetDateTime::parse(ts, &Rfc3339).ok()?;
    dt.to_offset(time::UtcOffset::UTC)
        .format(format_description!(
            "[year]-[month repr:numerical padding:zero]-[day padding:zero] [hour padding:zero]:[minute padding:zero]Z"
        ))
        .ok()
}

fn fmt_since(ts: &str, now: OffsetDateTime) -> Option<String> {
    let dt = OffsetDateTime::parse(ts, &Rfc3339).ok()?;
    let secs = (now - dt).whole_seconds();

    // Clock skew between us and the registry; show absolute.
    if secs < 0 {
        return None;
    }

    let mins = secs / 60;
    let hours = mins / 60;
    let days = hours / 24;

    let s = if secs < 60 {
        "just now".to_string()
    } else if mins < 60 {
        format!("{}m ago", mins)
    } else if hours < 48 {
        format!("{}h ago", hours)
    } else if days < 14 {
        format!("{}d ago", days)
    } else {
        return None;
    };
    Some(s)
}

/// Formats a registry timestamp for a table cell.
///
/// Missing timestamps render as `never`; the registry reports a zero time
/// (`0001-01-01T00:00:00Z`) for artifacts that were never pulled.
pub fn fmt_ts(ts: Option<&str>, mode: TimestampMode, now: OffsetDateTime) -> String {
    let Some(ts) = ts.filter(|t| !t.is_empty() && !t.starts_with("0001-01-01")) else {
        return "never".to_string();
    };
    match mode {
        TimestampMode::Relative => fmt_since(ts, now)
            .or_else(|| fmt_ts_abs(ts))
            .unwrap_or_else(|| ts.to_string()),
        TimestampMode::Absolute => fmt_ts_abs(ts).unwrap_or_else(|| ts.to_string()),
    }
}

#[cfg(test)]
#[path = "../tests/model/timestamps_tests.rs"]
mod tests;
