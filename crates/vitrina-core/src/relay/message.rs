//! Submission payload and its notification rendering

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Placeholder for a field the visitor left blank
const NOT_SPECIFIED: &str = "Not specified";

/// One contact-form submission as posted by the landing page.
///
/// Every field is optional; the form does not validate on the client and
/// the relay accepts whatever arrives.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Submission {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

impl Submission {
    /// Render the notification text sent to the bot chat
    pub fn to_text(&self, at: DateTime<Utc>) -> String {
        format!(
            "📋 New enquiry from the website\n\n\
             👤 Name: {}\n\
             📞 Phone: {}\n\
             💬 Message: {}\n\n\
             🕐 Time: {}",
            field(&self.name),
            field(&self.phone),
            field(&self.message),
            at.format("%d.%m.%Y %H:%M:%S UTC"),
        )
    }
}

/// Empty counts as absent; whitespace is kept as the visitor typed it
fn field(value: &Option<String>) -> &str {
    match value.as_deref() {
        Some(text) if !text.is_empty() => text,
        _ => NOT_SPECIFIED,
    }
}
