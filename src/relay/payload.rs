use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::RelayError;
use super::mailer::OutboundEmail;

/// Wire field names, in display order.
pub const CONTACT_FIELDS: [&str; 11] = [
    "fullName",
    "email",
    "phoneNumber",
    "company",
    "website",
    "reason",
    "eventName",
    "eventDateTime",
    "eventLocation",
    "audienceSize",
    "message",
];

pub const REQUIRED_FIELDS: [&str; 7] = [
    "fullName",
    "email",
    "phoneNumber",
    "reason",
    "eventName",
    "eventLocation",
    "audienceSize",
];

/// Typed request body as sent by the site's contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Normalized submission: every known field present, trimmed, non-strings
/// replaced by the empty string. Unknown fields are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    fields: IndexMap<&'static str, String>,
}

impl ContactSubmission {
    /// Normalizes a parsed JSON body.
    ///
    /// Objects and arrays are accepted; an array carries no named fields and
    /// so normalizes to an empty submission. Scalars and `null` are rejected.
    pub fn from_json_value(value: &Value) -> Result<Self, RelayError> {
        let map = match value {
            Value::Object(map) => Some(map),
            Value::Array(_) => None,
            _ => return Err(RelayError::InvalidBody),
        };

        let fields = CONTACT_FIELDS
            .iter()
            .map(|&field| {
                let value = map
                    .and_then(|map| map.get(field))
                    .and_then(Value::as_str)
                    .map(str::trim)
                    .unwrap_or_default();
                (field, value.to_owned())
            })
            .collect();
        Ok(Self { fields })
    }

    pub fn from_payload(payload: &ContactPayload) -> Result<Self, RelayError> {
        let value = serde_json::to_value(payload).map_err(RelayError::InvalidJson)?;
        Self::from_json_value(&value)
    }

    /// Value of a known field, `""` for unknown names.
    #[must_use]
    pub fn get(&self, field: &str) -> &str {
        self.fields.get(field).map(String::as_str).unwrap_or_default()
    }

    #[must_use]
    pub fn fields(&self) -> &IndexMap<&'static str, String> {
        &self.fields
    }

    #[must_use]
    pub fn first_missing_field(&self) -> Option<&'static str> {
        REQUIRED_FIELDS
            .iter()
            .copied()
            .find(|field| self.get(field).is_empty())
    }

    pub fn validate(&self) -> Result<(), RelayError> {
        match self.first_missing_field() {
            Some(field) => Err(RelayError::MissingFields { field }),
            None => Ok(()),
        }
    }

    /// Builds the notification email for the site owners.
    #[must_use]
    pub fn to_email(&self, from: &str, recipients: &[String]) -> OutboundEmail {
        OutboundEmail {
            from: from.to_owned(),
            to: recipients.to_vec(),
            reply_to: self.get("email").to_owned(),
            subject: format!("New contact from {}", self.get("fullName")),
            html: self.render_html(),
        }
    }

    fn render_html(&self) -> String {
        let rows = [
            ("Name", "fullName"),
            ("Email", "email"),
            ("Phone Number", "phoneNumber"),
            ("Company/Band", "company"),
            ("Website/Social", "website"),
            ("Reason", "reason"),
            ("Event Name", "eventName"),
            ("Event Date &amp; Time", "eventDateTime"),
            ("Event Location", "eventLocation"),
            ("Expected Audience Size", "audienceSize"),
        ];

        let mut html = String::from("<h1>New Contact Form Submission</h1>\n");
        for (label, field) in rows {
            html.push_str(&format!(
                "<p><strong>{label}:</strong> {}</p>\n",
                display_value(self.get(field))
            ));
        }

        let message = escape_html(self.get("message")).replace('\n', "<br/>");
        html.push_str("<p><strong>Message:</strong></p>\n");
        html.push_str(&format!(
            "<p>{}</p>\n",
            if message.is_empty() { "—" } else { message.as_str() }
        ));
        html
    }
}

fn display_value(value: &str) -> String {
    if value.is_empty() {
        "—".to_owned()
    } else {
        escape_html(value)
    }
}

/// Escapes the characters that could open markup inside the email body.
#[must_use]
pub fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
