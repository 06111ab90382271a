//! Contact-form relay: validates a submission and forwards it to Resend.
//!
//! Stateless apart from immutable configuration. Every request is a single
//! attempt; resubmission is up to the form.

mod config;
mod error;
mod handler;
mod mailer;
mod payload;

pub use config::{RelayArgs, RelayConfig};
pub use error::{MailerError, RelayError};
pub use handler::{CONTACT_PATH, ContactOutcome, RelayState, contact_router, handle_contact};
pub use mailer::{Mailer, OutboundEmail, ResendMailer};
pub use payload::{
    CONTACT_FIELDS, ContactPayload, ContactSubmission, REQUIRED_FIELDS, escape_html,
};
