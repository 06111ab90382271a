use std::net::SocketAddr;

use clap::Parser;

/// Command-line / environment options for the `contact-relay` binary.
#[derive(Debug, Clone, Parser)]
#[command(name = "contact-relay", about = "Relays contact-form submissions to Resend")]
pub struct RelayArgs {
    /// Address to listen on.
    #[arg(long, env = "CONTACT_RELAY_BIND", default_value = "127.0.0.1:8787")]
    pub bind: SocketAddr,

    /// `true` skips the provider and answers `{ok, mocked}` for valid
    /// submissions. Any other value leaves dev mode off.
    #[arg(long, env = "CONTACT_DEV_MODE", value_name = "true|false")]
    pub dev_mode: Option<String>,

    /// Deployment environment; `production` disables implicit mocking.
    #[arg(long, env = "CONTACT_RELAY_ENV", default_value = "development")]
    pub environment: String,

    #[arg(long, env = "RESEND_API_KEY", hide_env_values = true)]
    pub resend_api_key: Option<String>,

    /// Comma-separated recipient list.
    #[arg(long, env = "CONTACT_RECIPIENT_EMAIL")]
    pub recipient_email: Option<String>,

    #[arg(long, env = "CONTACT_FROM_EMAIL")]
    pub from_email: Option<String>,

    #[arg(long, env = "RESEND_API_BASE", default_value = "https://api.resend.com")]
    pub resend_api_base: String,
}

/// Runtime relay configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelayConfig {
    pub dev_mode: bool,
    pub production: bool,
    pub resend_api_key: Option<String>,
    pub recipients: Vec<String>,
    pub from_email: Option<String>,
}

impl RelayConfig {
    /// Dev-mode config that never talks to the provider.
    #[must_use]
    pub fn development() -> Self {
        Self {
            dev_mode: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn from_args(args: &RelayArgs) -> Self {
        Self {
            dev_mode: args.dev_mode.as_deref() == Some("true"),
            production: args.environment.trim().eq_ignore_ascii_case("production"),
            resend_api_key: non_empty(args.resend_api_key.as_deref()),
            recipients: args
                .recipient_email
                .as_deref()
                .map(parse_recipients)
                .unwrap_or_default(),
            from_email: non_empty(args.from_email.as_deref()),
        }
    }

    /// Mock when dev mode is forced, or when no API key is set outside production.
    #[must_use]
    pub fn should_mock(&self) -> bool {
        self.dev_mode || (self.resend_api_key.is_none() && !self.production)
    }

    /// Provider settings needed for a real send, if all are present.
    #[must_use]
    pub fn provider_settings(&self) -> Option<(&str, &str, &[String])> {
        let api_key = self.resend_api_key.as_deref()?;
        let from = self.from_email.as_deref()?;
        if self.recipients.is_empty() {
            return None;
        }
        Some((api_key, from, &self.recipients))
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

fn parse_recipients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|address| !address.is_empty())
        .map(str::to_owned)
        .collect()
}
