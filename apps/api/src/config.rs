use anyhow::{Context, Result};

const DEFAULT_SLACK_CHANNEL: &str = "#hiring";
const DEFAULT_CALENDAR_ID: &str = "primary";
const DEFAULT_TIME_ZONE: &str = "Asia/Kolkata";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
///
/// Slack and Calendar credentials are optional: a missing Slack token turns into a
/// failed delivery status, a missing calendar token fails the run only when an
/// interview actually has to be booked.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub slack_bot_token: Option<String>,
    pub slack_channel: String,
    pub google_calendar_token: Option<String>,
    pub google_calendar_id: String,
    pub calendar_time_zone: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            slack_bot_token: optional_env("SLACK_BOT_TOKEN"),
            slack_channel: optional_env("SLACK_CHANNEL")
                .unwrap_or_else(|| DEFAULT_SLACK_CHANNEL.to_string()),
            google_calendar_token: optional_env("GOOGLE_CALENDAR_TOKEN"),
            google_calendar_id: optional_env("GOOGLE_CALENDAR_ID")
                .unwrap_or_else(|| DEFAULT_CALENDAR_ID.to_string()),
            calendar_time_zone: optional_env("CALENDAR_TIME_ZONE")
                .unwrap_or_else(|| DEFAULT_TIME_ZONE.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Unset and blank values are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
