//! Slack client: posts plain-text messages with `chat.postMessage`.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const POST_MESSAGE_URL: &str = "https://slack.com/api/chat.postMessage";

#[derive(Debug, Error)]
pub enum SlackError {
    #[error("not_authed")]
    NotAuthed,

    #[error("http_error: {0}")]
    Http(#[from] reqwest::Error),

    /// Slack's own error code, e.g. `channel_not_found`.
    #[error("{0}")]
    Api(String),
}

#[derive(Debug, Serialize)]
struct PostMessage<'a> {
    channel: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct PostMessageResponse {
    ok: bool,
    error: Option<String>,
}

#[derive(Clone)]
pub struct SlackClient {
    http: Client,
    token: Option<String>,
    channel: String,
}

impl SlackClient {
    pub fn new(http: Client, token: Option<String>, channel: String) -> Self {
        Self {
            http,
            token,
            channel,
        }
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub async fn post_message(&self, text: &str) -> Result<(), SlackError> {
        let token = self.token.as_deref().ok_or(SlackError::NotAuthed)?;

        let response: PostMessageResponse = self
            .http
            .post(POST_MESSAGE_URL)
            .bearer_auth(token)
            .json(&PostMessage {
                channel: &self.channel,
                text,
            })
            .send()
            .await?
            .json()
            .await?;

        check_response(response)
    }
}

fn check_response(response: PostMessageResponse) -> Result<(), SlackError> {
    if response.ok {
        Ok(())
    } else {
        Err(SlackError::Api(
            response.error.unwrap_or_else(|| "unknown_error".to_string()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_response_is_success() {
        let response: PostMessageResponse = serde_json::from_str(r#"{"ok": true}"#).unwrap();
        assert!(check_response(response).is_ok());
    }

    #[test]
    fn test_error_code_is_surfaced() {
        let response: PostMessageResponse =
            serde_json::from_str(r#"{"ok": false, "error": "channel_not_found"}"#).unwrap();
        let err = check_response(response).unwrap_err();
        assert_eq!(err.to_string(), "channel_not_found");
    }

    #[tokio::test]
    async fn test_missing_token_is_not_authed() {
        let client = SlackClient::new(Client::new(), None, "#hiring".to_string());
        let err = client.post_message("hello").await.unwrap_err();
        assert_eq!(err.to_string(), "not_authed");
    }
}
