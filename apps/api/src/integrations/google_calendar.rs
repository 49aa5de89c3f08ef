//! Google Calendar client: inserts interview events into a calendar.
//!
//! Authentication is a bearer access token supplied through configuration.
//! The token is only looked at when an event is actually created, so a run in
//! which nobody qualifies never touches the calendar credentials.

use chrono::{Duration, NaiveDateTime};
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const CALENDAR_API_BASE: &str = "https://www.googleapis.com/calendar/v3/calendars";
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("calendar credentials are not configured (set GOOGLE_CALENDAR_TOKEN)")]
    Unauthenticated,

    #[error("calendar HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("calendar API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("calendar API response did not include an event link")]
    MissingLink,

    #[error("invalid calendar endpoint: {0}")]
    InvalidEndpoint(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub summary: String,
    pub description: String,
    pub start: NaiveDateTime,
    pub duration_minutes: i64,
}

#[derive(Debug, Serialize)]
struct EventBody<'a> {
    summary: &'a str,
    description: &'a str,
    start: EventTime<'a>,
    end: EventTime<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EventTime<'a> {
    date_time: String,
    time_zone: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatedEvent {
    html_link: Option<String>,
}

#[derive(Clone)]
pub struct CalendarClient {
    http: Client,
    access_token: Option<String>,
    calendar_id: String,
    time_zone: String,
}

impl CalendarClient {
    pub fn new(
        http: Client,
        access_token: Option<String>,
        calendar_id: String,
        time_zone: String,
    ) -> Self {
        Self {
            http,
            access_token,
            calendar_id,
            time_zone,
        }
    }

    /// Creates the event and returns its HTML link.
    pub async fn create_event(&self, event: &NewEvent) -> Result<String, CalendarError> {
        let token = self
            .access_token
            .as_deref()
            .ok_or(CalendarError::Unauthenticated)?;

        let body = self.event_body(event);
        let url = self.events_url()?;

        let response = self
            .http
            .post(url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(CalendarError::Unauthenticated);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CalendarError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let created: CreatedEvent = response.json().await?;
        debug!("Calendar event created in '{}'", self.calendar_id);
        created.html_link.ok_or(CalendarError::MissingLink)
    }

    /// `{base}/{calendar_id}/events`, with the id percent-encoded as one path segment.
    fn events_url(&self) -> Result<Url, CalendarError> {
        let mut url = Url::parse(CALENDAR_API_BASE)
            .map_err(|e| CalendarError::InvalidEndpoint(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| CalendarError::InvalidEndpoint(CALENDAR_API_BASE.to_string()))?
            .push(&self.calendar_id)
            .push("events");
        Ok(url)
    }

    fn event_body<'a>(&'a self, event: &'a NewEvent) -> EventBody<'a> {
        let end = event.start + Duration::minutes(event.duration_minutes);
        EventBody {
            summary: &event.summary,
            description: &event.description,
            start: EventTime {
                date_time: event.start.format(DATETIME_FORMAT).to_string(),
                time_zone: &self.time_zone,
            },
            end: EventTime {
                date_time: end.format(DATETIME_FORMAT).to_string(),
                time_zone: &self.time_zone,
            },
        }
    }
}
