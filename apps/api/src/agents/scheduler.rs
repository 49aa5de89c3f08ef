//! Interview scheduler: proposes slots and books the first one in Google Calendar.
//!
//! Slots are 15:00 local time on each of the next three days. Only the first
//! slot becomes a calendar event; the others are suggestions.
//!
//! "Today" is the server's local date, while events are booked as wall-clock
//! times in the calendar's configured zone (`CALENDAR_TIME_ZONE`). Run the
//! service in that zone, or near a day boundary the first slot can land on the
//! calendar's current day instead of the next one.

use async_trait::async_trait;
use chrono::{Days, Local, NaiveDateTime};
use tracing::info;

use crate::agents::{AgentError, InterviewSlots, Scheduler};
use crate::integrations::google_calendar::{CalendarClient, NewEvent};
use crate::models::{CandidateProfile, Ranking};

const SLOT_COUNT: u64 = 3;
const SLOT_HOUR: u32 = 15;
const INTERVIEW_MINUTES: i64 = 30;

pub struct CalendarScheduler {
    calendar: CalendarClient,
}

impl CalendarScheduler {
    pub fn new(calendar: CalendarClient) -> Self {
        Self { calendar }
    }
}

#[async_trait]
impl Scheduler for CalendarScheduler {
    async fn schedule(
        &self,
        candidate: &CandidateProfile,
        ranking: &Ranking,
    ) -> Result<InterviewSlots, AgentError> {
        // Server-local clock; see the module note on time zones.
        let slots = propose_slots(Local::now().naive_local());
        let first = slots.first().copied().ok_or_else(|| {
            AgentError::InvalidRecord("no interview slot could be proposed".to_string())
        })?;

        let confirmed_link = self
            .calendar
            .create_event(&interview_event(candidate, ranking, first))
            .await?;
        info!("Interview booked for {} at {first}", candidate.name);

        Ok(InterviewSlots {
            slots,
            confirmed_link,
        })
    }
}

/// Slot times for the days after `now`, in chronological order.
pub fn propose_slots(now: NaiveDateTime) -> Vec<NaiveDateTime> {
    (1..=SLOT_COUNT)
        .filter_map(|offset| now.date().checked_add_days(Days::new(offset)))
        .filter_map(|day| day.and_hms_opt(SLOT_HOUR, 0, 0))
        .collect()
}

fn interview_event(candidate: &CandidateProfile, ranking: &Ranking, start: NaiveDateTime) -> NewEvent {
    NewEvent {
        summary: format!("Interview: {}", candidate.name),
        description: format!(
            "Interview for {} (Score: {})",
            candidate.name, ranking.score
        ),
        start,
        duration_minutes: INTERVIEW_MINUTES,
    }
}
