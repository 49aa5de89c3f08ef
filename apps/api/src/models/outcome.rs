//! Per-candidate results produced by the ranking, drafting, scheduling, and
//! notification steps.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Minimum score for an interview invite.
pub const INVITE_THRESHOLD: u32 = 75;

/// Summary returned by the ranker when it could not produce a real score.
pub const DEGRADED_SUMMARY: &str = "Error processing model response.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ranking {
    /// 0 to 100
    pub score: u32,
    pub summary: String,
}

impl Ranking {
    /// The ranker's fallback value. Downstream steps treat it like any other score.
    pub fn degraded() -> Self {
        Self {
            score: 0,
            summary: DEGRADED_SUMMARY.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Invite,
    Rejection,
}

impl Decision {
    pub fn for_score(score: u32) -> Self {
        if score >= INVITE_THRESHOLD {
            Decision::Invite
        } else {
            Decision::Rejection
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Invite => "invite",
            Decision::Rejection => "rejection",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailDraft {
    pub subject: String,
    pub body: String,
    pub decision: Decision,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SchedulingOutcome {
    Scheduled {
        slots: Vec<NaiveDateTime>,
        confirmed_link: String,
    },
    Skipped,
}

impl SchedulingOutcome {
    pub fn is_scheduled(&self) -> bool {
        matches!(self, SchedulingOutcome::Scheduled { .. })
    }

    pub fn confirmed_link(&self) -> Option<&str> {
        match self {
            SchedulingOutcome::Scheduled { confirmed_link, .. } => Some(confirmed_link),
            SchedulingOutcome::Skipped => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DeliveryStatus {
    Sent,
    Failed { reason: String },
}

impl std::fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeliveryStatus::Sent => write!(f, "sent"),
            DeliveryStatus::Failed { reason } => write!(f, "failed: {reason}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationOutcome {
    pub status: DeliveryStatus,
    pub channel: String,
    pub message: String,
}
