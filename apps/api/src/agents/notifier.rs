//! Notifier: posts a per-candidate summary to Slack.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::agents::Notifier;
use crate::integrations::slack::SlackClient;
use crate::models::{
    CandidateProfile, Decision, DeliveryStatus, EmailDraft, NotificationOutcome, Ranking,
    SchedulingOutcome,
};

pub struct SlackNotifier {
    slack: SlackClient,
}

impl SlackNotifier {
    pub fn new(slack: SlackClient) -> Self {
        Self { slack }
    }
}

#[async_trait]
impl Notifier for SlackNotifier {
    async fn notify(
        &self,
        candidate: &CandidateProfile,
        ranking: &Ranking,
        draft: &EmailDraft,
        scheduling: &SchedulingOutcome,
    ) -> NotificationOutcome {
        let message = format_notification(candidate, ranking, draft, scheduling);

        let status = match self.slack.post_message(&message).await {
            Ok(()) => {
                info!("Posted update for {} to {}", candidate.name, self.slack.channel());
                DeliveryStatus::Sent
            }
            Err(e) => {
                warn!("Slack delivery failed for {}: {e}", candidate.name);
                DeliveryStatus::Failed {
                    reason: e.to_string(),
                }
            }
        };

        NotificationOutcome {
            status,
            channel: self.slack.channel().to_string(),
            message,
        }
    }
}

/// Slack mrkdwn summary of one candidate's outcome.
pub fn format_notification(
    candidate: &CandidateProfile,
    ranking: &Ranking,
    draft: &EmailDraft,
    scheduling: &SchedulingOutcome,
) -> String {
    let name = if candidate.name.trim().is_empty() {
        "Unknown"
    } else {
        candidate.name.as_str()
    };
    let decision = match draft.decision {
        Decision::Invite => "Invite",
        Decision::Rejection => "Rejection",
    };

    let mut message = format!(
        "*Candidate Update: {name}*\n\
         Score: {}\n\
         Decision: {decision}\n\n\
         Summary: {}\n\n\
         Email Prepared: {}\n",
        ranking.score, ranking.summary, draft.subject
    );

    if let Some(link) = scheduling.confirmed_link() {
        message.push_str(&format!("\nCalendar Event: {link}"));
    }
    message
}
