//! Plain-text report of a workflow run, printed by the `run` command.

use crate::models::SchedulingOutcome;
use crate::workflow::WorkflowState;

const RULE_WIDTH: usize = 50;

pub fn render_report(state: &WorkflowState) -> String {
    let mut out = String::from("Job Description Parsed:\n");
    match &state.job_profile {
        Some(job) => out.push_str(&format!(
            "  Role: {}\n  Skills: {}\n  Tools: {}\n  Experience (years): {}\n  Soft Skills: {}\n",
            job.role,
            job.skills.join(", "),
            job.tools.join(", "),
            job.experience_years,
            job.soft_skills.join(", ")
        )),
        None => out.push_str("  (not analyzed)\n"),
    }

    let rule = "=".repeat(RULE_WIDTH);
    for (idx, candidate) in state.candidate_profiles.iter().enumerate() {
        let name = if candidate.name.trim().is_empty() {
            "Unknown"
        } else {
            candidate.name.as_str()
        };
        out.push_str(&format!(
            "\n{rule}\nCandidate {}: {name}\n{rule}\nEmail: {}  Phone: {}\nSkills: {}\n",
            idx + 1,
            candidate.email,
            candidate.phone,
            candidate.skills.join(", ")
        ));

        if let Some(ranking) = state.rankings.get(idx) {
            out.push_str(&format!(
                "\nRanking:\n  Score: {}\n  Summary: {}\n",
                ranking.score, ranking.summary
            ));
        }
        if let Some(draft) = state.drafts.get(idx) {
            out.push_str(&format!(
                "\nEmail ({}):\n  Subject: {}\n{}\n",
                draft.decision.as_str(),
                draft.subject,
                draft.body
            ));
        }
        match state.scheduling.get(idx) {
            Some(SchedulingOutcome::Scheduled {
                slots,
                confirmed_link,
            }) => {
                let slots: Vec<String> = slots
                    .iter()
                    .map(|s| s.format("%Y-%m-%d %H:%M").to_string())
                    .collect();
                out.push_str(&format!(
                    "\nInterview:\n  Slots: {}\n  Calendar Event: {confirmed_link}\n",
                    slots.join(", ")
                ));
            }
            Some(SchedulingOutcome::Skipped) => out.push_str("\nInterview: not scheduled\n"),
            None => {}
        }
        if let Some(notification) = state.notifications.get(idx) {
            out.push_str(&format!(
                "\nNotification: {} ({})\n",
                notification.status, notification.channel
            ));
        }
    }

    out
}
