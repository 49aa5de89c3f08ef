//! Branch predicates.
//!
//! Two levels, kept separate on purpose:
//! - `should_schedule` is the batch gate, evaluated once per run after drafting.
//!   When it is false the scheduling step is not entered at all, so the calendar
//!   service is never contacted.
//! - `qualifies` decides per candidate inside the scheduling step.

use crate::models::{Ranking, INVITE_THRESHOLD};

pub fn qualifies(ranking: &Ranking) -> bool {
    ranking.score >= INVITE_THRESHOLD
}

pub fn should_schedule(rankings: &[Ranking]) -> bool {
    rankings.iter().any(qualifies)
}
