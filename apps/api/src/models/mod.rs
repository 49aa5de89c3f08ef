pub mod candidate;
pub mod job;
pub mod outcome;

pub use candidate::CandidateProfile;
pub use job::JobProfile;
pub use outcome::{
    DeliveryStatus, Decision, EmailDraft, NotificationOutcome, Ranking, SchedulingOutcome,
    INVITE_THRESHOLD,
};
