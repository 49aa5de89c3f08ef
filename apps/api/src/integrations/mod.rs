// Thin HTTP clients for the external services the agents talk to.
// Each call owns its own request; no session state is kept between calls.

pub mod google_calendar;
pub mod slack;
