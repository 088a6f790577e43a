//! Data models for the application
//!
//! Plain data: the roster, portrait locations and meeting details.

mod call_info;
mod participant;

pub use call_info::CallInfo;
pub use participant::{DEFAULT_ROSTER, Participant, PortraitSet, PortraitSource, roster_from_names};
