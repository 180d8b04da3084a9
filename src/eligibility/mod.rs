pub mod filter;
pub mod types;

pub use filter::{eligible_for_event, eligible_members};
pub use types::{Event, EventId, Membership, MembershipId, Participant, SemesterId, UserId};
