use thiserror::Error;

use crate::eligibility::MembershipId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PointsError {
    #[error("Invalid field size {size}: an event needs at least one participant")]
    InvalidFieldSize { size: u32 },
    #[error("Invalid placement {placement}: must be between 1 and the field size {size}")]
    InvalidPlacement { placement: u32, size: u32 },
    #[error("Membership {membership_id} is entered more than once in the event")]
    DuplicateParticipant { membership_id: MembershipId },
    #[error("Invalid points table: {}", .0.join("; "))]
    InvalidTable(Vec<String>),
}

pub type Result<T> = std::result::Result<T, PointsError>;
