use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

macro_rules! id_type {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

id_type!(MembershipId);
id_type!(UserId);
id_type!(SemesterId);
id_type!(EventId);

/// A user's membership in one semester's roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    pub id: MembershipId,
    pub user_id: UserId,
    pub semester_id: SemesterId,
    #[serde(default)]
    pub name: Option<String>,
}

impl Membership {
    /// Name for display, falling back to the user id
    pub fn display_name(&self) -> String {
        match self.name {
            Some(ref name) => name.clone(),
            None => format!("user #{}", self.user_id),
        }
    }
}

/// A membership's entry in an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub membership_id: MembershipId,
    /// Unset until the event concludes
    #[serde(default)]
    pub placement: Option<u32>,
    #[serde(default)]
    pub signed_out_at: Option<DateTime<Utc>>,
}

impl Participant {
    pub fn is_signed_out(&self) -> bool {
        self.signed_out_at.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub semester_id: SemesterId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

impl Event {
    /// Field size: every registered entry counts, placed or not
    pub fn field_size(&self) -> u32 {
        u32::try_from(self.participants.len()).unwrap_or(u32::MAX)
    }

    pub fn registered_ids(&self) -> HashSet<MembershipId> {
        self.participants.iter().map(|p| p.membership_id).collect()
    }
}
