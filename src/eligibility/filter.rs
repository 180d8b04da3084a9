use super::types::{Event, Membership, MembershipId};
use std::collections::HashSet;

/// Roster members not yet registered, in roster order
pub fn eligible_members<'a>(
    registered: &HashSet<MembershipId>,
    roster: &'a [Membership],
) -> Vec<&'a Membership> {
    roster
        .iter()
        .filter(|m| !registered.contains(&m.id))
        .collect()
}

/// Roster members who may still register for `event`: same semester and
/// not already a participant.
pub fn eligible_for_event<'a>(event: &Event, roster: &'a [Membership]) -> Vec<&'a Membership> {
    let registered = event.registered_ids();
    eligible_members(&registered, roster)
        .into_iter()
        .filter(|m| m.semester_id == event.semester_id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eligibility::types::{EventId, Participant, SemesterId, UserId};
    use proptest::prelude::*;

    fn member(id: u64, semester: u64) -> Membership {
        Membership {
            id: MembershipId(id),
            user_id: UserId(id + 100),
            semester_id: SemesterId(semester),
            name: None,
        }
    }

    fn ids(members: &[&Membership]) -> Vec<u64> {
        members.iter().map(|m| m.id.0).collect()
    }

    fn registered(list: &[u64]) -> HashSet<MembershipId> {
        list.iter().copied().map(MembershipId).collect()
    }

    #[test]
    fn test_removes_registered_keeps_order() {
        let roster = vec![member(1, 1), member(2, 1), member(3, 1)];
        let eligible = eligible_members(&registered(&[2]), &roster);
        assert_eq!(ids(&eligible), vec![1, 3]);
    }

    #[test]
    fn test_all_registered() {
        let roster = vec![member(1, 1), member(2, 1)];
        let eligible = eligible_members(&registered(&[1, 2]), &roster);
        assert!(eligible.is_empty());
    }

    #[test]
    fn test_empty_roster() {
        let eligible = eligible_members(&registered(&[9]), &[]);
        assert!(eligible.is_empty());
    }

    #[test]
    fn test_unsorted_roster_order_preserved() {
        let roster = vec![member(30, 1), member(10, 1), member(20, 1)];
        let eligible = eligible_members(&HashSet::new(), &roster);
        assert_eq!(ids(&eligible), vec![30, 10, 20]);
    }

    #[test]
    fn test_event_filters_other_semesters() {
        let roster = vec![member(1, 1), member(2, 2), member(3, 1), member(4, 1)];
        let event = Event {
            id: EventId(1),
            semester_id: SemesterId(1),
            name: None,
            participants: vec![Participant {
                membership_id: MembershipId(3),
                placement: None,
                signed_out_at: None,
            }],
        };
        let eligible = eligible_for_event(&event, &roster);
        assert_eq!(ids(&eligible), vec![1, 4]);
    }

    #[test]
    fn test_signed_out_participant_stays_registered() {
        let roster = vec![member(1, 1), member(2, 1)];
        let event = Event {
            id: EventId(1),
            semester_id: SemesterId(1),
            name: None,
            participants: vec![Participant {
                membership_id: MembershipId(1),
                placement: Some(2),
                signed_out_at: Some(chrono::Utc::now()),
            }],
        };
        assert_eq!(ids(&eligible_for_event(&event, &roster)), vec![2]);
    }

    proptest! {
        #[test]
        fn prop_subset_disjoint_and_ordered(
            roster_ids in prop::collection::vec(0u64..50, 0..40),
            taken in prop::collection::vec(0u64..50, 0..40),
        ) {
            let roster: Vec<Membership> = roster_ids.iter().map(|&id| member(id, 1)).collect();
            let taken = registered(&taken);
            let eligible = eligible_members(&taken, &roster);

            prop_assert!(eligible.iter().all(|m| !taken.contains(&m.id)));

            // Ordered subsequence of the roster
            let mut rest = roster.iter();
            for m in &eligible {
                prop_assert!(rest.any(|r| std::ptr::eq(r, *m)));
            }

            let again = eligible_members(&taken, &roster);
            prop_assert_eq!(ids(&eligible), ids(&again));
        }
    }
}
