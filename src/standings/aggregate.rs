use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::{debug, warn};

use crate::eligibility::{Event, EventId, Membership, MembershipId, SemesterId, UserId};
use crate::error::{PointsError, Result};
use crate::points::{PlacementPointsTable, PointsAward, PointsCalculator};

/// Points earned by one participant in one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventAward {
    pub event_id: EventId,
    pub membership_id: MembershipId,
    pub user_id: UserId,
    pub semester_id: SemesterId,
    pub award: PointsAward,
}

/// Score every placed participant of a concluded event.
///
/// The field size is the full participant count, including entries that
/// have no placement yet; those entries are skipped. A membership entered
/// twice fails the whole event.
pub fn score_event(
    event: &Event,
    roster: &[Membership],
    table: &PlacementPointsTable,
) -> Result<Vec<EventAward>> {
    let mut entered = HashSet::new();
    for participant in &event.participants {
        if !entered.insert(participant.membership_id) {
            return Err(PointsError::DuplicateParticipant {
                membership_id: participant.membership_id,
            });
        }
    }

    let calculator = PointsCalculator::new(event.field_size(), table)?;
    let memberships: HashMap<MembershipId, &Membership> =
        roster.iter().map(|m| (m.id, m)).collect();

    let mut awards = Vec::new();
    for participant in &event.participants {
        let Some(placement) = participant.placement else {
            debug!(
                event = %event.id,
                membership = %participant.membership_id,
                "participant has no placement yet, skipping"
            );
            continue;
        };

        let Some(membership) = memberships.get(&participant.membership_id) else {
            warn!(
                event = %event.id,
                membership = %participant.membership_id,
                "participant not found in roster, skipping"
            );
            continue;
        };

        if membership.semester_id != event.semester_id {
            warn!(
                event = %event.id,
                membership = %participant.membership_id,
                semester = %membership.semester_id,
                "participant belongs to another semester, skipping"
            );
            continue;
        }

        let award = calculator.award(placement)?;
        awards.push(EventAward {
            event_id: event.id,
            membership_id: participant.membership_id,
            user_id: membership.user_id,
            semester_id: event.semester_id,
            award,
        });
    }

    debug!(event = %event.id, scored = awards.len(), "event scored");
    Ok(awards)
}

/// One user's accumulated points in a semester.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking {
    pub user_id: UserId,
    pub semester_id: SemesterId,
    pub points: u64,
    pub events: u32,
}

#[derive(Debug, Clone, Copy, Default)]
struct Totals {
    points: u64,
    events: u32,
}

/// In-memory running totals per (user, semester).
#[derive(Debug, Clone, Default)]
pub struct Standings {
    totals: BTreeMap<(UserId, SemesterId), Totals>,
}

impl Standings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an award to its user's semester total
    pub fn record(&mut self, award: &EventAward) {
        let totals = self
            .totals
            .entry((award.user_id, award.semester_id))
            .or_default();
        totals.points += u64::from(award.award.points);
        totals.events += 1;
    }

    pub fn record_all<'a>(&mut self, awards: impl IntoIterator<Item = &'a EventAward>) {
        for award in awards {
            self.record(award);
        }
    }

    pub fn total(&self, user_id: UserId, semester_id: SemesterId) -> u64 {
        self.totals
            .get(&(user_id, semester_id))
            .map(|t| t.points)
            .unwrap_or(0)
    }

    /// Rankings for a semester, highest points first, ties by user id
    pub fn rankings(&self, semester_id: SemesterId) -> Vec<Ranking> {
        let mut rankings: Vec<Ranking> = self
            .totals
            .iter()
            .filter(|((_, semester), _)| *semester == semester_id)
            .map(|(&(user_id, semester_id), totals)| Ranking {
                user_id,
                semester_id,
                points: totals.points,
                events: totals.events,
            })
            .collect();

        rankings.sort_by(|a, b| b.points.cmp(&a.points).then(a.user_id.cmp(&b.user_id)));
        rankings
    }

    /// Semesters with at least one recorded award, ascending
    pub fn semesters(&self) -> Vec<SemesterId> {
        let mut semesters: Vec<SemesterId> = self.totals.keys().map(|(_, s)| *s).collect();
        semesters.sort();
        semesters.dedup();
        semesters
    }
}
