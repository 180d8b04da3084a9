use std::collections::HashMap;
use std::io::IsTerminal;
use owo_colors::OwoColorize;

use crate::eligibility::{Membership, UserId};
use crate::points::PointsAward;
use crate::standings::Ranking;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a points award, with the calculation spelled out in verbose mode
pub fn format_award(award: &PointsAward, verbose: bool, use_colors: bool) -> String {
    let points = if use_colors {
        award.points.bold().to_string()
    } else {
        award.points.to_string()
    };

    if !verbose {
        return points;
    }

    format!(
        "{}\n  Placement: {} of {}\n  Base points: {}\n  Scaling: {} * {} / {} (truncated)",
        points,
        award.placement,
        award.field_size,
        award.base_points,
        award.base_points,
        award.field_size,
        award.standard_field
    )
}

/// Format eligible members as one line per member: "{id}  {name}"
pub fn format_eligible_list(members: &[&Membership], use_colors: bool) -> String {
    if members.is_empty() {
        return "No eligible members.".to_string();
    }

    members
        .iter()
        .map(|m| {
            let id = format!("{:>5}", m.id);
            if use_colors {
                format!("{}  {}", id.dimmed(), m.display_name())
            } else {
                format!("{}  {}", id, m.display_name())
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn user_names(roster: &[Membership]) -> HashMap<UserId, String> {
    roster
        .iter()
        .map(|m| (m.user_id, m.display_name()))
        .collect()
}

fn name_for(names: &HashMap<UserId, String>, user_id: UserId) -> String {
    names
        .get(&user_id)
        .cloned()
        .unwrap_or_else(|| format!("user #{}", user_id))
}

/// Format rankings as a table with columns: Position, Points, Events, Name
/// Position column: 3 chars (fits "99."), right-aligned
/// Tied points share a position.
pub fn format_rankings_table(rankings: &[Ranking], roster: &[Membership], use_colors: bool) -> String {
    if rankings.is_empty() {
        return "No rankings recorded.".to_string();
    }

    let names = user_names(roster);
    let mut position = 0;
    let mut last_points = None;

    rankings
        .iter()
        .enumerate()
        .map(|(idx, ranking)| {
            if last_points != Some(ranking.points) {
                position = idx + 1;
                last_points = Some(ranking.points);
            }
            let position_str = format!("{:>2}.", position);
            let points_str = format!("{:>7}", ranking.points);
            let events_str = format!("{:>3} ev", ranking.events);
            let name = name_for(&names, ranking.user_id);

            if use_colors {
                format!(
                    "{} {}  {}  {}",
                    position_str.dimmed(),
                    points_str.bold(),
                    events_str.dimmed(),
                    name
                )
            } else {
                format!("{} {}  {}  {}", position_str, points_str, events_str, name)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format rankings as tab-separated values for scripting
/// Columns: user_id, semester_id, points, events, name (no headers, no colors)
pub fn format_rankings_tsv(rankings: &[Ranking], roster: &[Membership]) -> String {
    let names = user_names(roster);
    rankings
        .iter()
        .map(|r| {
            format!(
                "{}\t{}\t{}\t{}\t{}",
                r.user_id,
                r.semester_id,
                r.points,
                r.events,
                name_for(&names, r.user_id)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
