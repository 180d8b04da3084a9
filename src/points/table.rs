use std::collections::BTreeMap;

use super::config::PointsConfig;
use super::validation::validate_points;
use crate::error::{PointsError, Result};

/// Field size the reference table is calibrated against.
pub const STANDARD_FIELD: u32 = 50;

/// Base points for any placement the table does not list.
pub const PARTICIPATION_FLOOR: u32 = 1;

const REFERENCE_TABLE: [(u32, u32); 10] = [
    (1, 100),
    (2, 80),
    (3, 65),
    (4, 55),
    (5, 45),
    (6, 40),
    (7, 35),
    (8, 30),
    (9, 25),
    (10, 20),
];

/// Immutable placement -> base points lookup.
///
/// Sparse: placements past the last entry fall back to
/// [`PARTICIPATION_FLOOR`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementPointsTable {
    entries: BTreeMap<u32, u32>,
    standard_field: u32,
}

impl Default for PlacementPointsTable {
    fn default() -> Self {
        Self {
            entries: REFERENCE_TABLE.into_iter().collect(),
            standard_field: STANDARD_FIELD,
        }
    }
}

impl PlacementPointsTable {
    /// Build a table from explicit entries.
    ///
    /// Fails if `standard_field` is zero or any placement is zero.
    pub fn new(entries: BTreeMap<u32, u32>, standard_field: u32) -> Result<Self> {
        let mut errors = Vec::new();
        if standard_field == 0 {
            errors.push("standard field must be a positive integer".to_string());
        }
        if entries.contains_key(&0) {
            errors.push("placements start at 1".to_string());
        }
        if !errors.is_empty() {
            return Err(PointsError::InvalidTable(errors));
        }

        Ok(Self {
            entries,
            standard_field,
        })
    }

    /// Build a table from configuration, falling back to the reference
    /// table and standard field for anything left unset.
    pub fn from_config(config: &PointsConfig) -> Result<Self> {
        validate_points(config).map_err(PointsError::InvalidTable)?;

        let standard_field = config.standard_field.unwrap_or(STANDARD_FIELD);
        let entries = match config.table {
            Some(ref table) => {
                let mut entries = BTreeMap::new();
                for (key, points) in table {
                    let placement = key.trim().parse::<u32>().map_err(|e| {
                        PointsError::InvalidTable(vec![format!("'{}': {}", key, e)])
                    })?;
                    if entries.insert(placement, *points).is_some() {
                        return Err(PointsError::InvalidTable(vec![format!(
                            "'{}': duplicate placement {}",
                            key, placement
                        )]));
                    }
                }
                entries
            }
            None => REFERENCE_TABLE.into_iter().collect(),
        };

        Self::new(entries, standard_field)
    }

    /// Base points for a placement, or the participation floor when untabulated.
    pub fn base_points(&self, placement: u32) -> u32 {
        self.entries
            .get(&placement)
            .copied()
            .unwrap_or(PARTICIPATION_FLOOR)
    }

    pub fn is_tabulated(&self, placement: u32) -> bool {
        self.entries.contains_key(&placement)
    }

    pub fn standard_field(&self) -> u32 {
        self.standard_field
    }

    /// Tabulated entries in placement order.
    pub fn entries(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.entries.iter().map(|(p, b)| (*p, *b))
    }
}
