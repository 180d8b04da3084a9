use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Points table configuration.
///
/// Overrides the built-in placement table. Keys are placements written as
/// strings, values are base points awarded before field-size scaling.
///
/// Example YAML:
/// ```yaml
/// points:
///   standard_field: 50
///   table:
///     "1": 100
///     "2": 80
///     "3": 65
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PointsConfig {
    /// Field size the table is calibrated against (default: 50)
    #[serde(default)]
    pub standard_field: Option<u32>,

    /// Placement -> base points. Placements missing here earn the
    /// participation floor of 1 point.
    #[serde(default)]
    pub table: Option<BTreeMap<String, u32>>,
}
