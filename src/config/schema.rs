use serde::{Deserialize, Serialize};

use crate::points::PointsConfig;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub points: Option<PointsConfig>,
}
