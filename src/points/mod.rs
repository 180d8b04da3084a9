pub mod calculator;
pub mod config;
pub mod table;
pub mod validation;

pub use calculator::{PointsAward, PointsCalculator};
pub use config::PointsConfig;
pub use table::{PlacementPointsTable, PARTICIPATION_FLOOR, STANDARD_FIELD};
pub use validation::validate_points;
