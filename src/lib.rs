pub mod config;
pub mod eligibility;
pub mod error;
pub mod input;
pub mod output;
pub mod points;
pub mod standings;

pub use error::{PointsError, Result};
