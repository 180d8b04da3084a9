pub mod aggregate;

pub use aggregate::{score_event, EventAward, Ranking, Standings};
