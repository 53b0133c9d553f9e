//! Type-safe wrappers for ESPN identifiers and time periods.

pub mod ids;
pub mod league;
pub mod time;

pub use ids::{AthleteId, TeamId};
pub use league::League;
pub use time::{Season, SeasonType, Week};
