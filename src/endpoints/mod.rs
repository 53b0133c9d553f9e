//! Named accessors over the request façade.
//!
//! Each accessor groups the read operations for one resource family and
//! holds nothing but a reference to the shared façade. Every operation is a
//! single stateless request/response round trip — one façade call, no
//! fan-out, no aggregation.

pub mod athletes;
pub mod news;
pub mod scoreboard;
pub mod teams;

pub use athletes::{AthleteListParams, Athletes};
pub use news::{News, NewsParams};
pub use scoreboard::{Scoreboard, ScoreboardParams};
pub use teams::Teams;
