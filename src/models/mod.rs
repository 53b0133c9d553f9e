//! Passive data records mirroring subsets of ESPN's JSON responses.
//!
//! Every struct here is a plain serde record: no identity, no mutation, no
//! lifecycle beyond the call that produced it. Unknown remote fields are
//! ignored; optional fields default when absent.

pub mod athletes;
pub mod news;
pub mod scoreboard;
pub mod teams;

pub use athletes::{Athlete, AthleteList, AthletePosition, ResourceRef};
pub use news::{Article, ArticleLink, ArticleLinks, NewsResponse};
pub use scoreboard::{Competition, Competitor, Event, EventStatus, ScoreboardResponse, StatusType};
pub use teams::{RosterResponse, Team, TeamLogo, TeamResponse, TeamsResponse};
