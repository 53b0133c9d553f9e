//! Scoreboard accessor.

use std::sync::Arc;

use crate::client::Facade;
use crate::domain::Domain;
use crate::error::Result;
use crate::models::ScoreboardResponse;
use crate::types::{League, SeasonType, Week};

/// Read operations for league scoreboards.
#[derive(Debug)]
pub struct Scoreboard {
    facade: Arc<Facade>,
}

/// Filters for [`Scoreboard::get`].
///
/// `dates` takes ESPN's formats: `YYYYMMDD`, `YYYYMM`, `YYYY`, or a
/// `YYYYMMDD-YYYYMMDD` range.
#[derive(Debug, Clone, Default)]
pub struct ScoreboardParams {
    pub dates: Option<String>,
    pub week: Option<Week>,
    pub season_type: Option<SeasonType>,
    pub limit: Option<u32>,
}

impl Scoreboard {
    pub(crate) fn new(facade: Arc<Facade>) -> Self {
        Self { facade }
    }

    /// The scoreboard for the current date.
    pub async fn current(&self, league: &League) -> Result<ScoreboardResponse> {
        self.get(league, ScoreboardParams::default()).await
    }

    /// The scoreboard filtered by date, week, and season type.
    pub async fn get(
        &self,
        league: &League,
        params: ScoreboardParams,
    ) -> Result<ScoreboardResponse> {
        let path = format!("/sports/{}/{}/scoreboard", league.sport(), league.slug());

        let mut query = Vec::new();
        if let Some(dates) = params.dates {
            query.push(("dates", dates));
        }
        if let Some(week) = params.week {
            query.push(("week", week.to_string()));
        }
        if let Some(season_type) = params.season_type {
            query.push(("seasontype", season_type.to_string()));
        }
        if let Some(limit) = params.limit {
            query.push(("limit", limit.to_string()));
        }

        self.facade.request_json(Domain::Site, &path, &query).await
    }
}
