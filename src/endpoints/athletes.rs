//! Athletes accessor.
//!
//! Athletes live on the sports core API, which addresses leagues as
//! `/sports/{sport}/leagues/{slug}` rather than the site API's
//! `/sports/{sport}/{slug}`.

use std::sync::Arc;

use crate::client::Facade;
use crate::domain::Domain;
use crate::error::Result;
use crate::models::{Athlete, AthleteList};
use crate::types::{AthleteId, League, Season};

/// Read operations for league athletes.
#[derive(Debug)]
pub struct Athletes {
    facade: Arc<Facade>,
}

/// Paging filters for [`Athletes::list`].
#[derive(Debug, Clone, Default)]
pub struct AthleteListParams {
    pub limit: Option<u32>,
    pub page: Option<u32>,
    /// Restrict to currently active athletes.
    pub active: Option<bool>,
    /// Address a specific season's athlete set instead of the current one.
    pub season: Option<Season>,
}

impl Athletes {
    pub(crate) fn new(facade: Arc<Facade>) -> Self {
        Self { facade }
    }

    /// Paged `$ref` listing of a league's athletes.
    pub async fn list(&self, league: &League, params: AthleteListParams) -> Result<AthleteList> {
        let path = match params.season {
            Some(season) => format!(
                "/sports/{}/leagues/{}/seasons/{}/athletes",
                league.sport(),
                league.slug(),
                season
            ),
            None => format!(
                "/sports/{}/leagues/{}/athletes",
                league.sport(),
                league.slug()
            ),
        };

        let mut query = Vec::new();
        if let Some(limit) = params.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(page) = params.page {
            query.push(("page", page.to_string()));
        }
        if let Some(active) = params.active {
            query.push(("active", active.to_string()));
        }

        self.facade.request_json(Domain::Core, &path, &query).await
    }

    /// One athlete by ESPN id.
    pub async fn get(&self, league: &League, athlete_id: AthleteId) -> Result<Athlete> {
        let path = format!(
            "/sports/{}/leagues/{}/athletes/{}",
            league.sport(),
            league.slug(),
            athlete_id
        );
        self.facade.request_json(Domain::Core, &path, &[]).await
    }
}
