//! News accessor.

use std::sync::Arc;

use crate::client::Facade;
use crate::domain::Domain;
use crate::error::Result;
use crate::models::NewsResponse;
use crate::types::{League, TeamId};

/// Read operations for league news feeds.
#[derive(Debug)]
pub struct News {
    facade: Arc<Facade>,
}

/// Filters for [`News::latest`].
#[derive(Debug, Clone, Default)]
pub struct NewsParams {
    /// Maximum number of articles to return.
    pub limit: Option<u32>,
    /// Restrict the feed to one team.
    pub team: Option<TeamId>,
}

impl News {
    pub(crate) fn new(facade: Arc<Facade>) -> Self {
        Self { facade }
    }

    /// Latest news for a league.
    pub async fn latest(&self, league: &League, params: NewsParams) -> Result<NewsResponse> {
        let path = format!("/sports/{}/{}/news", league.sport(), league.slug());

        let mut query = Vec::new();
        if let Some(limit) = params.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(team) = params.team {
            query.push(("team", team.to_string()));
        }

        self.facade.request_json(Domain::Site, &path, &query).await
    }
}
