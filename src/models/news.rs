//! News feed records from the site API.

use serde::{Deserialize, Serialize};

/// Top-level envelope for a league news feed.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewsResponse {
    #[serde(default)]
    pub header: Option<String>,
    #[serde(default)]
    pub articles: Vec<Article>,
}

/// A single news article.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Article {
    pub headline: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub published: Option<String>,
    #[serde(rename = "type", default)]
    pub article_type: Option<String>,
    #[serde(default)]
    pub premium: Option<bool>,
    #[serde(default)]
    pub links: Option<ArticleLinks>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArticleLinks {
    #[serde(default)]
    pub web: Option<ArticleLink>,
    #[serde(default)]
    pub mobile: Option<ArticleLink>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArticleLink {
    pub href: String,
}
