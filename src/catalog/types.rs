//! Catalog type definitions

use crate::game_data::GameId;

use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

/// Placeholder for IDs the catalog does not know
pub const UNKNOWN_NAME: &str = "???";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("catalog request returned HTTP {0}")]
    Status(reqwest::StatusCode),
}

/// App list response from the Steam Web API
#[derive(Debug, Deserialize)]
pub struct AppListResponse {
    pub applist: AppList,
}

#[derive(Debug, Deserialize)]
pub struct AppList {
    #[serde(default)]
    pub apps: Vec<AppEntry>,
}

#[derive(Debug, Deserialize)]
pub struct AppEntry {
    pub appid: GameId,
    #[serde(default)]
    pub name: String,
}

/// ID to display name table
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    names: HashMap<GameId, String>,
}

impl Catalog {
    /// Build from (id, name) pairs. Blank names are dropped and the first
    /// non-blank name for an ID wins.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (GameId, S)>,
        S: Into<String>,
    {
        let mut names = HashMap::new();
        for (id, name) in entries {
            let name: String = name.into();
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            names.entry(id).or_insert_with(|| name.to_string());
        }
        Self { names }
    }

    pub fn name(&self, id: GameId) -> &str {
        self.names.get(&id).map(String::as_str).unwrap_or(UNKNOWN_NAME)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl From<AppListResponse> for Catalog {
    fn from(response: AppListResponse) -> Self {
        Catalog::from_entries(
            response
                .applist
                .apps
                .into_iter()
                .map(|app| (app.appid, app.name)),
        )
    }
}
