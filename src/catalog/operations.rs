//! Catalog lookup over HTTP

use crate::catalog::types::{AppListResponse, Catalog, CatalogError};

use std::time::Duration;
use tracing::debug;

/// Fetch the full ID to name table
pub fn fetch_catalog(url: &str, timeout: Duration) -> Result<Catalog, CatalogError> {
    debug!("catalog - Fetching {}", url);

    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()?;

    let response = client
        .get(url)
        .header("User-Agent", "decktune")
        .send()?;

    if !response.status().is_success() {
        return Err(CatalogError::Status(response.status()));
    }

    let apps = response.json::<AppListResponse>()?;
    Ok(Catalog::from(apps))
}
