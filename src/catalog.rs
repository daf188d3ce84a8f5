//! Game catalog - display names for numeric app IDs
//!
//! Names are cosmetic. The table is fetched once per process on first use and
//! kept read-only afterwards; a failed lookup leaves it empty so every name
//! resolves to the placeholder instead of failing.
//!
//! ## Module Structure
//! - `types.rs`: Catalog, wire format, CatalogError
//! - `operations.rs`: HTTP lookup

mod operations;
mod types;

pub use operations::fetch_catalog;
pub use types::Catalog;

use crate::config::DecktuneConfig;
use crate::game_data::GameId;

use std::sync::OnceLock;
use std::time::Duration;
use tracing::{info, warn};

static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Process-wide catalog, fetched on first call
pub fn catalog(config: &DecktuneConfig) -> &'static Catalog {
    CATALOG.get_or_init(|| {
        let timeout = Duration::from_secs(config.catalog_timeout_secs);
        match fetch_catalog(&config.catalog_url, timeout) {
            Ok(catalog) => {
                info!("catalog - Loaded {} app names", catalog.len());
                catalog
            }
            Err(e) => {
                warn!("catalog - Lookup failed, names unavailable: {}", e);
                Catalog::default()
            }
        }
    })
}

/// Display name for `id`, or `"???"` when unknown
pub fn resolve_name(config: &DecktuneConfig, id: GameId) -> &'static str {
    catalog(config).name(id)
}
