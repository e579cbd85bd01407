// src/config/venues.rs
// The venue list is static configuration: built-in defaults, or a TOML file
// with the same shape passed via --venues.

use std::fs;
use std::path::Path;

use log::info;
use serde::Deserialize;

use super::consts::DEFAULT_VENUES;
use crate::error::{Result, ScrapeError};

/// One seating block to scrape: display label + seat-map page URL.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Venue {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
struct VenueFile {
    venue: Vec<Venue>,
}

/// Built-in venue list.
pub fn defaults() -> Vec<Venue> {
    DEFAULT_VENUES
        .iter()
        .map(|(label, url)| Venue {
            label: (*label).to_string(),
            url: (*url).to_string(),
        })
        .collect()
}

/// Load a venue list from a TOML file:
///
/// ```toml
/// [[venue]]
/// label = "Leeds Knights (Block 7)"
/// url = "https://..."
/// ```
pub fn load(path: &Path) -> Result<Vec<Venue>> {
    let text = fs::read_to_string(path).map_err(|source| ScrapeError::VenueFile {
        path: path.to_path_buf(),
        source,
    })?;
    let file: VenueFile = toml::from_str(&text).map_err(|source| ScrapeError::VenueFormat {
        path: path.to_path_buf(),
        source,
    })?;
    info!("loaded {} venues from {}", file.venue.len(), path.display());
    Ok(file.venue)
}
