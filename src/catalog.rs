use std::rc::Rc;

use log::error;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const EMBEDDED_CATALOG: &str = include_str!("../assets/video_projects.json");

/// One portfolio video. Catalog order is display order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoEntry {
    pub title: String,
    pub description: String,
    #[serde(alias = "url")]
    pub source: String,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed video catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

pub fn parse(json: &str) -> Result<Vec<VideoEntry>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

/// Loads the catalog bundled with the site. A broken catalog renders as an
/// empty gallery rather than taking the whole page down.
pub fn load() -> Rc<[VideoEntry]> {
    match parse(EMBEDDED_CATALOG) {
        Ok(entries) => entries.into(),
        Err(e) => {
            error!("Failed to load video catalog: {}", e);
            Rc::from(Vec::new())
        }
    }
}
