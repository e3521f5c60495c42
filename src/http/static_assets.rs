//! Prebuilt front-end serving.
//!
//! Production deployments bundle the front-end build output next to the
//! binary; any path the API does not claim falls through to this service,
//! with the index document covering client-side routes.

use std::path::Path;

use tower_http::services::{ServeDir, ServeFile};

use crate::config::StaticAssetsConfig;

/// File service for the front-end build directory.
///
/// Unknown paths inside the directory fall back to the index document so
/// the single-page front end can handle its own routing.
pub fn front_end(config: &StaticAssetsConfig) -> ServeDir<ServeFile> {
    let index = Path::new(&config.dir).join(&config.index);
    ServeDir::new(&config.dir).fallback(ServeFile::new(index))
}
