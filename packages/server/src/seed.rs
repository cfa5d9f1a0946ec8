use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::models::movie::Movie;
use crate::store::{MovieStore, StoreError};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Parse a seed document: a JSON array of movies with their ids.
pub fn parse_seed(json: &str) -> Result<Vec<Movie>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Build the store from the seed file at `path`.
///
/// A missing file yields an empty store; an unreadable or malformed one, or
/// one with repeated ids, is an error.
pub fn load_store(path: &Path) -> Result<MovieStore, SeedError> {
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "Seed file not found, starting with an empty collection");
            return Ok(MovieStore::new());
        }
        Err(source) => {
            return Err(SeedError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let movies = parse_seed(&json).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let count = movies.len();
    let store = MovieStore::from_seed(movies)?;

    info!(count, path = %path.display(), "Seeded movies");
    Ok(store)
}
