use std::collections::HashSet;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::models::movie::{Movie, MovieData, MoviePatch};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("movie store lock poisoned during {0}")]
    LockPoisoned(&'static str),

    #[error("duplicate movie id: {0}")]
    DuplicateId(String),
}

/// The in-memory movie collection.
///
/// All access goes through a single lock, so every operation observes and
/// leaves behind a consistent collection. Readers get cloned snapshots and
/// never hold references into the store.
#[derive(Debug, Default)]
pub struct MovieStore {
    movies: RwLock<Vec<Movie>>,
}

impl MovieStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from seed records, rejecting repeated ids.
    pub fn from_seed(movies: Vec<Movie>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(movies.len());
        for movie in &movies {
            if !seen.insert(movie.id.as_str()) {
                return Err(StoreError::DuplicateId(movie.id.clone()));
            }
        }
        Ok(Self {
            movies: RwLock::new(movies),
        })
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Movie>>, StoreError> {
        self.movies
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Movie>>, StoreError> {
        self.movies
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.read()?.is_empty())
    }

    pub fn list_all(&self) -> Result<Vec<Movie>, StoreError> {
        Ok(self.read()?.clone())
    }

    /// Movies with at least one genre equal to `genre`, ignoring case.
    pub fn filter_by_genre(&self, genre: &str) -> Result<Vec<Movie>, StoreError> {
        Ok(self
            .read()?
            .iter()
            .filter(|m| m.has_genre(genre))
            .cloned()
            .collect())
    }

    pub fn find_by_id(&self, id: &str) -> Result<Option<Movie>, StoreError> {
        Ok(self.read()?.iter().find(|m| m.id == id).cloned())
    }

    /// Append a new movie under a freshly generated id.
    pub fn insert(&self, data: MovieData) -> Result<Movie, StoreError> {
        let mut movies = self.write()?;

        let mut id = Uuid::new_v4().to_string();
        while movies.iter().any(|m| m.id == id) {
            id = Uuid::new_v4().to_string();
        }

        let movie = Movie { id, data };
        movies.push(movie.clone());
        info!(id = %movie.id, title = %movie.data.title, "Movie created");
        Ok(movie)
    }

    /// Merge `patch` over the stored movie. Returns `None` if `id` is unknown.
    pub fn update_partial(
        &self,
        id: &str,
        patch: MoviePatch,
    ) -> Result<Option<Movie>, StoreError> {
        let mut movies = self.write()?;
        let Some(slot) = movies.iter_mut().find(|m| m.id == id) else {
            return Ok(None);
        };

        if !patch.is_empty() {
            let mut data = slot.data.clone();
            patch.apply_to(&mut data);
            slot.data = data;
            info!(id, "Movie updated");
        }
        Ok(Some(slot.clone()))
    }

    /// Remove the movie with `id`. Returns whether anything was removed.
    pub fn remove(&self, id: &str) -> Result<bool, StoreError> {
        let mut movies = self.write()?;
        let Some(index) = movies.iter().position(|m| m.id == id) else {
            return Ok(false);
        };
        movies.remove(index);
        info!(id, "Movie deleted");
        Ok(true)
    }
}
