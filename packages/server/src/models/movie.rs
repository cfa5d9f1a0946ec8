use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Fixed genre vocabulary a movie may be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Genre {
    Action,
    Adventure,
    Crime,
    Comedy,
    Drama,
    Fantasy,
    Horror,
    Thriller,
    #[serde(rename = "Sci-Fi")]
    SciFi,
}

impl Genre {
    pub const ALL: [Genre; 9] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Crime,
        Genre::Comedy,
        Genre::Drama,
        Genre::Fantasy,
        Genre::Horror,
        Genre::Thriller,
        Genre::SciFi,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Crime => "Crime",
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
            Genre::Fantasy => "Fantasy",
            Genre::Horror => "Horror",
            Genre::Thriller => "Thriller",
            Genre::SciFi => "Sci-Fi",
        }
    }

    /// Exact, case-sensitive lookup used when validating input.
    pub fn from_name(name: &str) -> Option<Genre> {
        Genre::ALL.into_iter().find(|g| g.as_str() == name)
    }

    /// Case-insensitive comparison used by the genre filter.
    pub fn matches(self, query: &str) -> bool {
        self.as_str().to_lowercase() == query.to_lowercase()
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every client-writable field of a movie, fully validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MovieData {
    #[schema(example = "Dune")]
    pub title: String,
    #[schema(example = 2021)]
    pub year: i32,
    #[schema(example = "Denis Villeneuve")]
    pub director: String,
    /// Running time in minutes.
    #[schema(example = 155)]
    pub duration: u32,
    /// Rating between 0 and 10. Defaults to 0 on create.
    #[serde(default)]
    #[schema(example = 8.1)]
    pub rate: f64,
    #[schema(example = "https://example.com/dune.jpg")]
    pub poster: String,
    pub genre: Vec<Genre>,
}

/// A stored movie: the validated fields plus the server-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Movie {
    #[schema(example = "c8a7d63f-3b04-44d3-9d95-8782fd7dcfaf")]
    pub id: String,
    #[serde(flatten)]
    pub data: MovieData,
}

impl Movie {
    pub fn has_genre(&self, query: &str) -> bool {
        self.data.genre.iter().any(|g| g.matches(query))
    }
}

/// PATCH payload: only the supplied fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MoviePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<Vec<Genre>>,
}

impl MoviePatch {
    pub fn is_empty(&self) -> bool {
        *self == MoviePatch::default()
    }

    /// Overwrite the fields of `base` that this patch supplies.
    pub fn apply_to(self, base: &mut MovieData) {
        if let Some(title) = self.title {
            base.title = title;
        }
        if let Some(year) = self.year {
            base.year = year;
        }
        if let Some(director) = self.director {
            base.director = director;
        }
        if let Some(duration) = self.duration {
            base.duration = duration;
        }
        if let Some(rate) = self.rate {
            base.rate = rate;
        }
        if let Some(poster) = self.poster {
            base.poster = poster;
        }
        if let Some(genre) = self.genre {
            base.genre = genre;
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MovieListQuery {
    /// Case-insensitive genre name to filter by.
    pub genre: Option<String>,
}

/// Plain `{ "message": ... }` body used for confirmations and 404s.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageBody {
    #[schema(example = "Movie deleted")]
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
