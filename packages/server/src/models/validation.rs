//! Schema validation for movie payloads.
//!
//! Input arrives as loosely typed JSON. Each field is checked against the
//! movie schema and every failure is collected, so a client sees all problems
//! with its payload at once rather than only the first.

use chrono::{Datelike, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use url::Url;

use super::movie::{Genre, MovieData, MoviePatch};

/// Earliest accepted release year.
pub const MIN_YEAR: i64 = 1900;

/// Latest accepted release year: one past the current UTC year.
pub fn max_year() -> i64 {
    i64::from(Utc::now().year()) + 1
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct Violation {
    #[schema(example = "title")]
    pub field: String,
    #[schema(example = "Required")]
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Ordered list of violations, in schema field order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid movie payload: {}", field_list(.violations))]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

impl ValidationError {
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            violations: vec![Violation::new(field, message)],
        }
    }
}

fn field_list(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

type Check<T> = fn(&str, &Value) -> Result<T, Vec<Violation>>;

/// Walks a JSON object field by field, accumulating violations.
struct Fields<'a> {
    object: &'a Map<String, Value>,
    violations: Vec<Violation>,
}

impl<'a> Fields<'a> {
    fn new(input: &'a Value) -> Result<Self, ValidationError> {
        let object = input
            .as_object()
            .ok_or_else(|| ValidationError::single("body", "Expected object"))?;
        Ok(Self {
            object,
            violations: Vec::new(),
        })
    }

    /// Check `name` if present; absence is not a violation.
    fn optional<T>(&mut self, name: &str, check: Check<T>) -> Option<T> {
        let value = self.object.get(name)?;
        match check(name, value) {
            Ok(v) => Some(v),
            Err(mut errs) => {
                self.violations.append(&mut errs);
                None
            }
        }
    }

    fn required<T>(&mut self, name: &str, check: Check<T>) -> Option<T> {
        if !self.object.contains_key(name) {
            self.violations.push(Violation::new(name, "Required"));
            return None;
        }
        self.optional(name, check)
    }

    fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    fn into_error(self) -> ValidationError {
        ValidationError {
            violations: self.violations,
        }
    }
}

/// Validate a complete movie. Every required field must be present and valid;
/// `rate` defaults to 0.
pub fn validate_full(input: &Value) -> Result<MovieData, ValidationError> {
    let mut fields = Fields::new(input)?;

    let title = fields.required("title", check_text);
    let year = fields.required("year", check_year);
    let director = fields.required("director", check_text);
    let duration = fields.required("duration", check_duration);
    let rate = fields.optional("rate", check_rate);
    let poster = fields.required("poster", check_poster);
    let genre = fields.required("genre", check_genre);

    match (title, year, director, duration, poster, genre) {
        (Some(title), Some(year), Some(director), Some(duration), Some(poster), Some(genre))
            if fields.is_clean() =>
        {
            Ok(MovieData {
                title,
                year,
                director,
                duration,
                rate: rate.unwrap_or(0.0),
                poster,
                genre,
            })
        }
        _ => Err(fields.into_error()),
    }
}

/// Validate a patch: only the supplied fields are checked. An empty object is
/// a valid, empty patch.
pub fn validate_partial(input: &Value) -> Result<MoviePatch, ValidationError> {
    let mut fields = Fields::new(input)?;

    let patch = MoviePatch {
        title: fields.optional("title", check_text),
        year: fields.optional("year", check_year),
        director: fields.optional("director", check_text),
        duration: fields.optional("duration", check_duration),
        rate: fields.optional("rate", check_rate),
        poster: fields.optional("poster", check_poster),
        genre: fields.optional("genre", check_genre),
    };

    if fields.is_clean() {
        Ok(patch)
    } else {
        Err(fields.into_error())
    }
}

fn fail<T>(field: &str, message: impl Into<String>) -> Result<T, Vec<Violation>> {
    Err(vec![Violation::new(field, message)])
}

fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) if n.is_f64() => None,
        // Anything beyond i64 is out of every accepted range anyway.
        Value::Number(n) => Some(n.as_i64().unwrap_or(i64::MAX)),
        _ => None,
    }
}

fn check_text(field: &str, value: &Value) -> Result<String, Vec<Violation>> {
    match value {
        Value::String(s) if s.trim().is_empty() => fail(field, "Must not be empty"),
        Value::String(s) => Ok(s.clone()),
        _ => fail(field, "Expected string"),
    }
}

fn check_year(field: &str, value: &Value) -> Result<i32, Vec<Violation>> {
    let Some(year) = integer(value) else {
        return fail(field, "Expected integer");
    };
    let max = max_year();
    if !(MIN_YEAR..=max).contains(&year) {
        return fail(field, format!("Must be between {MIN_YEAR} and {max}"));
    }
    i32::try_from(year).or_else(|_| fail(field, format!("Must be between {MIN_YEAR} and {max}")))
}

fn check_duration(field: &str, value: &Value) -> Result<u32, Vec<Violation>> {
    let Some(minutes) = integer(value) else {
        return fail(field, "Expected integer");
    };
    if minutes <= 0 {
        return fail(field, "Must be greater than 0");
    }
    u32::try_from(minutes).or_else(|_| fail(field, format!("Must be at most {}", u32::MAX)))
}

fn check_rate(field: &str, value: &Value) -> Result<f64, Vec<Violation>> {
    let Some(rate) = value.as_f64() else {
        return fail(field, "Expected number");
    };
    if !(0.0..=10.0).contains(&rate) {
        return fail(field, "Must be between 0 and 10");
    }
    Ok(rate)
}

fn check_poster(field: &str, value: &Value) -> Result<String, Vec<Violation>> {
    let Value::String(s) = value else {
        return fail(field, "Expected string");
    };
    match Url::parse(s) {
        Ok(_) => Ok(s.clone()),
        Err(_) => fail(field, "Invalid url"),
    }
}

fn check_genre(field: &str, value: &Value) -> Result<Vec<Genre>, Vec<Violation>> {
    let Value::Array(items) = value else {
        return fail(field, "Expected array");
    };
    if items.is_empty() {
        return fail(field, "Must not be empty");
    }

    let mut genres = Vec::with_capacity(items.len());
    let mut violations = Vec::new();
    for (i, item) in items.iter().enumerate() {
        let element = format!("{field}[{i}]");
        match item.as_str().map(|name| (name, Genre::from_name(name))) {
            Some((_, Some(genre))) => {
                if !genres.contains(&genre) {
                    genres.push(genre);
                }
            }
            Some((name, None)) => violations.push(Violation::new(
                element,
                format!("Invalid genre '{name}', expected one of: {}", genre_names()),
            )),
            None => violations.push(Violation::new(element, "Expected string")),
        }
    }

    if violations.is_empty() {
        Ok(genres)
    } else {
        Err(violations)
    }
}

fn genre_names() -> String {
    Genre::ALL.map(Genre::as_str).join(", ")
}
