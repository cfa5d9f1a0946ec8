pub mod fallback;
pub mod movie;
