pub mod movie;
pub mod validation;
