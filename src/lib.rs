pub mod domain;
pub mod models;
pub mod processing;
pub mod repository;
pub mod schema;
pub mod text;

/// Recognizer scores below this are dropped.
pub const MATCH_THRESHOLD: f64 = 0.10;

/// Upper bound on category suggestions returned to the ticket form.
pub const MAX_CATEGORY_SUGGESTIONS: usize = 3;
