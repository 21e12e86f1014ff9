//! Axum extractors for request handling
//!
//! Custom extractors for validated JSON bodies and typed path parameters.
//! Both reject with [`crate::response::ApiError`] so malformed input always
//! produces the standard 400 error body.

mod path;
mod validated;

pub use path::IdPath;
pub use validated::ValidatedJson;
