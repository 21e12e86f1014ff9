//! Model to entity mappers
//!
//! - `From<Model> for Entity` where every column maps directly
//! - `TryFrom<Model>` where a TEXT status column has to be parsed

mod attendance;
mod equipment;
mod member;
mod payment;
mod trainer;

use std::str::FromStr;

use gym_core::DomainError;

/// Parse a status column, treating unknown values as corrupt data
fn parse_column<T>(column: &'static str, raw: &str) -> Result<T, DomainError>
where
    T: FromStr<Err = String>,
{
    raw.parse()
        .map_err(|e| DomainError::DatabaseError(format!("{column}: {e}")))
}
