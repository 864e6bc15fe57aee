//! Error types for the seeding run.

use thiserror::Error;

/// Errors that can occur while seeding the VOD database.
#[derive(Error, Debug)]
pub enum SeedError {
    /// PostgreSQL connection or query error.
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] tokio_postgres::Error),

    /// A bounded resampling loop ran out of attempts before producing a
    /// conforming value.
    #[error("gave up generating a conforming {field} after {attempts} attempts")]
    Exhausted { field: &'static str, attempts: u32 },
}
