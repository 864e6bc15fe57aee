//! vod-seed
//!
//! Seeds a video-on-demand PostgreSQL schema with synthetic but
//! referentially consistent data: customers, movies, actors, directors,
//! content advisories, categories, rentals, wishlists, and the four
//! many-to-many junction tables between them.
//!
//! The run is strictly sequential. Independent tables are generated and
//! inserted first, recording the ids they hand out; dependent tables then
//! sample those ids for their foreign keys. Everything goes through one
//! transaction committed once at the end, so a failure anywhere leaves the
//! database untouched.
//!
//! # CLI usage
//!
//! ```bash
//! # Seed 1000 rows per table into the default local database
//! vod-seed
//!
//! # Recreate tables first, custom volume and seed, JSON report
//! vod-seed --create-tables --row-count 200 --seed 7 --json \
//!   --database-url "host=localhost user=postgres password=admin dbname=VOD"
//! ```
//!
//! Same seed, same data: generation runs off a seeded RNG throughout.

use clap::Args;

pub mod catalog;
pub mod context;
pub mod ddl;
pub mod error;
pub mod fakes;
pub mod generate;
pub mod insert;
pub mod model;
pub mod seeder;

pub use context::SeedContext;
pub use error::SeedError;
pub use fakes::Faker;
pub use seeder::{seed_all, SeedReport, Seeder};

/// Options for one seeding run.
#[derive(Args, Clone, Debug)]
pub struct SeedOpts {
    /// PostgreSQL connection string (key-value or URL form)
    #[arg(
        long,
        env = "VOD_DATABASE_URL",
        default_value = "host=localhost user=postgres password=admin dbname=VOD"
    )]
    pub database_url: String,

    /// Number of rows to generate per table
    #[arg(long, default_value = "1000")]
    pub row_count: u32,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Drop and recreate the VOD tables before seeding
    #[arg(long)]
    pub create_tables: bool,

    /// Print the seed report as JSON
    #[arg(long)]
    pub json: bool,
}
