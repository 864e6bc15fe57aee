//! Seeding orchestrator.
//!
//! `Seeder` owns the one PostgreSQL connection for the run. All inserts go
//! through a single transaction: phases run strictly in dependency order
//! (independent tables first, then everything that references them), the
//! transaction commits once after the last phase, and any failure drops it
//! uncommitted so the database is left untouched.

use crate::context::SeedContext;
use crate::ddl::{CREATE_TABLES, DROP_TABLES};
use crate::error::SeedError;
use crate::fakes::Faker;
use crate::generate;
use crate::insert::{self, SqlSink};
use serde::Serialize;
use std::time::Instant;
use tokio_postgres::{Client, NoTls};
use tracing::{debug, info};

/// Row counts inserted per table, plus run timing.
///
/// Guarded tables (wishlist and the unique-pair junctions) may come in under
/// the requested row count because colliding samples are skipped.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SeedReport {
    pub customers: u64,
    pub movies: u64,
    pub actors: u64,
    pub directors: u64,
    pub advisories: u64,
    pub categories: u64,
    pub rentals: u64,
    pub wishlist_entries: u64,
    pub movie_actor_links: u64,
    pub movie_director_links: u64,
    pub movie_advisory_links: u64,
    pub movie_category_links: u64,
    pub duration_secs: f64,
}

impl SeedReport {
    pub fn total_rows(&self) -> u64 {
        self.customers
            + self.movies
            + self.actors
            + self.directors
            + self.advisories
            + self.categories
            + self.rentals
            + self.wishlist_entries
            + self.movie_actor_links
            + self.movie_director_links
            + self.movie_advisory_links
            + self.movie_category_links
    }

    pub fn rows_per_second(&self) -> f64 {
        if self.duration_secs > 0.0 {
            self.total_rows() as f64 / self.duration_secs
        } else {
            0.0
        }
    }
}

/// Generate and insert every table through `sink`, in dependency order.
///
/// Commit/rollback is the caller's responsibility; this function only issues
/// inserts. An error from any insert propagates immediately, leaving the
/// remaining phases unexecuted.
pub async fn seed_all(
    sink: &dyn SqlSink,
    faker: &mut Faker,
    ctx: &mut SeedContext,
    row_count: u32,
) -> Result<SeedReport, SeedError> {
    let mut report = SeedReport::default();

    info!("Seeding independent tables ({} rows each)", row_count);

    let customers = generate::generate_customers(faker, row_count, ctx)?;
    for c in &customers {
        insert::insert_customer(sink, c).await?;
    }
    report.customers = customers.len() as u64;
    debug!("Customer: {} rows", report.customers);

    let movies = generate::generate_movies(faker, row_count, ctx);
    for m in &movies {
        insert::insert_movie(sink, m).await?;
    }
    report.movies = movies.len() as u64;
    debug!("Movie: {} rows", report.movies);

    let actors = generate::generate_actors(faker, row_count, ctx);
    for a in &actors {
        insert::insert_actor(sink, a).await?;
    }
    report.actors = actors.len() as u64;
    debug!("Actor: {} rows", report.actors);

    let directors = generate::generate_directors(faker, row_count, ctx);
    for d in &directors {
        insert::insert_director(sink, d).await?;
    }
    report.directors = directors.len() as u64;
    debug!("Director: {} rows", report.directors);

    let advisories = generate::generate_advisories(row_count, ctx);
    for a in &advisories {
        insert::insert_advisory(sink, a).await?;
    }
    report.advisories = advisories.len() as u64;
    debug!("Advisory: {} rows", report.advisories);

    let categories = generate::generate_categories(faker, row_count, ctx);
    for c in &categories {
        insert::insert_category(sink, c).await?;
    }
    report.categories = categories.len() as u64;
    debug!("Category: {} rows", report.categories);

    info!("Seeding dependent tables");

    let rentals = generate::generate_rentals(faker, row_count, ctx);
    for r in &rentals {
        insert::insert_rental(sink, r).await?;
    }
    report.rentals = rentals.len() as u64;
    debug!("Rental: {} rows", report.rentals);

    let wishlist = generate::generate_wishlist(faker, row_count, ctx);
    for w in &wishlist {
        insert::insert_wishlist_entry(sink, w).await?;
    }
    report.wishlist_entries = wishlist.len() as u64;
    debug!("Wishlist: {} rows", report.wishlist_entries);

    let movie_actors = generate::generate_movie_actors(faker, row_count, ctx);
    for l in &movie_actors {
        insert::insert_movie_actor(sink, l).await?;
    }
    report.movie_actor_links = movie_actors.len() as u64;

    let movie_directors = generate::generate_movie_directors(faker, row_count, ctx);
    for l in &movie_directors {
        insert::insert_movie_director(sink, l).await?;
    }
    report.movie_director_links = movie_directors.len() as u64;

    let movie_advisories = generate::generate_movie_advisories(faker, row_count, ctx);
    for l in &movie_advisories {
        insert::insert_movie_advisory(sink, l).await?;
    }
    report.movie_advisory_links = movie_advisories.len() as u64;

    let movie_categories = generate::generate_movie_categories(faker, row_count, ctx);
    for l in &movie_categories {
        insert::insert_movie_category(sink, l).await?;
    }
    report.movie_category_links = movie_categories.len() as u64;
    debug!(
        "Junction tables: {} / {} / {} / {} rows",
        report.movie_actor_links,
        report.movie_director_links,
        report.movie_advisory_links,
        report.movie_category_links
    );

    Ok(report)
}

/// Seeder holding the single connection for one run.
pub struct Seeder {
    client: Client,
}

impl Seeder {
    /// Connect to PostgreSQL and probe the connection.
    ///
    /// `database_url` accepts either key-value
    /// (`host=localhost user=postgres dbname=VOD`) or URL form.
    pub async fn connect(database_url: &str) -> Result<Self, SeedError> {
        let (client, connection) = tokio_postgres::connect(database_url, NoTls).await?;

        // The connection object drives the socket; run it in the background.
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::error!("PostgreSQL connection error: {}", e);
            }
        });

        client.simple_query("SELECT 1").await?;

        Ok(Self { client })
    }

    /// Drop and recreate the twelve VOD tables.
    pub async fn recreate_tables(&self) -> Result<(), SeedError> {
        info!("Recreating VOD tables");
        for sql in DROP_TABLES {
            self.client.execute(sql, &[]).await?;
        }
        for sql in CREATE_TABLES {
            self.client.execute(sql, &[]).await?;
        }
        Ok(())
    }

    /// Run the full seed inside one transaction, committing once at the end.
    pub async fn run(&mut self, row_count: u32, seed: u64) -> Result<SeedReport, SeedError> {
        let started = Instant::now();
        let mut faker = Faker::seeded(seed);
        let mut ctx = SeedContext::new();

        let tx = self.client.transaction().await?;
        let mut report = seed_all(&tx, &mut faker, &mut ctx, row_count).await?;
        tx.commit().await?;

        report.duration_secs = started.elapsed().as_secs_f64();
        info!(
            "Seeded {} rows in {:.2}s ({:.0} rows/sec)",
            report.total_rows(),
            report.duration_secs,
            report.rows_per_second()
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insert::{
        INSERT_ACTOR, INSERT_ADVISORY, INSERT_CATEGORY, INSERT_CUSTOMER, INSERT_DIRECTOR,
        INSERT_MOVIE, INSERT_MOVIE_CATEGORY, INSERT_RENTAL,
    };
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tokio_postgres::types::ToSql;

    /// Records issued statements; optionally fails once a statement budget is
    /// spent, standing in for a mid-run constraint violation.
    struct RecordingSink {
        statements: Mutex<Vec<String>>,
        fail_after: Option<usize>,
    }

    impl RecordingSink {
        fn new() -> Self {
            Self {
                statements: Mutex::new(Vec::new()),
                fail_after: None,
            }
        }

        fn failing_after(n: usize) -> Self {
            Self {
                statements: Mutex::new(Vec::new()),
                fail_after: Some(n),
            }
        }

        fn recorded(&self) -> Vec<String> {
            self.statements.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SqlSink for RecordingSink {
        async fn execute(
            &self,
            statement: &str,
            _params: &[&(dyn ToSql + Sync)],
        ) -> Result<u64, SeedError> {
            let mut statements = self.statements.lock().unwrap();
            if let Some(cap) = self.fail_after {
                if statements.len() >= cap {
                    return Err(SeedError::Exhausted {
                        field: "injected failure",
                        attempts: 0,
                    });
                }
            }
            statements.push(statement.to_string());
            Ok(1)
        }
    }

    #[tokio::test]
    async fn test_seed_all_inserts_every_table_in_dependency_order() {
        let sink = RecordingSink::new();
        let mut faker = Faker::seeded(42);
        let mut ctx = SeedContext::new();

        let report = seed_all(&sink, &mut faker, &mut ctx, 50).await.unwrap();

        assert_eq!(report.customers, 50);
        assert_eq!(report.movies, 50);
        assert_eq!(report.actors, 50);
        assert_eq!(report.directors, 50);
        assert_eq!(report.advisories, 50);
        assert_eq!(report.categories, 50);
        assert_eq!(report.rentals, 50);
        assert!(report.wishlist_entries <= 50);
        assert_eq!(report.movie_actor_links, 50);
        assert!(report.movie_director_links <= 50);
        assert!(report.movie_advisory_links <= 50);
        assert_eq!(report.movie_category_links, 50);

        let statements = sink.recorded();
        assert_eq!(statements.len() as u64, report.total_rows());
        assert_eq!(statements[0], INSERT_CUSTOMER);
        assert_eq!(*statements.last().unwrap(), INSERT_MOVIE_CATEGORY);

        // Every dependent-table insert comes after the last independent-table
        // insert.
        let independent = [
            INSERT_CUSTOMER,
            INSERT_MOVIE,
            INSERT_ACTOR,
            INSERT_DIRECTOR,
            INSERT_ADVISORY,
            INSERT_CATEGORY,
        ];
        let last_independent = statements
            .iter()
            .rposition(|s| independent.contains(&s.as_str()))
            .unwrap();
        let first_dependent = statements
            .iter()
            .position(|s| !independent.contains(&s.as_str()))
            .unwrap();
        assert!(last_independent < first_dependent);
        assert_eq!(statements[first_dependent], INSERT_RENTAL);
    }

    #[tokio::test]
    async fn test_seed_all_stops_at_first_failure() {
        // Fail partway through the movie phase; nothing after the failing
        // statement may be issued.
        let sink = RecordingSink::failing_after(60);
        let mut faker = Faker::seeded(42);
        let mut ctx = SeedContext::new();

        let result = seed_all(&sink, &mut faker, &mut ctx, 50).await;
        assert!(result.is_err());
        assert_eq!(sink.recorded().len(), 60);
    }

    #[test]
    fn test_report_totals() {
        let report = SeedReport {
            customers: 10,
            movies: 10,
            rentals: 5,
            duration_secs: 5.0,
            ..Default::default()
        };
        assert_eq!(report.total_rows(), 25);
        assert_eq!(report.rows_per_second(), 5.0);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = SeedReport {
            customers: 2,
            ..Default::default()
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["customers"], 2);
        assert_eq!(json["movie_actor_links"], 0);
    }
}
