//! Parameterized INSERT statements for the VOD tables.
//!
//! All inserts go through the [`SqlSink`] seam so the seeding flow can be
//! exercised against a recording fake in tests. The production sink is a
//! `tokio_postgres::Transaction`, which is what makes the whole run
//! all-or-nothing: nothing is visible until the orchestrator commits.

use crate::error::SeedError;
use crate::model::{
    Actor, Advisory, Category, Customer, Director, Movie, MovieActor, MovieAdvisory,
    MovieCategory, MovieDirector, Rental, WishlistEntry,
};
use async_trait::async_trait;
use tokio_postgres::types::ToSql;
use tokio_postgres::Transaction;

pub const INSERT_CUSTOMER: &str = "INSERT INTO Customer (customer_id, first_name, last_name, email, phone_number, address, postal_code, credit_card_num, credit_card_type) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)";

pub const INSERT_MOVIE: &str = "INSERT INTO Movie (movie_id, title, duration_minutes, rating, sd_price, hd_price, is_new_release, is_most_popular, is_coming_soon) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)";

pub const INSERT_ACTOR: &str = "INSERT INTO Actor (actor_id, first_name, last_name, date_of_birth) VALUES ($1, $2, $3, $4)";

pub const INSERT_DIRECTOR: &str = "INSERT INTO Director (director_id, first_name, last_name, date_of_birth) VALUES ($1, $2, $3, $4)";

pub const INSERT_ADVISORY: &str = "INSERT INTO Advisory (advisory_id, short_description, full_description) VALUES ($1, $2, $3)";

pub const INSERT_CATEGORY: &str = "INSERT INTO Category (category_id, name, parent_category_id) VALUES ($1, $2, $3)";

pub const INSERT_RENTAL: &str = "INSERT INTO Rental (rental_id, rental_date, start_viewing_date, expiry_date, price_paid, credit_card_num, credit_card_type, customer_rating, customer_id, movie_id) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)";

pub const INSERT_WISHLIST: &str =
    "INSERT INTO Wishlist (customer_id, movie_id, date_added) VALUES ($1, $2, $3)";

pub const INSERT_MOVIE_ACTOR: &str =
    "INSERT INTO movie_actor (movie_id, actor_id, role_name) VALUES ($1, $2, $3)";

pub const INSERT_MOVIE_DIRECTOR: &str =
    "INSERT INTO movie_director (movie_id, director_id) VALUES ($1, $2)";

pub const INSERT_MOVIE_ADVISORY: &str =
    "INSERT INTO movie_advisory (movie_id, advisory_id) VALUES ($1, $2)";

pub const INSERT_MOVIE_CATEGORY: &str =
    "INSERT INTO movie_category (movie_id, category_id) VALUES ($1, $2)";

/// Destination for parameterized SQL statements.
#[async_trait]
pub trait SqlSink: Sync {
    async fn execute(
        &self,
        statement: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<u64, SeedError>;
}

#[async_trait]
impl SqlSink for Transaction<'_> {
    async fn execute(
        &self,
        statement: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<u64, SeedError> {
        Ok(Transaction::execute(self, statement, params).await?)
    }
}

pub async fn insert_customer(sink: &dyn SqlSink, c: &Customer) -> Result<(), SeedError> {
    sink.execute(
        INSERT_CUSTOMER,
        &[
            &c.customer_id,
            &c.first_name,
            &c.last_name,
            &c.email,
            &c.phone_number,
            &c.address,
            &c.postal_code,
            &c.credit_card_num,
            &c.credit_card_type.as_str(),
        ],
    )
    .await?;
    Ok(())
}

pub async fn insert_movie(sink: &dyn SqlSink, m: &Movie) -> Result<(), SeedError> {
    sink.execute(
        INSERT_MOVIE,
        &[
            &m.movie_id,
            &m.title,
            &m.duration_minutes,
            &m.rating.as_str(),
            &m.sd_price,
            &m.hd_price,
            &m.is_new_release,
            &m.is_most_popular,
            &m.is_coming_soon,
        ],
    )
    .await?;
    Ok(())
}

pub async fn insert_actor(sink: &dyn SqlSink, a: &Actor) -> Result<(), SeedError> {
    sink.execute(
        INSERT_ACTOR,
        &[&a.actor_id, &a.first_name, &a.last_name, &a.date_of_birth],
    )
    .await?;
    Ok(())
}

pub async fn insert_director(sink: &dyn SqlSink, d: &Director) -> Result<(), SeedError> {
    sink.execute(
        INSERT_DIRECTOR,
        &[
            &d.director_id,
            &d.first_name,
            &d.last_name,
            &d.date_of_birth,
        ],
    )
    .await?;
    Ok(())
}

pub async fn insert_advisory(sink: &dyn SqlSink, a: &Advisory) -> Result<(), SeedError> {
    sink.execute(
        INSERT_ADVISORY,
        &[&a.advisory_id, &a.short_description, &a.full_description],
    )
    .await?;
    Ok(())
}

pub async fn insert_category(sink: &dyn SqlSink, c: &Category) -> Result<(), SeedError> {
    sink.execute(
        INSERT_CATEGORY,
        &[&c.category_id, &c.name, &c.parent_category_id],
    )
    .await?;
    Ok(())
}

pub async fn insert_rental(sink: &dyn SqlSink, r: &Rental) -> Result<(), SeedError> {
    sink.execute(
        INSERT_RENTAL,
        &[
            &r.rental_id,
            &r.rental_date,
            &r.start_viewing_date,
            &r.expiry_date,
            &r.price_paid,
            &r.credit_card_num,
            &r.credit_card_type.as_str(),
            &r.customer_rating,
            &r.customer_id,
            &r.movie_id,
        ],
    )
    .await?;
    Ok(())
}

pub async fn insert_wishlist_entry(sink: &dyn SqlSink, w: &WishlistEntry) -> Result<(), SeedError> {
    sink.execute(
        INSERT_WISHLIST,
        &[&w.customer_id, &w.movie_id, &w.date_added],
    )
    .await?;
    Ok(())
}

pub async fn insert_movie_actor(sink: &dyn SqlSink, l: &MovieActor) -> Result<(), SeedError> {
    sink.execute(
        INSERT_MOVIE_ACTOR,
        &[&l.movie_id, &l.actor_id, &l.role_name],
    )
    .await?;
    Ok(())
}

pub async fn insert_movie_director(sink: &dyn SqlSink, l: &MovieDirector) -> Result<(), SeedError> {
    sink.execute(INSERT_MOVIE_DIRECTOR, &[&l.movie_id, &l.director_id])
        .await?;
    Ok(())
}

pub async fn insert_movie_advisory(sink: &dyn SqlSink, l: &MovieAdvisory) -> Result<(), SeedError> {
    sink.execute(INSERT_MOVIE_ADVISORY, &[&l.movie_id, &l.advisory_id])
        .await?;
    Ok(())
}

pub async fn insert_movie_category(sink: &dyn SqlSink, l: &MovieCategory) -> Result<(), SeedError> {
    sink.execute(INSERT_MOVIE_CATEGORY, &[&l.movie_id, &l.category_id])
        .await?;
    Ok(())
}
