//! Generation phases for every table in the VOD schema.
//!
//! Each phase produces a full batch of rows, appending the primary keys it
//! hands out to the [`SeedContext`] so later phases can sample them as
//! foreign keys. Phases for the independent tables (customers, movies,
//! actors, directors, advisories, categories) must run before the dependent
//! ones (rentals, wishlist, junction tables); the orchestrator in
//! `seeder` enforces that order.

use crate::catalog::{ADVISORIES, CATEGORIES};
use crate::context::{sample_id, SeedContext};
use crate::error::SeedError;
use crate::fakes::Faker;
use crate::model::{
    Actor, Advisory, CardType, Category, Customer, Director, Movie, MovieActor, MovieAdvisory,
    MovieCategory, MovieDirector, Rating, Rental, WishlistEntry,
};
use chrono::Days;
use rand::seq::IndexedRandom;
use rand::Rng;
use rust_decimal::Decimal;

/// Attempt cap for resampling loops (emails, postal codes). The value pools
/// are large enough that hitting the cap means the faker cannot produce a
/// conforming value at all, so we fail fast instead of spinning.
pub const MAX_RESAMPLES: u32 = 100;

/// Ten random digits formatted as `DDD.DDD.DDDD`.
pub fn phone_number(faker: &mut Faker) -> String {
    let digits = faker.digits(10);
    format!("{}.{}.{}", &digits[..3], &digits[3..6], &digits[6..])
}

/// A postal code with the internal space stripped, resampled until the
/// cleaned value is exactly six characters.
pub fn clean_postal_code(faker: &mut Faker) -> Result<String, SeedError> {
    for _ in 0..MAX_RESAMPLES {
        let code = faker.postal_code().replace(' ', "");
        if code.len() == 6 {
            return Ok(code);
        }
    }
    Err(SeedError::Exhausted {
        field: "postal code",
        attempts: MAX_RESAMPLES,
    })
}

/// A card number with separators stripped, truncated to sixteen digits.
pub fn clean_card_number(faker: &mut Faker) -> String {
    let mut num = faker.credit_card_number().replace('-', "");
    num.truncate(16);
    num
}

/// An email not present in `used`, resampled up to [`MAX_RESAMPLES`] times.
/// The accepted address is recorded in `used` before returning.
pub fn unique_email(
    faker: &mut Faker,
    used: &mut std::collections::HashSet<String>,
) -> Result<String, SeedError> {
    for _ in 0..MAX_RESAMPLES {
        let email = faker.email();
        if used.insert(email.clone()) {
            return Ok(email);
        }
    }
    Err(SeedError::Exhausted {
        field: "email",
        attempts: MAX_RESAMPLES,
    })
}

/// Price pair in exact cents: standard definition in (1.00, 10.00], high
/// definition strictly greater and at most 5.00 above.
pub fn price_pair<R: Rng>(rng: &mut R) -> (Decimal, Decimal) {
    let sd_cents = rng.random_range(101..=1000i64);
    let hd_cents = sd_cents + rng.random_range(1..=500i64);
    (Decimal::new(sd_cents, 2), Decimal::new(hd_cents, 2))
}

pub fn generate_customers(
    faker: &mut Faker,
    count: u32,
    ctx: &mut SeedContext,
) -> Result<Vec<Customer>, SeedError> {
    let mut customers = Vec::with_capacity(count as usize);
    for i in 0..count {
        let customer_id = i as i32 + 1;
        let first_name = faker.first_name().to_string();
        let last_name = faker.last_name().to_string();
        let email = unique_email(faker, &mut ctx.used_emails)?;
        let phone_number = phone_number(faker);
        let address = format!("{}, {}", faker.street_address(), faker.city());
        let postal_code = clean_postal_code(faker)?;
        let credit_card_num = clean_card_number(faker);
        let credit_card_type = *CardType::ALL.choose(faker.rng()).unwrap();
        customers.push(Customer {
            customer_id,
            first_name,
            last_name,
            email,
            phone_number,
            address,
            postal_code,
            credit_card_num,
            credit_card_type,
        });
        ctx.customer_ids.push(customer_id);
    }
    Ok(customers)
}

pub fn generate_movies(faker: &mut Faker, count: u32, ctx: &mut SeedContext) -> Vec<Movie> {
    let mut movies = Vec::with_capacity(count as usize);
    for i in 0..count {
        let movie_id = i as i32 + 1;
        // The numeric suffix keeps titles unique even when the phrase pool
        // repeats.
        let title = format!("{} {}", faker.catch_phrase(), movie_id);
        let duration_minutes = faker.rng().random_range(60..=180);
        let rating = *Rating::ALL.choose(faker.rng()).unwrap();
        let (sd_price, hd_price) = price_pair(faker.rng());
        let is_new_release = faker.rng().random_bool(0.5);
        let is_most_popular = faker.rng().random_bool(0.5);
        let is_coming_soon = faker.rng().random_bool(0.5);
        movies.push(Movie {
            movie_id,
            title,
            duration_minutes,
            rating,
            sd_price,
            hd_price,
            is_new_release,
            is_most_popular,
            is_coming_soon,
        });
        ctx.movie_ids.push(movie_id);
    }
    movies
}

pub fn generate_actors(faker: &mut Faker, count: u32, ctx: &mut SeedContext) -> Vec<Actor> {
    let mut actors = Vec::with_capacity(count as usize);
    for i in 0..count {
        let actor_id = i as i32 + 1;
        actors.push(Actor {
            actor_id,
            first_name: faker.first_name().to_string(),
            last_name: faker.last_name().to_string(),
            date_of_birth: faker.date_of_birth(15, 80),
        });
        ctx.actor_ids.push(actor_id);
    }
    actors
}

pub fn generate_directors(faker: &mut Faker, count: u32, ctx: &mut SeedContext) -> Vec<Director> {
    let mut directors = Vec::with_capacity(count as usize);
    for i in 0..count {
        let director_id = i as i32 + 1;
        directors.push(Director {
            director_id,
            first_name: faker.first_name().to_string(),
            last_name: faker.last_name().to_string(),
            date_of_birth: faker.date_of_birth(20, 90),
        });
        ctx.director_ids.push(director_id);
    }
    directors
}

/// Advisories cycle the fixed catalog; no randomness involved.
pub fn generate_advisories(count: u32, ctx: &mut SeedContext) -> Vec<Advisory> {
    let mut advisories = Vec::with_capacity(count as usize);
    for i in 0..count {
        let advisory_id = i as i32 + 1;
        let (short_description, full_description) = ADVISORIES[i as usize % ADVISORIES.len()];
        advisories.push(Advisory {
            advisory_id,
            short_description,
            full_description,
        });
        ctx.advisory_ids.push(advisory_id);
    }
    advisories
}

/// Categories cycle the genre catalog. A parent, when assigned, is sampled
/// from ids created in earlier iterations only, so the parent graph is a
/// forest and cycles cannot form.
pub fn generate_categories(faker: &mut Faker, count: u32, ctx: &mut SeedContext) -> Vec<Category> {
    let mut categories = Vec::with_capacity(count as usize);
    for i in 0..count {
        let category_id = i as i32 + 1;
        let name = CATEGORIES[i as usize % CATEGORIES.len()];
        let parent_category_id = if !ctx.category_ids.is_empty() && faker.rng().random_bool(0.5) {
            Some(sample_id(faker.rng(), &ctx.category_ids))
        } else {
            None
        };
        categories.push(Category {
            category_id,
            name,
            parent_category_id,
        });
        ctx.category_ids.push(category_id);
    }
    categories
}

pub fn generate_rentals(faker: &mut Faker, count: u32, ctx: &mut SeedContext) -> Vec<Rental> {
    let today = faker.today();
    let year_ago = today - Days::new(365);
    let mut rentals = Vec::with_capacity(count as usize);
    for i in 0..count {
        let rental_date = faker.date_between(year_ago, today);
        let start_viewing_date = faker.date_between(rental_date, today);
        let expiry_date = start_viewing_date + Days::new(1);
        let price_paid = Decimal::new(faker.rng().random_range(500..=1500i64), 2);
        let credit_card_num = clean_card_number(faker);
        let credit_card_type = *CardType::ALL.choose(faker.rng()).unwrap();
        let customer_rating = faker.rng().random_range(1..=5);
        let customer_id = sample_id(faker.rng(), &ctx.customer_ids);
        let movie_id = sample_id(faker.rng(), &ctx.movie_ids);
        rentals.push(Rental {
            rental_id: i as i32 + 1,
            rental_date,
            start_viewing_date,
            expiry_date,
            price_paid,
            credit_card_num,
            credit_card_type,
            customer_rating,
            customer_id,
            movie_id,
        });
    }
    rentals
}

/// Wishlist entries are unique per (customer, movie). A sampled pair that was
/// already used wastes the iteration rather than retrying, so the result may
/// hold fewer than `count` rows.
pub fn generate_wishlist(
    faker: &mut Faker,
    count: u32,
    ctx: &mut SeedContext,
) -> Vec<WishlistEntry> {
    let today = faker.today();
    let year_ago = today - Days::new(365);
    let mut entries = Vec::new();
    for _ in 0..count {
        let customer_id = sample_id(faker.rng(), &ctx.customer_ids);
        let movie_id = sample_id(faker.rng(), &ctx.movie_ids);
        if !ctx.wishlist_pairs.insert((customer_id, movie_id)) {
            continue;
        }
        entries.push(WishlistEntry {
            customer_id,
            movie_id,
            date_added: faker.date_between(year_ago, today),
        });
    }
    entries
}

/// Movie-actor links allow duplicates; an actor can hold several roles in the
/// same movie.
pub fn generate_movie_actors(
    faker: &mut Faker,
    count: u32,
    ctx: &mut SeedContext,
) -> Vec<MovieActor> {
    let mut links = Vec::with_capacity(count as usize);
    for _ in 0..count {
        links.push(MovieActor {
            movie_id: sample_id(faker.rng(), &ctx.movie_ids),
            actor_id: sample_id(faker.rng(), &ctx.actor_ids),
            role_name: faker.full_name(),
        });
    }
    links
}

pub fn generate_movie_directors(
    faker: &mut Faker,
    count: u32,
    ctx: &mut SeedContext,
) -> Vec<MovieDirector> {
    let mut links = Vec::new();
    for _ in 0..count {
        let movie_id = sample_id(faker.rng(), &ctx.movie_ids);
        let director_id = sample_id(faker.rng(), &ctx.director_ids);
        if !ctx.movie_director_pairs.insert((movie_id, director_id)) {
            continue;
        }
        links.push(MovieDirector {
            movie_id,
            director_id,
        });
    }
    links
}

pub fn generate_movie_advisories(
    faker: &mut Faker,
    count: u32,
    ctx: &mut SeedContext,
) -> Vec<MovieAdvisory> {
    let mut links = Vec::new();
    for _ in 0..count {
        let movie_id = sample_id(faker.rng(), &ctx.movie_ids);
        let advisory_id = sample_id(faker.rng(), &ctx.advisory_ids);
        if !ctx.movie_advisory_pairs.insert((movie_id, advisory_id)) {
            continue;
        }
        links.push(MovieAdvisory {
            movie_id,
            advisory_id,
        });
    }
    links
}

pub fn generate_movie_categories(
    faker: &mut Faker,
    count: u32,
    ctx: &mut SeedContext,
) -> Vec<MovieCategory> {
    let mut links = Vec::with_capacity(count as usize);
    for _ in 0..count {
        links.push(MovieCategory {
            movie_id: sample_id(faker.rng(), &ctx.movie_ids),
            category_id: sample_id(faker.rng(), &ctx.category_ids),
        });
    }
    links
}
