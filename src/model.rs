//! Row types for the VOD schema.
//!
//! Identifiers are sequential `i32`s assigned by the generator, not by the
//! store. Prices carry exact cents as `Decimal` so the pricing invariants
//! round-trip through NUMERIC columns without float drift.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Accepted payment card networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardType {
    AmericanExpress,
    MasterCard,
    Visa,
}

impl CardType {
    pub const ALL: [CardType; 3] = [CardType::AmericanExpress, CardType::MasterCard, CardType::Visa];

    /// Two-letter code stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            CardType::AmericanExpress => "AX",
            CardType::MasterCard => "MC",
            CardType::Visa => "VS",
        }
    }
}

/// Canadian film classification ratings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    General,
    ParentalGuidance,
    FourteenA,
    EighteenA,
    Restricted,
}

impl Rating {
    pub const ALL: [Rating; 5] = [
        Rating::General,
        Rating::ParentalGuidance,
        Rating::FourteenA,
        Rating::EighteenA,
        Rating::Restricted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::General => "G",
            Rating::ParentalGuidance => "PG",
            Rating::FourteenA => "14A",
            Rating::EighteenA => "18A",
            Rating::Restricted => "R",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Customer {
    pub customer_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Formatted as `DDD.DDD.DDDD`.
    pub phone_number: String,
    pub address: String,
    /// Exactly six characters, no internal space.
    pub postal_code: String,
    /// Exactly sixteen digits, no separators.
    pub credit_card_num: String,
    pub credit_card_type: CardType,
}

#[derive(Debug, Clone)]
pub struct Movie {
    pub movie_id: i32,
    pub title: String,
    pub duration_minutes: i32,
    pub rating: Rating,
    pub sd_price: Decimal,
    /// Strictly greater than `sd_price`, at most `sd_price + 5.00`.
    pub hd_price: Decimal,
    pub is_new_release: bool,
    pub is_most_popular: bool,
    pub is_coming_soon: bool,
}

#[derive(Debug, Clone)]
pub struct Actor {
    pub actor_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct Director {
    pub director_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct Advisory {
    pub advisory_id: i32,
    pub short_description: &'static str,
    pub full_description: &'static str,
}

#[derive(Debug, Clone)]
pub struct Category {
    pub category_id: i32,
    pub name: &'static str,
    /// Always an id created before this row, so the category graph is a
    /// forest by construction.
    pub parent_category_id: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct Rental {
    pub rental_id: i32,
    pub rental_date: NaiveDate,
    /// On or after `rental_date`.
    pub start_viewing_date: NaiveDate,
    /// Always `start_viewing_date + 1 day`.
    pub expiry_date: NaiveDate,
    pub price_paid: Decimal,
    pub credit_card_num: String,
    pub credit_card_type: CardType,
    pub customer_rating: i32,
    pub customer_id: i32,
    pub movie_id: i32,
}

#[derive(Debug, Clone)]
pub struct WishlistEntry {
    pub customer_id: i32,
    pub movie_id: i32,
    pub date_added: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct MovieActor {
    pub movie_id: i32,
    pub actor_id: i32,
    pub role_name: String,
}

#[derive(Debug, Clone)]
pub struct MovieDirector {
    pub movie_id: i32,
    pub director_id: i32,
}

#[derive(Debug, Clone)]
pub struct MovieAdvisory {
    pub movie_id: i32,
    pub advisory_id: i32,
}

#[derive(Debug, Clone)]
pub struct MovieCategory {
    pub movie_id: i32,
    pub category_id: i32,
}
