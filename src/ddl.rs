//! Table DDL for `--create-tables`.
//!
//! Convenience for seeding an empty database: drops and recreates the twelve
//! VOD tables with the column contract the generators target. Creation runs
//! parents-first and drops run children-first so the foreign keys line up.

pub const CREATE_TABLES: [&str; 12] = [
    "CREATE TABLE Customer (
        customer_id INT PRIMARY KEY,
        first_name VARCHAR(100) NOT NULL,
        last_name VARCHAR(100) NOT NULL,
        email VARCHAR(255) NOT NULL UNIQUE,
        phone_number VARCHAR(12) NOT NULL,
        address VARCHAR(255) NOT NULL,
        postal_code CHAR(6) NOT NULL,
        credit_card_num CHAR(16) NOT NULL,
        credit_card_type CHAR(2) NOT NULL
    )",
    "CREATE TABLE Movie (
        movie_id INT PRIMARY KEY,
        title VARCHAR(255) NOT NULL,
        duration_minutes INT NOT NULL,
        rating VARCHAR(3) NOT NULL,
        sd_price NUMERIC(5, 2) NOT NULL,
        hd_price NUMERIC(5, 2) NOT NULL,
        is_new_release BOOLEAN NOT NULL,
        is_most_popular BOOLEAN NOT NULL,
        is_coming_soon BOOLEAN NOT NULL
    )",
    "CREATE TABLE Actor (
        actor_id INT PRIMARY KEY,
        first_name VARCHAR(100) NOT NULL,
        last_name VARCHAR(100) NOT NULL,
        date_of_birth DATE NOT NULL
    )",
    "CREATE TABLE Director (
        director_id INT PRIMARY KEY,
        first_name VARCHAR(100) NOT NULL,
        last_name VARCHAR(100) NOT NULL,
        date_of_birth DATE NOT NULL
    )",
    "CREATE TABLE Advisory (
        advisory_id INT PRIMARY KEY,
        short_description VARCHAR(100) NOT NULL,
        full_description TEXT NOT NULL
    )",
    "CREATE TABLE Category (
        category_id INT PRIMARY KEY,
        name VARCHAR(50) NOT NULL,
        parent_category_id INT REFERENCES Category (category_id)
    )",
    "CREATE TABLE Rental (
        rental_id INT PRIMARY KEY,
        rental_date DATE NOT NULL,
        start_viewing_date DATE NOT NULL,
        expiry_date DATE NOT NULL,
        price_paid NUMERIC(5, 2) NOT NULL,
        credit_card_num CHAR(16) NOT NULL,
        credit_card_type CHAR(2) NOT NULL,
        customer_rating INT NOT NULL,
        customer_id INT NOT NULL REFERENCES Customer (customer_id),
        movie_id INT NOT NULL REFERENCES Movie (movie_id)
    )",
    "CREATE TABLE Wishlist (
        customer_id INT NOT NULL REFERENCES Customer (customer_id),
        movie_id INT NOT NULL REFERENCES Movie (movie_id),
        date_added DATE NOT NULL,
        PRIMARY KEY (customer_id, movie_id)
    )",
    "CREATE TABLE movie_actor (
        movie_id INT NOT NULL REFERENCES Movie (movie_id),
        actor_id INT NOT NULL REFERENCES Actor (actor_id),
        role_name VARCHAR(200) NOT NULL
    )",
    "CREATE TABLE movie_director (
        movie_id INT NOT NULL REFERENCES Movie (movie_id),
        director_id INT NOT NULL REFERENCES Director (director_id),
        PRIMARY KEY (movie_id, director_id)
    )",
    "CREATE TABLE movie_advisory (
        movie_id INT NOT NULL REFERENCES Movie (movie_id),
        advisory_id INT NOT NULL REFERENCES Advisory (advisory_id),
        PRIMARY KEY (movie_id, advisory_id)
    )",
    "CREATE TABLE movie_category (
        movie_id INT NOT NULL REFERENCES Movie (movie_id),
        category_id INT NOT NULL REFERENCES Category (category_id)
    )",
];

/// Drop statements in reverse dependency order.
pub const DROP_TABLES: [&str; 12] = [
    "DROP TABLE IF EXISTS movie_category",
    "DROP TABLE IF EXISTS movie_advisory",
    "DROP TABLE IF EXISTS movie_director",
    "DROP TABLE IF EXISTS movie_actor",
    "DROP TABLE IF EXISTS Wishlist",
    "DROP TABLE IF EXISTS Rental",
    "DROP TABLE IF EXISTS Category",
    "DROP TABLE IF EXISTS Advisory",
    "DROP TABLE IF EXISTS Director",
    "DROP TABLE IF EXISTS Actor",
    "DROP TABLE IF EXISTS Movie",
    "DROP TABLE IF EXISTS Customer",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_created_table_is_dropped() {
        for create in CREATE_TABLES {
            let name = create
                .trim_start_matches("CREATE TABLE ")
                .split_whitespace()
                .next()
                .unwrap();
            assert!(
                DROP_TABLES
                    .iter()
                    .any(|d| d.ends_with(&format!("EXISTS {name}"))),
                "no drop statement for {name}"
            );
        }
    }
}
