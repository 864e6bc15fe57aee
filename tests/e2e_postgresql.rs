//! End-to-end seed against a live PostgreSQL.
//!
//! Requires a reachable database named by `VOD_TEST_URL`, e.g.
//! `host=localhost user=postgres password=postgres dbname=vod_test`.
//! The test is skipped when the variable is unset so the suite stays green
//! without infrastructure.

use vod_seed::Seeder;

fn test_database_url() -> Option<String> {
    std::env::var("VOD_TEST_URL").ok()
}

#[tokio::test]
async fn test_full_seed_round_trip() {
    let Some(url) = test_database_url() else {
        eprintln!("VOD_TEST_URL not set; skipping live PostgreSQL test");
        return;
    };

    let mut seeder = Seeder::connect(&url).await.expect("connect failed");
    seeder.recreate_tables().await.expect("recreate failed");

    let report = seeder.run(100, 42).await.expect("seeding failed");
    assert_eq!(report.customers, 100);
    assert_eq!(report.movies, 100);
    assert_eq!(report.rentals, 100);
    assert!(report.wishlist_entries <= 100);

    // Spot-check committed state through a fresh connection.
    let (client, connection) = tokio_postgres::connect(&url, tokio_postgres::NoTls)
        .await
        .expect("verify connect failed");
    tokio::spawn(async move {
        let _ = connection.await;
    });

    let row = client
        .query_one("SELECT COUNT(*) FROM Customer", &[])
        .await
        .unwrap();
    let count: i64 = row.get(0);
    assert_eq!(count, 100);

    let row = client
        .query_one(
            "SELECT COUNT(*) FROM Movie WHERE hd_price <= sd_price",
            &[],
        )
        .await
        .unwrap();
    let bad_prices: i64 = row.get(0);
    assert_eq!(bad_prices, 0);

    let row = client
        .query_one(
            "SELECT COUNT(*) FROM Rental WHERE expiry_date != start_viewing_date + 1",
            &[],
        )
        .await
        .unwrap();
    let bad_expiries: i64 = row.get(0);
    assert_eq!(bad_expiries, 0);
}
