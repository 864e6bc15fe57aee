use clap::Parser;
use vod_seed::insert::{
    INSERT_ACTOR, INSERT_ADVISORY, INSERT_CATEGORY, INSERT_CUSTOMER, INSERT_DIRECTOR,
    INSERT_MOVIE, INSERT_MOVIE_ACTOR, INSERT_MOVIE_ADVISORY, INSERT_MOVIE_CATEGORY,
    INSERT_MOVIE_DIRECTOR, INSERT_RENTAL, INSERT_WISHLIST,
};
use vod_seed::SeedOpts;

#[derive(Parser)]
struct TestCli {
    #[command(flatten)]
    opts: SeedOpts,
}

#[test]
fn test_seed_opts_defaults() {
    let cli = TestCli::parse_from(["vod-seed"]);
    assert_eq!(cli.opts.row_count, 1000);
    assert_eq!(cli.opts.seed, 42);
    assert!(!cli.opts.create_tables);
    assert!(!cli.opts.json);
    assert!(cli.opts.database_url.contains("dbname=VOD"));
}

#[test]
fn test_seed_opts_overrides() {
    let cli = TestCli::parse_from([
        "vod-seed",
        "--row-count",
        "25",
        "--seed",
        "7",
        "--create-tables",
        "--json",
        "--database-url",
        "host=db user=postgres dbname=vod_test",
    ]);
    assert_eq!(cli.opts.row_count, 25);
    assert_eq!(cli.opts.seed, 7);
    assert!(cli.opts.create_tables);
    assert!(cli.opts.json);
    assert_eq!(cli.opts.database_url, "host=db user=postgres dbname=vod_test");
}

#[test]
fn test_insert_statements_target_expected_tables() {
    let expectations = [
        (INSERT_CUSTOMER, "INSERT INTO Customer ", 9),
        (INSERT_MOVIE, "INSERT INTO Movie ", 9),
        (INSERT_ACTOR, "INSERT INTO Actor ", 4),
        (INSERT_DIRECTOR, "INSERT INTO Director ", 4),
        (INSERT_ADVISORY, "INSERT INTO Advisory ", 3),
        (INSERT_CATEGORY, "INSERT INTO Category ", 3),
        (INSERT_RENTAL, "INSERT INTO Rental ", 10),
        (INSERT_WISHLIST, "INSERT INTO Wishlist ", 3),
        (INSERT_MOVIE_ACTOR, "INSERT INTO movie_actor ", 3),
        (INSERT_MOVIE_DIRECTOR, "INSERT INTO movie_director ", 2),
        (INSERT_MOVIE_ADVISORY, "INSERT INTO movie_advisory ", 2),
        (INSERT_MOVIE_CATEGORY, "INSERT INTO movie_category ", 2),
    ];

    for (sql, prefix, placeholders) in expectations {
        assert!(sql.starts_with(prefix), "unexpected target in: {sql}");
        for i in 1..=placeholders {
            assert!(sql.contains(&format!("${i}")), "missing ${i} in: {sql}");
        }
        assert!(
            !sql.contains(&format!("${}", placeholders + 1)),
            "too many placeholders in: {sql}"
        );
    }
}
