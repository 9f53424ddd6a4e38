use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal_macros::dec;

use retail_prices::domain::price::{NewPrice, PriceQuery};
use retail_prices::repository::{DieselRepository, PriceReader, PriceWriter};

mod common;

fn instant(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, min, sec))
        .expect("valid timestamp literal")
}

#[test]
fn applicable_prices_window_is_inclusive_at_both_ends() {
    let test_db = common::TestDb::new("repo_window_inclusive.db");
    let repo = DieselRepository::new(test_db.pool());

    let start = instant(2020, 6, 14, 15, 0, 0);
    let end = instant(2020, 6, 14, 18, 30, 0);
    repo.create_prices(&[NewPrice::new(1, 35455, 2, start, end, dec!(25.45))])
        .expect("create price");

    for boundary in [start, end] {
        let matches = repo
            .list_applicable_prices(PriceQuery::new(boundary, 35455, 1))
            .expect("query prices");
        assert_eq!(matches.len(), 1, "boundary instant {boundary} must match");
        assert!(matches[0].applies_at(boundary));
    }

    let before = repo
        .list_applicable_prices(PriceQuery::new(instant(2020, 6, 14, 14, 59, 59), 35455, 1))
        .expect("query prices");
    assert!(before.is_empty());

    let after = repo
        .list_applicable_prices(PriceQuery::new(instant(2020, 6, 14, 18, 30, 1), 35455, 1))
        .expect("query prices");
    assert!(after.is_empty());
}

#[test]
fn applicable_prices_match_product_and_brand_exactly() {
    let test_db = common::TestDb::new("repo_exact_match.db");
    let repo = DieselRepository::new(test_db.pool());

    let start = instant(2020, 6, 14, 0, 0, 0);
    let end = instant(2020, 12, 31, 23, 59, 59);
    repo.create_prices(&[
        NewPrice::new(1, 35455, 1, start, end, dec!(35.50)),
        NewPrice::new(2, 35455, 1, start, end, dec!(20.00)),
        NewPrice::new(1, 99999, 1, start, end, dec!(11.11)),
    ])
    .expect("create prices");

    let matches = repo
        .list_applicable_prices(PriceQuery::new(instant(2020, 6, 14, 10, 0, 0), 35455, 1))
        .expect("query prices");

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].product_id, 35455);
    assert_eq!(matches[0].brand_id, 1);
    assert_eq!(matches[0].amount, dec!(35.50));
}

#[test]
fn all_overlapping_candidates_are_returned() {
    let test_db = common::TestDb::new("repo_overlapping_candidates.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_prices(&[
        NewPrice::new(
            1,
            35455,
            1,
            instant(2020, 6, 14, 0, 0, 0),
            instant(2020, 12, 31, 23, 59, 59),
            dec!(35.50),
        ),
        NewPrice::new(
            1,
            35455,
            2,
            instant(2020, 6, 14, 15, 0, 0),
            instant(2020, 6, 14, 18, 30, 0),
            dec!(25.45),
        )
        .with_priority(1),
    ])
    .expect("create prices");

    // Selection is the resolver's job; the store must hand back every match.
    let matches = repo
        .list_applicable_prices(PriceQuery::new(instant(2020, 6, 14, 16, 0, 0), 35455, 1))
        .expect("query prices");

    assert_eq!(matches.len(), 2);
}

#[test]
fn created_prices_round_trip_exact_amounts() {
    let test_db = common::TestDb::new("repo_amount_round_trip.db");
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_prices(&[
            NewPrice::new(
                1,
                35455,
                4,
                instant(2020, 6, 15, 16, 0, 0),
                instant(2020, 12, 31, 23, 59, 59),
                dec!(38.95),
            )
            .with_priority(1)
            .with_currency("USD"),
        ])
        .expect("create price");

    assert_eq!(created.len(), 1);
    assert_eq!(created[0].amount, dec!(38.95));
    assert_eq!(created[0].currency, "USD");
    assert_eq!(created[0].priority, 1);
    assert_eq!(repo.count_prices().expect("count prices"), 1);

    let matches = repo
        .list_applicable_prices(PriceQuery::new(instant(2020, 7, 1, 12, 0, 0), 35455, 1))
        .expect("query prices");
    assert_eq!(matches, created);
}
