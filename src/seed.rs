use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal_macros::dec;

use crate::domain::price::NewPrice;

fn instant(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, min, sec))
        .unwrap_or_default()
}

/// Sample tariff set loaded on first run: four windows for product 35455 of
/// brand 1, two of them overlapping the base tariff at a higher priority.
pub fn sample_prices() -> Vec<NewPrice> {
    vec![
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
        NewPrice::new(
            1,
            35455,
            3,
            instant(2020, 6, 15, 0, 0, 0),
            instant(2020, 6, 15, 11, 0, 0),
            dec!(30.50),
        )
        .with_priority(1),
        NewPrice::new(
            1,
            35455,
            4,
            instant(2020, 6, 15, 16, 0, 0),
            instant(2020, 12, 31, 23, 59, 59),
            dec!(38.95),
        )
        .with_priority(1),
    ]
}
