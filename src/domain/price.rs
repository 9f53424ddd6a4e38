use std::cmp::{Ordering, Reverse};

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain representation of a tariff price with its validity window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Price {
    /// Unique identifier of the price record.
    pub id: i32,
    /// Brand the tariff belongs to.
    pub brand_id: i32,
    /// Product the tariff applies to.
    pub product_id: i32,
    /// Tariff identifier, informational, echoed back to callers.
    pub price_list: i32,
    /// First instant (inclusive, UTC) at which the price applies.
    pub start_date: NaiveDateTime,
    /// Last instant (inclusive, UTC) at which the price applies.
    pub end_date: NaiveDateTime,
    /// Exact amount at currency scale.
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Conflict weight; the highest wins when windows overlap.
    pub priority: i32,
    /// Timestamp for when the record was loaded into the store.
    pub created_at: NaiveDateTime,
}

impl Price {
    /// Whether the validity window contains `instant`. Both window ends are
    /// inclusive.
    pub fn applies_at(&self, instant: NaiveDateTime) -> bool {
        self.start_date <= instant && instant <= self.end_date
    }
}

/// Precedence between two candidates matching the same query.
///
/// The higher `priority` wins. Candidates sharing the maximum priority are
/// resolved towards the smaller `price_list`, then the smaller `id`, so the
/// winner never depends on the order candidates arrive in. Any layer that
/// selects among overlapping windows must go through this function.
pub fn precedence(a: &Price, b: &Price) -> Ordering {
    (a.priority, Reverse(a.price_list), Reverse(a.id)).cmp(&(
        b.priority,
        Reverse(b.price_list),
        Reverse(b.id),
    ))
}

/// Payload required to insert a new price record. Records are immutable once
/// stored; inserts exist for seeding and tests, the resolver only reads.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPrice {
    /// Brand the tariff belongs to.
    pub brand_id: i32,
    /// Product the tariff applies to.
    pub product_id: i32,
    /// Tariff identifier.
    pub price_list: i32,
    /// First instant (inclusive, UTC) at which the price applies.
    pub start_date: NaiveDateTime,
    /// Last instant (inclusive, UTC) at which the price applies.
    pub end_date: NaiveDateTime,
    /// Exact amount at currency scale.
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Conflict weight; the highest wins when windows overlap.
    pub priority: i32,
}

impl NewPrice {
    /// Build a payload for a price valid over the given inclusive window.
    pub fn new(
        brand_id: i32,
        product_id: i32,
        price_list: i32,
        start_date: NaiveDateTime,
        end_date: NaiveDateTime,
        amount: Decimal,
    ) -> Self {
        Self {
            brand_id,
            product_id,
            price_list,
            start_date,
            end_date,
            amount,
            currency: "EUR".to_string(),
            priority: 0,
        }
    }

    /// Set the ISO 4217 currency code (defaults to EUR).
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Set the conflict-resolution priority (defaults to 0).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

/// Point-in-time lookup key consumed by the price store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceQuery {
    /// Instant (UTC) the price must be applicable at.
    pub application_date: NaiveDateTime,
    /// Product identifier; must be positive.
    pub product_id: i32,
    /// Brand identifier; must be positive.
    pub brand_id: i32,
}

impl PriceQuery {
    /// Construct a query for the price applicable at `application_date`.
    pub fn new(application_date: NaiveDateTime, product_id: i32, brand_id: i32) -> Self {
        Self {
            application_date,
            product_id,
            brand_id,
        }
    }
}
