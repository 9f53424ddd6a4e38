use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::price::{Price, PriceQuery, precedence};
use crate::repository::PriceReader;
use crate::services::{ServiceError, ServiceResult};

/// Response payload for a resolved price. `priority` drives selection but is
/// not part of the outward contract.
#[derive(Debug, Serialize, PartialEq)]
pub struct PriceResponse {
    pub product_id: i32,
    pub brand_id: i32,
    pub price_list: i32,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub amount: Decimal,
    pub currency: String,
}

impl From<Price> for PriceResponse {
    fn from(value: Price) -> Self {
        Self {
            product_id: value.product_id,
            brand_id: value.brand_id,
            price_list: value.price_list,
            start_date: value.start_date,
            end_date: value.end_date,
            amount: value.amount,
            currency: value.currency,
        }
    }
}

/// Selects the single price applicable at `query.application_date`.
///
/// Candidates come from the store unordered; the winner is the maximum under
/// [`precedence`], so the highest priority wins and overlaps at equal
/// priority fall back to the smaller tariff identifier. Identifiers that are
/// not positive fail with [`ServiceError::InvalidQuery`] before the store is
/// touched; an empty candidate set fails with [`ServiceError::NotFound`].
pub fn resolve_applicable_price<R>(repo: &R, query: PriceQuery) -> ServiceResult<Price>
where
    R: PriceReader + ?Sized,
{
    if query.product_id <= 0 {
        return Err(ServiceError::InvalidQuery(format!(
            "product id must be positive, got {}",
            query.product_id
        )));
    }
    if query.brand_id <= 0 {
        return Err(ServiceError::InvalidQuery(format!(
            "brand id must be positive, got {}",
            query.brand_id
        )));
    }

    log::debug!(
        "Resolving price - date: {}, product: {}, brand: {}",
        query.application_date,
        query.product_id,
        query.brand_id
    );

    let candidates = repo.list_applicable_prices(query)?;

    match candidates.into_iter().max_by(precedence) {
        Some(price) => {
            log::info!(
                "Price found - product: {}, brand: {}, price_list: {}, amount: {} {}",
                price.product_id,
                price.brand_id,
                price.price_list,
                price.amount,
                price.currency
            );
            Ok(price)
        }
        None => {
            log::warn!(
                "No applicable price - date: {}, product: {}, brand: {}",
                query.application_date,
                query.product_id,
                query.brand_id
            );
            Err(ServiceError::NotFound)
        }
    }
}
