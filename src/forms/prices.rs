use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::price::PriceQuery;

/// Result type returned by the price form helpers.
pub type PriceFormResult<T> = Result<T, PriceFormError>;

/// Errors that can occur while processing a price query form.
#[derive(Debug, Error)]
pub enum PriceFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The application date could not be parsed as a timestamp.
    #[error("application date is not a valid timestamp: {0}")]
    InvalidDate(#[from] chrono::ParseError),
}

/// Query parameters accepted by the price lookup endpoint.
#[derive(Debug, Deserialize, Validate)]
pub struct PriceQueryForm {
    /// Instant the price must apply at, RFC 3339 or a bare
    /// `YYYY-MM-DDTHH:MM:SS` taken as UTC.
    pub application_date: String,
    /// Product identifier.
    #[validate(range(min = 1))]
    pub product_id: i32,
    /// Brand identifier.
    #[validate(range(min = 1))]
    pub brand_id: i32,
}

impl PriceQueryForm {
    /// Validates the payload and normalizes the timestamp into a domain query.
    pub fn into_query(self) -> PriceFormResult<PriceQuery> {
        self.validate()?;

        let application_date = parse_application_date(&self.application_date)?;

        Ok(PriceQuery::new(
            application_date,
            self.product_id,
            self.brand_id,
        ))
    }
}

/// An RFC 3339 timestamp carries its own offset and is normalized to UTC
/// before it reaches the store; anything else must already be UTC.
fn parse_application_date(raw: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(instant) => Ok(instant.with_timezone(&Utc).naive_utc()),
        Err(_) => raw.parse::<NaiveDateTime>(),
    }
}
