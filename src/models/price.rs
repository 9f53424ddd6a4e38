use std::str::FromStr;

use chrono::NaiveDateTime;
use diesel::prelude::*;
use rust_decimal::Decimal;

use crate::domain::price::{NewPrice as DomainNewPrice, Price as DomainPrice};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::prices)]
pub struct Price {
    pub id: i32,
    pub brand_id: i32,
    pub product_id: i32,
    pub price_list: i32,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub amount: String,
    pub currency: String,
    pub priority: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::prices)]
pub struct NewPrice<'a> {
    pub brand_id: i32,
    pub product_id: i32,
    pub price_list: i32,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub amount: String,
    pub currency: &'a str,
    pub priority: i32,
}

impl TryFrom<Price> for DomainPrice {
    type Error = rust_decimal::Error;

    /// Amounts are stored as text so they round-trip at exact currency
    /// scale; a row whose amount fails to parse is corrupt.
    fn try_from(value: Price) -> Result<Self, Self::Error> {
        let amount = Decimal::from_str(&value.amount)?;

        Ok(Self {
            id: value.id,
            brand_id: value.brand_id,
            product_id: value.product_id,
            price_list: value.price_list,
            start_date: value.start_date,
            end_date: value.end_date,
            amount,
            currency: value.currency,
            priority: value.priority,
            created_at: value.created_at,
        })
    }
}

impl<'a> From<&'a DomainNewPrice> for NewPrice<'a> {
    fn from(value: &'a DomainNewPrice) -> Self {
        Self {
            brand_id: value.brand_id,
            product_id: value.product_id,
            price_list: value.price_list,
            start_date: value.start_date,
            end_date: value.end_date,
            amount: value.amount.to_string(),
            currency: value.currency.as_str(),
            priority: value.priority,
        }
    }
}
