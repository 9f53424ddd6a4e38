use diesel::prelude::*;

use crate::{
    domain::price::{NewPrice as DomainNewPrice, Price as DomainPrice, PriceQuery},
    models::price::{NewPrice as DbNewPrice, Price as DbPrice},
    repository::{DieselRepository, PriceReader, PriceWriter, errors::RepositoryResult},
};

impl PriceReader for DieselRepository {
    fn list_applicable_prices(&self, query: PriceQuery) -> RepositoryResult<Vec<DomainPrice>> {
        use crate::schema::prices;

        let mut conn = self.conn()?;
        let rows = prices::table
            .filter(prices::product_id.eq(query.product_id))
            .filter(prices::brand_id.eq(query.brand_id))
            .filter(prices::start_date.le(query.application_date))
            .filter(prices::end_date.ge(query.application_date))
            .load::<DbPrice>(&mut conn)?;

        rows.into_iter()
            .map(|row| DomainPrice::try_from(row).map_err(Into::into))
            .collect()
    }

    fn count_prices(&self) -> RepositoryResult<i64> {
        use crate::schema::prices;

        let mut conn = self.conn()?;
        Ok(prices::table.count().get_result::<i64>(&mut conn)?)
    }
}

impl PriceWriter for DieselRepository {
    fn create_prices(&self, new_prices: &[DomainNewPrice]) -> RepositoryResult<Vec<DomainPrice>> {
        use crate::schema::prices;

        let mut conn = self.conn()?;
        let created = conn.transaction(|conn| {
            new_prices
                .iter()
                .map(|new_price| {
                    let row = DbNewPrice::from(new_price);
                    diesel::insert_into(prices::table)
                        .values(&row)
                        .get_result::<DbPrice>(conn)
                })
                .collect::<Result<Vec<DbPrice>, diesel::result::Error>>()
        })?;

        created
            .into_iter()
            .map(|row| DomainPrice::try_from(row).map_err(Into::into))
            .collect()
    }
}
