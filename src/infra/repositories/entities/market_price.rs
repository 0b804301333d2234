//! Market price report entity.

use sea_orm::entity::prelude::*;

use crate::domain::MarketPrice;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "market_prices")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub produce: String,
    pub county: String,
    pub avg_price: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub market_name: String,
    pub report_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for MarketPrice {
    fn from(model: Model) -> Self {
        MarketPrice {
            id: model.id,
            produce: model.produce,
            county: model.county,
            avg_price: model.avg_price,
            min_price: model.min_price,
            max_price: model.max_price,
            market_name: model.market_name,
            report_date: model.report_date,
        }
    }
}
