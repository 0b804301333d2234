//! Produce listing entity.

use sea_orm::entity::prelude::*;

use crate::domain::Produce;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "produce")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub farmer_id: Uuid,
    pub name: String,
    pub category: String,
    pub quantity: f64,
    pub unit: String,
    pub price_per_unit: f64,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub stock_quantity: f64,
    pub is_approved: bool,
    pub is_featured: bool,
    #[sea_orm(unique)]
    pub slug: String,
    pub tags: Vec<String>,
    pub harvest_date: DateTimeUtc,
    pub expiry_date: DateTimeUtc,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Produce {
    fn from(model: Model) -> Self {
        Produce {
            id: model.id,
            farmer_id: model.farmer_id,
            name: model.name,
            category: model.category,
            quantity: model.quantity,
            unit: model.unit,
            price_per_unit: model.price_per_unit,
            stock_quantity: model.stock_quantity,
            is_approved: model.is_approved,
            is_featured: model.is_featured,
            slug: model.slug,
            tags: model.tags,
            harvest_date: model.harvest_date,
            expiry_date: model.expiry_date,
            created_at: model.created_at,
        }
    }
}
