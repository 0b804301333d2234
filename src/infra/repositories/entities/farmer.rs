//! Farmer profile entity.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "farmers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub farm_name: String,
    pub county: String,
    pub sub_county: Option<String>,
    pub farm_size: f64,
    pub kra_pin: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub subscription_paid: bool,
    pub subscription_date: Option<DateTimeUtc>,
    pub farmer_agent_id: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
