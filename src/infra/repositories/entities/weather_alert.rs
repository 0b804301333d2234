//! Weather alert entity.

use sea_orm::entity::prelude::*;

use crate::domain::{AlertSeverity, WeatherAlert};
use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "weather_alerts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub county: String,
    pub alert_type: String,
    pub severity: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub start_date: DateTimeUtc,
    pub end_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for WeatherAlert {
    type Error = AppError;

    fn try_from(model: Model) -> AppResult<Self> {
        Ok(WeatherAlert {
            id: model.id,
            county: model.county,
            alert_type: model.alert_type,
            severity: model.severity.parse::<AlertSeverity>()?,
            message: model.message,
            start_date: model.start_date,
            end_date: model.end_date,
        })
    }
}
