//! Migration: Create produce, market price and weather alert tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Produce::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Produce::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Produce::FarmerId).uuid().not_null())
                    .col(ColumnDef::new(Produce::Name).string().not_null())
                    .col(ColumnDef::new(Produce::Category).string().not_null())
                    .col(ColumnDef::new(Produce::Quantity).double().not_null())
                    .col(ColumnDef::new(Produce::Unit).string_len(32).not_null())
                    .col(ColumnDef::new(Produce::PricePerUnit).double().not_null())
                    .col(ColumnDef::new(Produce::Description).text().not_null())
                    .col(ColumnDef::new(Produce::StockQuantity).double().not_null())
                    .col(ColumnDef::new(Produce::IsApproved).boolean().not_null().default(false))
                    .col(ColumnDef::new(Produce::IsFeatured).boolean().not_null().default(false))
                    .col(ColumnDef::new(Produce::Slug).string().not_null().unique_key())
                    .col(ColumnDef::new(Produce::Tags).array(ColumnType::Text).not_null())
                    .col(ColumnDef::new(Produce::HarvestDate).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Produce::ExpiryDate).timestamp_with_time_zone().not_null())
                    .col(
                        ColumnDef::new(Produce::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_produce_farmer_id")
                            .from(Produce::Table, Produce::FarmerId)
                            .to(Farmers::Table, Farmers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_produce_farmer_id")
                    .table(Produce::Table)
                    .col(Produce::FarmerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MarketPrices::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(MarketPrices::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(MarketPrices::Produce).string().not_null())
                    .col(ColumnDef::new(MarketPrices::County).string().not_null())
                    .col(ColumnDef::new(MarketPrices::AvgPrice).double().not_null())
                    .col(ColumnDef::new(MarketPrices::MinPrice).double().not_null())
                    .col(ColumnDef::new(MarketPrices::MaxPrice).double().not_null())
                    .col(ColumnDef::new(MarketPrices::MarketName).string().not_null())
                    .col(ColumnDef::new(MarketPrices::ReportDate).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(WeatherAlerts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(WeatherAlerts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(WeatherAlerts::County).string().not_null())
                    .col(ColumnDef::new(WeatherAlerts::AlertType).string_len(32).not_null())
                    .col(ColumnDef::new(WeatherAlerts::Severity).string_len(16).not_null())
                    .col(ColumnDef::new(WeatherAlerts::Message).text().not_null())
                    .col(ColumnDef::new(WeatherAlerts::StartDate).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(WeatherAlerts::EndDate).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WeatherAlerts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MarketPrices::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Produce::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Farmers {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Produce {
    Table,
    Id,
    FarmerId,
    Name,
    Category,
    Quantity,
    Unit,
    PricePerUnit,
    Description,
    StockQuantity,
    IsApproved,
    IsFeatured,
    Slug,
    Tags,
    HarvestDate,
    ExpiryDate,
    CreatedAt,
}

#[derive(DeriveIden)]
enum MarketPrices {
    Table,
    Id,
    Produce,
    County,
    AvgPrice,
    MinPrice,
    MaxPrice,
    MarketName,
    ReportDate,
}

#[derive(DeriveIden)]
enum WeatherAlerts {
    Table,
    Id,
    County,
    AlertType,
    Severity,
    Message,
    StartDate,
    EndDate,
}
