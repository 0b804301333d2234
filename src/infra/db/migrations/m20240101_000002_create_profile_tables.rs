//! Migration: Create one profile table per role, each keyed to a user.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Admins::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Admins::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Admins::UserId).uuid().not_null().unique_key())
                    .col(ColumnDef::new(Admins::CanApproveDrivers).boolean().not_null().default(false))
                    .col(ColumnDef::new(Admins::CanManageUsers).boolean().not_null().default(false))
                    .col(ColumnDef::new(Admins::CanViewAnalytics).boolean().not_null().default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_admins_user_id")
                            .from(Admins::Table, Admins::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FarmerAgents::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(FarmerAgents::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(FarmerAgents::UserId).uuid().not_null().unique_key())
                    .col(ColumnDef::new(FarmerAgents::AssignedCounty).string().not_null())
                    .col(ColumnDef::new(FarmerAgents::OnboardingQuota).integer().not_null().default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_farmer_agents_user_id")
                            .from(FarmerAgents::Table, FarmerAgents::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Farmers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Farmers::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Farmers::UserId).uuid().not_null().unique_key())
                    .col(ColumnDef::new(Farmers::FarmName).string().not_null())
                    .col(ColumnDef::new(Farmers::County).string().not_null())
                    .col(ColumnDef::new(Farmers::SubCounty).string().null())
                    .col(ColumnDef::new(Farmers::FarmSize).double().not_null())
                    .col(ColumnDef::new(Farmers::KraPin).string().null())
                    .col(ColumnDef::new(Farmers::Latitude).double().null())
                    .col(ColumnDef::new(Farmers::Longitude).double().null())
                    .col(ColumnDef::new(Farmers::SubscriptionPaid).boolean().not_null().default(false))
                    .col(ColumnDef::new(Farmers::SubscriptionDate).timestamp_with_time_zone().null())
                    .col(ColumnDef::new(Farmers::FarmerAgentId).uuid().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_farmers_user_id")
                            .from(Farmers::Table, Farmers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_farmers_farmer_agent_id")
                            .from(Farmers::Table, Farmers::FarmerAgentId)
                            .to(FarmerAgents::Table, FarmerAgents::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Customers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Customers::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Customers::UserId).uuid().not_null().unique_key())
                    .col(ColumnDef::new(Customers::County).string().not_null())
                    .col(ColumnDef::new(Customers::Latitude).double().null())
                    .col(ColumnDef::new(Customers::Longitude).double().null())
                    .col(ColumnDef::new(Customers::LoyaltyPoints).integer().not_null().default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_customers_user_id")
                            .from(Customers::Table, Customers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Drivers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Drivers::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Drivers::UserId).uuid().not_null().unique_key())
                    .col(ColumnDef::new(Drivers::LicenseNumber).string().not_null().unique_key())
                    .col(ColumnDef::new(Drivers::VehicleType).string().not_null())
                    .col(ColumnDef::new(Drivers::VehicleRegNo).string().not_null())
                    .col(ColumnDef::new(Drivers::IdNumber).string().not_null())
                    .col(
                        ColumnDef::new(Drivers::Status)
                            .string_len(32)
                            .not_null()
                            .default("PENDING"),
                    )
                    .col(ColumnDef::new(Drivers::ApprovedAt).timestamp_with_time_zone().null())
                    .col(ColumnDef::new(Drivers::ApprovedBy).uuid().null())
                    .col(ColumnDef::new(Drivers::IsAvailable).boolean().not_null().default(false))
                    .col(ColumnDef::new(Drivers::TotalDeliveries).integer().not_null().default(0))
                    .col(ColumnDef::new(Drivers::Rating).double().not_null().default(0.0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_drivers_user_id")
                            .from(Drivers::Table, Drivers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_drivers_approved_by")
                            .from(Drivers::Table, Drivers::ApprovedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Drivers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Customers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Farmers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FarmerAgents::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Admins::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Admins {
    Table,
    Id,
    UserId,
    CanApproveDrivers,
    CanManageUsers,
    CanViewAnalytics,
}

#[derive(DeriveIden)]
enum FarmerAgents {
    Table,
    Id,
    UserId,
    AssignedCounty,
    OnboardingQuota,
}

#[derive(DeriveIden)]
enum Farmers {
    Table,
    Id,
    UserId,
    FarmName,
    County,
    SubCounty,
    FarmSize,
    KraPin,
    Latitude,
    Longitude,
    SubscriptionPaid,
    SubscriptionDate,
    FarmerAgentId,
}

#[derive(DeriveIden)]
enum Customers {
    Table,
    Id,
    UserId,
    County,
    Latitude,
    Longitude,
    LoyaltyPoints,
}

#[derive(DeriveIden)]
enum Drivers {
    Table,
    Id,
    UserId,
    LicenseNumber,
    VehicleType,
    VehicleRegNo,
    IdNumber,
    Status,
    ApprovedAt,
    ApprovedBy,
    IsAvailable,
    TotalDeliveries,
    Rating,
}
