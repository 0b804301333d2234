//! User repository: accounts and their role profiles.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, Set, SqlErr,
};
use uuid::Uuid;

use super::entities::{admin, customer, driver, farmer, farmer_agent, user};
use crate::domain::{NewUser, RoleProfile, User, UserAccount};
use crate::errors::{AppError, AppResult};
use crate::infra::unit_of_work::run_in_transaction;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by (case-insensitive) email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find user by normalized phone number
    async fn find_by_phone(&self, phone: &str) -> AppResult<Option<User>>;

    /// Create a user and its role profile atomically.
    ///
    /// A duplicate phone or email fails with `Conflict`.
    async fn create(&self, new_user: NewUser) -> AppResult<UserAccount>;

    /// Count all users
    async fn count(&self) -> AppResult<u64>;
}

/// SeaORM implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = user::Entity::find()
            .filter(user::Column::Email.eq(email.trim().to_lowercase()))
            .one(&self.db)
            .await?;

        result.map(User::try_from).transpose()
    }

    async fn find_by_phone(&self, phone: &str) -> AppResult<Option<User>> {
        let result = user::Entity::find()
            .filter(user::Column::Phone.eq(phone))
            .one(&self.db)
            .await?;

        result.map(User::try_from).transpose()
    }

    async fn create(&self, new_user: NewUser) -> AppResult<UserAccount> {
        run_in_transaction(&self.db, |ctx| {
            Box::pin(async move { ctx.users().create(new_user).await })
        })
        .await
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(user::Entity::find().count(&self.db).await?)
    }
}

/// Insert the user row, then the profile row keyed to it.
///
/// Not atomic on its own; callers pass a transaction.
pub(crate) async fn insert_user_with_profile<C>(conn: &C, new_user: NewUser) -> AppResult<UserAccount>
where
    C: ConnectionTrait,
{
    let now = chrono::Utc::now();
    let role = new_user.role();
    let user_id = Uuid::new_v4();

    let model = user::ActiveModel {
        id: Set(user_id),
        email: Set(new_user.email),
        phone: Set(new_user.phone.into_string()),
        password_hash: Set(new_user.password_hash),
        first_name: Set(new_user.first_name),
        last_name: Set(new_user.last_name),
        role: Set(role.as_str().to_string()),
        status: Set(new_user.status.as_str().to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(conn)
    .await
    .map_err(|e| {
        let sql_err = e.sql_err();
        conflict_on_unique_violation(e, sql_err)
    })?;

    let profile_id = insert_profile(conn, user_id, new_user.profile).await?;
    tracing::debug!(%user_id, %profile_id, %role, "User and profile inserted");

    Ok(UserAccount {
        user: User::try_from(model)?,
        profile_id,
    })
}

async fn insert_profile<C>(conn: &C, user_id: Uuid, profile: RoleProfile) -> AppResult<Uuid>
where
    C: ConnectionTrait,
{
    let id = Uuid::new_v4();

    match profile {
        RoleProfile::Admin(p) => {
            admin::ActiveModel {
                id: Set(id),
                user_id: Set(user_id),
                can_approve_drivers: Set(p.can_approve_drivers),
                can_manage_users: Set(p.can_manage_users),
                can_view_analytics: Set(p.can_view_analytics),
            }
            .insert(conn)
            .await?;
        }
        RoleProfile::FarmerAgent(p) => {
            farmer_agent::ActiveModel {
                id: Set(id),
                user_id: Set(user_id),
                assigned_county: Set(p.assigned_county),
                onboarding_quota: Set(p.onboarding_quota),
            }
            .insert(conn)
            .await?;
        }
        RoleProfile::Farmer(p) => {
            farmer::ActiveModel {
                id: Set(id),
                user_id: Set(user_id),
                farm_name: Set(p.farm_name),
                county: Set(p.county),
                sub_county: Set(p.sub_county),
                farm_size: Set(p.farm_size),
                kra_pin: Set(p.kra_pin),
                latitude: Set(p.latitude),
                longitude: Set(p.longitude),
                subscription_paid: Set(p.subscription_paid),
                subscription_date: Set(p.subscription_date),
                farmer_agent_id: Set(p.farmer_agent_id),
            }
            .insert(conn)
            .await?;
        }
        RoleProfile::Customer(p) => {
            customer::ActiveModel {
                id: Set(id),
                user_id: Set(user_id),
                county: Set(p.county),
                latitude: Set(p.latitude),
                longitude: Set(p.longitude),
                loyalty_points: Set(p.loyalty_points),
            }
            .insert(conn)
            .await?;
        }
        RoleProfile::Driver(p) => {
            driver::ActiveModel {
                id: Set(id),
                user_id: Set(user_id),
                license_number: Set(p.license_number),
                vehicle_type: Set(p.vehicle_type),
                vehicle_reg_no: Set(p.vehicle_reg_no),
                id_number: Set(p.id_number),
                status: Set(p.status.as_str().to_string()),
                approved_at: Set(p.approved_at),
                approved_by: Set(p.approved_by),
                is_available: Set(p.is_available),
                total_deliveries: Set(p.total_deliveries),
                rating: Set(p.rating),
            }
            .insert(conn)
            .await?;
        }
    }

    Ok(id)
}

/// Unique index hits on `users` (phone or email taken by a concurrent
/// registration) become `Conflict`; anything else stays a database error.
fn conflict_on_unique_violation(err: DbErr, sql_err: Option<SqlErr>) -> AppError {
    match sql_err {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::debug!(%detail, "Unique constraint violated on user insert");
            AppError::conflict("User")
        }
        _ => AppError::Database(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_violation_is_conflict() {
        let err = conflict_on_unique_violation(
            DbErr::Custom("insert failed".to_string()),
            Some(SqlErr::UniqueConstraintViolation(
                "duplicate key value violates unique constraint \"users_phone_key\"".to_string(),
            )),
        );

        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(err.code(), "CONFLICT");
    }

    #[test]
    fn test_other_errors_stay_database_errors() {
        let err = conflict_on_unique_violation(
            DbErr::Custom("connection reset".to_string()),
            Some(SqlErr::ForeignKeyConstraintViolation("fk".to_string())),
        );
        assert!(matches!(err, AppError::Database(_)));

        let err = conflict_on_unique_violation(DbErr::Custom("boom".to_string()), None);
        assert!(matches!(err, AppError::Database(_)));
    }
}
