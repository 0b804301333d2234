//! Unit of Work pattern implementation.
//!
//! Centralizes repository access behind one injectable handle and owns the
//! transaction lifecycle for multi-row writes (a user with its profile, a
//! cart with its items): begin, commit on success, roll back on error.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use sea_orm::{AccessMode, DatabaseConnection, DatabaseTransaction, IsolationLevel, TransactionTrait};

use super::repositories::{
    insert_cart_with_items, insert_user_with_profile, MarketplaceRepository, MarketplaceStore,
    UserRepository, UserStore,
};
use crate::domain::{Cart, NewCart, NewUser, UserAccount};
use crate::errors::{AppError, AppResult};

/// Unit of Work trait for dependency injection.
///
/// Services receive this instead of a connection so they can be tested
/// against mocked repositories.
pub trait UnitOfWork: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get marketplace repository
    fn marketplace(&self) -> Arc<dyn MarketplaceRepository>;
}

/// Concrete implementation of UnitOfWork backed by one connection pool.
pub struct Persistence {
    user_repo: Arc<UserStore>,
    marketplace_repo: Arc<MarketplaceStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance over an explicit connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            user_repo: Arc::new(UserStore::new(db.clone())),
            marketplace_repo: Arc::new(MarketplaceStore::new(db)),
        }
    }
}

impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn marketplace(&self) -> Arc<dyn MarketplaceRepository> {
        self.marketplace_repo.clone()
    }
}

/// Transaction context providing repository access within a transaction.
///
/// All operations performed through this context are part of the same
/// database transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Get user repository for this transaction
    pub fn users(&self) -> TxUserRepository<'_> {
        TxUserRepository { txn: self.txn }
    }

    /// Get marketplace repository for this transaction
    pub fn marketplace(&self) -> TxMarketplaceRepository<'_> {
        TxMarketplaceRepository { txn: self.txn }
    }
}

/// Run `f` inside a ReadCommitted transaction.
///
/// Commits if `f` returns `Ok`, rolls back otherwise. A failed rollback is
/// logged; the original error is still returned.
pub async fn run_in_transaction<F, T>(db: &DatabaseConnection, f: F) -> AppResult<T>
where
    F: for<'a> FnOnce(TransactionContext<'a>) -> Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'a>>
        + Send,
    T: Send,
{
    let txn = db
        .begin_with_config(Some(IsolationLevel::ReadCommitted), Some(AccessMode::ReadWrite))
        .await
        .map_err(AppError::from)?;

    let ctx = TransactionContext::new(&txn);

    match f(ctx).await {
        Ok(result) => {
            txn.commit().await.map_err(AppError::from)?;
            Ok(result)
        }
        Err(e) => {
            tracing::warn!(code = e.code(), "Rolling back transaction: {}", e);
            if let Err(rollback_err) = txn.rollback().await {
                tracing::error!("Transaction rollback failed: {}", rollback_err);
            }
            Err(e)
        }
    }
}

/// Transaction-aware user repository.
pub struct TxUserRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl TxUserRepository<'_> {
    /// Insert a user row and its profile row
    pub async fn create(&self, new_user: NewUser) -> AppResult<UserAccount> {
        insert_user_with_profile(self.txn, new_user).await
    }
}

/// Transaction-aware marketplace repository.
pub struct TxMarketplaceRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl TxMarketplaceRepository<'_> {
    /// Insert a cart header and its items
    pub async fn create_cart(&self, cart: NewCart) -> AppResult<Cart> {
        insert_cart_with_items(self.txn, cart).await
    }
}
