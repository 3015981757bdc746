//! Persistence port for accounts and transactions.
//!
//! [`BankStore`] is the only way the operations layer reaches storage.
//! Two backends are provided:
//! - [`SqliteStore`]: diesel over an r2d2 SQLite pool, `:memory:` by default
//! - [`MemoryStore`]: ordered maps behind a lock
//!
//! Both hand out ids sequentially from 1 and list rows in id order.

mod memory;
mod sqlite;

use bigdecimal::BigDecimal;
use thiserror::Error;

use crate::accounts::db_types::{Account, NewAccount};
use crate::transactions::db_types::{NewTransaction, Transaction, TransactionKind};

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("query failed: {0}")]
    Query(#[from] diesel::result::Error),
    #[error("store lock poisoned")]
    Poisoned,
    #[error("malformed row: {0}")]
    Malformed(String),
    #[error("constraint violated: {0}")]
    Constraint(String),
}

impl StoreError {
    /// True when the database could not be reached at all, as opposed to a
    /// query that ran and failed.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            StoreError::Pool(_)
                | StoreError::Query(diesel::result::Error::DatabaseError(
                    diesel::result::DatabaseErrorKind::ClosedConnection,
                    _
                ))
        )
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

pub trait BankStore: Send + Sync {
    /// Inserts the account, or overwrites the row with the same id when one is given.
    fn save_account(&self, account: NewAccount) -> StoreResult<Account>;
    fn find_account(&self, id: i32) -> StoreResult<Option<Account>>;
    fn find_accounts(&self) -> StoreResult<Vec<Account>>;
    fn count_accounts(&self) -> StoreResult<i64>;
    /// Zero when there are no accounts.
    fn sum_balances(&self) -> StoreResult<BigDecimal>;

    /// Inserts the transaction, or overwrites the row with the same id when one is given.
    /// Fails with [`StoreError::Constraint`] (or the backend's equivalent) when the
    /// referenced account does not exist.
    fn save_transaction(&self, transaction: NewTransaction) -> StoreResult<Transaction>;
    fn find_transaction(&self, id: i32) -> StoreResult<Option<Transaction>>;
    fn find_transactions(&self) -> StoreResult<Vec<Transaction>>;
    fn find_transactions_by_account(&self, account_id: i32) -> StoreResult<Vec<Transaction>>;
    fn count_transactions(&self) -> StoreResult<i64>;
    /// Zero when no transaction has the given kind.
    fn sum_by_kind(&self, kind: TransactionKind) -> StoreResult<BigDecimal>;
}
