//! Errors surfaced by the account and transaction operations.
//!
//! Lookups that miss are reported as [`BankError::NotFound`] carrying the
//! entity and id, never as an empty result. Store failures are propagated
//! as-is and never retried here.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Entity {
    Account,
    Transaction,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Account => write!(f, "Account"),
            Entity::Transaction => write!(f, "Transaction"),
        }
    }
}

#[derive(Debug, Error)]
pub enum BankError {
    #[error("{entity} {id} not found")]
    NotFound { entity: Entity, id: i32 },
    #[error("invalid input: {0}")]
    Validation(String),
    #[error("store unavailable: {0}")]
    StoreUnavailable(StoreError),
    #[error("store failure: {0}")]
    Internal(StoreError),
}

impl From<StoreError> for BankError {
    fn from(err: StoreError) -> Self {
        if err.is_unavailable() {
            BankError::StoreUnavailable(err)
        } else {
            BankError::Internal(err)
        }
    }
}

impl BankError {
    pub fn account_not_found(id: i32) -> Self {
        Self::NotFound {
            entity: Entity::Account,
            id,
        }
    }

    pub fn transaction_not_found(id: i32) -> Self {
        Self::NotFound {
            entity: Entity::Transaction,
            id,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Stable machine-readable code, shared by the GraphQL and HTTP layers.
    pub fn code(&self) -> &'static str {
        match self {
            BankError::NotFound { .. } => "NOT_FOUND",
            BankError::Validation(_) => "VALIDATION",
            BankError::StoreUnavailable(_) => "STORE_UNAVAILABLE",
            BankError::Internal(_) => "INTERNAL",
        }
    }
}
