use std::str::FromStr;

use async_graphql::{Enum, SimpleObject};
use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use crate::schema::transactions as TransactionsTable;
use crate::store::StoreError;

#[derive(Enum, Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    #[serde(alias = "DEPOT")]
    Deposit,
    #[serde(alias = "RETRAIT")]
    Withdrawal,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "DEPOSIT",
            TransactionKind::Withdrawal => "WITHDRAWAL",
        }
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DEPOSIT" | "DEPOT" => Ok(TransactionKind::Deposit),
            "WITHDRAWAL" | "RETRAIT" => Ok(TransactionKind::Withdrawal),
            other => Err(format!("unknown transaction kind `{}`", other)),
        }
    }
}

/// A deposit or withdrawal against exactly one account. `amount` is a
/// magnitude; the direction comes from `kind`.
#[derive(SimpleObject, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[graphql(complex)]
pub struct Transaction {
    pub id: i32,
    pub amount: BigDecimal,
    pub occurred_at: NaiveDateTime,
    pub kind: TransactionKind,
    pub account_id: i32,
}

#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub id: Option<i32>,
    pub amount: BigDecimal,
    pub occurred_at: NaiveDateTime,
    pub kind: TransactionKind,
    pub account_id: i32,
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = TransactionsTable)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TransactionRecord {
    pub id: i32,
    pub amount: String,
    pub occurred_at: NaiveDateTime,
    pub kind: String,
    pub account_id: i32,
}

#[derive(Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = TransactionsTable)]
pub struct CreateTransactionRecord {
    pub id: Option<i32>,
    pub amount: String,
    pub occurred_at: NaiveDateTime,
    pub kind: String,
    pub account_id: i32,
}

impl From<&NewTransaction> for CreateTransactionRecord {
    fn from(transaction: &NewTransaction) -> Self {
        Self {
            id: transaction.id,
            amount: transaction.amount.to_string(),
            occurred_at: transaction.occurred_at,
            kind: transaction.kind.as_str().to_string(),
            account_id: transaction.account_id,
        }
    }
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = StoreError;

    fn try_from(record: TransactionRecord) -> Result<Self, Self::Error> {
        let amount = BigDecimal::from_str(&record.amount).map_err(|e| {
            StoreError::Malformed(format!("transaction {} amount: {}", record.id, e))
        })?;
        let kind = TransactionKind::from_str(&record.kind).map_err(StoreError::Malformed)?;

        Ok(Transaction {
            id: record.id,
            amount,
            occurred_at: record.occurred_at,
            kind,
            account_id: record.account_id,
        })
    }
}
