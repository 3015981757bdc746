use std::str::FromStr;

use async_graphql::{Enum, SimpleObject};
use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use crate::schema::accounts as AccountsTable;
use crate::store::StoreError;

#[derive(Enum, Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountKind {
    #[serde(alias = "COURANT")]
    Checking,
    #[serde(alias = "EPARGNE")]
    Savings,
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Checking => "CHECKING",
            AccountKind::Savings => "SAVINGS",
        }
    }
}

impl FromStr for AccountKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CHECKING" | "COURANT" => Ok(AccountKind::Checking),
            "SAVINGS" | "EPARGNE" => Ok(AccountKind::Savings),
            other => Err(format!("unknown account kind `{}`", other)),
        }
    }
}

/// A balance holder. The balance is whatever was saved; it is never derived
/// from the account's transactions.
#[derive(SimpleObject, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[graphql(complex)]
pub struct Account {
    pub id: i32,
    pub balance: BigDecimal,
    pub opened_at: NaiveDateTime,
    pub kind: AccountKind,
}

/// Account as handed to the store. `id: None` lets the store assign one.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub id: Option<i32>,
    pub balance: BigDecimal,
    pub opened_at: NaiveDateTime,
    pub kind: AccountKind,
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = AccountsTable)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AccountRecord {
    pub id: i32,
    pub balance: String,
    pub opened_at: NaiveDateTime,
    pub kind: String,
}

#[derive(Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = AccountsTable)]
pub struct CreateAccountRecord {
    pub id: Option<i32>,
    pub balance: String,
    pub opened_at: NaiveDateTime,
    pub kind: String,
}

impl From<&NewAccount> for CreateAccountRecord {
    fn from(account: &NewAccount) -> Self {
        Self {
            id: account.id,
            balance: account.balance.to_string(),
            opened_at: account.opened_at,
            kind: account.kind.as_str().to_string(),
        }
    }
}

impl TryFrom<AccountRecord> for Account {
    type Error = StoreError;

    fn try_from(record: AccountRecord) -> Result<Self, Self::Error> {
        let balance = BigDecimal::from_str(&record.balance).map_err(|e| {
            StoreError::Malformed(format!("account {} balance: {}", record.id, e))
        })?;
        let kind = AccountKind::from_str(&record.kind).map_err(StoreError::Malformed)?;

        Ok(Account {
            id: record.id,
            balance,
            opened_at: record.opened_at,
            kind,
        })
    }
}
