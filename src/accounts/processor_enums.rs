use async_graphql::{InputObject, SimpleObject};
use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::utils::decimal::Decimal;
use crate::accounts::db_types::{Account, AccountKind};

/// Client-supplied account data. There is no id field: ids are always
/// assigned by the store.
#[derive(InputObject, Deserialize, Serialize, Debug, Clone)]
#[graphql(name = "AccountInput")]
pub struct CreateAccountInputArgs {
    pub balance: Decimal,
    /// Defaults to the time of creation.
    pub opened_at: Option<NaiveDateTime>,
    pub kind: AccountKind,
}

#[derive(SimpleObject, Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct AccountStats {
    pub count: i64,
    pub sum: BigDecimal,
    pub average: BigDecimal,
}

#[derive(Deserialize, Serialize, Debug)]
pub enum AccountsProcessorInput {
    ListAccounts,
    GetAccount(i32),
    CreateAccount(CreateAccountInputArgs),
    AccountStats,
}

#[derive(Deserialize, Serialize, Debug)]
pub enum AccountsProcessorOutput {
    ListAccounts(Vec<Account>),
    GetAccount(Account),
    CreateAccount(Account),
    AccountStats(AccountStats),
}
