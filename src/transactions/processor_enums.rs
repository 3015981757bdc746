use async_graphql::{InputObject, SimpleObject};
use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::utils::decimal::Decimal;
use crate::transactions::db_types::{Transaction, TransactionKind};

#[derive(InputObject, Deserialize, Serialize, Debug, Clone)]
#[graphql(name = "TransactionInput")]
pub struct CreateTransactionInputArgs {
    pub account_id: i32,
    /// Must be strictly positive.
    pub amount: Decimal,
    /// Defaults to the time of creation.
    pub occurred_at: Option<NaiveDateTime>,
    pub kind: TransactionKind,
}

#[derive(SimpleObject, Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct TransactionStats {
    pub count: i64,
    pub sum_deposits: BigDecimal,
    pub sum_withdrawals: BigDecimal,
}

#[derive(Deserialize, Serialize, Debug)]
pub enum TransactionsProcessorInput {
    CreateTransaction(CreateTransactionInputArgs),
    GetTransaction(i32),
    ListAccountTransactions(i32),
    ListAllTransactions,
    TransactionStats,
}

#[derive(Deserialize, Serialize, Debug)]
pub enum TransactionsProcessorOutput {
    CreateTransaction(Transaction),
    GetTransaction(Transaction),
    ListAccountTransactions(Vec<Transaction>),
    ListAllTransactions(Vec<Transaction>),
    TransactionStats(TransactionStats),
}
