//! Demo data inserted at startup.
//!
//! Goes through the regular operations, so ids come from the store. Running
//! it twice against the same store inserts the rows twice.

use bigdecimal::BigDecimal;
use chrono::{NaiveDateTime, Utc};
use serde::Serialize;

use crate::accounts::db_types::AccountKind;
use crate::accounts::operations::create_account;
use crate::accounts::processor_enums::CreateAccountInputArgs;
use crate::error::BankError;
use crate::store::BankStore;
use crate::transactions::db_types::TransactionKind;
use crate::transactions::operations::create_transaction;
use crate::transactions::processor_enums::CreateTransactionInputArgs;

const DEMO_ACCOUNTS: [(i64, AccountKind); 3] = [
    (5000, AccountKind::Checking),
    (12000, AccountKind::Savings),
    (3500, AccountKind::Checking),
];

/// (index into `DEMO_ACCOUNTS`, amount, kind)
const DEMO_TRANSACTIONS: [(usize, i64, TransactionKind); 4] = [
    (0, 1000, TransactionKind::Deposit),
    (0, 500, TransactionKind::Withdrawal),
    (1, 2000, TransactionKind::Deposit),
    (2, 800, TransactionKind::Deposit),
];

/// Store totals after seeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub accounts: i64,
    pub transactions: i64,
}

pub fn seed_demo_data(store: &dyn BankStore) -> Result<SeedReport, BankError> {
    seed_demo_data_at(store, Utc::now().naive_utc())
}

/// Seeds with every timestamp pinned to `at`.
pub fn seed_demo_data_at(
    store: &dyn BankStore,
    at: NaiveDateTime,
) -> Result<SeedReport, BankError> {
    let mut account_ids = Vec::with_capacity(DEMO_ACCOUNTS.len());
    for (balance, kind) in DEMO_ACCOUNTS {
        let account = create_account(
            store,
            CreateAccountInputArgs {
                balance: BigDecimal::from(balance).into(),
                opened_at: Some(at),
                kind,
            },
        )?;
        account_ids.push(account.id);
    }

    for (account_index, amount, kind) in DEMO_TRANSACTIONS {
        create_transaction(
            store,
            CreateTransactionInputArgs {
                account_id: account_ids[account_index],
                amount: BigDecimal::from(amount).into(),
                occurred_at: Some(at),
                kind,
            },
        )?;
    }

    let report = SeedReport {
        accounts: store.count_accounts()?,
        transactions: store.count_transactions()?,
    };
    tracing::info!(
        accounts = report.accounts,
        transactions = report.transactions,
        "demo data inserted"
    );

    Ok(report)
}
