use bigdecimal::BigDecimal;
use chrono::Utc;
use crate::accounts::db_types::{Account, NewAccount};
use crate::accounts::processor_enums::{AccountStats, CreateAccountInputArgs};
use crate::error::BankError;
use crate::store::BankStore;

/// Decimal places kept on the average balance.
const AVERAGE_SCALE: i64 = 2;

pub fn list_accounts(store: &dyn BankStore) -> Result<Vec<Account>, BankError> {
    let accounts = store.find_accounts()?;
    tracing::debug!(count = accounts.len(), "listed accounts");
    Ok(accounts)
}

pub fn get_account(store: &dyn BankStore, id: i32) -> Result<Account, BankError> {
    match store.find_account(id)? {
        Some(account) => Ok(account),
        None => {
            tracing::warn!(account_id = id, "account lookup missed");
            Err(BankError::account_not_found(id))
        }
    }
}

pub fn create_account(
    store: &dyn BankStore,
    args: CreateAccountInputArgs,
) -> Result<Account, BankError> {
    let account = store.save_account(NewAccount {
        id: None,
        balance: args.balance.into_inner(),
        opened_at: args.opened_at.unwrap_or_else(|| Utc::now().naive_utc()),
        kind: args.kind,
    })?;

    tracing::info!(account_id = account.id, kind = account.kind.as_str(), "account created");
    Ok(account)
}

/// Count, total and average balance. The average is zero for an empty store.
pub fn account_stats(store: &dyn BankStore) -> Result<AccountStats, BankError> {
    let count = store.count_accounts()?;
    let sum = store.sum_balances()?;
    let average = if count > 0 {
        (sum.clone() / BigDecimal::from(count)).round(AVERAGE_SCALE)
    } else {
        BigDecimal::from(0)
    };

    Ok(AccountStats {
        count,
        sum,
        average,
    })
}
