use bigdecimal::{BigDecimal, Zero};
use chrono::Utc;
use crate::accounts::operations::get_account;
use crate::error::BankError;
use crate::store::BankStore;
use crate::transactions::db_types::{NewTransaction, Transaction, TransactionKind};
use crate::transactions::processor_enums::{CreateTransactionInputArgs, TransactionStats};

/// Records a transaction against an existing account.
///
/// The account is looked up first and the transaction written second, as two
/// separate store calls. The account's balance is left untouched.
pub fn create_transaction(
    store: &dyn BankStore,
    args: CreateTransactionInputArgs,
) -> Result<Transaction, BankError> {
    let amount = args.amount.into_inner();
    if amount <= BigDecimal::zero() {
        return Err(BankError::validation(format!(
            "amount must be positive, got {}",
            amount
        )));
    }

    let account = get_account(store, args.account_id)?;

    let transaction = store.save_transaction(NewTransaction {
        id: None,
        amount,
        occurred_at: args.occurred_at.unwrap_or_else(|| Utc::now().naive_utc()),
        kind: args.kind,
        account_id: account.id,
    })?;

    tracing::info!(
        transaction_id = transaction.id,
        account_id = account.id,
        kind = transaction.kind.as_str(),
        "transaction recorded"
    );
    Ok(transaction)
}

pub fn get_transaction(store: &dyn BankStore, id: i32) -> Result<Transaction, BankError> {
    store.find_transaction(id)?.ok_or_else(|| {
        tracing::warn!(transaction_id = id, "transaction lookup missed");
        BankError::transaction_not_found(id)
    })
}

pub fn list_account_transactions(
    store: &dyn BankStore,
    account_id: i32,
) -> Result<Vec<Transaction>, BankError> {
    let account = get_account(store, account_id)?;
    let transactions = store.find_transactions_by_account(account.id)?;
    tracing::debug!(account_id, count = transactions.len(), "listed account transactions");
    Ok(transactions)
}

pub fn list_all_transactions(store: &dyn BankStore) -> Result<Vec<Transaction>, BankError> {
    Ok(store.find_transactions()?)
}

pub fn transaction_stats(store: &dyn BankStore) -> Result<TransactionStats, BankError> {
    Ok(TransactionStats {
        count: store.count_transactions()?,
        sum_deposits: store.sum_by_kind(TransactionKind::Deposit)?,
        sum_withdrawals: store.sum_by_kind(TransactionKind::Withdrawal)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::db_types::AccountKind;
    use crate::accounts::operations::create_account;
    use crate::accounts::processor_enums::CreateAccountInputArgs;
    use crate::store::{MemoryStore, SqliteStore};

    fn open_account(store: &dyn BankStore, balance: i64, kind: AccountKind) -> i32 {
        create_account(
            store,
            CreateAccountInputArgs {
                balance: BigDecimal::from(balance).into(),
                opened_at: None,
                kind,
            },
        )
        .unwrap()
        .id
    }

    fn request(account_id: i32, amount: i64, kind: TransactionKind) -> CreateTransactionInputArgs {
        CreateTransactionInputArgs {
            account_id,
            amount: BigDecimal::from(amount).into(),
            occurred_at: None,
            kind,
        }
    }

    #[test]
    fn test_deposit_is_linked_to_its_account() -> Result<(), BankError> {
        let store = MemoryStore::new();
        let account_id = open_account(&store, 5000, AccountKind::Checking);
        assert_eq!(account_id, 1);

        let created = create_transaction(&store, request(1, 1000, TransactionKind::Deposit))?;

        assert_eq!(created.id, 1);
        assert_eq!(created.account_id, 1);
        assert_eq!(list_account_transactions(&store, 1)?, vec![created]);
        Ok(())
    }

    #[test]
    fn test_unknown_account_fails_without_writing() {
        for store in [
            Box::new(MemoryStore::new()) as Box<dyn BankStore>,
            Box::new(SqliteStore::in_memory().unwrap()) as Box<dyn BankStore>,
        ] {
            open_account(store.as_ref(), 5000, AccountKind::Checking);
            let second = open_account(store.as_ref(), 12000, AccountKind::Savings);
            assert_eq!(second, 2);
            let before = list_all_transactions(store.as_ref()).unwrap().len();

            let err = create_transaction(
                store.as_ref(),
                request(99, 500, TransactionKind::Withdrawal),
            )
            .unwrap_err();

            assert_eq!(err.to_string(), "Account 99 not found");
            assert_eq!(list_all_transactions(store.as_ref()).unwrap().len(), before);
        }
    }

    #[test]
    fn test_non_positive_amount_is_rejected() {
        let store = MemoryStore::new();
        let account_id = open_account(&store, 0, AccountKind::Checking);

        for amount in [0, -5] {
            let err = create_transaction(&store, request(account_id, amount, TransactionKind::Deposit))
                .unwrap_err();
            assert!(matches!(err, BankError::Validation(_)));
        }
        assert_eq!(store.count_transactions().unwrap(), 0);
    }

    #[test]
    fn test_balance_is_not_adjusted() -> Result<(), BankError> {
        let store = MemoryStore::new();
        let account_id = open_account(&store, 5000, AccountKind::Checking);

        create_transaction(&store, request(account_id, 800, TransactionKind::Withdrawal))?;

        assert_eq!(get_account(&store, account_id)?.balance, BigDecimal::from(5000));
        Ok(())
    }

    #[test]
    fn test_listing_for_unknown_account_is_not_found() {
        let store = MemoryStore::new();

        assert!(matches!(
            list_account_transactions(&store, 3),
            Err(BankError::NotFound { id: 3, .. })
        ));
    }

    #[test]
    fn test_get_transaction() -> Result<(), BankError> {
        let store = MemoryStore::new();
        let account_id = open_account(&store, 1, AccountKind::Savings);
        let created = create_transaction(&store, request(account_id, 7, TransactionKind::Deposit))?;

        assert_eq!(get_transaction(&store, created.id)?, created);
        assert!(matches!(
            get_transaction(&store, 50),
            Err(BankError::NotFound { id: 50, .. })
        ));
        Ok(())
    }

    #[test]
    fn test_stats_default_to_zero() -> Result<(), BankError> {
        let stats = transaction_stats(&MemoryStore::new())?;

        assert_eq!(stats.count, 0);
        assert_eq!(stats.sum_deposits, BigDecimal::from(0));
        assert_eq!(stats.sum_withdrawals, BigDecimal::from(0));
        Ok(())
    }

    #[test]
    fn test_stats_sum_per_kind() -> Result<(), BankError> {
        let store = MemoryStore::new();
        let account_id = open_account(&store, 100, AccountKind::Checking);
        create_transaction(&store, request(account_id, 1000, TransactionKind::Deposit))?;
        create_transaction(&store, request(account_id, 2000, TransactionKind::Deposit))?;

        let stats = transaction_stats(&store)?;

        assert_eq!(stats.count, 2);
        assert_eq!(stats.sum_deposits, BigDecimal::from(3000));
        assert_eq!(stats.sum_withdrawals, BigDecimal::from(0));
        Ok(())
    }
}
