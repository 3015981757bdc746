use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use bigdecimal::BigDecimal;

use super::{BankStore, StoreError, StoreResult};
use crate::accounts::db_types::{Account, NewAccount};
use crate::transactions::db_types::{NewTransaction, Transaction, TransactionKind};

#[derive(Debug, Default)]
struct Tables {
    accounts: BTreeMap<i32, Account>,
    transactions: BTreeMap<i32, Transaction>,
    last_account_id: i32,
    last_transaction_id: i32,
}

/// In-memory store. Keys are ordered so scans come back in id order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Tables>> {
        self.tables.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Tables>> {
        self.tables.write().map_err(|_| StoreError::Poisoned)
    }
}

impl BankStore for MemoryStore {
    fn save_account(&self, account: NewAccount) -> StoreResult<Account> {
        let mut tables = self.write()?;
        let id = match account.id {
            Some(id) => id,
            None => tables.last_account_id + 1,
        };
        tables.last_account_id = tables.last_account_id.max(id);

        let stored = Account {
            id,
            balance: account.balance,
            opened_at: account.opened_at,
            kind: account.kind,
        };
        tables.accounts.insert(id, stored.clone());

        Ok(stored)
    }

    fn find_account(&self, id: i32) -> StoreResult<Option<Account>> {
        Ok(self.read()?.accounts.get(&id).cloned())
    }

    fn find_accounts(&self) -> StoreResult<Vec<Account>> {
        Ok(self.read()?.accounts.values().cloned().collect())
    }

    fn count_accounts(&self) -> StoreResult<i64> {
        Ok(self.read()?.accounts.len() as i64)
    }

    fn sum_balances(&self) -> StoreResult<BigDecimal> {
        Ok(self
            .read()?
            .accounts
            .values()
            .map(|a| &a.balance)
            .sum())
    }

    fn save_transaction(&self, transaction: NewTransaction) -> StoreResult<Transaction> {
        let mut tables = self.write()?;
        if !tables.accounts.contains_key(&transaction.account_id) {
            return Err(StoreError::Constraint(format!(
                "transaction references missing account {}",
                transaction.account_id
            )));
        }

        let id = match transaction.id {
            Some(id) => id,
            None => tables.last_transaction_id + 1,
        };
        tables.last_transaction_id = tables.last_transaction_id.max(id);

        let stored = Transaction {
            id,
            amount: transaction.amount,
            occurred_at: transaction.occurred_at,
            kind: transaction.kind,
            account_id: transaction.account_id,
        };
        tables.transactions.insert(id, stored.clone());

        Ok(stored)
    }

    fn find_transaction(&self, id: i32) -> StoreResult<Option<Transaction>> {
        Ok(self.read()?.transactions.get(&id).cloned())
    }

    fn find_transactions(&self) -> StoreResult<Vec<Transaction>> {
        Ok(self.read()?.transactions.values().cloned().collect())
    }

    fn find_transactions_by_account(&self, account_id: i32) -> StoreResult<Vec<Transaction>> {
        Ok(self
            .read()?
            .transactions
            .values()
            .filter(|t| t.account_id == account_id)
            .cloned()
            .collect())
    }

    fn count_transactions(&self) -> StoreResult<i64> {
        Ok(self.read()?.transactions.len() as i64)
    }

    fn sum_by_kind(&self, kind: TransactionKind) -> StoreResult<BigDecimal> {
        Ok(self
            .read()?
            .transactions
            .values()
            .filter(|t| t.kind == kind)
            .map(|t| &t.amount)
            .sum())
    }
}
