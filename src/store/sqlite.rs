use std::str::FromStr;

use bigdecimal::BigDecimal;
use diesel::prelude::*;

use super::{BankStore, StoreError, StoreResult};
use crate::accounts::db_types::{Account, AccountRecord, CreateAccountRecord, NewAccount};
use crate::schema::{accounts, transactions};
use crate::transactions::db_types::{
    CreateTransactionRecord, NewTransaction, Transaction, TransactionKind, TransactionRecord,
};
use crate::utils::db::{DbConn, DbPool, IN_MEMORY_URL, build_pool, get_conn};

/// Relational store backed by diesel + SQLite.
#[derive(Clone)]
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn connect(database_url: &str) -> StoreResult<Self> {
        Ok(Self::new(build_pool(database_url)?))
    }

    /// Private database that disappears with the store.
    pub fn in_memory() -> StoreResult<Self> {
        Self::connect(IN_MEMORY_URL)
    }

    fn conn(&self) -> StoreResult<DbConn> {
        Ok(get_conn(&self.pool)?)
    }
}

fn sum_decimals(column: &str, values: Vec<String>) -> StoreResult<BigDecimal> {
    values
        .iter()
        .try_fold(BigDecimal::from(0), |acc, value| {
            BigDecimal::from_str(value)
                .map(|parsed| acc + parsed)
                .map_err(|e| StoreError::Malformed(format!("{} `{}`: {}", column, value, e)))
        })
}

impl BankStore for SqliteStore {
    fn save_account(&self, account: NewAccount) -> StoreResult<Account> {
        let mut conn = self.conn()?;
        let row = CreateAccountRecord::from(&account);

        let record = diesel::insert_into(accounts::table)
            .values(&row)
            .on_conflict(accounts::id)
            .do_update()
            .set(&row)
            .returning(AccountRecord::as_returning())
            .get_result::<AccountRecord>(&mut conn)?;

        Account::try_from(record)
    }

    fn find_account(&self, id: i32) -> StoreResult<Option<Account>> {
        let mut conn = self.conn()?;

        accounts::table
            .find(id)
            .select(AccountRecord::as_select())
            .first::<AccountRecord>(&mut conn)
            .optional()?
            .map(Account::try_from)
            .transpose()
    }

    fn find_accounts(&self) -> StoreResult<Vec<Account>> {
        let mut conn = self.conn()?;

        accounts::table
            .order(accounts::id.asc())
            .select(AccountRecord::as_select())
            .load::<AccountRecord>(&mut conn)?
            .into_iter()
            .map(Account::try_from)
            .collect()
    }

    fn count_accounts(&self) -> StoreResult<i64> {
        let mut conn = self.conn()?;
        Ok(accounts::table.count().get_result::<i64>(&mut conn)?)
    }

    fn sum_balances(&self) -> StoreResult<BigDecimal> {
        let mut conn = self.conn()?;
        let balances = accounts::table
            .select(accounts::balance)
            .load::<String>(&mut conn)?;

        sum_decimals("balance", balances)
    }

    fn save_transaction(&self, transaction: NewTransaction) -> StoreResult<Transaction> {
        let mut conn = self.conn()?;
        let row = CreateTransactionRecord::from(&transaction);

        let record = diesel::insert_into(transactions::table)
            .values(&row)
            .on_conflict(transactions::id)
            .do_update()
            .set(&row)
            .returning(TransactionRecord::as_returning())
            .get_result::<TransactionRecord>(&mut conn)?;

        Transaction::try_from(record)
    }

    fn find_transaction(&self, id: i32) -> StoreResult<Option<Transaction>> {
        let mut conn = self.conn()?;

        transactions::table
            .find(id)
            .select(TransactionRecord::as_select())
            .first::<TransactionRecord>(&mut conn)
            .optional()?
            .map(Transaction::try_from)
            .transpose()
    }

    fn find_transactions(&self) -> StoreResult<Vec<Transaction>> {
        let mut conn = self.conn()?;

        transactions::table
            .order(transactions::id.asc())
            .select(TransactionRecord::as_select())
            .load::<TransactionRecord>(&mut conn)?
            .into_iter()
            .map(Transaction::try_from)
            .collect()
    }

    fn find_transactions_by_account(&self, account_id: i32) -> StoreResult<Vec<Transaction>> {
        let mut conn = self.conn()?;

        transactions::table
            .filter(transactions::account_id.eq(account_id))
            .order(transactions::id.asc())
            .select(TransactionRecord::as_select())
            .load::<TransactionRecord>(&mut conn)?
            .into_iter()
            .map(Transaction::try_from)
            .collect()
    }

    fn count_transactions(&self) -> StoreResult<i64> {
        let mut conn = self.conn()?;
        Ok(transactions::table.count().get_result::<i64>(&mut conn)?)
    }

    fn sum_by_kind(&self, kind: TransactionKind) -> StoreResult<BigDecimal> {
        let mut conn = self.conn()?;
        let amounts = transactions::table
            .filter(transactions::kind.eq(kind.as_str()))
            .select(transactions::amount)
            .load::<String>(&mut conn)?;

        sum_decimals("amount", amounts)
    }
}
