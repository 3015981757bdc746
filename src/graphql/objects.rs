use async_graphql::{ComplexObject, Context, ErrorExtensions, Result};

use super::store;
use crate::accounts::db_types::Account;
use crate::accounts::operations::get_account;
use crate::error::BankError;
use crate::transactions::db_types::Transaction;

#[ComplexObject]
impl Account {
    /// Transactions recorded against this account, oldest first.
    async fn transactions(&self, ctx: &Context<'_>) -> Result<Vec<Transaction>> {
        store(ctx)?
            .find_transactions_by_account(self.id)
            .map_err(|e| BankError::from(e).extend())
    }
}

#[ComplexObject]
impl Transaction {
    async fn account(&self, ctx: &Context<'_>) -> Result<Account> {
        get_account(store(ctx)?, self.account_id).map_err(|e| e.extend())
    }
}
