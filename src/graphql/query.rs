use async_graphql::{Context, ErrorExtensions, Object, Result};

use super::store;
use crate::accounts::db_types::Account;
use crate::accounts::operations as accounts;
use crate::accounts::processor_enums::AccountStats;
use crate::transactions::db_types::Transaction;
use crate::transactions::operations as transactions;
use crate::transactions::processor_enums::TransactionStats;

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn list_accounts(&self, ctx: &Context<'_>) -> Result<Vec<Account>> {
        accounts::list_accounts(store(ctx)?).map_err(|e| e.extend())
    }

    async fn get_account(&self, ctx: &Context<'_>, id: i32) -> Result<Account> {
        accounts::get_account(store(ctx)?, id).map_err(|e| e.extend())
    }

    /// Count, sum and average of all balances. The average is 0 when there are no accounts.
    async fn account_stats(&self, ctx: &Context<'_>) -> Result<AccountStats> {
        accounts::account_stats(store(ctx)?).map_err(|e| e.extend())
    }

    async fn list_account_transactions(
        &self,
        ctx: &Context<'_>,
        account_id: i32,
    ) -> Result<Vec<Transaction>> {
        transactions::list_account_transactions(store(ctx)?, account_id).map_err(|e| e.extend())
    }

    async fn list_all_transactions(&self, ctx: &Context<'_>) -> Result<Vec<Transaction>> {
        transactions::list_all_transactions(store(ctx)?).map_err(|e| e.extend())
    }

    async fn transaction_stats(&self, ctx: &Context<'_>) -> Result<TransactionStats> {
        transactions::transaction_stats(store(ctx)?).map_err(|e| e.extend())
    }
}
