use async_graphql::{Context, ErrorExtensions, Object, Result};

use super::store;
use crate::accounts::db_types::Account;
use crate::accounts::operations::create_account;
use crate::accounts::processor_enums::CreateAccountInputArgs;
use crate::transactions::db_types::Transaction;
use crate::transactions::operations::create_transaction;
use crate::transactions::processor_enums::CreateTransactionInputArgs;

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_account(
        &self,
        ctx: &Context<'_>,
        account: CreateAccountInputArgs,
    ) -> Result<Account> {
        create_account(store(ctx)?, account).map_err(|e| e.extend())
    }

    /// Fails with `NOT_FOUND` when the account does not exist. Does not change the account balance.
    async fn create_transaction(
        &self,
        ctx: &Context<'_>,
        transaction: CreateTransactionInputArgs,
    ) -> Result<Transaction> {
        create_transaction(store(ctx)?, transaction).map_err(|e| e.extend())
    }
}
