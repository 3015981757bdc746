//! GraphQL binding over the account and transaction operations.
//!
//! Resolvers are thin: each one fetches the store from the schema data and
//! calls the matching operation. Domain errors become GraphQL errors with an
//! `extensions.code` of `NOT_FOUND`, `VALIDATION`, `STORE_UNAVAILABLE` or
//! `INTERNAL`.

mod mutation;
mod objects;
mod query;

use async_graphql::{Context, EmptySubscription, ErrorExtensions, Schema};

use crate::error::BankError;
use crate::store::BankStore;
use crate::utils::app_config::AppConfig;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

pub type BankSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(app_config: AppConfig) -> BankSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(app_config)
        .finish()
}

fn store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a dyn BankStore> {
    Ok(ctx.data::<AppConfig>()?.store.as_ref())
}

impl ErrorExtensions for BankError {
    fn extend(&self) -> async_graphql::Error {
        if let BankError::StoreUnavailable(e) | BankError::Internal(e) = self {
            tracing::error!(error = %e, code = self.code(), "store call failed");
        }

        async_graphql::Error::new(self.to_string()).extend_with(|_, ext| {
            ext.set("code", self.code().to_string());
            if let BankError::NotFound { entity, id } = self {
                ext.set("entity", entity.to_string());
                ext.set("id", *id);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use async_graphql::{Request, Variables};
    use serde_json::{Value, json};

    use std::sync::Arc;

    use super::*;
    use crate::seed::seed_demo_data;
    use crate::store::{MemoryStore, SqliteStore};

    async fn run(schema: &BankSchema, query: &str, variables: Value) -> Value {
        let request = Request::new(query).variables(Variables::from_json(variables));
        let response = schema.execute(request).await;
        serde_json::to_value(&response).unwrap()
    }

    fn seeded_schema() -> BankSchema {
        let app_config = AppConfig::in_memory();
        seed_demo_data(app_config.store.as_ref()).unwrap();
        build_schema(app_config)
    }

    /// One seeded schema per store backend.
    fn seeded_schemas() -> Vec<BankSchema> {
        let stores: [Arc<dyn BankStore>; 2] = [
            Arc::new(MemoryStore::new()),
            Arc::new(SqliteStore::in_memory().unwrap()),
        ];
        stores
            .into_iter()
            .map(|store| {
                seed_demo_data(store.as_ref()).unwrap();
                build_schema(AppConfig::new(store))
            })
            .collect()
    }

    #[tokio::test]
    async fn test_create_and_fetch_account() {
        let schema = build_schema(AppConfig::in_memory());

        let created = run(
            &schema,
            "mutation($account: AccountInput!) { createAccount(account: $account) { id balance kind } }",
            json!({ "account": { "balance": "5000", "kind": "CHECKING" } }),
        )
        .await;
        assert_eq!(created["data"]["createAccount"]["id"], json!(1));
        assert_eq!(created["data"]["createAccount"]["kind"], json!("CHECKING"));

        let fetched = run(&schema, "{ getAccount(id: 1) { id balance kind } }", json!({})).await;
        assert_eq!(fetched["data"]["getAccount"], created["data"]["createAccount"]);
    }

    #[tokio::test]
    async fn test_missing_account_carries_extensions() {
        let schema = build_schema(AppConfig::in_memory());

        let response = run(&schema, "{ getAccount(id: 99) { id } }", json!({})).await;

        let error = &response["errors"][0];
        assert_eq!(error["message"], json!("Account 99 not found"));
        assert_eq!(error["extensions"]["code"], json!("NOT_FOUND"));
        assert_eq!(error["extensions"]["entity"], json!("Account"));
        assert_eq!(error["extensions"]["id"], json!(99));
    }

    #[tokio::test]
    async fn test_transaction_against_unknown_account_is_rejected() {
        let schema = seeded_schema();

        let response = run(
            &schema,
            "mutation { createTransaction(transaction: { accountId: 99, amount: \"500\", kind: WITHDRAWAL }) { id } }",
            json!({}),
        )
        .await;
        assert_eq!(response["errors"][0]["extensions"]["code"], json!("NOT_FOUND"));

        let listed = run(&schema, "{ listAllTransactions { id } }", json!({})).await;
        assert_eq!(listed["data"]["listAllTransactions"].as_array().map(Vec::len), Some(4));
    }

    #[tokio::test]
    async fn test_unknown_enum_value_fails_validation() {
        let schema = build_schema(AppConfig::in_memory());

        let response = run(
            &schema,
            "mutation { createAccount(account: { balance: \"1\", kind: BROKERAGE }) { id } }",
            json!({}),
        )
        .await;

        assert!(response["errors"].as_array().is_some_and(|e| !e.is_empty()));
        let count = run(&schema, "{ accountStats { count } }", json!({})).await;
        assert_eq!(count["data"]["accountStats"]["count"], json!(0));
    }

    #[tokio::test]
    async fn test_stats_over_seeded_data() {
        for schema in seeded_schemas() {
            let response = run(
                &schema,
                "{ accountStats { count sum average } transactionStats { count sumDeposits sumWithdrawals } }",
                json!({}),
            )
            .await;

            let data = &response["data"];
            assert_eq!(data["accountStats"]["count"], json!(3));
            assert_eq!(data["accountStats"]["sum"], json!("20500"));
            assert_eq!(data["accountStats"]["average"], json!("6833.33"));
            assert_eq!(data["transactionStats"]["count"], json!(4));
            assert_eq!(data["transactionStats"]["sumDeposits"], json!("3800"));
            assert_eq!(data["transactionStats"]["sumWithdrawals"], json!("500"));
        }
    }

    #[tokio::test]
    async fn test_number_literals_are_stored_as_written() {
        for schema in seeded_schemas() {
            let account = run(
                &schema,
                "mutation { createAccount(account: { balance: 0.1, kind: SAVINGS }) { id balance } }",
                json!({}),
            )
            .await;
            assert_eq!(account["data"]["createAccount"]["id"], json!(4));
            assert_eq!(account["data"]["createAccount"]["balance"], json!("0.1"));

            let transaction = run(
                &schema,
                "mutation { createTransaction(transaction: { accountId: 1, amount: 19.99, kind: DEPOSIT }) { amount } }",
                json!({}),
            )
            .await;
            assert_eq!(transaction["data"]["createTransaction"]["amount"], json!("19.99"));

            let stats = run(&schema, "{ transactionStats { sumDeposits } }", json!({})).await;
            assert_eq!(stats["data"]["transactionStats"]["sumDeposits"], json!("3819.99"));
        }
    }

    #[tokio::test]
    async fn test_decimal_variables_accept_numbers_and_strings() {
        let schema = build_schema(AppConfig::in_memory());
        let query = "mutation($account: AccountInput!) { createAccount(account: $account) { balance } }";

        for (balance, expected) in [(json!(1234.5678), "1234.5678"), (json!("-75.50"), "-75.50")] {
            let response = run(
                &schema,
                query,
                json!({ "account": { "balance": balance, "kind": "CHECKING" } }),
            )
            .await;
            assert_eq!(response["data"]["createAccount"]["balance"], json!(expected));
        }

        let rejected = run(
            &schema,
            query,
            json!({ "account": { "balance": "a lot", "kind": "CHECKING" } }),
        )
        .await;
        assert!(rejected["errors"].as_array().is_some_and(|e| !e.is_empty()));
    }

    #[tokio::test]
    async fn test_account_resolves_its_transactions() {
        let schema = seeded_schema();

        let response = run(
            &schema,
            "{ getAccount(id: 1) { transactions { id kind accountId account { id } } } }",
            json!({}),
        )
        .await;

        let transactions = &response["data"]["getAccount"]["transactions"];
        assert_eq!(transactions.as_array().map(Vec::len), Some(2));
        assert_eq!(transactions[1]["kind"], json!("WITHDRAWAL"));
        assert_eq!(transactions[0]["account"]["id"], json!(1));
    }

    #[tokio::test]
    async fn test_list_account_transactions_by_id() {
        let schema = seeded_schema();

        let response = run(
            &schema,
            "query($id: Int!) { listAccountTransactions(accountId: $id) { amount kind } }",
            json!({ "id": 2 }),
        )
        .await;

        assert_eq!(
            response["data"]["listAccountTransactions"],
            json!([{ "amount": "2000", "kind": "DEPOSIT" }])
        );
    }

    #[tokio::test]
    async fn test_non_positive_amount_is_a_validation_error() {
        let schema = seeded_schema();

        let response = run(
            &schema,
            "mutation { createTransaction(transaction: { accountId: 1, amount: \"0\", kind: DEPOSIT }) { id } }",
            json!({}),
        )
        .await;

        assert_eq!(response["errors"][0]["extensions"]["code"], json!("VALIDATION"));
    }
}
