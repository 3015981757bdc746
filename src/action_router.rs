use serde::{Deserialize, Serialize};
use crate::accounts::processor_enums::{AccountsProcessorInput, AccountsProcessorOutput};
use crate::error::BankError;
use crate::transactions::processor_enums::{TransactionsProcessorInput, TransactionsProcessorOutput};
use crate::utils::app_config::AppConfig;
use crate::utils::traits::ActionProcessor;

#[derive(Deserialize, Serialize, Debug)]
pub enum ActionRouterInput {
    Accounts(AccountsProcessorInput),
    Transactions(TransactionsProcessorInput),
}

#[derive(Deserialize, Serialize, Debug)]
pub enum ActionRouterOutput {
    Accounts(AccountsProcessorOutput),
    Transactions(TransactionsProcessorOutput),
}

impl ActionRouterInput {
    pub fn process(&self, app_config: &AppConfig) -> Result<ActionRouterOutput, BankError> {
        let store = app_config.store.as_ref();

        match self {
            ActionRouterInput::Accounts(processor) => {
                let res = processor.process(store)?;
                Ok(ActionRouterOutput::Accounts(res))
            }
            ActionRouterInput::Transactions(processor) => {
                let res = processor.process(store)?;
                Ok(ActionRouterOutput::Transactions(res))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn route(app_config: &AppConfig, body: serde_json::Value) -> Result<ActionRouterOutput, BankError> {
        let input: ActionRouterInput = serde_json::from_value(body).unwrap();
        input.process(app_config)
    }

    #[test]
    fn test_routes_account_creation_and_lookup() {
        let app_config = AppConfig::in_memory();

        let created = route(
            &app_config,
            json!({ "Accounts": { "CreateAccount": { "balance": "5000", "kind": "CHECKING" } } }),
        )
        .unwrap();
        assert!(matches!(
            created,
            ActionRouterOutput::Accounts(AccountsProcessorOutput::CreateAccount(ref a)) if a.id == 1
        ));

        let fetched = route(&app_config, json!({ "Accounts": { "GetAccount": 1 } })).unwrap();
        assert!(matches!(
            fetched,
            ActionRouterOutput::Accounts(AccountsProcessorOutput::GetAccount(ref a)) if a.id == 1
        ));
    }

    #[test]
    fn test_routes_unit_variants() {
        let app_config = AppConfig::in_memory();

        let stats = route(&app_config, json!({ "Transactions": "TransactionStats" })).unwrap();

        match stats {
            ActionRouterOutput::Transactions(TransactionsProcessorOutput::TransactionStats(s)) => {
                assert_eq!(s.count, 0)
            }
            other => panic!("unexpected output {:?}", other),
        }
    }

    #[test]
    fn test_not_found_propagates() {
        let app_config = AppConfig::in_memory();

        let err = route(
            &app_config,
            json!({ "Transactions": { "ListAccountTransactions": 9 } }),
        )
        .unwrap_err();

        assert_eq!(err.to_string(), "Account 9 not found");
    }
}
