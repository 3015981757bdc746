use crate::accounts::operations;
use crate::error::BankError;
use crate::store::BankStore;
use crate::utils::traits::ActionProcessor;
use super::processor_enums::*;

impl ActionProcessor<AccountsProcessorOutput> for AccountsProcessorInput {
    fn process(&self, store: &dyn BankStore) -> Result<AccountsProcessorOutput, BankError> {
        match self {
            AccountsProcessorInput::ListAccounts => {
                let accounts = operations::list_accounts(store)?;
                Ok(AccountsProcessorOutput::ListAccounts(accounts))
            }
            AccountsProcessorInput::GetAccount(account_id) => {
                let account = operations::get_account(store, *account_id)?;
                Ok(AccountsProcessorOutput::GetAccount(account))
            }
            AccountsProcessorInput::CreateAccount(args) => {
                let account = operations::create_account(store, args.clone())?;
                Ok(AccountsProcessorOutput::CreateAccount(account))
            }
            AccountsProcessorInput::AccountStats => {
                let stats = operations::account_stats(store)?;
                Ok(AccountsProcessorOutput::AccountStats(stats))
            }
        }
    }
}
