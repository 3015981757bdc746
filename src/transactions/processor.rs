use crate::error::BankError;
use crate::store::BankStore;
use crate::transactions::operations;
use crate::utils::traits::ActionProcessor;
use super::processor_enums::*;

impl ActionProcessor<TransactionsProcessorOutput> for TransactionsProcessorInput {
    fn process(&self, store: &dyn BankStore) -> Result<TransactionsProcessorOutput, BankError> {
        match self {
            TransactionsProcessorInput::CreateTransaction(args) => {
                let transaction = operations::create_transaction(store, args.clone())?;
                Ok(TransactionsProcessorOutput::CreateTransaction(transaction))
            }
            TransactionsProcessorInput::GetTransaction(transaction_id) => {
                let transaction = operations::get_transaction(store, *transaction_id)?;
                Ok(TransactionsProcessorOutput::GetTransaction(transaction))
            }
            TransactionsProcessorInput::ListAccountTransactions(account_id) => {
                let transactions = operations::list_account_transactions(store, *account_id)?;
                Ok(TransactionsProcessorOutput::ListAccountTransactions(transactions))
            }
            TransactionsProcessorInput::ListAllTransactions => {
                let transactions = operations::list_all_transactions(store)?;
                Ok(TransactionsProcessorOutput::ListAllTransactions(transactions))
            }
            TransactionsProcessorInput::TransactionStats => {
                let stats = operations::transaction_stats(store)?;
                Ok(TransactionsProcessorOutput::TransactionStats(stats))
            }
        }
    }
}
