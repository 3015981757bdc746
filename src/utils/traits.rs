use crate::error::BankError;
use crate::store::BankStore;

pub trait ActionProcessor<Output> {
    fn process(&self, store: &dyn BankStore) -> Result<Output, BankError>;
}
