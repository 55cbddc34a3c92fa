use crate::{AccountId, PromiseResult, U128};
use concordium_std::*;

/// What the host tells a handler about the call being executed.
pub trait HasCallContext {
    /// Account the contract is deployed on.
    fn current_account_id(&self) -> &AccountId;

    /// Account that made this call. For continuations this is the contract
    /// itself.
    fn predecessor_account_id(&self) -> &AccountId;

    /// Funds credited to the contract together with this call.
    fn attached_deposit(&self) -> U128;

    /// Block time, read fresh on every call.
    fn block_time(&self) -> Timestamp;

    /// Outcomes of the batches this call was chained on. Empty unless the
    /// call is a continuation.
    fn promise_results(&self) -> &[PromiseResult];
}

/// Call context handed over by the host binding.
///
/// Setters mirror the ones of the Concordium test contexts so that a context
/// can be built up step by step.
#[derive(Debug, Clone)]
pub struct CallContext {
    current_account_id: AccountId,
    predecessor_account_id: AccountId,
    attached_deposit: U128,
    block_time: Timestamp,
    promise_results: Vec<PromiseResult>,
}

impl CallContext {
    /// A call made by the contract account to itself at time zero, with
    /// nothing attached.
    pub fn new(current_account_id: AccountId) -> Self {
        Self {
            predecessor_account_id: current_account_id.clone(),
            current_account_id,
            attached_deposit: U128::ZERO,
            block_time: Timestamp::from_timestamp_millis(0),
            promise_results: Vec::new(),
        }
    }

    pub fn set_predecessor_account_id(&mut self, account: AccountId) -> &mut Self {
        self.predecessor_account_id = account;
        self
    }

    pub fn set_attached_deposit(&mut self, amount: U128) -> &mut Self {
        self.attached_deposit = amount;
        self
    }

    pub fn set_block_time(&mut self, time: Timestamp) -> &mut Self {
        self.block_time = time;
        self
    }

    pub fn set_promise_results(&mut self, results: Vec<PromiseResult>) -> &mut Self {
        self.promise_results = results;
        self
    }
}

impl HasCallContext for CallContext {
    fn current_account_id(&self) -> &AccountId {
        &self.current_account_id
    }

    fn predecessor_account_id(&self) -> &AccountId {
        &self.predecessor_account_id
    }

    fn attached_deposit(&self) -> U128 {
        self.attached_deposit
    }

    fn block_time(&self) -> Timestamp {
        self.block_time
    }

    fn promise_results(&self) -> &[PromiseResult] {
        &self.promise_results
    }
}
