//! Effects a handler hands back to the host.
//!
//! Handlers never wait on another account. They return [`Actions`]: a set of
//! independent [`Promise`]s, each an ordered chain of [`ActionBatch`]es. The
//! host executes them after the handler has returned and its state has been
//! persisted. A chained batch runs once its predecessor resolved, whether it
//! succeeded or failed; the outcome reaches the continuation as a
//! [`PromiseResult`].
use crate::{AccountId, U128};
use concordium_std::*;

/// Gas budget attached to a function call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Gas(pub u64);

impl Gas {
    pub const ONE_TERA: u64 = 1_000_000_000_000;

    pub const fn from_tgas(tgas: u64) -> Self {
        Self(tgas * Self::ONE_TERA)
    }
}

/// A single effect executed on the receiver account of its batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchAction {
    CreateAccount,
    Transfer {
        amount: U128,
    },
    DeployContract {
        code: Vec<u8>,
    },
    FunctionCall {
        method: String,
        args: Vec<u8>,
        deposit: U128,
        gas: Gas,
    },
}

/// Ordered effects against one receiver. Executed in submission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionBatch {
    pub receiver_id: AccountId,
    pub actions: Vec<BatchAction>,
}

impl ActionBatch {
    pub fn new(receiver_id: &AccountId) -> Self {
        Self {
            receiver_id: receiver_id.clone(),
            actions: Vec::new(),
        }
    }

    pub fn create_account(mut self) -> Self {
        self.actions.push(BatchAction::CreateAccount);
        self
    }

    pub fn transfer(mut self, amount: U128) -> Self {
        self.actions.push(BatchAction::Transfer { amount });
        self
    }

    pub fn deploy_contract(mut self, code: &[u8]) -> Self {
        self.actions.push(BatchAction::DeployContract {
            code: code.to_vec(),
        });
        self
    }

    /// Call `method` on the receiver with serialized `args`.
    pub fn function_call<P: Serial>(
        mut self,
        method: &str,
        args: &P,
        deposit: U128,
        gas: Gas,
    ) -> Self {
        self.actions.push(BatchAction::FunctionCall {
            method: method.into(),
            args: to_bytes(args),
            deposit,
            gas,
        });
        self
    }

    /// Chain `next` to run after this batch resolved.
    pub fn then(self, next: ActionBatch) -> Promise {
        Promise::from(self).then(next)
    }
}

/// Plain transfer of `amount` to `receiver_id`.
pub fn simple_transfer(receiver_id: &AccountId, amount: U128) -> ActionBatch {
    ActionBatch::new(receiver_id).transfer(amount)
}

/// A chain of batches, each one deferred until its predecessor resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Promise {
    batches: Vec<ActionBatch>,
}

impl Promise {
    pub fn then(mut self, next: ActionBatch) -> Self {
        self.batches.push(next);
        self
    }

    pub fn batches(&self) -> &[ActionBatch] {
        &self.batches
    }
}

impl From<ActionBatch> for Promise {
    fn from(batch: ActionBatch) -> Self {
        Self {
            batches: vec![batch],
        }
    }
}

/// Everything a handler emitted, as unrelated promises.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Actions {
    promises: Vec<Promise>,
}

impl Actions {
    /// No effects.
    pub fn accept() -> Self {
        Self::default()
    }

    pub fn and(mut self, promise: impl Into<Promise>) -> Self {
        self.promises.push(promise.into());
        self
    }

    pub fn promises(&self) -> &[Promise] {
        &self.promises
    }

    pub fn is_empty(&self) -> bool {
        self.promises.is_empty()
    }

    pub fn len(&self) -> usize {
        self.promises.len()
    }
}

/// Outcome of a resolved batch as delivered to its continuation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PromiseResult {
    Successful(Vec<u8>),
    Failed,
}

impl PromiseResult {
    pub fn is_success(&self) -> bool {
        matches!(self, PromiseResult::Successful(_))
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    #[concordium_test]
    fn test_chained_batches_keep_order() {
        let alice = AccountId::from("alice.testnet");
        let factory = AccountId::from("factory.testnet");

        let promise = ActionBatch::new(&alice)
            .create_account()
            .transfer(U128(10))
            .then(ActionBatch::new(&factory).function_call(
                "callback",
                &7u64,
                U128::ZERO,
                Gas::from_tgas(5),
            ));

        assert_eq!(promise.batches().len(), 2);
        assert_eq!(promise.batches()[0].receiver_id, alice);
        assert_eq!(
            promise.batches()[0].actions,
            vec![
                BatchAction::CreateAccount,
                BatchAction::Transfer { amount: U128(10) }
            ]
        );
        assert_eq!(
            promise.batches()[1].actions,
            vec![BatchAction::FunctionCall {
                method: "callback".into(),
                args: to_bytes(&7u64),
                deposit: U128::ZERO,
                gas: Gas(5_000_000_000_000),
            }]
        );
    }

    #[concordium_test]
    fn test_actions_collect_independent_promises() {
        let alice = AccountId::from("alice.testnet");
        let actions = Actions::accept()
            .and(simple_transfer(&alice, U128(1)))
            .and(simple_transfer(&alice, U128(2)));
        assert_eq!(actions.len(), 2);
        claim!(Actions::accept().is_empty());
    }
}
