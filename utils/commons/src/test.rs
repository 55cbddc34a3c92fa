//! Helpers shared by the contract unit tests.
use crate::{AccountId, CallContext, U128};
use concordium_std::*;
use core::fmt::Debug;

pub fn expect_error<E, T>(expr: Result<T, E>, err: E, msg: &str)
where
    E: Eq + Debug,
    T: Debug,
{
    let actual = expr.expect_err(msg);
    assert_eq!(actual, err);
}

/// Context of a call made by `predecessor` to `current` at `time_millis`,
/// attaching `deposit`.
pub fn new_ctx(current: &str, predecessor: &str, time_millis: u64, deposit: u128) -> CallContext {
    let mut ctx = CallContext::new(AccountId::from(current));
    ctx.set_predecessor_account_id(AccountId::from(predecessor))
        .set_block_time(Timestamp::from_timestamp_millis(time_millis))
        .set_attached_deposit(U128(deposit));
    ctx
}
