//! # Implementation of the auction factory contract
//!
//! The factory keeps the code of the auction contract and deploys it to new
//! sub-accounts of its own account. A deployment is a saga of two chained
//! batches:
//!
//! 1. On the new account: create it, fund it with the full attached deposit,
//!    deploy the code and call the auction `init`.
//! 2. On the factory: `deploy_new_auction_callback`, which receives the
//!    outcome of the first batch.
//!
//! The callback carries everything it needs in its argument, the factory
//! stores nothing per deployment. If the first batch failed, the callback
//! hands the attached deposit back to the depositor. That refund is best
//! effort and not compensated in turn.
//!
//! The code template can only be replaced by the factory account itself.
pub use crate::{contract::*, entrypoint::*, events::*, structs::*};

use commons::{
    init_state, load_state, parse_params, simple_transfer, with_state_mut, AccountId, ActionBatch,
    Actions, AuctionInitParams, ContractResult, CustomContractError, HasCallContext, HasStorage,
    PromiseResult, Response, AUCTION_INIT_GAS, CODE_UPDATED_TAG, DEPLOY_CALLBACK_GAS,
    DEPLOY_CONFIRMED_TAG, DEPLOY_EXTRA_DEPOSIT, DEPLOY_NEW_AUCTION, DEPLOY_NEW_AUCTION_CALLBACK,
    DEPLOY_REQUESTED_TAG, DEPLOY_ROLLED_BACK_TAG, GET_CODE_SIZE, INIT, STATE_KEY,
    STORAGE_PRICE_PER_BYTE, U128, UPDATE_AUCTION_CONTRACT,
};
use concordium_std::*;

mod contract;
mod entrypoint;
mod events;
mod structs;
