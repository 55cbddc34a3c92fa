//! # Implementation of an ascending auction contract
//!
//! Bids are paid either in native currency, attached to `bid`, or in a
//! fungible token, in which case the token contract announces the transfer
//! through `ft_on_transfer`. The medium is chosen once, at `init`.
//! Only bids that exceed the highest bid are accepted. The bid that gets
//! outbid is refunded right away, so the contract only ever holds the
//! highest bid.
//!
//! The auction opens with a bid of its own account for the starting price
//! (one unit unless configured). Bids are refused from the end time on.
//!
//! After the end time anyone can claim the auction, exactly once. Claiming
//! pays the highest bid to the auctioneer and, if the auction sells an NFT,
//! transfers the token to the winner.
//!
//! Refunds and payouts are emitted as actions and executed by the host after
//! the call returned. Their failure does not roll back the state change that
//! emitted them.
pub use crate::{contract::*, entrypoint::*, events::*, settlement::*, structs::*};

use commons::{
    init_state, load_state, parse_params, simple_transfer, with_state_mut, AccountId, ActionBatch,
    Actions, AuctionInitParams, Bid, BidLadder, ContractResult, CustomContractError,
    FtOnTransferParams, FtTransferParams, HasCallContext, HasStorage, NftLot, NftTransferParams,
    Response, AUCTION_INIT_TAG, BID, BID_TAG, CLAIM, CLAIM_TAG, FT_ON_TRANSFER, FT_TRANSFER,
    GET_AUCTIONEER, GET_AUCTION_END_TIME, GET_AUCTION_INFO, GET_CLAIMED, GET_HIGHEST_BID, INIT,
    MINIMAL_UNIT, NFT_TRANSFER, ONE_YOCTO, STATE_KEY, TOKEN_TRANSFER_GAS, U128,
};
use concordium_std::*;

mod contract;
mod entrypoint;
mod events;
mod impls;
mod settlement;
mod structs;
