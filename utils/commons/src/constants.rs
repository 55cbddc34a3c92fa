use crate::{Gas, U128};

/// Tag for the auction Init event.
pub const AUCTION_INIT_TAG: u8 = u8::MAX;

/// Tag for the auction Bid event.
pub const BID_TAG: u8 = u8::MAX - 1;

/// Tag for the auction Claim event.
pub const CLAIM_TAG: u8 = u8::MAX - 2;

/// Tag for the factory Deploy Requested event.
pub const DEPLOY_REQUESTED_TAG: u8 = u8::MAX - 3;

/// Tag for the factory Deploy Confirmed event.
pub const DEPLOY_CONFIRMED_TAG: u8 = u8::MAX - 4;

/// Tag for the factory Deploy Rolled Back event.
pub const DEPLOY_ROLLED_BACK_TAG: u8 = u8::MAX - 5;

/// Tag for the factory Code Updated event.
pub const CODE_UPDATED_TAG: u8 = u8::MAX - 6;

/// Maximum size of a single logged event in bytes.
pub const MAX_LOG_SIZE: usize = 512;

/// Maximum number of events a single call may log.
pub const MAX_NUM_LOGS: usize = 64;

/// Storage key of the contract state record.
pub const STATE_KEY: &[u8] = b"STATE";

pub const MIN_ACCOUNT_ID_LEN: usize = 2;
pub const MAX_ACCOUNT_ID_LEN: usize = 64;

/// Smallest representable amount, used as the sentinel opening bid.
pub const MINIMAL_UNIT: U128 = U128::new(1);

/// Deposit attached to token transfer calls (1 yocto).
pub const ONE_YOCTO: U128 = U128::new(1);

/// Price of one byte of account storage (10^19 yocto).
pub const STORAGE_PRICE_PER_BYTE: U128 = U128::new(10_000_000_000_000_000_000);

/// Buffer on top of the code storage cost when deploying an auction (0.1 NEAR).
pub const DEPLOY_EXTRA_DEPOSIT: U128 = U128::new(100_000_000_000_000_000_000_000);

pub const TOKEN_TRANSFER_GAS: Gas = Gas::from_tgas(30);
pub const AUCTION_INIT_GAS: Gas = Gas::from_tgas(5);
pub const DEPLOY_CALLBACK_GAS: Gas = Gas::from_tgas(5);

// Entrypoint names.
pub const INIT: &str = "init";
pub const BID: &str = "bid";
pub const FT_ON_TRANSFER: &str = "ft_on_transfer";
pub const CLAIM: &str = "claim";
pub const GET_HIGHEST_BID: &str = "get_highest_bid";
pub const GET_AUCTION_END_TIME: &str = "get_auction_end_time";
pub const GET_AUCTIONEER: &str = "get_auctioneer";
pub const GET_CLAIMED: &str = "get_claimed";
pub const GET_AUCTION_INFO: &str = "get_auction_info";
pub const DEPLOY_NEW_AUCTION: &str = "deploy_new_auction";
pub const DEPLOY_NEW_AUCTION_CALLBACK: &str = "deploy_new_auction_callback";
pub const UPDATE_AUCTION_CONTRACT: &str = "update_auction_contract";
pub const GET_CODE_SIZE: &str = "get_code_size";

// Entrypoints of the external token contracts.
pub const FT_TRANSFER: &str = "ft_transfer";
pub const NFT_TRANSFER: &str = "nft_transfer";
