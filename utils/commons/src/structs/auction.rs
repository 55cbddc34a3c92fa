use crate::{AccountId, U128};
use concordium_std::*;

/// Non-fungible token handed to the winner when the auction is claimed.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NftLot {
    /// Account of the NFT contract.
    pub contract: AccountId,
    /// Identifier of the token within that contract.
    pub token_id: String,
}

/// Type of the parameter to the auction `init` function.
///
/// Shared with the factory, which forwards it to every auction it deploys.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AuctionInitParams {
    /// Time of the auction end. Bids are refused from this instant on.
    pub end_time: Timestamp,
    /// Account that receives the winning bid.
    pub auctioneer: AccountId,
    /// Fungible token bids are paid in. `None` means native currency.
    pub ft_contract: Option<AccountId>,
    /// Token sold by the auction, if any.
    pub nft: Option<NftLot>,
    /// Opening amount held by the auction itself. Defaults to one unit.
    pub starting_price: Option<U128>,
}
