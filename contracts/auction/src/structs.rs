use super::*;

/// How bids are paid and how the winning bid reaches the auctioneer.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub enum PaymentMedium {
    /// Native currency attached to `bid`.
    Native,
    /// Fungible token, announced by its contract through `ft_on_transfer`.
    FungibleToken(FungibleToken),
}

/// Native currency of the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeCurrency;

/// Fungible token bids are paid in.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FungibleToken {
    /// Account of the token contract. The only account allowed to call
    /// `ft_on_transfer`.
    pub contract: AccountId,
}

/// What the winner receives besides the right to the lot.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub enum PayoutAsset {
    None,
    NonFungibleToken(NftLot),
}

/// The contract state.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct State {
    /// Current leader. Starts as the auction's own account holding the
    /// starting price.
    pub highest_bid: Bid,
    /// Bids are refused from this instant on.
    pub end_time: Timestamp,
    /// Account the winning bid is paid to.
    pub auctioneer: AccountId,
    /// Set once by the successful claim.
    pub claimed: bool,
    pub payment: PaymentMedium,
    pub payout: PayoutAsset,
}

/// Return value of `get_auction_info`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AuctionInfo {
    pub highest_bid: Bid,
    pub auction_end_time: Timestamp,
    pub auctioneer: AccountId,
    pub claimed: bool,
    pub ft_contract: Option<AccountId>,
    pub nft: Option<NftLot>,
}

/// Bid that was displaced by a new leader.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastBid {
    pub bidder: AccountId,
    pub amount: U128,
}

/// Result of a fungible token payment notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    /// The payment became the highest bid. Carries the refund of the
    /// displaced bidder.
    Accepted(Actions),
    /// The payment was not accepted and the token contract has to return
    /// `amount` to the sender.
    Refunded {
        amount: U128,
        reason: CustomContractError,
    },
}

impl PaymentOutcome {
    /// Amount the token contract has to give back to the sender.
    pub fn refund(&self) -> U128 {
        match self {
            PaymentOutcome::Accepted(_) => U128::ZERO,
            PaymentOutcome::Refunded { amount, .. } => *amount,
        }
    }

    pub fn into_actions(self) -> Actions {
        match self {
            PaymentOutcome::Accepted(actions) => actions,
            PaymentOutcome::Refunded { .. } => Actions::accept(),
        }
    }
}
