use crate::{AccountId, U128};
use concordium_std::*;

/// Parameter of the fungible token `ft_transfer` entrypoint.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FtTransferParams {
    pub receiver_id: AccountId,
    pub amount: U128,
}

/// Parameter of the non-fungible token `nft_transfer` entrypoint.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NftTransferParams {
    pub receiver_id: AccountId,
    pub token_id: String,
}

/// Notification a fungible token contract sends to the receiver of a
/// transfer. The token contract itself is the caller.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FtOnTransferParams {
    /// Account the tokens were sent from.
    pub sender_id: AccountId,
    /// Transferred amount, as received on the wire.
    pub amount: String,
    /// Free-form message attached to the transfer.
    pub msg: String,
}
