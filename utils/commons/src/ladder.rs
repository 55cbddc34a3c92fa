use crate::{AccountId, ContractResult, CustomContractError, U128};
use concordium_std::*;

/// A bid as kept in contract state.
///
/// The amount stays in its decimal string form; it is parsed each time it is
/// used, so a damaged record surfaces as `InvalidState` instead of a wrong
/// comparison.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Bid {
    /// Account that placed the bid.
    pub bidder: AccountId,
    /// Bid amount as a decimal string.
    pub amount: String,
}

impl Bid {
    pub fn new(bidder: AccountId, amount: U128) -> Self {
        Self {
            bidder,
            amount: amount.to_string(),
        }
    }

    /// Parsed bid amount.
    pub fn amount(&self) -> ContractResult<U128> {
        self.amount
            .parse()
            .map_err(|_| CustomContractError::InvalidState)
    }
}

/// Accept/reject rule of an ascending auction.
pub struct BidLadder;

impl BidLadder {
    /// A candidate is accepted only if it is strictly above the current
    /// amount. An equal bid never displaces the earlier bidder.
    pub fn try_accept(current: U128, candidate: U128) -> ContractResult<()> {
        ensure!(candidate > current, CustomContractError::BidTooLow);
        Ok(())
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    #[concordium_test]
    fn test_ladder_is_strict() {
        assert_eq!(BidLadder::try_accept(U128(100), U128(101)), Ok(()));
        assert_eq!(
            BidLadder::try_accept(U128(100), U128(100)),
            Err(CustomContractError::BidTooLow)
        );
        assert_eq!(
            BidLadder::try_accept(U128(100), U128(50)),
            Err(CustomContractError::BidTooLow)
        );
    }

    #[concordium_test]
    fn test_accepted_sequence_strictly_increases() {
        let candidates = [5u128, 3, 5, 8, 8, 13, 1, 21];
        let mut current = U128(1);
        let mut accepted = Vec::new();
        for candidate in candidates.iter().copied().map(U128) {
            if BidLadder::try_accept(current, candidate).is_ok() {
                accepted.push(candidate);
                current = candidate;
            }
        }
        assert_eq!(accepted, vec![U128(5), U128(8), U128(13), U128(21)]);
        claim!(accepted.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[concordium_test]
    fn test_malformed_amount_is_invalid_state() {
        let bid = Bid {
            bidder: AccountId::from("alice.testnet"),
            amount: "12x".into(),
        };
        assert_eq!(bid.amount(), Err(CustomContractError::InvalidState));
        let bid = Bid::new(AccountId::from("alice.testnet"), U128(12));
        assert_eq!(bid.amount(), Ok(U128(12)));
    }
}
