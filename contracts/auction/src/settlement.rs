//! Capability interface of the payment media.
//!
//! Auction variants differ only in how amounts are read and how funds leave
//! the contract. Everything else, the bid ladder included, is shared.
use super::*;

/// Moves funds of one payment medium out of the auction.
pub trait Settlement {
    /// Read an amount of this medium from its decimal form.
    fn parse_amount(&self, raw: &str) -> Option<U128> {
        raw.parse().ok()
    }

    /// Give an outbid bidder their funds back.
    fn refund(&self, bidder: &AccountId, amount: U128) -> ActionBatch;

    /// Pay the winning bid to the auctioneer.
    fn payout(&self, auctioneer: &AccountId, amount: U128) -> ActionBatch;
}

impl Settlement for NativeCurrency {
    fn refund(&self, bidder: &AccountId, amount: U128) -> ActionBatch {
        simple_transfer(bidder, amount)
    }

    fn payout(&self, auctioneer: &AccountId, amount: U128) -> ActionBatch {
        simple_transfer(auctioneer, amount)
    }
}

impl FungibleToken {
    fn transfer(&self, receiver_id: &AccountId, amount: U128) -> ActionBatch {
        let params = FtTransferParams {
            receiver_id: receiver_id.clone(),
            amount,
        };
        ActionBatch::new(&self.contract).function_call(
            FT_TRANSFER,
            &params,
            ONE_YOCTO,
            TOKEN_TRANSFER_GAS,
        )
    }
}

impl Settlement for FungibleToken {
    fn refund(&self, bidder: &AccountId, amount: U128) -> ActionBatch {
        self.transfer(bidder, amount)
    }

    fn payout(&self, auctioneer: &AccountId, amount: U128) -> ActionBatch {
        self.transfer(auctioneer, amount)
    }
}

impl PaymentMedium {
    pub fn settlement(&self) -> &dyn Settlement {
        match self {
            PaymentMedium::Native => &NativeCurrency,
            PaymentMedium::FungibleToken(token) => token,
        }
    }
}

impl PayoutAsset {
    /// Transfer of the lot to `winner`, if there is one.
    pub fn delivery(&self, winner: &AccountId) -> Option<ActionBatch> {
        match self {
            PayoutAsset::None => None,
            PayoutAsset::NonFungibleToken(lot) => {
                let params = NftTransferParams {
                    receiver_id: winner.clone(),
                    token_id: lot.token_id.clone(),
                };
                Some(ActionBatch::new(&lot.contract).function_call(
                    NFT_TRANSFER,
                    &params,
                    ONE_YOCTO,
                    TOKEN_TRANSFER_GAS,
                ))
            }
        }
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use commons::BatchAction;

    #[concordium_test]
    fn test_native_refund_is_plain_transfer() {
        let alice = AccountId::from("alice.testnet");
        let batch = PaymentMedium::Native
            .settlement()
            .refund(&alice, U128(100));
        assert_eq!(batch, simple_transfer(&alice, U128(100)));
    }

    #[concordium_test]
    fn test_token_refund_calls_ft_transfer() {
        let token = FungibleToken {
            contract: AccountId::from("ft.testnet"),
        };
        let alice = AccountId::from("alice.testnet");
        let batch = token.refund(&alice, U128(50_000));

        assert_eq!(batch.receiver_id, token.contract);
        assert_eq!(
            batch.actions,
            vec![BatchAction::FunctionCall {
                method: FT_TRANSFER.into(),
                args: to_bytes(&FtTransferParams {
                    receiver_id: alice,
                    amount: U128(50_000),
                }),
                deposit: ONE_YOCTO,
                gas: TOKEN_TRANSFER_GAS,
            }]
        );
    }

    #[concordium_test]
    fn test_parse_amount_rejects_garbage() {
        let medium = PaymentMedium::Native;
        assert_eq!(medium.settlement().parse_amount("42"), Some(U128(42)));
        assert_eq!(medium.settlement().parse_amount("-1"), None);
        assert_eq!(medium.settlement().parse_amount(""), None);
    }

    #[concordium_test]
    fn test_no_delivery_without_lot() {
        let bob = AccountId::from("bob.testnet");
        claim!(PayoutAsset::None.delivery(&bob).is_none());

        let lot = NftLot {
            contract: AccountId::from("nft.testnet"),
            token_id: "token-1".into(),
        };
        let batch = PayoutAsset::NonFungibleToken(lot.clone())
            .delivery(&bob)
            .expect("A lot should be delivered");
        assert_eq!(batch.receiver_id, lot.contract);
    }
}
