use super::*;

impl State {
    /// State of an auction opened by `current_account`, which holds the
    /// opening bid itself.
    pub fn fresh(params: AuctionInitParams, current_account: AccountId) -> Self {
        let opening = params.starting_price.unwrap_or(MINIMAL_UNIT);
        let payment = match params.ft_contract {
            Some(contract) => PaymentMedium::FungibleToken(FungibleToken { contract }),
            None => PaymentMedium::Native,
        };
        let payout = match params.nft {
            Some(lot) => PayoutAsset::NonFungibleToken(lot),
            None => PayoutAsset::None,
        };
        Self {
            highest_bid: Bid::new(current_account, opening),
            end_time: params.end_time,
            auctioneer: params.auctioneer,
            claimed: false,
            payment,
            payout,
        }
    }

    /// Bids are accepted strictly before the end time.
    pub fn ensure_open(&self, now: Timestamp) -> ContractResult<()> {
        ensure!(now < self.end_time, CustomContractError::AuctionEnded);
        Ok(())
    }

    /// Claims are accepted strictly after the end time.
    pub fn ensure_ended(&self, now: Timestamp) -> ContractResult<()> {
        ensure!(now > self.end_time, CustomContractError::AuctionStillActive);
        Ok(())
    }

    /// Make `(bidder, candidate)` the highest bid if the ladder accepts it.
    pub fn raise(&mut self, bidder: AccountId, candidate: U128) -> ContractResult<LastBid> {
        let current = self.highest_bid.amount()?;
        BidLadder::try_accept(current, candidate)?;
        let previous = core::mem::replace(&mut self.highest_bid, Bid::new(bidder, candidate));
        Ok(LastBid {
            bidder: previous.bidder,
            amount: current,
        })
    }

    pub fn info(&self) -> AuctionInfo {
        AuctionInfo {
            highest_bid: self.highest_bid.clone(),
            auction_end_time: self.end_time,
            auctioneer: self.auctioneer.clone(),
            claimed: self.claimed,
            ft_contract: match &self.payment {
                PaymentMedium::Native => None,
                PaymentMedium::FungibleToken(token) => Some(token.contract.clone()),
            },
            nft: match &self.payout {
                PayoutAsset::None => None,
                PayoutAsset::NonFungibleToken(lot) => Some(lot.clone()),
            },
        }
    }
}
