use super::*;

/// An untagged event of auction creation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InitEvent {
    /// End time of the auction.
    pub end_time: Timestamp,
    /// Account the winning bid is paid to.
    pub auctioneer: AccountId,
    /// Opening amount held by the auction itself.
    pub starting_price: U128,
}

/// An untagged event of bidding.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BidEvent {
    /// Account who has bidden.
    pub bidder: AccountId,
    /// Bidding amount.
    pub amount: U128,
}

/// An untagged event of claiming.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ClaimEvent {
    pub winner: AccountId,
    pub amount: U128,
}

/// Tagged auction event to be serialized for the event log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuctionEvent {
    Init(InitEvent),
    Bid(BidEvent),
    Claim(ClaimEvent),
}

impl Serial for AuctionEvent {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            AuctionEvent::Init(event) => {
                out.write_u8(AUCTION_INIT_TAG)?;
                event.serial(out)
            }
            AuctionEvent::Bid(event) => {
                out.write_u8(BID_TAG)?;
                event.serial(out)
            }
            AuctionEvent::Claim(event) => {
                out.write_u8(CLAIM_TAG)?;
                event.serial(out)
            }
        }
    }
}

impl Deserial for AuctionEvent {
    fn deserial<R: Read>(source: &mut R) -> ParseResult<Self> {
        let tag = source.read_u8()?;
        match tag {
            AUCTION_INIT_TAG => InitEvent::deserial(source).map(AuctionEvent::Init),
            BID_TAG => BidEvent::deserial(source).map(AuctionEvent::Bid),
            CLAIM_TAG => ClaimEvent::deserial(source).map(AuctionEvent::Claim),
            _ => Err(ParseError::default()),
        }
    }
}
