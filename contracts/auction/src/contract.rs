use super::*;

/// Init function that creates a new auction.
///
/// The auction account opens the ladder with a bid of the starting price.
pub fn auction_init(
    ctx: &impl HasCallContext,
    logger: &mut impl HasLogger,
    params: AuctionInitParams,
) -> ContractResult<State> {
    let state = State::fresh(params, ctx.current_account_id().clone());

    // Event for auction creation.
    logger.log(&AuctionEvent::Init(InitEvent {
        end_time: state.end_time,
        auctioneer: state.auctioneer.clone(),
        starting_price: state.highest_bid.amount()?,
    }))?;

    Ok(state)
}

/// Bid with the attached native deposit, before the auction end time.
///
/// The displaced bidder is refunded in a separate batch.
pub fn auction_bid(
    ctx: &impl HasCallContext,
    logger: &mut impl HasLogger,
    state: &mut State,
) -> ContractResult<Actions> {
    state.ensure_open(ctx.block_time())?;
    ensure!(
        state.payment == PaymentMedium::Native,
        CustomContractError::UnsupportedMedium
    );

    let bidder = ctx.predecessor_account_id().clone();
    let amount = ctx.attached_deposit();
    let previous = state.raise(bidder.clone(), amount)?;

    // Event for bidding.
    logger.log(&AuctionEvent::Bid(BidEvent { bidder, amount }))?;

    Ok(Actions::accept().and(NativeCurrency.refund(&previous.bidder, previous.amount)))
}

/// Notification of the fungible token contract that `sender_id` transferred
/// tokens to the auction.
///
/// A payment that does not beat the highest bid is not an error: it is
/// reported back as the amount the token contract has to return.
pub fn auction_ft_on_transfer(
    ctx: &impl HasCallContext,
    logger: &mut impl HasLogger,
    state: &mut State,
    params: FtOnTransferParams,
) -> ContractResult<PaymentOutcome> {
    state.ensure_open(ctx.block_time())?;

    let token = match &state.payment {
        PaymentMedium::FungibleToken(token) if token.contract == *ctx.predecessor_account_id() => {
            token.clone()
        }
        _ => bail!(CustomContractError::UnauthorizedAsset),
    };
    let amount = token
        .parse_amount(&params.amount)
        .ok_or(CustomContractError::InvalidAmount)?;

    let previous = match state.raise(params.sender_id.clone(), amount) {
        Ok(previous) => previous,
        Err(CustomContractError::BidTooLow) => {
            return Ok(PaymentOutcome::Refunded {
                amount,
                reason: CustomContractError::BidTooLow,
            })
        }
        Err(e) => return Err(e),
    };

    // Event for bidding.
    logger.log(&AuctionEvent::Bid(BidEvent {
        bidder: params.sender_id,
        amount,
    }))?;

    Ok(PaymentOutcome::Accepted(
        Actions::accept().and(token.refund(&previous.bidder, previous.amount)),
    ))
}

/// Close the auction after its end time. Anyone may call it, once.
///
/// The payout to the auctioneer and the lot delivery to the winner are
/// independent of each other.
pub fn auction_claim(
    ctx: &impl HasCallContext,
    logger: &mut impl HasLogger,
    state: &mut State,
) -> ContractResult<Actions> {
    state.ensure_ended(ctx.block_time())?;
    ensure!(!state.claimed, CustomContractError::AlreadyClaimed);

    let amount = state.highest_bid.amount()?;
    state.claimed = true;

    // Event for claiming.
    logger.log(&AuctionEvent::Claim(ClaimEvent {
        winner: state.highest_bid.bidder.clone(),
        amount,
    }))?;

    let mut actions =
        Actions::accept().and(state.payment.settlement().payout(&state.auctioneer, amount));
    if let Some(delivery) = state.payout.delivery(&state.highest_bid.bidder) {
        actions = actions.and(delivery);
    }

    Ok(actions)
}

pub fn get_highest_bid(state: &State) -> Bid {
    state.highest_bid.clone()
}

pub fn get_auction_end_time(state: &State) -> Timestamp {
    state.end_time
}

pub fn get_auctioneer(state: &State) -> AccountId {
    state.auctioneer.clone()
}

pub fn get_claimed(state: &State) -> bool {
    state.claimed
}

/// Everything about the auction in one read.
pub fn get_auction_info(state: &State) -> AuctionInfo {
    state.info()
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use commons::{
        test::{expect_error, new_ctx},
        BatchAction, CallContext, EventLog,
    };

    const AUCTION: &str = "auction.testnet";
    const AUCTIONEER: &str = "carol.testnet";
    const ALICE: &str = "alice.testnet";
    const BOB: &str = "bob.testnet";
    const FT: &str = "ft.testnet";
    const NFT: &str = "nft.testnet";
    const AUCTION_END: u64 = 1_000;

    fn account(id: &str) -> AccountId {
        AccountId::from(id)
    }

    fn init_params() -> AuctionInitParams {
        AuctionInitParams {
            end_time: Timestamp::from_timestamp_millis(AUCTION_END),
            auctioneer: account(AUCTIONEER),
            ft_contract: None,
            nft: None,
            starting_price: None,
        }
    }

    fn ft_params() -> AuctionInitParams {
        AuctionInitParams {
            ft_contract: Some(account(FT)),
            starting_price: Some(U128(10_000)),
            ..init_params()
        }
    }

    fn lot() -> NftLot {
        NftLot {
            contract: account(NFT),
            token_id: "token-1".into(),
        }
    }

    fn new_auction(params: AuctionInitParams) -> State {
        let ctx = new_ctx(AUCTION, ALICE, 0, 0);
        let mut logger = EventLog::init();
        auction_init(&ctx, &mut logger, params).expect("Init should work")
    }

    fn notify(
        from: &str,
        time: u64,
        sender: &str,
        amount: &str,
    ) -> (CallContext, FtOnTransferParams) {
        let ctx = new_ctx(AUCTION, from, time, 0);
        let params = FtOnTransferParams {
            sender_id: account(sender),
            amount: amount.into(),
            msg: String::new(),
        };
        (ctx, params)
    }

    fn ft_transfer(receiver: &str, amount: u128) -> ActionBatch {
        ActionBatch::new(&account(FT)).function_call(
            FT_TRANSFER,
            &FtTransferParams {
                receiver_id: account(receiver),
                amount: U128(amount),
            },
            ONE_YOCTO,
            TOKEN_TRANSFER_GAS,
        )
    }

    #[concordium_test]
    /// Test that the initialization opens the ladder with the auction's own
    /// sentinel bid.
    fn test_init() {
        let ctx = new_ctx(AUCTION, ALICE, 0, 0);
        let mut logger = EventLog::init();
        let state = auction_init(&ctx, &mut logger, init_params()).expect("Init should work");

        assert_eq!(state.highest_bid, Bid::new(account(AUCTION), MINIMAL_UNIT));
        assert_eq!(state.highest_bid.amount, "1");
        assert_eq!(state.payment, PaymentMedium::Native);
        assert_eq!(state.payout, PayoutAsset::None);
        claim!(!state.claimed);
        assert_eq!(
            logger.events::<AuctionEvent>(),
            Ok(vec![AuctionEvent::Init(InitEvent {
                end_time: Timestamp::from_timestamp_millis(AUCTION_END),
                auctioneer: account(AUCTIONEER),
                starting_price: MINIMAL_UNIT,
            })])
        );
    }

    #[concordium_test]
    fn test_init_with_starting_price() {
        let state = new_auction(ft_params());
        assert_eq!(state.highest_bid, Bid::new(account(AUCTION), U128(10_000)));
        assert_eq!(
            state.payment,
            PaymentMedium::FungibleToken(FungibleToken {
                contract: account(FT)
            })
        );
    }

    #[concordium_test]
    /// Test a sequence of bids and a claim:
    /// 0. Auction is initialized.
    /// 1. Alice successfully bids 100, the sentinel is refunded to the
    ///    auction itself.
    /// 2. Bob bids 50 and fails, nothing changes.
    /// 3. Bob successfully bids 300, Alice gets her 100 back.
    /// 4. Bidding at the end time fails, so does claiming at the end time.
    /// 5. Claiming after the end time pays 300 to the auctioneer.
    /// 6. Claiming again fails.
    fn test_auction_bid_and_claim() {
        let mut state = new_auction(init_params());
        let mut logger = EventLog::init();

        // 1.
        let ctx = new_ctx(AUCTION, ALICE, 10, 100);
        let actions = auction_bid(&ctx, &mut logger, &mut state).expect("Alice's bid should work");
        assert_eq!(
            actions,
            Actions::accept().and(simple_transfer(&account(AUCTION), MINIMAL_UNIT))
        );
        assert_eq!(state.highest_bid, Bid::new(account(ALICE), U128(100)));

        // 2.
        let ctx = new_ctx(AUCTION, BOB, 20, 50);
        expect_error(
            auction_bid(&ctx, &mut logger, &mut state),
            CustomContractError::BidTooLow,
            "Bidding below the highest bid should fail",
        );
        assert_eq!(state.highest_bid, Bid::new(account(ALICE), U128(100)));

        // 3.
        let ctx = new_ctx(AUCTION, BOB, 30, 300);
        let actions = auction_bid(&ctx, &mut logger, &mut state).expect("Bob's bid should work");
        assert_eq!(
            actions,
            Actions::accept().and(simple_transfer(&account(ALICE), U128(100)))
        );
        assert_eq!(state.highest_bid, Bid::new(account(BOB), U128(300)));

        // 4.
        let ctx = new_ctx(AUCTION, ALICE, AUCTION_END, 1_000);
        expect_error(
            auction_bid(&ctx, &mut logger, &mut state),
            CustomContractError::AuctionEnded,
            "Bidding at the end time should fail",
        );
        expect_error(
            auction_claim(&ctx, &mut logger, &mut state),
            CustomContractError::AuctionStillActive,
            "Claiming at the end time should fail",
        );

        // 5.
        let ctx = new_ctx(AUCTION, ALICE, 2_000, 0);
        let actions = auction_claim(&ctx, &mut logger, &mut state).expect("Claim should work");
        assert_eq!(
            actions,
            Actions::accept().and(simple_transfer(&account(AUCTIONEER), U128(300)))
        );
        claim!(state.claimed);

        // 6.
        expect_error(
            auction_claim(&ctx, &mut logger, &mut state),
            CustomContractError::AlreadyClaimed,
            "Claiming twice should fail",
        );

        assert_eq!(
            logger.events::<AuctionEvent>(),
            Ok(vec![
                AuctionEvent::Bid(BidEvent {
                    bidder: account(ALICE),
                    amount: U128(100)
                }),
                AuctionEvent::Bid(BidEvent {
                    bidder: account(BOB),
                    amount: U128(300)
                }),
                AuctionEvent::Claim(ClaimEvent {
                    winner: account(BOB),
                    amount: U128(300)
                }),
            ])
        );
    }

    #[concordium_test]
    /// Test that an equal bid never displaces the earlier bidder.
    fn test_tie_is_rejected() {
        let mut state = new_auction(init_params());
        let mut logger = EventLog::init();

        let ctx = new_ctx(AUCTION, ALICE, 10, 100);
        let _ = auction_bid(&ctx, &mut logger, &mut state).expect("Alice's bid should work");

        let ctx = new_ctx(AUCTION, BOB, 20, 100);
        expect_error(
            auction_bid(&ctx, &mut logger, &mut state),
            CustomContractError::BidTooLow,
            "Matching the highest bid should fail",
        );
        assert_eq!(state.highest_bid.bidder, account(ALICE));
    }

    #[concordium_test]
    /// Test that the highest bid only ever grows and that every accepted bid
    /// refunds exactly the bid it replaced.
    fn test_accepted_bids_strictly_increase() {
        let mut state = new_auction(init_params());
        let mut logger = EventLog::init();
        let deposits = [(ALICE, 5u128), (BOB, 4), (ALICE, 9), (BOB, 9), (BOB, 12)];

        let mut previous = (account(AUCTION), MINIMAL_UNIT);
        for (time, (bidder, deposit)) in deposits.iter().enumerate() {
            let ctx = new_ctx(AUCTION, bidder, time as u64, *deposit);
            match auction_bid(&ctx, &mut logger, &mut state) {
                Ok(actions) => {
                    claim!(U128(*deposit) > previous.1);
                    assert_eq!(
                        actions,
                        Actions::accept().and(simple_transfer(&previous.0, previous.1))
                    );
                    previous = (account(bidder), U128(*deposit));
                }
                Err(e) => {
                    assert_eq!(e, CustomContractError::BidTooLow);
                    claim!(U128(*deposit) <= previous.1);
                }
            }
        }
        assert_eq!(state.highest_bid, Bid::new(account(BOB), U128(12)));
        assert_eq!(logger.logs.len(), 3);
    }

    #[concordium_test]
    fn test_native_bid_on_token_auction_fails() {
        let mut state = new_auction(ft_params());
        let mut logger = EventLog::init();
        let ctx = new_ctx(AUCTION, ALICE, 10, 50_000);
        expect_error(
            auction_bid(&ctx, &mut logger, &mut state),
            CustomContractError::UnsupportedMedium,
            "Native bids on a token auction should fail",
        );
    }

    #[concordium_test]
    /// Test a sequence of token payments:
    /// 1. Alice pays 50000, the starting price is refunded to the auction.
    /// 2. Bob pays 5000 and gets it back as refund amount.
    /// 3. A payment announced by another token contract fails.
    /// 4. Bob pays 60000, Alice gets her tokens back.
    fn test_token_payments() {
        let mut state = new_auction(ft_params());

        // 1.
        let (ctx, params) = notify(FT, 10, ALICE, "50000");
        let mut logger = EventLog::init();
        let outcome = auction_ft_on_transfer(&ctx, &mut logger, &mut state, params)
            .expect("Alice's payment should work");
        assert_eq!(outcome.refund(), U128::ZERO);
        assert_eq!(
            outcome.into_actions(),
            Actions::accept().and(ft_transfer(AUCTION, 10_000))
        );
        assert_eq!(state.highest_bid, Bid::new(account(ALICE), U128(50_000)));

        // 2.
        let (ctx, params) = notify(FT, 20, BOB, "5000");
        let mut logger = EventLog::init();
        let outcome = auction_ft_on_transfer(&ctx, &mut logger, &mut state, params)
            .expect("A low payment should be refunded, not rejected");
        assert_eq!(
            outcome,
            PaymentOutcome::Refunded {
                amount: U128(5_000),
                reason: CustomContractError::BidTooLow
            }
        );
        assert_eq!(outcome.refund(), U128(5_000));
        claim!(logger.logs.is_empty());
        assert_eq!(state.highest_bid, Bid::new(account(ALICE), U128(50_000)));

        // 3.
        let (ctx, params) = notify("evil.testnet", 30, BOB, "900000");
        let mut logger = EventLog::init();
        expect_error(
            auction_ft_on_transfer(&ctx, &mut logger, &mut state, params),
            CustomContractError::UnauthorizedAsset,
            "Payments of another token should fail",
        );

        // 4.
        let (ctx, params) = notify(FT, 40, BOB, "60000");
        let mut logger = EventLog::init();
        let outcome = auction_ft_on_transfer(&ctx, &mut logger, &mut state, params)
            .expect("Bob's payment should work");
        assert_eq!(
            outcome,
            PaymentOutcome::Accepted(Actions::accept().and(ft_transfer(ALICE, 50_000)))
        );
        assert_eq!(
            logger.events::<AuctionEvent>(),
            Ok(vec![AuctionEvent::Bid(BidEvent {
                bidder: account(BOB),
                amount: U128(60_000)
            })])
        );
    }

    #[concordium_test]
    fn test_token_payment_validation() {
        let mut state = new_auction(ft_params());

        let (ctx, params) = notify(FT, 10, ALICE, "5e4");
        let mut logger = EventLog::init();
        expect_error(
            auction_ft_on_transfer(&ctx, &mut logger, &mut state, params),
            CustomContractError::InvalidAmount,
            "A non-decimal amount should fail",
        );

        let (ctx, params) = notify(FT, AUCTION_END, ALICE, "50000");
        let mut logger = EventLog::init();
        expect_error(
            auction_ft_on_transfer(&ctx, &mut logger, &mut state, params),
            CustomContractError::AuctionEnded,
            "Payments at the end time should fail",
        );

        let mut native = new_auction(init_params());
        let (ctx, params) = notify(FT, 10, ALICE, "50000");
        let mut logger = EventLog::init();
        expect_error(
            auction_ft_on_transfer(&ctx, &mut logger, &mut native, params),
            CustomContractError::UnauthorizedAsset,
            "A native auction accepts no token payments",
        );
    }

    #[concordium_test]
    /// Test that claiming a token auction with a lot pays the auctioneer in
    /// tokens and hands the lot to the winner, as two independent promises.
    fn test_claim_pays_out_and_delivers_lot() {
        let mut state = new_auction(AuctionInitParams {
            nft: Some(lot()),
            ..ft_params()
        });
        let (ctx, params) = notify(FT, 10, BOB, "20000");
        let mut logger = EventLog::init();
        let _ = auction_ft_on_transfer(&ctx, &mut logger, &mut state, params)
            .expect("Bob's payment should work");

        let ctx = new_ctx(AUCTION, ALICE, AUCTION_END + 1, 0);
        let actions = auction_claim(&ctx, &mut logger, &mut state).expect("Claim should work");

        assert_eq!(actions.len(), 2);
        assert_eq!(
            actions.promises()[0].batches(),
            &[ft_transfer(AUCTIONEER, 20_000)]
        );
        let delivery = &actions.promises()[1].batches()[0];
        assert_eq!(delivery.receiver_id, account(NFT));
        assert_eq!(
            delivery.actions,
            vec![BatchAction::FunctionCall {
                method: NFT_TRANSFER.into(),
                args: to_bytes(&NftTransferParams {
                    receiver_id: account(BOB),
                    token_id: "token-1".into(),
                }),
                deposit: ONE_YOCTO,
                gas: TOKEN_TRANSFER_GAS,
            }]
        );
    }

    #[concordium_test]
    /// Test that an auction without bids pays the sentinel back to itself.
    fn test_claim_without_bids() {
        let mut state = new_auction(init_params());
        let mut logger = EventLog::init();
        let ctx = new_ctx(AUCTION, BOB, 5_000, 0);
        let actions = auction_claim(&ctx, &mut logger, &mut state).expect("Claim should work");
        assert_eq!(
            actions,
            Actions::accept().and(simple_transfer(&account(AUCTIONEER), MINIMAL_UNIT))
        );
        assert_eq!(state.highest_bid.bidder, account(AUCTION));
    }

    #[concordium_test]
    fn test_damaged_amount_is_invalid_state() {
        let mut state = new_auction(init_params());
        state.highest_bid.amount = "not a number".into();
        let mut logger = EventLog::init();

        let ctx = new_ctx(AUCTION, ALICE, 10, 100);
        expect_error(
            auction_bid(&ctx, &mut logger, &mut state),
            CustomContractError::InvalidState,
            "Bidding against a damaged record should fail",
        );

        let ctx = new_ctx(AUCTION, ALICE, 5_000, 0);
        expect_error(
            auction_claim(&ctx, &mut logger, &mut state),
            CustomContractError::InvalidState,
            "Claiming a damaged record should fail",
        );
        claim!(!state.claimed);
    }

    #[concordium_test]
    fn test_views() {
        let state = new_auction(AuctionInitParams {
            nft: Some(lot()),
            ..ft_params()
        });
        assert_eq!(get_highest_bid(&state), Bid::new(account(AUCTION), U128(10_000)));
        assert_eq!(
            get_auction_end_time(&state),
            Timestamp::from_timestamp_millis(AUCTION_END)
        );
        assert_eq!(get_auctioneer(&state), account(AUCTIONEER));
        claim!(!get_claimed(&state));

        let info = get_auction_info(&state);
        assert_eq!(info.ft_contract, Some(account(FT)));
        assert_eq!(info.nft, Some(lot()));
        assert_eq!(info.highest_bid, get_highest_bid(&state));
    }
}
