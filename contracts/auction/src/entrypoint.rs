//! Dispatch of host calls by method name.
//!
//! Every call decodes its parameter, runs the handler against the stored
//! state and persists the state only if the handler succeeded.
use super::*;

/// Execute `method` of the auction contract.
pub fn call(
    method: &str,
    ctx: &impl HasCallContext,
    logger: &mut impl HasLogger,
    storage: &mut impl HasStorage,
    parameter: &[u8],
) -> ContractResult<Response> {
    match method {
        INIT => {
            // Rejected before the handler logs anything.
            ensure!(
                !storage.contains(STATE_KEY),
                CustomContractError::AlreadyInitialized
            );
            let params: AuctionInitParams = parse_params(parameter)?;
            let state = auction_init(ctx, logger, params)?;
            init_state(storage, &state)?;
            Ok(Response::empty())
        }
        BID => with_state_mut(storage, |state: &mut State| auction_bid(ctx, logger, state))
            .map(Response::with_actions),
        FT_ON_TRANSFER => {
            let params: FtOnTransferParams = parse_params(parameter)?;
            let outcome = with_state_mut(storage, |state: &mut State| {
                auction_ft_on_transfer(ctx, logger, state, params)
            })?;
            Ok(Response {
                return_value: to_bytes(&outcome.refund()),
                actions: outcome.into_actions(),
            })
        }
        CLAIM => with_state_mut(storage, |state: &mut State| auction_claim(ctx, logger, state))
            .map(Response::with_actions),
        GET_HIGHEST_BID => view(&*storage, get_highest_bid),
        GET_AUCTION_END_TIME => view(&*storage, get_auction_end_time),
        GET_AUCTIONEER => view(&*storage, get_auctioneer),
        GET_CLAIMED => view(&*storage, get_claimed),
        GET_AUCTION_INFO => view(&*storage, get_auction_info),
        _ => bail!(CustomContractError::UnknownMethod),
    }
}

fn view<R: Serial>(
    storage: &impl HasStorage,
    f: impl FnOnce(&State) -> R,
) -> ContractResult<Response> {
    let state: State = load_state(storage)?;
    Ok(Response::with_value(&f(&state)))
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use commons::{test::new_ctx, EventLog, MemoryStorage};

    const AUCTION: &str = "auction.testnet";

    fn init_bytes() -> Vec<u8> {
        to_bytes(&AuctionInitParams {
            end_time: Timestamp::from_timestamp_millis(1_000),
            auctioneer: AccountId::from("carol.testnet"),
            ft_contract: Some(AccountId::from("ft.testnet")),
            nft: None,
            starting_price: None,
        })
    }

    fn initialized() -> MemoryStorage {
        let mut storage = MemoryStorage::new();
        let ctx = new_ctx(AUCTION, "factory.testnet", 0, 0);
        call(INIT, &ctx, &mut EventLog::init(), &mut storage, &init_bytes())
            .expect("Init should work");
        storage
    }

    #[concordium_test]
    fn test_calls_before_init_fail() {
        let mut storage = MemoryStorage::new();
        let ctx = new_ctx(AUCTION, "alice.testnet", 10, 5);
        let mut logger = EventLog::init();
        for method in [BID, CLAIM, GET_HIGHEST_BID, GET_AUCTION_INFO] {
            assert_eq!(
                call(method, &ctx, &mut logger, &mut storage, &[]),
                Err(CustomContractError::NotInitialized)
            );
        }
    }

    #[concordium_test]
    fn test_init_only_once() {
        let mut storage = initialized();
        let before = storage.clone();
        let ctx = new_ctx(AUCTION, "factory.testnet", 0, 0);
        let mut logger = EventLog::init();
        assert_eq!(
            call(INIT, &ctx, &mut logger, &mut storage, &init_bytes()),
            Err(CustomContractError::AlreadyInitialized)
        );
        claim!(logger.logs.is_empty());
        assert_eq!(storage, before);
        assert_eq!(
            call(
                INIT,
                &ctx,
                &mut EventLog::init(),
                &mut MemoryStorage::new(),
                &[1, 2, 3]
            ),
            Err(CustomContractError::ParseParams)
        );
    }

    #[concordium_test]
    /// Test that a refunded token payment returns the refund amount and
    /// leaves the stored state untouched.
    fn test_ft_on_transfer_returns_refund_amount() {
        let mut storage = initialized();
        let ctx = new_ctx(AUCTION, "ft.testnet", 10, 0);
        let mut logger = EventLog::init();
        let payment = |amount: &str| {
            to_bytes(&FtOnTransferParams {
                sender_id: AccountId::from("alice.testnet"),
                amount: amount.into(),
                msg: String::new(),
            })
        };

        let response = call(FT_ON_TRANSFER, &ctx, &mut logger, &mut storage, &payment("500"))
            .expect("Payment should work");
        assert_eq!(response.value::<U128>(), Ok(U128::ZERO));
        assert_eq!(response.actions.len(), 1);

        let before = storage.clone();
        let response = call(FT_ON_TRANSFER, &ctx, &mut logger, &mut storage, &payment("500"))
            .expect("Low payments should be refunded");
        assert_eq!(response.value::<U128>(), Ok(U128(500)));
        claim!(response.actions.is_empty());
        assert_eq!(storage, before);
    }

    #[concordium_test]
    fn test_rejected_call_keeps_state() {
        let mut storage = initialized();
        let before = storage.clone();
        let ctx = new_ctx(AUCTION, "alice.testnet", 10, 100);
        assert_eq!(
            call(BID, &ctx, &mut EventLog::init(), &mut storage, &[]),
            Err(CustomContractError::UnsupportedMedium)
        );
        assert_eq!(storage, before);
    }

    #[concordium_test]
    fn test_views_and_unknown_method() {
        let mut storage = initialized();
        let ctx = new_ctx(AUCTION, "bob.testnet", 10, 0);
        let mut logger = EventLog::init();

        let response = call(GET_HIGHEST_BID, &ctx, &mut logger, &mut storage, &[])
            .expect("View should work");
        assert_eq!(
            response.value::<Bid>(),
            Ok(Bid::new(AccountId::from(AUCTION), MINIMAL_UNIT))
        );
        let response = call(GET_CLAIMED, &ctx, &mut logger, &mut storage, &[])
            .expect("View should work");
        assert_eq!(response.value::<bool>(), Ok(false));

        assert_eq!(
            call("withdraw", &ctx, &mut logger, &mut storage, &[]),
            Err(CustomContractError::UnknownMethod)
        );
    }
}
