use super::*;

/// Execute `method` of the factory contract.
pub fn call(
    method: &str,
    ctx: &impl HasCallContext,
    logger: &mut impl HasLogger,
    storage: &mut impl HasStorage,
    parameter: &[u8],
) -> ContractResult<Response> {
    match method {
        INIT => {
            ensure!(
                !storage.contains(STATE_KEY),
                CustomContractError::AlreadyInitialized
            );
            let params: FactoryInitParams = parse_params(parameter)?;
            let state = factory_init(params)?;
            init_state(storage, &state)?;
            Ok(Response::empty())
        }
        DEPLOY_NEW_AUCTION => {
            let params: DeployParams = parse_params(parameter)?;
            let state: State = load_state(storage)?;
            deploy_new_auction(ctx, logger, &state, params).map(Response::with_actions)
        }
        DEPLOY_NEW_AUCTION_CALLBACK => {
            let intent: DeployCallbackParams = parse_params(parameter)?;
            // Only continuations carry the outcome of a prior batch.
            let result = ctx
                .promise_results()
                .first()
                .ok_or(CustomContractError::Unauthorized)?;
            let status = deploy_new_auction_callback(ctx, logger, intent, result)?;
            Ok(Response {
                return_value: to_bytes(&status.is_confirmed()),
                actions: status.into_actions(),
            })
        }
        UPDATE_AUCTION_CONTRACT => {
            let params: UpdateCodeParams = parse_params(parameter)?;
            with_state_mut(storage, |state: &mut State| {
                update_auction_contract(ctx, logger, state, params)
            })?;
            Ok(Response::empty())
        }
        GET_CODE_SIZE => {
            let state: State = load_state(storage)?;
            Ok(Response::with_value(&get_code_size(&state)))
        }
        _ => bail!(CustomContractError::UnknownMethod),
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use commons::{test::new_ctx, BatchAction, CallContext, EventLog, MemoryStorage};

    const FACTORY: &str = "factory.testnet";
    const ALICE: &str = "alice.testnet";
    const BOB: &str = "bob.testnet";
    const ONE_NEAR: u128 = 1_000_000_000_000_000_000_000_000;

    fn factory() -> MemoryStorage {
        let mut storage = MemoryStorage::new();
        let ctx = new_ctx(FACTORY, FACTORY, 0, 0);
        let params = FactoryInitParams {
            code: b"auction code".to_vec(),
        };
        call(
            INIT,
            &ctx,
            &mut EventLog::init(),
            &mut storage,
            &to_bytes(&params),
        )
        .expect("Init should work");
        storage
    }

    fn deploy_bytes() -> Vec<u8> {
        to_bytes(&DeployParams {
            name: "sale".into(),
            auction: AuctionInitParams {
                end_time: Timestamp::from_timestamp_millis(1_000),
                auctioneer: AccountId::from(ALICE),
                ft_contract: None,
                nft: None,
                starting_price: Some(U128(500)),
            },
        })
    }

    /// Arguments of the function call closing `batch`.
    fn call_args(batch: &ActionBatch) -> Vec<u8> {
        match batch.actions.last() {
            Some(BatchAction::FunctionCall { args, .. }) => args.clone(),
            other => fail!("Expected a function call, got {:?}", other),
        }
    }

    /// Context of the continuation, as the host invokes it.
    fn continuation(result: PromiseResult) -> CallContext {
        let mut ctx = new_ctx(FACTORY, FACTORY, 20, 0);
        ctx.set_promise_results(vec![result]);
        ctx
    }

    #[concordium_test]
    /// Test the deployment saga end to end:
    /// 1. Alice requests a deployment through the factory.
    /// 2. The host runs the first batch: the new auction is initialized with
    ///    the forwarded parameters.
    /// 3. The host runs the callback with the successful outcome.
    fn test_deployment_saga_succeeds() {
        let mut storage = factory();
        let mut logger = EventLog::init();

        // 1.
        let ctx = new_ctx(FACTORY, ALICE, 10, ONE_NEAR);
        let response = call(DEPLOY_NEW_AUCTION, &ctx, &mut logger, &mut storage, &deploy_bytes())
            .expect("Deployment request should work");
        let batches = response.actions.promises()[0].batches();

        // 2.
        let mut auction_storage = MemoryStorage::new();
        let auction_ctx = new_ctx("sale.factory.testnet", FACTORY, 15, ONE_NEAR);
        auction::call(
            INIT,
            &auction_ctx,
            &mut EventLog::init(),
            &mut auction_storage,
            &call_args(&batches[0]),
        )
        .expect("Auction init should work");
        let highest = auction::call(
            commons::GET_HIGHEST_BID,
            &auction_ctx,
            &mut EventLog::init(),
            &mut auction_storage,
            &[],
        )
        .expect("View should work");
        assert_eq!(
            highest.value::<commons::Bid>(),
            Ok(commons::Bid::new(
                AccountId::from("sale.factory.testnet"),
                U128(500)
            ))
        );

        // 3.
        let ctx = continuation(PromiseResult::Successful(Vec::new()));
        let response = call(
            DEPLOY_NEW_AUCTION_CALLBACK,
            &ctx,
            &mut logger,
            &mut storage,
            &call_args(&batches[1]),
        )
        .expect("Callback should work");
        assert_eq!(response.value::<bool>(), Ok(true));
        claim!(response.actions.is_empty());
    }

    #[concordium_test]
    /// Test that a failed deployment refunds the full deposit and leaves the
    /// factory state as it was.
    fn test_deployment_saga_compensates() {
        let mut storage = factory();
        let before = storage.clone();
        let mut logger = EventLog::init();

        let ctx = new_ctx(FACTORY, ALICE, 10, ONE_NEAR);
        let response = call(DEPLOY_NEW_AUCTION, &ctx, &mut logger, &mut storage, &deploy_bytes())
            .expect("Deployment request should work");
        let callback = call_args(&response.actions.promises()[0].batches()[1]);

        let ctx = continuation(PromiseResult::Failed);
        let response = call(
            DEPLOY_NEW_AUCTION_CALLBACK,
            &ctx,
            &mut logger,
            &mut storage,
            &callback,
        )
        .expect("Callback should work");

        assert_eq!(response.value::<bool>(), Ok(false));
        assert_eq!(
            response.actions,
            Actions::accept().and(simple_transfer(&AccountId::from(ALICE), U128(ONE_NEAR)))
        );
        assert_eq!(storage, before);
    }

    #[concordium_test]
    fn test_init_only_once() {
        let mut storage = factory();
        let before = storage.clone();
        let ctx = new_ctx(FACTORY, FACTORY, 0, 0);
        let mut logger = EventLog::init();
        let params = FactoryInitParams { code: vec![1, 2] };
        assert_eq!(
            call(INIT, &ctx, &mut logger, &mut storage, &to_bytes(&params)),
            Err(CustomContractError::AlreadyInitialized)
        );
        claim!(logger.logs.is_empty());
        assert_eq!(storage, before);
    }

    #[concordium_test]
    fn test_callback_without_outcome_fails() {
        let mut storage = factory();
        let ctx = new_ctx(FACTORY, FACTORY, 10, 0);
        let intent = DeployCallbackParams {
            account: AccountId::from("sale.factory.testnet"),
            user: AccountId::from(BOB),
            attached: U128(ONE_NEAR),
        };
        assert_eq!(
            call(
                DEPLOY_NEW_AUCTION_CALLBACK,
                &ctx,
                &mut EventLog::init(),
                &mut storage,
                &to_bytes(&intent)
            ),
            Err(CustomContractError::Unauthorized)
        );
    }

    #[concordium_test]
    fn test_update_through_dispatcher() {
        let mut storage = factory();
        let mut logger = EventLog::init();
        let ctx = new_ctx(FACTORY, FACTORY, 0, 0);

        let size = call(GET_CODE_SIZE, &ctx, &mut logger, &mut storage, &[])
            .expect("View should work");
        assert_eq!(size.value::<u64>(), Ok(12));

        let before = storage.clone();
        let bad = to_bytes(&UpdateCodeParams {
            code: "%%%".into(),
        });
        assert_eq!(
            call(UPDATE_AUCTION_CONTRACT, &ctx, &mut logger, &mut storage, &bad),
            Err(CustomContractError::InvalidCode)
        );
        assert_eq!(storage, before);

        let good = to_bytes(&UpdateCodeParams {
            code: "AQIDBA==".into(),
        });
        call(UPDATE_AUCTION_CONTRACT, &ctx, &mut logger, &mut storage, &good)
            .expect("Update should work");
        let size = call(GET_CODE_SIZE, &ctx, &mut logger, &mut storage, &[])
            .expect("View should work");
        assert_eq!(size.value::<u64>(), Ok(4));

        assert_eq!(
            call("bid", &ctx, &mut logger, &mut storage, &[]),
            Err(CustomContractError::UnknownMethod)
        );
    }
}
