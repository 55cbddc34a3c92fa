use super::*;
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Deposit a deployment needs: storage of the code plus a fixed buffer for
/// the new account.
pub fn minimum_deposit(code_len: usize) -> ContractResult<U128> {
    deployment_cost(code_len, STORAGE_PRICE_PER_BYTE)
}

/// `code_len` bytes at `price_per_byte`, plus the deployment buffer.
pub fn deployment_cost(code_len: usize, price_per_byte: U128) -> ContractResult<U128> {
    price_per_byte
        .checked_mul(U128(code_len as u128))
        .and_then(|storage| storage.checked_add(DEPLOY_EXTRA_DEPOSIT))
        .ok_or(CustomContractError::Overflow)
}

/// Init function that stores the auction code template.
pub fn factory_init(params: FactoryInitParams) -> ContractResult<State> {
    Ok(State { code: params.code })
}

/// Deploy the auction code to `<name>.<factory>` and initialize it.
///
/// The whole deposit goes to the new account. The state is only read: a
/// request leaves nothing behind in the factory.
pub fn deploy_new_auction(
    ctx: &impl HasCallContext,
    logger: &mut impl HasLogger,
    state: &State,
    params: DeployParams,
) -> ContractResult<Actions> {
    let factory = ctx.current_account_id();
    let account = factory.sub_account(&params.name);
    ensure!(account.has_valid_len(), CustomContractError::InvalidName);

    let attached = ctx.attached_deposit();
    let minimum = minimum_deposit(state.code.len())?;
    ensure!(attached >= minimum, CustomContractError::InsufficientDeposit);

    let intent = DeployCallbackParams {
        account: account.clone(),
        user: ctx.predecessor_account_id().clone(),
        attached,
    };

    // Event for the deployment request.
    logger.log(&FactoryEvent::DeployRequested(DeployRequestedEvent {
        account: intent.account.clone(),
        user: intent.user.clone(),
        attached,
    }))?;

    let deployment = ActionBatch::new(&account)
        .create_account()
        .transfer(attached)
        .deploy_contract(&state.code)
        .function_call(INIT, &params.auction, U128::ZERO, AUCTION_INIT_GAS)
        .then(ActionBatch::new(factory).function_call(
            DEPLOY_NEW_AUCTION_CALLBACK,
            &intent,
            U128::ZERO,
            DEPLOY_CALLBACK_GAS,
        ));

    Ok(Actions::accept().and(deployment))
}

/// Continuation of a deployment, invoked by the host as the factory itself
/// once the deployment batch resolved.
pub fn deploy_new_auction_callback(
    ctx: &impl HasCallContext,
    logger: &mut impl HasLogger,
    intent: DeployCallbackParams,
    result: &PromiseResult,
) -> ContractResult<DeploymentStatus> {
    ensure_eq!(
        ctx.predecessor_account_id(),
        ctx.current_account_id(),
        CustomContractError::Unauthorized
    );

    if result.is_success() {
        logger.log(&FactoryEvent::DeployConfirmed(intent.account))?;
        return Ok(DeploymentStatus::Confirmed);
    }

    // Event for the compensation.
    logger.log(&FactoryEvent::DeployRolledBack(DeployRolledBackEvent {
        account: intent.account,
        user: intent.user.clone(),
        refund: intent.attached,
    }))?;

    Ok(DeploymentStatus::RollbackIssued(
        Actions::accept().and(simple_transfer(&intent.user, intent.attached)),
    ))
}

/// Replace the code template. Only the factory account may do this.
pub fn update_auction_contract(
    ctx: &impl HasCallContext,
    logger: &mut impl HasLogger,
    state: &mut State,
    params: UpdateCodeParams,
) -> ContractResult<()> {
    ensure_eq!(
        ctx.predecessor_account_id(),
        ctx.current_account_id(),
        CustomContractError::Unauthorized
    );

    let code = STANDARD
        .decode(params.code.as_bytes())
        .map_err(|_| CustomContractError::InvalidCode)?;
    let size = code.len() as u64;
    state.code = code;

    logger.log(&FactoryEvent::CodeUpdated(size))?;

    Ok(())
}

pub fn get_code_size(state: &State) -> u64 {
    state.code.len() as u64
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use commons::{
        test::{expect_error, new_ctx},
        BatchAction, EventLog,
    };

    const FACTORY: &str = "factory.testnet";
    const ALICE: &str = "alice.testnet";
    const ONE_NEAR: u128 = 1_000_000_000_000_000_000_000_000;

    fn account(id: &str) -> AccountId {
        AccountId::from(id)
    }

    fn state() -> State {
        factory_init(FactoryInitParams {
            code: vec![0u8; 100],
        })
        .expect("Init should work")
    }

    fn auction_params() -> AuctionInitParams {
        AuctionInitParams {
            end_time: Timestamp::from_timestamp_millis(1_000),
            auctioneer: account(ALICE),
            ft_contract: None,
            nft: None,
            starting_price: None,
        }
    }

    fn deploy_params(name: &str) -> DeployParams {
        DeployParams {
            name: name.into(),
            auction: auction_params(),
        }
    }

    fn intent() -> DeployCallbackParams {
        DeployCallbackParams {
            account: account("sale.factory.testnet"),
            user: account(ALICE),
            attached: U128(ONE_NEAR),
        }
    }

    #[concordium_test]
    fn test_minimum_deposit() {
        // 100 bytes at 10^19 each plus the 10^23 buffer
        assert_eq!(
            minimum_deposit(100),
            Ok(U128(1_000_000_000_000_000_000_000 + 100_000_000_000_000_000_000_000))
        );
        assert_eq!(minimum_deposit(0), Ok(DEPLOY_EXTRA_DEPOSIT));
    }

    #[concordium_test]
    fn test_deployment_cost_overflow() {
        expect_error(
            deployment_cost(2, U128(u128::MAX)),
            CustomContractError::Overflow,
            "Storage cost above 2^128 should fail",
        );
        // the product fits, the buffer on top does not
        expect_error(
            deployment_cost(1, U128(u128::MAX)),
            CustomContractError::Overflow,
            "Buffer above 2^128 should fail",
        );
        assert_eq!(
            deployment_cost(3, U128(7)),
            Ok(U128(21 + DEPLOY_EXTRA_DEPOSIT.get()))
        );
    }

    #[concordium_test]
    /// Test that a deployment request emits the chained deployment and
    /// callback batches carrying the full deposit.
    fn test_deploy_new_auction() {
        let state = state();
        let ctx = new_ctx(FACTORY, ALICE, 0, ONE_NEAR);
        let mut logger = EventLog::init();

        let actions = deploy_new_auction(&ctx, &mut logger, &state, deploy_params("sale"))
            .expect("Deployment request should work");

        assert_eq!(actions.len(), 1);
        let batches = actions.promises()[0].batches();
        assert_eq!(batches.len(), 2);

        assert_eq!(batches[0].receiver_id, account("sale.factory.testnet"));
        assert_eq!(
            batches[0].actions,
            vec![
                BatchAction::CreateAccount,
                BatchAction::Transfer {
                    amount: U128(ONE_NEAR)
                },
                BatchAction::DeployContract {
                    code: state.code.clone()
                },
                BatchAction::FunctionCall {
                    method: INIT.into(),
                    args: to_bytes(&auction_params()),
                    deposit: U128::ZERO,
                    gas: AUCTION_INIT_GAS,
                },
            ]
        );

        assert_eq!(batches[1].receiver_id, account(FACTORY));
        assert_eq!(
            batches[1].actions,
            vec![BatchAction::FunctionCall {
                method: DEPLOY_NEW_AUCTION_CALLBACK.into(),
                args: to_bytes(&intent()),
                deposit: U128::ZERO,
                gas: DEPLOY_CALLBACK_GAS,
            }]
        );

        assert_eq!(
            logger.events::<FactoryEvent>(),
            Ok(vec![FactoryEvent::DeployRequested(DeployRequestedEvent {
                account: account("sale.factory.testnet"),
                user: account(ALICE),
                attached: U128(ONE_NEAR),
            })])
        );
    }

    #[concordium_test]
    fn test_insufficient_deposit_emits_nothing() {
        let state = state();
        let minimum = minimum_deposit(state.code.len()).expect("Minimum should be computable");
        let ctx = new_ctx(FACTORY, ALICE, 0, minimum.get() - 1);
        let mut logger = EventLog::init();

        expect_error(
            deploy_new_auction(&ctx, &mut logger, &state, deploy_params("sale")),
            CustomContractError::InsufficientDeposit,
            "Deploying below the minimum deposit should fail",
        );
        claim!(logger.logs.is_empty());

        let ctx = new_ctx(FACTORY, ALICE, 0, minimum.get());
        let _ = deploy_new_auction(&ctx, &mut logger, &state, deploy_params("sale"))
            .expect("The exact minimum deposit should be enough");
    }

    #[concordium_test]
    fn test_invalid_name() {
        let state = state();
        let ctx = new_ctx(FACTORY, ALICE, 0, ONE_NEAR);
        let mut logger = EventLog::init();

        // 49 + 1 + 15 = 65 bytes
        expect_error(
            deploy_new_auction(&ctx, &mut logger, &state, deploy_params(&"x".repeat(49))),
            CustomContractError::InvalidName,
            "An account name longer than 64 bytes should fail",
        );

        let ctx = new_ctx("f", ALICE, 0, ONE_NEAR);
        let _ = deploy_new_auction(&ctx, &mut logger, &state, deploy_params(""))
            .expect("`.f` is two bytes long");
    }

    #[concordium_test]
    fn test_callback_confirms_success() {
        let ctx = new_ctx(FACTORY, FACTORY, 10, 0);
        let mut logger = EventLog::init();

        let status = deploy_new_auction_callback(
            &ctx,
            &mut logger,
            intent(),
            &PromiseResult::Successful(Vec::new()),
        )
        .expect("Callback should work");

        assert_eq!(status, DeploymentStatus::Confirmed);
        claim!(status.into_actions().is_empty());
        assert_eq!(
            logger.events::<FactoryEvent>(),
            Ok(vec![FactoryEvent::DeployConfirmed(account(
                "sale.factory.testnet"
            ))])
        );
    }

    #[concordium_test]
    /// Test that a failed deployment refunds the full deposit to the
    /// depositor.
    fn test_callback_compensates_failure() {
        let ctx = new_ctx(FACTORY, FACTORY, 10, 0);
        let mut logger = EventLog::init();

        let status =
            deploy_new_auction_callback(&ctx, &mut logger, intent(), &PromiseResult::Failed)
                .expect("Callback should work");

        claim!(!status.is_confirmed());
        assert_eq!(
            status.into_actions(),
            Actions::accept().and(simple_transfer(&account(ALICE), U128(ONE_NEAR)))
        );
        assert_eq!(
            logger.events::<FactoryEvent>(),
            Ok(vec![FactoryEvent::DeployRolledBack(DeployRolledBackEvent {
                account: account("sale.factory.testnet"),
                user: account(ALICE),
                refund: U128(ONE_NEAR),
            })])
        );
    }

    #[concordium_test]
    fn test_callback_only_from_factory() {
        let ctx = new_ctx(FACTORY, ALICE, 10, 0);
        let mut logger = EventLog::init();
        expect_error(
            deploy_new_auction_callback(&ctx, &mut logger, intent(), &PromiseResult::Failed),
            CustomContractError::Unauthorized,
            "Forged callbacks should fail",
        );
        claim!(logger.logs.is_empty());
    }

    #[concordium_test]
    fn test_update_auction_contract() {
        let mut state = state();
        let mut logger = EventLog::init();
        let params = |code: &str| UpdateCodeParams { code: code.into() };

        let ctx = new_ctx(FACTORY, ALICE, 0, 0);
        expect_error(
            update_auction_contract(&ctx, &mut logger, &mut state, params("AQID")),
            CustomContractError::Unauthorized,
            "Only the factory may update the code",
        );

        let ctx = new_ctx(FACTORY, FACTORY, 0, 0);
        expect_error(
            update_auction_contract(&ctx, &mut logger, &mut state, params("not base64!")),
            CustomContractError::InvalidCode,
            "Code that is not base64 should fail",
        );
        assert_eq!(get_code_size(&state), 100);

        update_auction_contract(&ctx, &mut logger, &mut state, params("AQID"))
            .expect("Update should work");
        assert_eq!(state.code, vec![1, 2, 3]);
        assert_eq!(get_code_size(&state), 3);
        assert_eq!(
            logger.events::<FactoryEvent>(),
            Ok(vec![FactoryEvent::CodeUpdated(3)])
        );
    }
}
