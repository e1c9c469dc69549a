//! End-to-end scenarios against a real cw20-base token and the bank module.

use cosmwasm_std::{coins, Addr, Empty, Timestamp, Uint128};
use cw20::{BalanceResponse, Cw20QueryMsg, MinterResponse};
use cw_multi_test::{App, Contract, ContractWrapper, Executor};

use crate::error::ContractError;
use crate::msg::{DepositResponse, ExecuteMsg, InstantiateMsg, PremintMsg, QueryMsg, StateResponse};

const DENOM: &str = "ueos";
const DEPLOYER: &str = "deployer";
const ISSUER: &str = "issuer";
const BUYER_A: &str = "tokenbuyer11";
const BUYER_B: &str = "tokenbuyer12";
const MINTDEST_A: &str = "mintdest_a";
const MINTDEST_B: &str = "mintdest_b";

const START: u64 = 1_534_780_454;
const FINISH: u64 = 1_534_781_454;
const BUYER_FUNDS: u128 = 1_000_000;

fn crowdsale_contract() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        crate::contract::execute,
        crate::contract::instantiate,
        crate::contract::query,
    ))
}

fn cw20_contract() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    ))
}

struct Suite {
    app: App,
    token: Addr,
    crowdsale: Addr,
}

impl Suite {
    fn new() -> Self {
        let mut app = App::new(|router, _api, storage| {
            for buyer in [BUYER_A, BUYER_B] {
                router
                    .bank
                    .init_balance(storage, &Addr::unchecked(buyer), coins(BUYER_FUNDS, DENOM))
                    .unwrap();
            }
        });
        app.update_block(|block| block.time = Timestamp::from_seconds(START - 100));

        let token_id = app.store_code(cw20_contract());
        let crowdsale_id = app.store_code(crowdsale_contract());

        let token = app
            .instantiate_contract(
                token_id,
                Addr::unchecked(DEPLOYER),
                &cw20_base::msg::InstantiateMsg {
                    name: "Sale Token".to_string(),
                    symbol: "SALE".to_string(),
                    decimals: 4,
                    initial_balances: vec![],
                    mint: Some(MinterResponse {
                        minter: DEPLOYER.to_string(),
                        cap: None,
                    }),
                    marketing: None,
                },
                &[],
                "sale-token",
                None,
            )
            .unwrap();

        let crowdsale = app
            .instantiate_contract(
                crowdsale_id,
                Addr::unchecked(DEPLOYER),
                &InstantiateMsg {
                    issuer: ISSUER.to_string(),
                    token_cw20: token.to_string(),
                    base_denom: DENOM.to_string(),
                    base_decimals: 4,
                    symbol: "SALE".to_string(),
                    decimals: 4,
                    rate_num: 100,
                    rate_denom: 1,
                    min_contrib: Uint128::new(10_000),
                    max_contrib: Uint128::new(200_000),
                    soft_cap: Uint128::new(20_000_000),
                    hard_cap: Uint128::new(50_000_000),
                    whitelist_enabled: true,
                    // A locked sale token must understand `LockableTokenMsg::Unlock`;
                    // cw20-base rejects it, so finalize would fail here.
                    transferable: true,
                    premint: vec![
                        PremintMsg {
                            destination: MINTDEST_A.to_string(),
                            amount: Uint128::new(1_000_000),
                        },
                        PremintMsg {
                            destination: MINTDEST_B.to_string(),
                            amount: Uint128::new(2_500_000),
                        },
                    ],
                },
                &[],
                "crowdsale",
                None,
            )
            .unwrap();

        // Hand minting rights to the crowdsale.
        app.execute_contract(
            Addr::unchecked(DEPLOYER),
            token.clone(),
            &cw20::Cw20ExecuteMsg::UpdateMinter {
                new_minter: Some(crowdsale.to_string()),
            },
            &[],
        )
        .unwrap();

        Self {
            app,
            token,
            crowdsale,
        }
    }

    fn set_time(&mut self, secs: u64) {
        self.app
            .update_block(|block| block.time = Timestamp::from_seconds(secs));
    }

    fn exec(&mut self, sender: &str, msg: &ExecuteMsg) -> Result<(), ContractError> {
        self.app
            .execute_contract(Addr::unchecked(sender), self.crowdsale.clone(), msg, &[])
            .map(|_| ())
            .map_err(|err| err.downcast().unwrap())
    }

    fn contribute(&mut self, buyer: &str, amount: u128) -> Result<(), ContractError> {
        self.app
            .execute_contract(
                Addr::unchecked(buyer),
                self.crowdsale.clone(),
                &ExecuteMsg::Contribute { memo: None },
                &coins(amount, DENOM),
            )
            .map(|_| ())
            .map_err(|err| err.downcast().unwrap())
    }

    fn init(&mut self) {
        self.exec(
            DEPLOYER,
            &ExecuteMsg::Init {
                start: START,
                finish: FINISH,
            },
        )
        .unwrap();
    }

    fn white(&mut self, account: &str) {
        self.exec(
            ISSUER,
            &ExecuteMsg::White {
                account: account.to_string(),
            },
        )
        .unwrap();
    }

    fn base_balance(&self, addr: &str) -> u128 {
        self.app
            .wrap()
            .query_balance(addr, DENOM)
            .unwrap()
            .amount
            .u128()
    }

    fn token_balance(&self, addr: &str) -> u128 {
        let res: BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                self.token.clone(),
                &Cw20QueryMsg::Balance {
                    address: addr.to_string(),
                },
            )
            .unwrap();
        res.balance.u128()
    }

    fn state(&self) -> StateResponse {
        self.app
            .wrap()
            .query_wasm_smart(self.crowdsale.clone(), &QueryMsg::State {})
            .unwrap()
    }

    fn deposit(&self, investor: &str) -> Option<DepositResponse> {
        self.app
            .wrap()
            .query_wasm_smart(
                self.crowdsale.clone(),
                &QueryMsg::Deposit {
                    investor: investor.to_string(),
                },
            )
            .unwrap()
    }
}

#[test]
fn premint_is_issued_once_on_init() {
    let mut suite = Suite::new();
    assert_eq!(suite.token_balance(MINTDEST_A), 0);
    assert_eq!(suite.token_balance(MINTDEST_B), 0);

    suite.init();
    assert_eq!(suite.token_balance(MINTDEST_A), 1_000_000);
    assert_eq!(suite.token_balance(MINTDEST_B), 2_500_000);

    let err = suite
        .exec(
            DEPLOYER,
            &ExecuteMsg::Init {
                start: START,
                finish: FINISH,
            },
        )
        .unwrap_err();
    assert!(matches!(err, ContractError::AlreadyInitialized));
    assert_eq!(suite.token_balance(MINTDEST_A), 1_000_000);
}

#[test]
fn rejected_contribution_rolls_back_transfer() {
    let mut suite = Suite::new();
    suite.init();
    suite.set_time(START);

    let err = suite.contribute(BUYER_A, 10_000).unwrap_err();
    assert!(matches!(err, ContractError::NotWhitelisted { .. }));
    assert_eq!(suite.base_balance(BUYER_A), BUYER_FUNDS);
    assert_eq!(suite.base_balance(suite.crowdsale.as_str()), 0);

    suite.white(BUYER_A);
    suite.contribute(BUYER_A, 200_000).unwrap();
    assert_eq!(suite.base_balance(BUYER_A), BUYER_FUNDS - 200_000);
    assert_eq!(suite.base_balance(suite.crowdsale.as_str()), 200_000);
    assert_eq!(suite.token_balance(BUYER_A), 20_000_000);
    assert_eq!(suite.state().total_tokens, Uint128::new(20_000_000));
}

#[test]
fn hard_cap_then_finalize_and_withdraw() {
    let mut suite = Suite::new();
    suite.init();
    suite.set_time(START);
    suite.white(BUYER_A);

    suite.contribute(BUYER_A, 200_000).unwrap();
    suite.contribute(BUYER_A, 200_000).unwrap();
    suite.contribute(BUYER_A, 100_000).unwrap();
    assert_eq!(suite.state().total_tokens, Uint128::new(50_000_000));

    let err = suite.contribute(BUYER_A, 10_000).unwrap_err();
    assert!(matches!(err, ContractError::HardCapExceeded { .. }));

    suite
        .exec(ISSUER, &ExecuteMsg::Finalize { withdraw_to: None })
        .unwrap();
    suite.exec(ISSUER, &ExecuteMsg::Withdraw {}).unwrap();

    assert_eq!(suite.base_balance(ISSUER), 500_000);
    assert_eq!(suite.base_balance(suite.crowdsale.as_str()), 0);
    assert!(suite.state().finalized);
}

#[test]
fn failed_sale_refunds_every_investor() {
    let mut suite = Suite::new();
    suite.init();
    suite.set_time(START);

    // A quarter of the soft cap each.
    for buyer in [BUYER_A, BUYER_B] {
        suite.white(buyer);
        suite.contribute(buyer, 50_000).unwrap();
    }
    assert_eq!(suite.state().total_tokens, Uint128::new(10_000_000));

    let err = suite.exec(ISSUER, &ExecuteMsg::Withdraw {}).unwrap_err();
    assert!(matches!(err, ContractError::SoftCapNotReached { .. }));

    suite.set_time(FINISH + 1);
    for buyer in [BUYER_A, BUYER_B] {
        suite
            .exec(
                buyer,
                &ExecuteMsg::Refund {
                    investor: buyer.to_string(),
                },
            )
            .unwrap();
        assert_eq!(suite.base_balance(buyer), BUYER_FUNDS);
        assert!(suite.deposit(buyer).is_none());
        // Issued tokens are not clawed back.
        assert_eq!(suite.token_balance(buyer), 5_000_000);
    }
    assert_eq!(suite.state().total_tokens, Uint128::zero());
    assert_eq!(suite.base_balance(suite.crowdsale.as_str()), 0);

    let err = suite
        .exec(
            BUYER_A,
            &ExecuteMsg::Refund {
                investor: BUYER_A.to_string(),
            },
        )
        .unwrap_err();
    assert!(matches!(err, ContractError::NoDeposit { .. }));
}
