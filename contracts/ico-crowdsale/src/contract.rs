use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::clock::LedgerClock;
use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::state::{Config, Premint, SaleState, CONFIG, STATE};

const CONTRACT_NAME: &str = "crates.io:ico-crowdsale";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let premint = msg
        .premint
        .into_iter()
        .map(|p| {
            Ok(Premint {
                destination: deps.api.addr_validate(&p.destination)?,
                amount: p.amount,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    let config = Config {
        deployer: info.sender,
        issuer: deps.api.addr_validate(&msg.issuer)?,
        token_cw20: deps.api.addr_validate(&msg.token_cw20)?,
        base_denom: msg.base_denom,
        base_decimals: msg.base_decimals,
        symbol: msg.symbol,
        decimals: msg.decimals,
        rate_num: msg.rate_num,
        rate_denom: msg.rate_denom,
        min_contrib: msg.min_contrib,
        max_contrib: msg.max_contrib,
        soft_cap: msg.soft_cap,
        hard_cap: msg.hard_cap,
        whitelist_enabled: msg.whitelist_enabled,
        transferable: msg.transferable,
        premint,
    };
    config.validate()?;

    CONFIG.save(deps.storage, &config)?;
    STATE.save(deps.storage, &SaleState::default())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("deployer", config.deployer.to_string())
        .add_attribute("issuer", config.issuer.to_string())
        .add_attribute("token_cw20", config.token_cw20.to_string())
        .add_attribute("rate", format!("{}/{}", config.rate_num, config.rate_denom))
        .add_attribute("soft_cap", config.soft_cap.to_string())
        .add_attribute("hard_cap", config.hard_cap.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    let clock = LedgerClock::load(deps.storage, &env)?;
    match msg {
        ExecuteMsg::Init { start, finish } => {
            execute::init::execute_init(deps, info, start, finish)
        }
        ExecuteMsg::Contribute { memo } => {
            execute::purchase::execute_contribute(deps, &clock, info, memo)
        }
        ExecuteMsg::White { account } => {
            execute::whitelist::execute_white(deps, info, vec![account])
        }
        ExecuteMsg::Unwhite { account } => {
            execute::whitelist::execute_unwhite(deps, info, vec![account])
        }
        ExecuteMsg::WhiteMany { accounts } => {
            execute::whitelist::execute_white(deps, info, accounts)
        }
        ExecuteMsg::UnwhiteMany { accounts } => {
            execute::whitelist::execute_unwhite(deps, info, accounts)
        }
        ExecuteMsg::SetStart { start } => {
            execute::admin::execute_set_start(deps, &clock, info, start)
        }
        ExecuteMsg::SetFinish { finish } => {
            execute::admin::execute_set_finish(deps, &clock, info, finish)
        }
        #[cfg(any(test, feature = "settime"))]
        ExecuteMsg::SetTime { time } => execute::admin::execute_set_time(deps, info, time),
        ExecuteMsg::Finalize { withdraw_to } => {
            execute::finalize::execute_finalize(deps, env, &clock, info, withdraw_to)
        }
        ExecuteMsg::Withdraw {} => execute::finalize::execute_withdraw(deps, env, info),
        ExecuteMsg::Refund { investor } => {
            execute::refund::execute_refund(deps, &clock, info, investor)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&crate::query::query_config(deps)?),
        QueryMsg::State {} => to_json_binary(&crate::query::query_state(deps)?),
        QueryMsg::Deposit { investor } => {
            to_json_binary(&crate::query::query_deposit(deps, investor)?)
        }
        QueryMsg::Deposits { start_after, limit } => {
            to_json_binary(&crate::query::query_deposits(deps, start_after, limit)?)
        }
        QueryMsg::Whitelist { start_after, limit } => {
            to_json_binary(&crate::query::query_whitelist(deps, start_after, limit)?)
        }
        QueryMsg::IsWhitelisted { account } => {
            to_json_binary(&crate::query::query_is_whitelisted(deps, account)?)
        }
        QueryMsg::Time {} => to_json_binary(&crate::query::query_time(deps, env)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
