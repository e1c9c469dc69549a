use cosmwasm_std::{Addr, Deps, Env, Order, StdResult};
use cw_storage_plus::Bound;

use crate::clock::{Clock, LedgerClock};
use crate::msg::{
    ConfigResponse, DepositResponse, DepositsResponse, PremintResponse, StateResponse,
    TimeResponse, WhitelistEntry, WhitelistResponse,
};
use crate::state::{Deposit, CONFIG, DEPOSITS, STATE};
use crate::whitelist;

const DEFAULT_LIMIT: u32 = 20;
const MAX_LIMIT: u32 = 100;

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        deployer: config.deployer,
        issuer: config.issuer,
        token_cw20: config.token_cw20,
        base_denom: config.base_denom,
        base_decimals: config.base_decimals,
        symbol: config.symbol,
        decimals: config.decimals,
        rate_num: config.rate_num,
        rate_denom: config.rate_denom,
        min_contrib: config.min_contrib,
        max_contrib: config.max_contrib,
        soft_cap: config.soft_cap,
        hard_cap: config.hard_cap,
        whitelist_enabled: config.whitelist_enabled,
        transferable: config.transferable,
        premint: config
            .premint
            .into_iter()
            .map(|p| PremintResponse {
                destination: p.destination,
                amount: p.amount,
            })
            .collect(),
    })
}

pub fn query_state(deps: Deps) -> StdResult<StateResponse> {
    let config = CONFIG.load(deps.storage)?;
    let state = STATE.load(deps.storage)?;
    Ok(StateResponse {
        soft_cap_reached: config.soft_cap_reached(&state),
        start: state.start,
        finish: state.finish,
        total_tokens: state.total_tokens,
        total_contributed: state.total_contributed,
        initialized: state.initialized,
        finalized: state.finalized,
    })
}

pub fn query_deposit(deps: Deps, investor: String) -> StdResult<Option<DepositResponse>> {
    let addr = deps.api.addr_validate(&investor)?;
    let deposit = DEPOSITS.may_load(deps.storage, &addr)?;
    Ok(deposit.map(|d| deposit_to_response(addr, d)))
}

pub fn query_deposits(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<DepositsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_after = start_after
        .map(|a| deps.api.addr_validate(&a))
        .transpose()?;
    let start = start_after.as_ref().map(Bound::exclusive);

    let deposits = DEPOSITS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(addr, d)| deposit_to_response(addr, d)))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(DepositsResponse { deposits })
}

pub fn query_whitelist(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<WhitelistResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let accounts = whitelist::members(deps.storage, start_after, limit)?
        .into_iter()
        .map(|(seq, account)| WhitelistEntry { seq, account })
        .collect();
    Ok(WhitelistResponse { accounts })
}

pub fn query_is_whitelisted(deps: Deps, account: String) -> StdResult<bool> {
    let addr = deps.api.addr_validate(&account)?;
    Ok(whitelist::contains(deps.storage, &addr))
}

pub fn query_time(deps: Deps, env: Env) -> StdResult<TimeResponse> {
    let clock = LedgerClock::load(deps.storage, &env)?;
    Ok(TimeResponse { now: clock.now() })
}

fn deposit_to_response(account: Addr, deposit: Deposit) -> DepositResponse {
    DepositResponse {
        account,
        contributed: deposit.contributed,
        tokens: deposit.tokens,
    }
}
