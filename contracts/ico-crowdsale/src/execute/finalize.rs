use cosmwasm_std::{Addr, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Response, Uint128};

use crate::bridge;
use crate::clock::Clock;
use crate::error::ContractError;
use crate::state::{Config, SaleState, CONFIG, STATE};

fn ensure_soft_cap(config: &Config, state: &SaleState) -> Result<(), ContractError> {
    if !config.soft_cap_reached(state) {
        return Err(ContractError::SoftCapNotReached {
            total: state.total_tokens.to_string(),
            soft_cap: config.soft_cap.to_string(),
        });
    }
    Ok(())
}

/// Bank send of the contract's whole base balance to `to`.
fn withdraw_all(
    deps: Deps,
    env: &Env,
    config: &Config,
    to: &Addr,
) -> Result<(CosmosMsg, Uint128), ContractError> {
    let balance = bridge::base_balance(&deps.querier, &env.contract.address, &config.base_denom)?;
    if balance.is_zero() {
        return Err(ContractError::NothingToWithdraw);
    }
    Ok((bridge::transfer(&config.base_denom, to, balance), balance))
}

/// Issuer: close a successful sale. Unlocks token transfers when the token
/// was deployed locked and, with `withdraw_to`, sends the proceeds there.
pub fn execute_finalize(
    deps: DepsMut,
    env: Env,
    clock: &dyn Clock,
    info: MessageInfo,
    withdraw_to: Option<String>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.issuer {
        return Err(ContractError::Unauthorized);
    }
    let mut state = STATE.load(deps.storage)?;
    if !state.initialized {
        return Err(ContractError::NotInitialized);
    }
    if state.finalized {
        return Err(ContractError::AlreadyFinalized);
    }
    if clock.now() < state.finish && state.total_tokens < config.hard_cap {
        return Err(ContractError::SaleNotOver {
            finish: state.finish,
        });
    }
    ensure_soft_cap(&config, &state)?;

    // An earlier `withdraw` may have drained the balance already; the unlock
    // still goes through.
    let withdrawal = match withdraw_to {
        Some(to) => {
            let to = deps.api.addr_validate(&to)?;
            match withdraw_all(deps.as_ref(), &env, &config, &to) {
                Ok((msg, amount)) => Some((msg, amount, to)),
                Err(ContractError::NothingToWithdraw) => None,
                Err(err) => return Err(err),
            }
        }
        None => None,
    };

    state.finalized = true;
    STATE.save(deps.storage, &state)?;

    let mut res = Response::new()
        .add_attribute("action", "crowdsale.finalize")
        .add_attribute("total_tokens", state.total_tokens.to_string());
    if !config.transferable {
        res = res
            .add_message(bridge::unlock(&config.token_cw20)?)
            .add_attribute("unlocked", config.token_cw20.to_string());
    }
    if let Some((msg, amount, to)) = withdrawal {
        res = res
            .add_message(msg)
            .add_attribute("withdraw_to", to.to_string())
            .add_attribute("amount", amount.to_string());
    }
    Ok(res)
}

/// Issuer: send the entire base balance to the issuer. Allowed as soon as the
/// soft cap is reached, even while the sale is still running. Later
/// contributions can be withdrawn again.
pub fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.issuer {
        return Err(ContractError::Unauthorized);
    }
    let state = STATE.load(deps.storage)?;
    if !state.initialized {
        return Err(ContractError::NotInitialized);
    }
    ensure_soft_cap(&config, &state)?;

    let (msg, amount) = withdraw_all(deps.as_ref(), &env, &config, &config.issuer)?;

    Ok(Response::new()
        .add_message(msg)
        .add_attribute("action", "crowdsale.withdraw")
        .add_attribute("recipient", config.issuer.to_string())
        .add_attribute("amount", amount.to_string()))
}
