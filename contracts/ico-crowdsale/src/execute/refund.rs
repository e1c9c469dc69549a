use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::bridge;
use crate::clock::Clock;
use crate::error::ContractError;
use crate::state::{CONFIG, DEPOSITS, STATE};

/// Investor (or issuer on their behalf): return the investor's base coins
/// after a sale that missed its soft cap. Issued tokens stay with the investor.
pub fn execute_refund(
    deps: DepsMut,
    clock: &dyn Clock,
    info: MessageInfo,
    investor: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let investor = deps.api.addr_validate(&investor)?;
    if info.sender != investor && info.sender != config.issuer {
        return Err(ContractError::Unauthorized);
    }

    let mut state = STATE.load(deps.storage)?;
    if !state.initialized {
        return Err(ContractError::NotInitialized);
    }
    let now = clock.now();
    if now < state.finish {
        return Err(ContractError::RefundNotAllowed {
            reason: format!("sale runs until {}", state.finish),
        });
    }
    if config.soft_cap_reached(&state) {
        return Err(ContractError::RefundNotAllowed {
            reason: "soft cap reached".to_string(),
        });
    }

    let deposit = DEPOSITS
        .may_load(deps.storage, &investor)?
        .ok_or_else(|| ContractError::NoDeposit {
            investor: investor.to_string(),
        })?;

    DEPOSITS.remove(deps.storage, &investor);
    state.total_tokens = state.total_tokens.checked_sub(deposit.tokens)?;
    state.total_contributed = state.total_contributed.checked_sub(deposit.contributed)?;
    STATE.save(deps.storage, &state)?;

    Ok(Response::new()
        .add_message(bridge::transfer(&config.base_denom, &investor, deposit.contributed))
        .add_attribute("action", "crowdsale.refund")
        .add_attribute("investor", investor.to_string())
        .add_attribute("amount", deposit.contributed.to_string())
        .add_attribute("tokens", deposit.tokens.to_string()))
}
