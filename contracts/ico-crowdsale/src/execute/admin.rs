use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::clock::Clock;
use crate::error::ContractError;
use crate::state::{CONFIG, STATE};

/// Issuer: move the start date. Rejected once the current start has passed.
pub fn execute_set_start(
    deps: DepsMut,
    clock: &dyn Clock,
    info: MessageInfo,
    start: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.issuer {
        return Err(ContractError::Unauthorized);
    }
    let mut state = STATE.load(deps.storage)?;
    if !state.initialized {
        return Err(ContractError::NotInitialized);
    }
    if clock.now() >= state.start {
        return Err(ContractError::TooLate { start: state.start });
    }
    if start >= state.finish {
        return Err(ContractError::InvalidWindow {
            start,
            finish: state.finish,
        });
    }

    let previous = state.start;
    state.start = start;
    STATE.save(deps.storage, &state)?;

    Ok(Response::new()
        .add_attribute("action", "crowdsale.set_start")
        .add_attribute("previous", previous.to_string())
        .add_attribute("start", start.to_string()))
}

/// Issuer: move the finish date. Rejected once the current finish has passed.
pub fn execute_set_finish(
    deps: DepsMut,
    clock: &dyn Clock,
    info: MessageInfo,
    finish: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.issuer {
        return Err(ContractError::Unauthorized);
    }
    let mut state = STATE.load(deps.storage)?;
    if !state.initialized {
        return Err(ContractError::NotInitialized);
    }
    if clock.now() >= state.finish {
        return Err(ContractError::SaleFinished {
            finish: state.finish,
        });
    }
    if state.start >= finish {
        return Err(ContractError::InvalidWindow {
            start: state.start,
            finish,
        });
    }

    let previous = state.finish;
    state.finish = finish;
    STATE.save(deps.storage, &state)?;

    Ok(Response::new()
        .add_attribute("action", "crowdsale.set_finish")
        .add_attribute("previous", previous.to_string())
        .add_attribute("finish", finish.to_string()))
}

/// Deployer or issuer: pin the clock to `time` for every later check.
#[cfg(any(test, feature = "settime"))]
pub fn execute_set_time(
    deps: DepsMut,
    info: MessageInfo,
    time: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.deployer && info.sender != config.issuer {
        return Err(ContractError::Unauthorized);
    }
    crate::state::TIME_OVERRIDE.save(deps.storage, &time)?;

    Ok(Response::new()
        .add_attribute("action", "crowdsale.set_time")
        .add_attribute("time", time.to_string()))
}
