use cosmwasm_std::{DepsMut, MessageInfo, Response, StdResult};

use crate::bridge;
use crate::error::ContractError;
use crate::state::{CONFIG, STATE};

/// Opens the sale window and mints the premint allocations. Can only ever
/// succeed once.
pub fn execute_init(
    deps: DepsMut,
    info: MessageInfo,
    start: u64,
    finish: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.deployer {
        return Err(ContractError::Unauthorized);
    }

    let mut state = STATE.load(deps.storage)?;
    if state.initialized {
        return Err(ContractError::AlreadyInitialized);
    }
    if start >= finish {
        return Err(ContractError::InvalidWindow { start, finish });
    }

    state.start = start;
    state.finish = finish;
    state.initialized = true;
    STATE.save(deps.storage, &state)?;

    let mints = config
        .premint
        .iter()
        .map(|p| bridge::issue(&config.token_cw20, &p.destination, p.amount))
        .collect::<StdResult<Vec<_>>>()?;

    let mut res = Response::new()
        .add_messages(mints)
        .add_attribute("action", "crowdsale.init")
        .add_attribute("start", start.to_string())
        .add_attribute("finish", finish.to_string());
    for p in &config.premint {
        res = res
            .add_attribute("premint_to", p.destination.to_string())
            .add_attribute("premint_amount", p.amount.to_string());
    }
    Ok(res)
}
