use cosmwasm_std::{Addr, Deps, DepsMut, MessageInfo, Response, StdResult};

use crate::error::ContractError;
use crate::state::CONFIG;
use crate::whitelist;

fn authorize_and_validate(
    deps: Deps,
    info: &MessageInfo,
    accounts: &[String],
) -> Result<Vec<Addr>, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.issuer {
        return Err(ContractError::Unauthorized);
    }
    let addrs = accounts
        .iter()
        .map(|a| deps.api.addr_validate(a))
        .collect::<StdResult<Vec<_>>>()?;
    Ok(addrs)
}

/// Issuer: whitelist every account, in the given order. Existing members are
/// left where they are.
pub fn execute_white(
    deps: DepsMut,
    info: MessageInfo,
    accounts: Vec<String>,
) -> Result<Response, ContractError> {
    let addrs = authorize_and_validate(deps.as_ref(), &info, &accounts)?;

    let mut added = 0u32;
    for addr in &addrs {
        if whitelist::add(deps.storage, addr)? {
            added += 1;
        }
    }

    Ok(Response::new()
        .add_attribute("action", "crowdsale.white")
        .add_attribute("requested", addrs.len().to_string())
        .add_attribute("added", added.to_string()))
}

/// Issuer: drop every account from the whitelist. Non-members are ignored.
pub fn execute_unwhite(
    deps: DepsMut,
    info: MessageInfo,
    accounts: Vec<String>,
) -> Result<Response, ContractError> {
    let addrs = authorize_and_validate(deps.as_ref(), &info, &accounts)?;

    let mut removed = 0u32;
    for addr in &addrs {
        if whitelist::remove(deps.storage, addr)? {
            removed += 1;
        }
    }

    Ok(Response::new()
        .add_attribute("action", "crowdsale.unwhite")
        .add_attribute("requested", addrs.len().to_string())
        .add_attribute("removed", removed.to_string()))
}
