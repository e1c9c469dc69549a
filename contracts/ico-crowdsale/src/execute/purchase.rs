use cosmwasm_std::{DepsMut, MessageInfo, Response, Storage, Uint128};

use crate::bridge::{self, InboundTransfer};
use crate::clock::Clock;
use crate::error::ContractError;
use crate::state::{Config, Deposit, CONFIG, DEPOSITS, STATE};
use crate::whitelist;

/// Result of an accepted contribution.
#[derive(Clone, Debug, PartialEq)]
pub struct Receipt {
    pub tokens: Uint128,
    pub deposit: Deposit,
    pub total_tokens: Uint128,
}

/// Investor pays in base coins and is minted sale tokens at the configured rate.
pub fn execute_contribute(
    deps: DepsMut,
    clock: &dyn Clock,
    info: MessageInfo,
    memo: Option<String>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let transfer = InboundTransfer::observe(&info, &config.base_denom)?;
    let receipt = on_transfer(deps.storage, &config, clock, &transfer)?;

    let mint = bridge::issue(&config.token_cw20, &transfer.from, receipt.tokens)?;

    let mut res = Response::new()
        .add_message(mint)
        .add_attribute("action", "crowdsale.contribute")
        .add_attribute("investor", transfer.from.to_string())
        .add_attribute("amount", transfer.amount.to_string())
        .add_attribute("tokens", receipt.tokens.to_string())
        .add_attribute("total_tokens", receipt.total_tokens.to_string());
    if let Some(memo) = memo.filter(|m| !m.is_empty()) {
        res = res.add_attribute("memo", memo);
    }
    Ok(res)
}

/// Validates an inbound transfer and books it. Nothing is written unless every
/// check passes.
pub fn on_transfer(
    storage: &mut dyn Storage,
    config: &Config,
    clock: &dyn Clock,
    transfer: &InboundTransfer,
) -> Result<Receipt, ContractError> {
    let mut state = STATE.load(storage)?;
    if !state.initialized {
        return Err(ContractError::NotInitialized);
    }

    let now = clock.now();
    if !state.is_open(now) {
        return Err(ContractError::OutsideWindow {
            now,
            start: state.start,
            finish: state.finish,
        });
    }

    if config.whitelist_enabled && !whitelist::contains(storage, &transfer.from) {
        return Err(ContractError::NotWhitelisted {
            account: transfer.from.to_string(),
        });
    }

    let amount = transfer.amount;
    if !config.min_contrib.is_zero() && amount < config.min_contrib {
        return Err(ContractError::BelowMinimum {
            min: config.min_contrib.to_string(),
        });
    }
    if !config.max_contrib.is_zero() && amount > config.max_contrib {
        return Err(ContractError::AboveMaximum {
            max: config.max_contrib.to_string(),
        });
    }

    let tokens = config.tokens_for(amount)?;
    if tokens.is_zero() {
        return Err(ContractError::ZeroOutput);
    }
    let total_tokens = state.total_tokens.checked_add(tokens)?;
    if total_tokens > config.hard_cap {
        return Err(ContractError::HardCapExceeded {
            requested: tokens.to_string(),
            remaining: config.hard_cap.saturating_sub(state.total_tokens).to_string(),
        });
    }

    let mut deposit = DEPOSITS
        .may_load(storage, &transfer.from)?
        .unwrap_or_default();
    deposit.contributed = deposit.contributed.checked_add(amount)?;
    deposit.tokens = deposit.tokens.checked_add(tokens)?;
    DEPOSITS.save(storage, &transfer.from, &deposit)?;

    state.total_tokens = total_tokens;
    state.total_contributed = state.total_contributed.checked_add(amount)?;
    STATE.save(storage, &state)?;

    Ok(Receipt {
        tokens,
        deposit,
        total_tokens,
    })
}
