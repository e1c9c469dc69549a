//! Everything that touches the asset ledgers: inbound base coins attached to a
//! message, outgoing bank sends, and CW20 mint / unlock calls on the sold token.

use cosmwasm_std::{
    to_json_binary, Addr, BankMsg, Coin, CosmosMsg, MessageInfo, QuerierWrapper, StdResult,
    Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;

use crate::error::ContractError;
use crate::msg::LockableTokenMsg;

/// A base-coin transfer addressed to this contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InboundTransfer {
    pub from: Addr,
    pub amount: Uint128,
}

impl InboundTransfer {
    /// Reads the funds attached to the message. Exactly one non-zero coin of
    /// `base_denom` is accepted.
    pub fn observe(info: &MessageInfo, base_denom: &str) -> Result<Self, ContractError> {
        let sent = match info.funds.as_slice() {
            [] => {
                return Err(ContractError::NoFundsSent {
                    denom: base_denom.to_string(),
                })
            }
            [coin] => coin,
            _ => {
                return Err(ContractError::MultipleDenoms {
                    denom: base_denom.to_string(),
                })
            }
        };
        if sent.denom != base_denom {
            return Err(ContractError::InvalidDenom {
                expected: base_denom.to_string(),
                denom: sent.denom.clone(),
            });
        }
        if sent.amount.is_zero() {
            return Err(ContractError::NoFundsSent {
                denom: base_denom.to_string(),
            });
        }
        Ok(Self {
            from: info.sender.clone(),
            amount: sent.amount,
        })
    }
}

/// Mint `amount` of the sold token to `to`.
pub fn issue(token: &Addr, to: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Mint {
            recipient: to.to_string(),
            amount,
        })?,
        funds: vec![],
    }))
}

/// Send base coins out of the contract.
pub fn transfer(denom: &str, to: &Addr, amount: Uint128) -> CosmosMsg {
    CosmosMsg::Bank(BankMsg::Send {
        to_address: to.to_string(),
        amount: vec![Coin {
            denom: denom.to_string(),
            amount,
        }],
    })
}

/// Lift the transfer lock on the sold token.
pub fn unlock(token: &Addr) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&LockableTokenMsg::Unlock {})?,
        funds: vec![],
    }))
}

pub fn base_balance(querier: &QuerierWrapper, contract: &Addr, denom: &str) -> StdResult<Uint128> {
    Ok(querier.query_balance(contract.to_string(), denom)?.amount)
}
