use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    /// Operator allowed to manage the whitelist, dates and proceeds
    pub issuer: String,
    /// CW20 token being sold; this contract must be its minter
    pub token_cw20: String,
    /// Native denom accepted as payment
    pub base_denom: String,
    pub base_decimals: u8,
    pub symbol: String,
    pub decimals: u8,
    /// Whole tokens per whole base coin = rate_num / rate_denom
    pub rate_num: u64,
    pub rate_denom: u64,
    /// Min base units per contribution (0 = no limit)
    #[serde(default)]
    pub min_contrib: Uint128,
    /// Max base units per contribution (0 = no limit)
    #[serde(default)]
    pub max_contrib: Uint128,
    /// Token units that must be sold for the sale to succeed
    pub soft_cap: Uint128,
    /// Token units that may be sold at most
    pub hard_cap: Uint128,
    #[serde(default)]
    pub whitelist_enabled: bool,
    #[serde(default)]
    pub transferable: bool,
    /// Allocations minted once by `init`
    #[serde(default)]
    pub premint: Vec<PremintMsg>,
}

#[cw_serde]
pub struct PremintMsg {
    pub destination: String,
    pub amount: Uint128,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Deployer: open the sale window and mint the premint allocations. One-shot.
    Init { start: u64, finish: u64 },

    /// Contribute base coins. Attach the funds to this message.
    Contribute { memo: Option<String> },

    /// Issuer: whitelist management
    White { account: String },
    Unwhite { account: String },
    WhiteMany { accounts: Vec<String> },
    UnwhiteMany { accounts: Vec<String> },

    /// Issuer: move the start date, only before the sale has started
    SetStart { start: u64 },

    /// Issuer: move the finish date, only before the sale has finished
    SetFinish { finish: u64 },

    /// Deployer or issuer: override the clock. Test builds only.
    #[cfg(any(test, feature = "settime"))]
    SetTime { time: u64 },

    /// Issuer: close a successful sale, unlock the token and optionally
    /// withdraw the proceeds to `withdraw_to`
    Finalize { withdraw_to: Option<String> },

    /// Issuer: send the whole base balance to the issuer
    Withdraw {},

    /// Investor or issuer: return the investor's contribution after a failed sale
    Refund { investor: String },
}

/// Message for contract migration
#[cw_serde]
pub struct MigrateMsg {}

/// Transfer-lock extension understood by the sold token contract.
#[cw_serde]
pub enum LockableTokenMsg {
    Unlock {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(StateResponse)]
    State {},

    #[returns(Option<DepositResponse>)]
    Deposit { investor: String },

    #[returns(DepositsResponse)]
    Deposits {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    /// Members in the order they were added
    #[returns(WhitelistResponse)]
    Whitelist {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    #[returns(bool)]
    IsWhitelisted { account: String },

    /// Time the contract currently uses for window checks
    #[returns(TimeResponse)]
    Time {},
}

// ---- Response types ----

#[cw_serde]
pub struct ConfigResponse {
    pub deployer: Addr,
    pub issuer: Addr,
    pub token_cw20: Addr,
    pub base_denom: String,
    pub base_decimals: u8,
    pub symbol: String,
    pub decimals: u8,
    pub rate_num: u64,
    pub rate_denom: u64,
    pub min_contrib: Uint128,
    pub max_contrib: Uint128,
    pub soft_cap: Uint128,
    pub hard_cap: Uint128,
    pub whitelist_enabled: bool,
    pub transferable: bool,
    pub premint: Vec<PremintResponse>,
}

#[cw_serde]
pub struct PremintResponse {
    pub destination: Addr,
    pub amount: Uint128,
}

#[cw_serde]
pub struct StateResponse {
    pub start: u64,
    pub finish: u64,
    pub total_tokens: Uint128,
    pub total_contributed: Uint128,
    pub initialized: bool,
    pub finalized: bool,
    pub soft_cap_reached: bool,
}

#[cw_serde]
pub struct DepositResponse {
    pub account: Addr,
    pub contributed: Uint128,
    pub tokens: Uint128,
}

#[cw_serde]
pub struct DepositsResponse {
    pub deposits: Vec<DepositResponse>,
}

#[cw_serde]
pub struct WhitelistEntry {
    pub seq: u64,
    pub account: Addr,
}

#[cw_serde]
pub struct WhitelistResponse {
    pub accounts: Vec<WhitelistEntry>,
}

#[cw_serde]
pub struct TimeResponse {
    pub now: u64,
}
