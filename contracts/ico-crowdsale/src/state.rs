use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128, Uint256};
use cw_storage_plus::{Item, Map};

use crate::error::ContractError;

pub const MAX_DECIMALS: u8 = 18;

/// Immutable sale parameters, fixed at instantiation.
#[cw_serde]
pub struct Config {
    /// Address that instantiated the contract. Only it may call `init`.
    pub deployer: Addr,
    /// Privileged operator: whitelist, dates, finalize, withdraw.
    pub issuer: Addr,
    /// CW20 contract of the token being sold. The crowdsale must be its minter.
    pub token_cw20: Addr,
    /// Native denom investors pay with.
    pub base_denom: String,
    pub base_decimals: u8,
    pub symbol: String,
    pub decimals: u8,
    /// Whole tokens per whole base coin = rate_num / rate_denom.
    pub rate_num: u64,
    pub rate_denom: u64,
    /// Per-transaction limits in base units (0 = unlimited).
    pub min_contrib: Uint128,
    pub max_contrib: Uint128,
    /// Caps in token units.
    pub soft_cap: Uint128,
    pub hard_cap: Uint128,
    pub whitelist_enabled: bool,
    pub transferable: bool,
    pub premint: Vec<Premint>,
}

#[cw_serde]
pub struct Premint {
    pub destination: Addr,
    pub amount: Uint128,
}

impl Config {
    pub fn validate(&self) -> Result<(), ContractError> {
        if self.rate_num == 0 || self.rate_denom == 0 {
            return Err(ContractError::InvalidRate);
        }
        if self.soft_cap.is_zero() || self.soft_cap > self.hard_cap {
            return Err(ContractError::InvalidCaps);
        }
        if !self.min_contrib.is_zero()
            && !self.max_contrib.is_zero()
            && self.min_contrib > self.max_contrib
        {
            return Err(ContractError::InvalidContributionLimits {
                min: self.min_contrib.to_string(),
                max: self.max_contrib.to_string(),
            });
        }
        if self.decimals > MAX_DECIMALS || self.base_decimals > MAX_DECIMALS {
            return Err(ContractError::InvalidDecimals);
        }
        let symbol_ok = (3..=12).contains(&self.symbol.len())
            && self.symbol.bytes().all(|b| b.is_ascii_uppercase());
        if !symbol_ok {
            return Err(ContractError::InvalidSymbol {
                symbol: self.symbol.clone(),
            });
        }
        if let Some(entry) = self.premint.iter().find(|p| p.amount.is_zero()) {
            return Err(ContractError::InvalidPremint {
                destination: entry.destination.to_string(),
            });
        }
        Ok(())
    }

    /// Token units credited for `amount` base units, rounded down:
    /// amount * rate_num * 10^decimals / (rate_denom * 10^base_decimals)
    pub fn tokens_for(&self, amount: Uint128) -> Result<Uint128, ContractError> {
        let numerator = Uint256::from(amount)
            .checked_mul(Uint256::from(self.rate_num))?
            .checked_mul(Uint256::from(10u64).checked_pow(self.decimals as u32)?)?;
        let denominator = Uint256::from(self.rate_denom)
            .checked_mul(Uint256::from(10u64).checked_pow(self.base_decimals as u32)?)?;
        let tokens = numerator.checked_div(denominator)?;
        Ok(Uint128::try_from(tokens)?)
    }

    pub fn soft_cap_reached(&self, state: &SaleState) -> bool {
        state.total_tokens >= self.soft_cap
    }
}

/// The one sale this contract runs.
#[cw_serde]
pub struct SaleState {
    pub start: u64,
    pub finish: u64,
    /// Tokens sold, in token units. Equals the sum of all deposit tokens.
    pub total_tokens: Uint128,
    /// Base units held on behalf of depositors.
    pub total_contributed: Uint128,
    pub initialized: bool,
    pub finalized: bool,
}

impl Default for SaleState {
    fn default() -> Self {
        Self {
            start: 0,
            finish: 0,
            total_tokens: Uint128::zero(),
            total_contributed: Uint128::zero(),
            initialized: false,
            finalized: false,
        }
    }
}

impl SaleState {
    pub fn is_open(&self, now: u64) -> bool {
        self.start <= now && now < self.finish
    }
}

#[cw_serde]
pub struct Deposit {
    /// Base units contributed.
    pub contributed: Uint128,
    /// Token units credited.
    pub tokens: Uint128,
}

impl Default for Deposit {
    fn default() -> Self {
        Self {
            contributed: Uint128::zero(),
            tokens: Uint128::zero(),
        }
    }
}

// ---- Storage keys ----

pub const CONFIG: Item<Config> = Item::new("config");
pub const STATE: Item<SaleState> = Item::new("state");
pub const DEPOSITS: Map<&Addr, Deposit> = Map::new("deposit");

/// Whitelist membership, value is the insertion sequence.
pub const WHITELIST: Map<&Addr, u64> = Map::new("whitelist");
/// Insertion sequence -> member, for ordered enumeration.
pub const WHITELIST_ORDER: Map<u64, Addr> = Map::new("whitelist_order");
pub const NEXT_WHITELIST_SEQ: Item<u64> = Item::new("next_whitelist_seq");

/// Clock override written by `set_time`. Only consulted in test builds or with the `settime` feature.
pub const TIME_OVERRIDE: Item<u64> = Item::new("time_override");
