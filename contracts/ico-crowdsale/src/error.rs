use cosmwasm_std::{ConversionOverflowError, DivideByZeroError, OverflowError, StdError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    DivideByZero(#[from] DivideByZeroError),

    #[error("{0}")]
    ConversionOverflow(#[from] ConversionOverflowError),

    #[error("Unauthorized")]
    Unauthorized,

    // ---- config validation ----
    #[error("Invalid rate: numerator and denominator must be > 0")]
    InvalidRate,

    #[error("Invalid caps: soft cap must be > 0 and not above hard cap")]
    InvalidCaps,

    #[error("Invalid contribution limits: min {min} is above max {max}")]
    InvalidContributionLimits { min: String, max: String },

    #[error("Invalid decimals: at most 18 supported")]
    InvalidDecimals,

    #[error("Invalid symbol: expected 3 to 12 uppercase letters, got {symbol}")]
    InvalidSymbol { symbol: String },

    #[error("Invalid premint entry for {destination}: amount must be > 0")]
    InvalidPremint { destination: String },

    // ---- lifecycle ----
    #[error("Crowdsale already initialized")]
    AlreadyInitialized,

    #[error("Crowdsale not initialized")]
    NotInitialized,

    #[error("Invalid sale window: start {start} must be before finish {finish}")]
    InvalidWindow { start: u64, finish: u64 },

    #[error("Start date already passed: sale started at {start}")]
    TooLate { start: u64 },

    #[error("Finish date already passed: sale finished at {finish}")]
    SaleFinished { finish: u64 },

    // ---- purchase ----
    #[error("No funds sent. Attach {denom} to contribute")]
    NoFundsSent { denom: String },

    #[error("Send exactly one coin denomination ({denom})")]
    MultipleDenoms { denom: String },

    #[error("Invalid denom: expected {expected}, got {denom}")]
    InvalidDenom { expected: String, denom: String },

    #[error("Sale is closed at {now}: window is [{start}, {finish})")]
    OutsideWindow { now: u64, start: u64, finish: u64 },

    #[error("Account {account} is not whitelisted")]
    NotWhitelisted { account: String },

    #[error("Contribution below minimum of {min}")]
    BelowMinimum { min: String },

    #[error("Contribution above maximum of {max}")]
    AboveMaximum { max: String },

    #[error("Computed token amount is zero, contribute more")]
    ZeroOutput,

    #[error("Hard cap exceeded: {requested} tokens requested, {remaining} remaining")]
    HardCapExceeded { requested: String, remaining: String },

    // ---- resolution ----
    #[error("Refund not allowed: {reason}")]
    RefundNotAllowed { reason: String },

    #[error("No deposit found for {investor}")]
    NoDeposit { investor: String },

    #[error("Soft cap not reached: {total} of {soft_cap} tokens sold")]
    SoftCapNotReached { total: String, soft_cap: String },

    #[error("Sale is not over yet: finishes at {finish}")]
    SaleNotOver { finish: u64 },

    #[error("Crowdsale already finalized")]
    AlreadyFinalized,

    #[error("Nothing to withdraw")]
    NothingToWithdraw,
}
