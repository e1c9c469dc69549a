pub mod bridge;
pub mod clock;
pub mod contract;
pub mod error;
pub mod execute;
pub mod msg;
pub mod query;
pub mod state;
pub mod whitelist;

#[cfg(test)]
mod multitest;
