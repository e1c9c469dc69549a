use cosmwasm_std::{Env, StdResult, Storage};

/// Source of "now" (unix seconds) for sale window checks.
pub trait Clock {
    fn now(&self) -> u64;
}

/// Block time, optionally shadowed by an administrative override.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LedgerClock {
    block_time: u64,
    override_time: Option<u64>,
}

impl LedgerClock {
    pub fn new(block_time: u64, override_time: Option<u64>) -> Self {
        Self {
            block_time,
            override_time,
        }
    }

    #[cfg(any(test, feature = "settime"))]
    pub fn load(storage: &dyn Storage, env: &Env) -> StdResult<Self> {
        let override_time = crate::state::TIME_OVERRIDE.may_load(storage)?;
        Ok(Self::new(env.block.time.seconds(), override_time))
    }

    /// Without the `settime` feature the stored override is never read.
    #[cfg(not(any(test, feature = "settime")))]
    pub fn load(_storage: &dyn Storage, env: &Env) -> StdResult<Self> {
        Ok(Self::new(env.block.time.seconds(), None))
    }
}

impl Clock for LedgerClock {
    fn now(&self) -> u64 {
        self.override_time.unwrap_or(self.block_time)
    }
}
