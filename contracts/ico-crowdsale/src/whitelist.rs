use cosmwasm_std::{Addr, Order, StdResult, Storage};
use cw_storage_plus::Bound;

use crate::state::{NEXT_WHITELIST_SEQ, WHITELIST, WHITELIST_ORDER};

/// Adds `account`. Returns false when it was already a member; its existing
/// position is kept.
pub fn add(storage: &mut dyn Storage, account: &Addr) -> StdResult<bool> {
    if WHITELIST.has(storage, account) {
        return Ok(false);
    }
    let seq = NEXT_WHITELIST_SEQ.may_load(storage)?.unwrap_or(0);
    NEXT_WHITELIST_SEQ.save(storage, &(seq + 1))?;
    WHITELIST.save(storage, account, &seq)?;
    WHITELIST_ORDER.save(storage, seq, account)?;
    Ok(true)
}

/// Removes `account`. Returns false when it was not a member.
pub fn remove(storage: &mut dyn Storage, account: &Addr) -> StdResult<bool> {
    match WHITELIST.may_load(storage, account)? {
        Some(seq) => {
            WHITELIST.remove(storage, account);
            WHITELIST_ORDER.remove(storage, seq);
            Ok(true)
        }
        None => Ok(false),
    }
}

pub fn contains(storage: &dyn Storage, account: &Addr) -> bool {
    WHITELIST.has(storage, account)
}

/// Members in insertion order, as `(seq, account)` pairs.
pub fn members(
    storage: &dyn Storage,
    start_after: Option<u64>,
    limit: usize,
) -> StdResult<Vec<(u64, Addr)>> {
    WHITELIST_ORDER
        .range(
            storage,
            start_after.map(Bound::exclusive),
            None,
            Order::Ascending,
        )
        .take(limit)
        .collect()
}
