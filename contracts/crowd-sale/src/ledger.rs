//! Contribution records. Pure bookkeeping: callers validate amounts first.

use cosmwasm_std::{Addr, StdResult, Storage, Uint128};

use crate::state::{CONTRIBUTIONS, TOTAL_RAISED};

/// Adds `amount` to the beneficiary's record and to the total raised.
/// Returns the beneficiary's new cumulative contribution.
pub fn credit_contribution(
    storage: &mut dyn Storage,
    beneficiary: &Addr,
    amount: Uint128,
) -> StdResult<Uint128> {
    let total = total_raised(storage)?.checked_add(amount)?;
    TOTAL_RAISED.save(storage, &total)?;

    CONTRIBUTIONS.update(storage, beneficiary, |existing| -> StdResult<_> {
        Ok(existing.unwrap_or_default().checked_add(amount)?)
    })
}

pub fn balance_of(storage: &dyn Storage, beneficiary: &Addr) -> StdResult<Uint128> {
    Ok(CONTRIBUTIONS.may_load(storage, beneficiary)?.unwrap_or_default())
}

pub fn total_raised(storage: &dyn Storage) -> StdResult<Uint128> {
    Ok(TOTAL_RAISED.may_load(storage)?.unwrap_or_default())
}
