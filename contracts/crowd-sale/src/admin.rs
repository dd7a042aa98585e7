use cosmwasm_std::{Addr, StdResult, Storage};

use crate::error::ContractError;
use crate::state::ADMINS;

pub fn is_admin(storage: &dyn Storage, address: &Addr) -> StdResult<bool> {
    Ok(ADMINS.may_load(storage, address)?.unwrap_or(false))
}

pub fn require_admin(storage: &dyn Storage, caller: &Addr) -> Result<(), ContractError> {
    if !is_admin(storage, caller)? {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

pub fn set_admin(storage: &mut dyn Storage, address: &Addr, enabled: bool) -> StdResult<()> {
    ADMINS.save(storage, address, &enabled)
}
