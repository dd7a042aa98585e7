//! Single-flag reentrancy lock.
//!
//! Outbound messages run after the handler returns, and any of them may
//! call back into this contract before the rest of the batch executes. The
//! lock is taken at the start of a guarded handler and held until the
//! handler's final outbound message reports back through `reply`.

use cosmwasm_std::{CosmosMsg, StdResult, Storage, SubMsg};

use crate::error::ContractError;
use crate::state::REENTRANCY_LOCK;

/// Reply id of the message that releases the lock.
pub const RELEASE_REPLY_ID: u64 = 2;

/// Proof that the lock is held by the current handler.
///
/// Consuming it is the only way to release the lock: either right away with
/// [`ReentrancyGuard::exit`] on an error path, or deferred with
/// [`ReentrancyGuard::exit_after`] when the handler succeeds.
#[must_use = "the reentrancy lock stays held until the guard is released"]
#[derive(Debug)]
pub struct ReentrancyGuard {
    _held: (),
}

impl ReentrancyGuard {
    pub fn enter(storage: &mut dyn Storage) -> Result<Self, ContractError> {
        if is_entered(storage)? {
            return Err(ContractError::Reentrancy);
        }
        REENTRANCY_LOCK.save(storage, &true)?;
        Ok(Self { _held: () })
    }

    pub fn exit(self, storage: &mut dyn Storage) -> StdResult<()> {
        exit(storage)
    }

    /// Wraps the handler's last outbound message so its reply, success or
    /// failure, clears the lock.
    pub fn exit_after(self, msg: impl Into<CosmosMsg>) -> SubMsg {
        SubMsg::reply_always(msg, RELEASE_REPLY_ID)
    }
}

pub fn is_entered(storage: &dyn Storage) -> StdResult<bool> {
    Ok(REENTRANCY_LOCK.may_load(storage)?.unwrap_or(false))
}

/// Clears the lock unconditionally.
pub fn exit(storage: &mut dyn Storage) -> StdResult<()> {
    REENTRANCY_LOCK.save(storage, &false)
}
