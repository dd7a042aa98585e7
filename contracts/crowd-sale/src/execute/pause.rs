use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::admin::require_admin;
use crate::error::ContractError;
use crate::state::SALE_STATE;

pub fn execute_set_paused(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    set_paused(deps, info, true)
}

pub fn execute_set_unpaused(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    set_paused(deps, info, false)
}

/// Only contributions are gated; admin operations keep working while paused.
fn set_paused(deps: DepsMut, info: MessageInfo, paused: bool) -> Result<Response, ContractError> {
    require_admin(deps.storage, &info.sender)?;

    let mut state = SALE_STATE.load(deps.storage)?;
    match (state.paused, paused) {
        (true, true) => return Err(ContractError::AlreadyPaused),
        (false, false) => return Err(ContractError::AlreadyUnpaused),
        _ => {}
    }
    state.paused = paused;
    SALE_STATE.save(deps.storage, &state)?;

    let action = if paused { "crowdsale.paused" } else { "crowdsale.unpaused" };
    Ok(Response::new()
        .add_attribute("action", action)
        .add_attribute("sender", info.sender.to_string()))
}
