use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::admin::{require_admin, set_admin};
use crate::error::ContractError;

pub fn execute_add_admin(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    require_admin(deps.storage, &info.sender)?;

    let new_admin = deps.api.addr_validate(&address)?;
    set_admin(deps.storage, &new_admin, true)?;

    Ok(Response::new()
        .add_attribute("action", "crowdsale.add_admin")
        .add_attribute("sender", info.sender.to_string())
        .add_attribute("admin", new_admin.to_string()))
}

/// Revokes `address`. Any admin may revoke any other admin, so the roster
/// can shrink to a single admin but never to zero through this call.
pub fn execute_remove_admin(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    require_admin(deps.storage, &info.sender)?;

    let target = deps.api.addr_validate(&address)?;
    if target == info.sender {
        return Err(ContractError::CannotRemoveSelf);
    }
    set_admin(deps.storage, &target, false)?;

    Ok(Response::new()
        .add_attribute("action", "crowdsale.remove_admin")
        .add_attribute("sender", info.sender.to_string())
        .add_attribute("admin", target.to_string()))
}
