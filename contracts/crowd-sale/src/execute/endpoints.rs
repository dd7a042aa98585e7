use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::admin::require_admin;
use crate::error::ContractError;
use crate::helpers::is_contract;
use crate::state::CONFIG;

/// Admin: replace the lock endpoint.
///
/// Emergency use only. Escrow deposited before the switch stays in the old
/// endpoint. The current endpoint must still resolve to a contract.
pub fn execute_set_lock_endpoint(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    require_admin(deps.storage, &info.sender)?;

    let mut config = CONFIG.load(deps.storage)?;
    if !is_contract(&deps.querier, &config.lock_endpoint) {
        return Err(ContractError::EndpointNotContract {
            address: config.lock_endpoint.to_string(),
        });
    }

    let previous = config.lock_endpoint;
    config.lock_endpoint = deps.api.addr_validate(&address)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "crowdsale.set_lock_endpoint")
        .add_attribute("sender", info.sender.to_string())
        .add_attribute("previous", previous.to_string())
        .add_attribute("lock_endpoint", config.lock_endpoint.to_string()))
}

/// Admin: replace the treasury.
pub fn execute_set_treasury(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    require_admin(deps.storage, &info.sender)?;

    let mut config = CONFIG.load(deps.storage)?;
    let previous = config.treasury;
    config.treasury = deps.api.addr_validate(&address)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "crowdsale.set_treasury")
        .add_attribute("sender", info.sender.to_string())
        .add_attribute("previous", previous.to_string())
        .add_attribute("treasury", config.treasury.to_string()))
}
