use cosmwasm_std::{to_json_binary, DepsMut, Env, MessageInfo, Response, SubMsg, Uint128, WasmMsg};
use cw20::Cw20Coin;

use crate::admin::require_admin;
use crate::error::ContractError;
use crate::state::{CONFIG, SALE_STATE};

/// Reply id of the project token instantiation.
pub const INSTANTIATE_TOKEN_REPLY_ID: u64 = 1;

/// Admin, once: deploy the project token with its whole supply held by this
/// contract. The token address is bound when the instantiation replies.
pub fn execute_initialize(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    name: String,
    symbol: String,
    initial_supply: Uint128,
    decimals: u8,
) -> Result<Response, ContractError> {
    require_admin(deps.storage, &info.sender)?;

    let mut state = SALE_STATE.load(deps.storage)?;
    if state.initialized {
        return Err(ContractError::AlreadyInitialized);
    }
    state.initialized = true;
    SALE_STATE.save(deps.storage, &state)?;

    let config = CONFIG.load(deps.storage)?;
    let token_msg = cw20_base::msg::InstantiateMsg {
        name: name.clone(),
        symbol: symbol.clone(),
        decimals,
        initial_balances: vec![Cw20Coin {
            address: env.contract.address.to_string(),
            amount: initial_supply,
        }],
        mint: None,
        marketing: None,
    };
    let instantiate = WasmMsg::Instantiate {
        admin: Some(env.contract.address.to_string()),
        code_id: config.token_code_id,
        msg: to_json_binary(&token_msg)?,
        funds: vec![],
        label: format!("crowdsale token {}", symbol),
    };

    Ok(Response::new()
        .add_submessage(SubMsg::reply_on_success(instantiate, INSTANTIATE_TOKEN_REPLY_ID))
        .add_attribute("action", "crowdsale.initialize")
        .add_attribute("admin", info.sender.to_string())
        .add_attribute("name", name)
        .add_attribute("symbol", symbol)
        .add_attribute("initial_supply", initial_supply.to_string())
        .add_attribute("decimals", decimals.to_string()))
}
