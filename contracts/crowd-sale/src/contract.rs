use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult, SubMsgResult, Uint128,
};
use cw2::{get_contract_version, set_contract_version};
use cw_utils::parse_reply_instantiate_data;

use crate::admin::set_admin;
use crate::error::ContractError;
use crate::execute::contribute::TREASURY_TRANSFER_REPLY_ID;
use crate::execute::initialize::INSTANTIATE_TOKEN_REPLY_ID;
use crate::guard::{self, RELEASE_REPLY_ID};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::state::{Config, SaleState, BASIS_POINTS, CONFIG, SALE_STATE, TOTAL_RAISED};

const CONTRACT_NAME: &str = "crates.io:crowd-sale";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.project_share_bps >= BASIS_POINTS {
        return Err(ContractError::InvalidShare {
            max_bps: BASIS_POINTS,
        });
    }
    if msg.price_per_unit.is_zero() {
        return Err(ContractError::InvalidPrice);
    }
    if msg.target_raise.is_zero() {
        return Err(ContractError::InvalidTarget);
    }

    let config = Config {
        denom: msg.denom,
        price_per_unit: msg.price_per_unit,
        target_raise: msg.target_raise,
        project_share_bps: msg.project_share_bps,
        treasury: deps.api.addr_validate(&msg.treasury)?,
        lock_endpoint: deps.api.addr_validate(&msg.lock_endpoint)?,
        token_code_id: msg.token_code_id,
    };
    let admin = deps.api.addr_validate(&msg.admin)?;

    CONFIG.save(deps.storage, &config)?;
    SALE_STATE.save(
        deps.storage,
        &SaleState {
            paused: false,
            initialized: false,
            project_token: None,
        },
    )?;
    TOTAL_RAISED.save(deps.storage, &Uint128::zero())?;
    set_admin(deps.storage, &admin, true)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("sender", info.sender.to_string())
        .add_attribute("admin", admin.to_string())
        .add_attribute("treasury", config.treasury.to_string())
        .add_attribute("lock_endpoint", config.lock_endpoint.to_string())
        .add_attribute("target_raise", config.target_raise.to_string())
        .add_attribute("project_share_bps", config.project_share_bps.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Initialize {
            name,
            symbol,
            initial_supply,
            decimals,
        } => crate::execute::initialize::execute_initialize(
            deps,
            env,
            info,
            name,
            symbol,
            initial_supply,
            decimals,
        ),
        ExecuteMsg::Contribute {
            beneficiary,
            amount,
        } => crate::execute::contribute::execute_contribute(deps, info, beneficiary, amount),
        ExecuteMsg::AddAdmin { address } => {
            crate::execute::manage_admins::execute_add_admin(deps, info, address)
        }
        ExecuteMsg::RemoveAdmin { address } => {
            crate::execute::manage_admins::execute_remove_admin(deps, info, address)
        }
        ExecuteMsg::SetPaused {} => crate::execute::pause::execute_set_paused(deps, info),
        ExecuteMsg::SetUnpaused {} => crate::execute::pause::execute_set_unpaused(deps, info),
        ExecuteMsg::SetLockEndpoint { address } => {
            crate::execute::endpoints::execute_set_lock_endpoint(deps, info, address)
        }
        ExecuteMsg::SetTreasury { address } => {
            crate::execute::endpoints::execute_set_treasury(deps, info, address)
        }
        // Funds stay in the contract's bank balance, nothing to record
        ExecuteMsg::AcceptFunds {} => Ok(Response::new()
            .add_attribute("action", "crowdsale.accept_funds")
            .add_attribute("sender", info.sender.to_string())),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        INSTANTIATE_TOKEN_REPLY_ID => {
            let res = parse_reply_instantiate_data(msg)?;
            let token = deps.api.addr_validate(&res.contract_address)?;

            let mut state = SALE_STATE.load(deps.storage)?;
            state.project_token = Some(token.clone());
            SALE_STATE.save(deps.storage, &state)?;

            Ok(Response::new()
                .add_attribute("action", "crowdsale.token_deployed")
                .add_attribute("project_token", token.to_string()))
        }
        RELEASE_REPLY_ID => {
            guard::exit(deps.storage)?;
            match msg.result {
                SubMsgResult::Ok(_) => {
                    Ok(Response::new().add_attribute("action", "crowdsale.token_transferred"))
                }
                SubMsgResult::Err(reason) => Err(ContractError::TokenTransferFailed { reason }),
            }
        }
        TREASURY_TRANSFER_REPLY_ID => match msg.result {
            SubMsgResult::Err(reason) => Err(ContractError::TreasuryTransferFailed { reason }),
            SubMsgResult::Ok(_) => Ok(Response::new()),
        },
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::InvalidMigration {
            stored: stored.contract,
            expected: CONTRACT_NAME.to_string(),
        });
    }
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    use crate::query::*;

    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Initialized {} => to_json_binary(&query_initialized(deps)?),
        QueryMsg::ProjectToken {} => to_json_binary(&query_project_token(deps)?),
        QueryMsg::LockEndpoint {} => to_json_binary(&query_lock_endpoint(deps)?),
        QueryMsg::TreasuryAddr {} => to_json_binary(&query_treasury(deps)?),
        QueryMsg::IsAdmin { address } => to_json_binary(&query_is_admin(deps, address)?),
        QueryMsg::UserBalance { address } => to_json_binary(&query_user_balance(deps, address)?),
        QueryMsg::PercentageSold {} => to_json_binary(&query_percentage_sold(deps)?),
        QueryMsg::PricePerUnit {} => to_json_binary(&query_price_per_unit(deps)?),
        QueryMsg::AmountExpectedToRaise {} => {
            to_json_binary(&query_amount_expected_to_raise(deps)?)
        }
        QueryMsg::AmountRaised {} => to_json_binary(&query_amount_raised(deps)?),
        QueryMsg::AmountLocked {} => to_json_binary(&query_amount_locked(deps)?),
        QueryMsg::ToLockBasisPoints {} => to_json_binary(&query_to_lock_basis_points(deps)?),
        QueryMsg::IsPaused {} => to_json_binary(&query_is_paused(deps)?),
        QueryMsg::Contributions { start_after, limit } => {
            to_json_binary(&query_contributions(deps, start_after, limit)?)
        }
        QueryMsg::Admins { start_after, limit } => {
            to_json_binary(&query_admins(deps, start_after, limit)?)
        }
    }
}
