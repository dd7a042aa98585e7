use cosmwasm_std::{Addr, Deps, Order, StdResult, Uint128};
use cw_storage_plus::Bound;

use crate::admin;
use crate::ledger;
use crate::msg::{AdminsResponse, ConfigResponse, ContributionEntry, ContributionsResponse};
use crate::state::{ADMINS, BASIS_POINTS, CONFIG, CONTRIBUTIONS, SALE_STATE};

const DEFAULT_LIMIT: u32 = 20;
const MAX_LIMIT: u32 = 100;

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    let state = SALE_STATE.load(deps.storage)?;
    Ok(ConfigResponse {
        denom: config.denom,
        price_per_unit: config.price_per_unit,
        target_raise: config.target_raise,
        project_share_bps: config.project_share_bps,
        treasury: config.treasury,
        lock_endpoint: config.lock_endpoint,
        token_code_id: config.token_code_id,
        project_token: state.project_token,
        paused: state.paused,
        initialized: state.initialized,
        total_raised: ledger::total_raised(deps.storage)?,
    })
}

pub fn query_initialized(deps: Deps) -> StdResult<bool> {
    Ok(SALE_STATE.load(deps.storage)?.initialized)
}

pub fn query_project_token(deps: Deps) -> StdResult<Option<Addr>> {
    Ok(SALE_STATE.load(deps.storage)?.project_token)
}

pub fn query_lock_endpoint(deps: Deps) -> StdResult<Addr> {
    Ok(CONFIG.load(deps.storage)?.lock_endpoint)
}

pub fn query_treasury(deps: Deps) -> StdResult<Addr> {
    Ok(CONFIG.load(deps.storage)?.treasury)
}

pub fn query_is_admin(deps: Deps, address: String) -> StdResult<bool> {
    let addr = deps.api.addr_validate(&address)?;
    admin::is_admin(deps.storage, &addr)
}

pub fn query_user_balance(deps: Deps, address: String) -> StdResult<Uint128> {
    let addr = deps.api.addr_validate(&address)?;
    ledger::balance_of(deps.storage, &addr)
}

/// Raised as a fraction of the target, in bps.
pub fn query_percentage_sold(deps: Deps) -> StdResult<Uint128> {
    let config = CONFIG.load(deps.storage)?;
    let raised = ledger::total_raised(deps.storage)?;
    Ok(raised.multiply_ratio(BASIS_POINTS, config.target_raise))
}

pub fn query_price_per_unit(deps: Deps) -> StdResult<Uint128> {
    Ok(CONFIG.load(deps.storage)?.price_per_unit)
}

pub fn query_amount_expected_to_raise(deps: Deps) -> StdResult<Uint128> {
    Ok(CONFIG.load(deps.storage)?.target_raise)
}

pub fn query_amount_raised(deps: Deps) -> StdResult<Uint128> {
    ledger::total_raised(deps.storage)
}

/// Total raised scaled by the configured share bps.
pub fn query_amount_locked(deps: Deps) -> StdResult<Uint128> {
    let config = CONFIG.load(deps.storage)?;
    let raised = ledger::total_raised(deps.storage)?;
    Ok(raised.multiply_ratio(config.project_share_bps, BASIS_POINTS))
}

pub fn query_to_lock_basis_points(deps: Deps) -> StdResult<u16> {
    Ok(CONFIG.load(deps.storage)?.project_share_bps)
}

pub fn query_is_paused(deps: Deps) -> StdResult<bool> {
    Ok(SALE_STATE.load(deps.storage)?.paused)
}

pub fn query_contributions(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<ContributionsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after
        .map(|s| deps.api.addr_validate(&s))
        .transpose()?;

    let contributions = CONTRIBUTIONS
        .range(deps.storage, start.as_ref().map(Bound::exclusive), None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (beneficiary, amount) = item?;
            Ok(ContributionEntry { beneficiary, amount })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(ContributionsResponse { contributions })
}

/// Active admins only; revoked entries are skipped.
pub fn query_admins(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<AdminsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after
        .map(|s| deps.api.addr_validate(&s))
        .transpose()?;

    let admins = ADMINS
        .range(deps.storage, start.as_ref().map(Bound::exclusive), None, Order::Ascending)
        .filter_map(|item| match item {
            Ok((addr, true)) => Some(Ok(addr)),
            Ok((_, false)) => None,
            Err(err) => Some(Err(err)),
        })
        .take(limit)
        .collect::<StdResult<Vec<_>>>()?;

    Ok(AdminsResponse { admins })
}
