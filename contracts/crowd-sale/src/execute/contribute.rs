use cosmwasm_std::{CosmosMsg, DepsMut, MessageInfo, Response, SubMsg, Uint128};
use cw20::{Cw20Contract, Cw20ExecuteMsg};
use cw_utils::may_pay;

use crate::error::ContractError;
use crate::guard::ReentrancyGuard;
use crate::helpers::{bank_send, LockEndpoint};
use crate::ledger;
use crate::settlement::Settlement;
use crate::state::{CONFIG, MIN_CONTRIBUTION, SALE_STATE};

/// Reply id of the treasury transfer, used only to report its failure.
pub const TREASURY_TRANSFER_REPLY_ID: u64 = 3;

/// Buy project tokens for `beneficiary`, paying with the attached native coin.
///
/// Holds the reentrancy lock from here until the reply to the project token
/// transfer, which is the last message this handler emits.
pub fn execute_contribute(
    mut deps: DepsMut,
    info: MessageInfo,
    beneficiary: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let guard = ReentrancyGuard::enter(deps.storage)?;

    match settle(deps.branch(), &info, beneficiary, amount) {
        Ok((response, token_transfer)) => {
            Ok(response.add_submessage(guard.exit_after(token_transfer)))
        }
        Err(err) => {
            guard.exit(deps.storage)?;
            Err(err)
        }
    }
}

/// Validates, books and disburses one contribution. Returns the response
/// with every message except the final token transfer, which the caller
/// ties to the lock release.
fn settle(
    deps: DepsMut,
    info: &MessageInfo,
    beneficiary: String,
    declared: Uint128,
) -> Result<(Response, CosmosMsg), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let state = SALE_STATE.load(deps.storage)?;

    if state.paused {
        return Err(ContractError::Paused);
    }
    let token = state.project_token.ok_or(ContractError::NotInitialized)?;
    let beneficiary = deps.api.addr_validate(&beneficiary)?;

    let attached = may_pay(info, &config.denom)?;
    if attached < declared {
        return Err(ContractError::InsufficientFunds {
            declared: declared.to_string(),
            attached: attached.to_string(),
        });
    }
    if declared < MIN_CONTRIBUTION {
        return Err(ContractError::BelowMinimum {
            min: MIN_CONTRIBUTION.to_string(),
        });
    }

    let total_raised = ledger::total_raised(deps.storage)?;
    let settlement = Settlement::compute(
        declared,
        total_raised,
        config.target_raise,
        config.project_share_bps,
        config.price_per_unit,
    )?;

    let mut response = Response::new();

    if !settlement.refund.is_zero() {
        response = response.add_message(bank_send(
            &info.sender,
            settlement.refund,
            &config.denom,
        ));
    }

    if !settlement.project_share.is_zero() {
        response = response.add_submessage(SubMsg::reply_on_error(
            bank_send(&config.treasury, settlement.project_share, &config.denom),
            TREASURY_TRANSFER_REPLY_ID,
        ));
    }

    // locked_share is never zero: bps < 10000 and accepted > 0
    let lock = LockEndpoint(config.lock_endpoint.clone());
    response = response.add_message(lock.lock_deposit(
        &info.sender,
        settlement.locked_share,
        &config.denom,
    )?);

    let new_balance =
        ledger::credit_contribution(deps.storage, &beneficiary, settlement.accepted)?;
    let new_total = total_raised.checked_add(settlement.accepted)?;

    let token_transfer = Cw20Contract(token).call(Cw20ExecuteMsg::Transfer {
        recipient: beneficiary.to_string(),
        amount: settlement.payout,
    })?;

    let response = response
        .add_attribute("action", "crowdsale.contribute")
        .add_attribute("sender", info.sender.to_string())
        .add_attribute("beneficiary", beneficiary.to_string())
        .add_attribute("declared", declared.to_string())
        .add_attribute("accepted", settlement.accepted.to_string())
        .add_attribute("refund", settlement.refund.to_string())
        .add_attribute("project_share", settlement.project_share.to_string())
        .add_attribute("locked_share", settlement.locked_share.to_string())
        .add_attribute("payout", settlement.payout.to_string())
        .add_attribute("beneficiary_total", new_balance.to_string())
        .add_attribute("total_raised", new_total.to_string());

    Ok((response, token_transfer))
}
