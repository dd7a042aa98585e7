use cosmwasm_std::{
    coins, to_json_binary, Addr, BankMsg, CosmosMsg, QuerierWrapper, StdResult, Uint128, WasmMsg,
};

use crate::msg::LockEndpointExecuteMsg;

/// Typed handle on the lock endpoint contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LockEndpoint(pub Addr);

impl LockEndpoint {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    /// Escrows `amount` of `denom` on behalf of `depositor`.
    pub fn lock_deposit(
        &self,
        depositor: &Addr,
        amount: Uint128,
        denom: &str,
    ) -> StdResult<CosmosMsg> {
        let msg = LockEndpointExecuteMsg::LockDeposit {
            depositor: depositor.to_string(),
            amount,
        };
        Ok(WasmMsg::Execute {
            contract_addr: self.addr().into(),
            msg: to_json_binary(&msg)?,
            funds: coins(amount.u128(), denom),
        }
        .into())
    }
}

pub fn bank_send(to: &Addr, amount: Uint128, denom: &str) -> CosmosMsg {
    BankMsg::Send {
        to_address: to.to_string(),
        amount: coins(amount.u128(), denom),
    }
    .into()
}

/// True when `address` has contract code deployed behind it.
pub fn is_contract(querier: &QuerierWrapper, address: &Addr) -> bool {
    querier.query_wasm_contract_info(address.as_str()).is_ok()
}
