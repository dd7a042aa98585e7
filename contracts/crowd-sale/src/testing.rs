#[cfg(test)]
pub mod helpers {
    use cosmwasm_std::testing::{
        mock_dependencies, mock_env, mock_info, MockApi, MockQuerier, MockStorage,
    };
    use cosmwasm_std::{
        coins, from_json, Binary, Env, OwnedDeps, Reply, Response, SubMsgResponse, SubMsgResult,
        Uint128,
    };
    use serde::de::DeserializeOwned;

    use crate::contract::{execute, instantiate, query, reply};
    use crate::error::ContractError;
    use crate::execute::initialize::INSTANTIATE_TOKEN_REPLY_ID;
    use crate::guard::RELEASE_REPLY_ID;
    use crate::msg::*;

    pub const ADMIN: &str = "admin";
    pub const TREASURY: &str = "treasury";
    pub const LOCK_ENDPOINT: &str = "lock_endpoint";
    pub const PROJECT_TOKEN: &str = "project_token";
    pub const BUYER: &str = "buyer";
    pub const BENEFICIARY: &str = "beneficiary";
    pub const RANDOM_USER: &str = "random_user";
    pub const DENOM: &str = "uaxm";
    pub const TOKEN_CODE_ID: u64 = 7;

    pub type MockDeps = OwnedDeps<MockStorage, MockApi, MockQuerier>;

    /// target 1000, price 2, 20% to treasury
    pub fn default_instantiate_msg() -> InstantiateMsg {
        InstantiateMsg {
            lock_endpoint: LOCK_ENDPOINT.to_string(),
            treasury: TREASURY.to_string(),
            admin: ADMIN.to_string(),
            price_per_unit: Uint128::new(2),
            target_raise: Uint128::new(1000),
            project_share_bps: 2000,
            denom: DENOM.to_string(),
            token_code_id: TOKEN_CODE_ID,
        }
    }

    pub fn setup_contract() -> (MockDeps, Env) {
        let mut deps = mock_dependencies();
        let env = mock_env();
        let info = mock_info("deployer", &[]);

        instantiate(deps.as_mut(), env.clone(), info, default_instantiate_msg()).unwrap();

        (deps, env)
    }

    /// Instantiated, token deployed and bound to `PROJECT_TOKEN`.
    pub fn setup_initialized() -> (MockDeps, Env) {
        let (mut deps, env) = setup_contract();
        initialize(&mut deps, &env, ADMIN).unwrap();
        reply(deps.as_mut(), env.clone(), token_instantiated_reply(PROJECT_TOKEN)).unwrap();
        (deps, env)
    }

    pub fn initialize(
        deps: &mut MockDeps,
        env: &Env,
        sender: &str,
    ) -> Result<Response, ContractError> {
        let info = mock_info(sender, &[]);
        execute(
            deps.as_mut(),
            env.clone(),
            info,
            ExecuteMsg::Initialize {
                name: "Project Token".to_string(),
                symbol: "PRJ".to_string(),
                initial_supply: Uint128::new(1_000_000),
                decimals: 6,
            },
        )
    }

    /// Reply carrying a `MsgInstantiateContractResponse` for `address`.
    pub fn token_instantiated_reply(address: &str) -> Reply {
        // protobuf: field 1, wire type 2 (length-delimited)
        let mut data = vec![0x0a, address.len() as u8];
        data.extend_from_slice(address.as_bytes());
        Reply {
            id: INSTANTIATE_TOKEN_REPLY_ID,
            result: SubMsgResult::Ok(SubMsgResponse {
                events: vec![],
                data: Some(Binary::from(data)),
            }),
        }
    }

    pub fn reply_ok(id: u64) -> Reply {
        Reply {
            id,
            result: SubMsgResult::Ok(SubMsgResponse {
                events: vec![],
                data: None,
            }),
        }
    }

    pub fn reply_err(id: u64, reason: &str) -> Reply {
        Reply {
            id,
            result: SubMsgResult::Err(reason.to_string()),
        }
    }

    /// Sends `Contribute` without delivering the token transfer reply, so the
    /// reentrancy lock is still held afterwards when it succeeds.
    pub fn contribute(
        deps: &mut MockDeps,
        env: &Env,
        sender: &str,
        beneficiary: &str,
        amount: u128,
        attached: u128,
    ) -> Result<Response, ContractError> {
        let funds = if attached == 0 { vec![] } else { coins(attached, DENOM) };
        let info = mock_info(sender, &funds);
        execute(
            deps.as_mut(),
            env.clone(),
            info,
            ExecuteMsg::Contribute {
                beneficiary: beneficiary.to_string(),
                amount: Uint128::new(amount),
            },
        )
    }

    /// `contribute` followed by a successful token transfer reply.
    pub fn contribute_settled(
        deps: &mut MockDeps,
        env: &Env,
        sender: &str,
        beneficiary: &str,
        amount: u128,
    ) -> Response {
        let res = contribute(deps, env, sender, beneficiary, amount, amount).unwrap();
        reply(deps.as_mut(), env.clone(), reply_ok(RELEASE_REPLY_ID)).unwrap();
        res
    }

    pub fn admin_exec(
        deps: &mut MockDeps,
        env: &Env,
        sender: &str,
        msg: ExecuteMsg,
    ) -> Result<Response, ContractError> {
        let info = mock_info(sender, &[]);
        execute(deps.as_mut(), env.clone(), info, msg)
    }

    pub fn query_as<T: DeserializeOwned>(deps: &MockDeps, env: &Env, msg: QueryMsg) -> T {
        let res = query(deps.as_ref(), env.clone(), msg).unwrap();
        from_json(res).unwrap()
    }

    pub fn amount_raised(deps: &MockDeps, env: &Env) -> Uint128 {
        query_as(deps, env, QueryMsg::AmountRaised {})
    }

    pub fn user_balance(deps: &MockDeps, env: &Env, address: &str) -> Uint128 {
        query_as(
            deps,
            env,
            QueryMsg::UserBalance {
                address: address.to_string(),
            },
        )
    }

    pub fn is_admin(deps: &MockDeps, env: &Env, address: &str) -> bool {
        query_as(
            deps,
            env,
            QueryMsg::IsAdmin {
                address: address.to_string(),
            },
        )
    }

    pub fn has_attr(res: &Response, key: &str, value: &str) -> bool {
        res.attributes.iter().any(|a| a.key == key && a.value == value)
    }
}
