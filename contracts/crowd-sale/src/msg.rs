use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    /// Lock contract that escrows the non-treasury share of each contribution
    pub lock_endpoint: String,
    /// Receives the project share of each contribution
    pub treasury: String,
    /// First admin
    pub admin: String,
    /// Project token units per unit of `denom`
    pub price_per_unit: Uint128,
    /// Maximum total value accepted
    pub target_raise: Uint128,
    /// Treasury share in bps, must be < 10000
    pub project_share_bps: u16,
    /// Native denom accepted as payment
    pub denom: String,
    /// Code id of the cw20 contract deployed by `Initialize`
    pub token_code_id: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Admin: deploy the project token. The whole initial supply is minted
    /// to this contract and sold through `Contribute`.
    Initialize {
        name: String,
        symbol: String,
        initial_supply: Uint128,
        decimals: u8,
    },

    /// Buy project tokens for `beneficiary`.
    /// Attach at least `amount` of the configured denom.
    Contribute { beneficiary: String, amount: Uint128 },

    /// Admin: grant admin rights
    AddAdmin { address: String },

    /// Admin: revoke admin rights (not your own)
    RemoveAdmin { address: String },

    /// Admin: stop accepting contributions
    SetPaused {},

    /// Admin: resume accepting contributions
    SetUnpaused {},

    /// Admin: move the lock endpoint. Only for emergencies: escrow already
    /// deposited stays in the old endpoint.
    SetLockEndpoint { address: String },

    /// Admin: move the treasury
    SetTreasury { address: String },

    /// Accepts native funds without side effects, so the lock endpoint can
    /// return value to this contract.
    AcceptFunds {},
}

/// Message for contract migration
#[cw_serde]
pub struct MigrateMsg {}

/// Execute interface consumed on the lock endpoint
#[cw_serde]
pub enum LockEndpointExecuteMsg {
    /// `amount` is attached as funds
    LockDeposit { depositor: String, amount: Uint128 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(bool)]
    Initialized {},

    #[returns(Option<Addr>)]
    ProjectToken {},

    #[returns(Addr)]
    LockEndpoint {},

    #[returns(Addr)]
    TreasuryAddr {},

    #[returns(bool)]
    IsAdmin { address: String },

    /// Cumulative value contributed on behalf of `address`
    #[returns(Uint128)]
    UserBalance { address: String },

    /// Raised / target, in bps
    #[returns(Uint128)]
    PercentageSold {},

    #[returns(Uint128)]
    PricePerUnit {},

    #[returns(Uint128)]
    AmountExpectedToRaise {},

    #[returns(Uint128)]
    AmountRaised {},

    /// Raised scaled by the share bps
    #[returns(Uint128)]
    AmountLocked {},

    #[returns(u16)]
    ToLockBasisPoints {},

    #[returns(bool)]
    IsPaused {},

    #[returns(ContributionsResponse)]
    Contributions {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    #[returns(AdminsResponse)]
    Admins {
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

// ---- Response types ----

#[cw_serde]
pub struct ConfigResponse {
    pub denom: String,
    pub price_per_unit: Uint128,
    pub target_raise: Uint128,
    pub project_share_bps: u16,
    pub treasury: Addr,
    pub lock_endpoint: Addr,
    pub token_code_id: u64,
    pub project_token: Option<Addr>,
    pub paused: bool,
    pub initialized: bool,
    pub total_raised: Uint128,
}

#[cw_serde]
pub struct ContributionEntry {
    pub beneficiary: Addr,
    pub amount: Uint128,
}

#[cw_serde]
pub struct ContributionsResponse {
    pub contributions: Vec<ContributionEntry>,
}

#[cw_serde]
pub struct AdminsResponse {
    pub admins: Vec<Addr>,
}
