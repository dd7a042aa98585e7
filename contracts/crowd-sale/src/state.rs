use cosmwasm_std::{Addr, Uint128};
use cosmwasm_schema::cw_serde;
use cw_storage_plus::{Item, Map};

/// 10000 bps = 100%.
pub const BASIS_POINTS: u16 = 10_000;

/// Smallest contribution accepted, and the smallest remaining capacity for
/// which an over-cap contribution gets its excess refunded.
pub const MIN_CONTRIBUTION: Uint128 = Uint128::new(100);

#[cw_serde]
pub struct Config {
    /// Native denom accepted as payment
    pub denom: String,
    /// Project token units paid out per unit of `denom` contributed
    pub price_per_unit: Uint128,
    /// Cap on the total value accepted
    pub target_raise: Uint128,
    /// Share of every contribution sent to the treasury, in bps.
    /// The remainder is escrowed in the lock endpoint.
    pub project_share_bps: u16,
    pub treasury: Addr,
    pub lock_endpoint: Addr,
    /// cw20 code deployed by `initialize`
    pub token_code_id: u64,
}

#[cw_serde]
pub struct SaleState {
    pub paused: bool,
    pub initialized: bool,
    /// Bound once, in the reply to the token instantiation
    pub project_token: Option<Addr>,
}

// ---- Storage keys ----

pub const CONFIG: Item<Config> = Item::new("config");
pub const SALE_STATE: Item<SaleState> = Item::new("sale_state");

/// Absent entries read as `false`.
pub const ADMINS: Map<&Addr, bool> = Map::new("admins");

/// Aggregate value accepted; see `crate::ledger`
pub const TOTAL_RAISED: Item<Uint128> = Item::new("total_raised");
/// Beneficiary -> cumulative value contributed on their behalf
pub const CONTRIBUTIONS: Map<&Addr, Uint128> = Map::new("contributions");

/// Set while a contribution is in flight; see `crate::guard`
pub const REENTRANCY_LOCK: Item<bool> = Item::new("reentrancy_lock");
