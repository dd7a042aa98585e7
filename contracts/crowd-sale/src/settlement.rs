use cosmwasm_std::Uint128;

use crate::error::ContractError;
use crate::state::{BASIS_POINTS, MIN_CONTRIBUTION};

/// How a single contribution is accepted and disbursed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    /// Value credited to the ledger, capped by the remaining capacity
    pub accepted: Uint128,
    /// Value sent back to the caller; zero when no refund applies
    pub refund: Uint128,
    /// Goes to the treasury
    pub project_share: Uint128,
    /// Escrowed in the lock endpoint
    pub locked_share: Uint128,
    /// Project token units owed to the beneficiary
    pub payout: Uint128,
}

impl Settlement {
    /// Caps `declared` at the remaining capacity and splits the accepted value.
    ///
    /// The excess over the cap is refunded only when the remaining capacity
    /// is itself at least `MIN_CONTRIBUTION`. Below that the contribution is
    /// still capped, but the excess stays with the contract.
    pub fn compute(
        declared: Uint128,
        total_raised: Uint128,
        target_raise: Uint128,
        project_share_bps: u16,
        price_per_unit: Uint128,
    ) -> Result<Self, ContractError> {
        let remaining = target_raise.checked_sub(total_raised)?;
        if remaining.is_zero() {
            return Err(ContractError::SaleCompleted);
        }

        let over_cap = total_raised.checked_add(declared)? > target_raise;
        let refund = if over_cap && remaining >= MIN_CONTRIBUTION {
            declared - remaining
        } else {
            Uint128::zero()
        };
        let accepted = declared.min(remaining);

        let project_share =
            accepted.multiply_ratio(project_share_bps, BASIS_POINTS);
        let locked_share = accepted - project_share;
        let payout = accepted.checked_mul(price_per_unit)?;

        Ok(Self {
            accepted,
            refund,
            project_share,
            locked_share,
            payout,
        })
    }
}
