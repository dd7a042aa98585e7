use cosmwasm_std::{OverflowError, StdError};
use cw_utils::{ParseReplyError, PaymentError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("{0}")]
    ParseReply(#[from] ParseReplyError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Invalid share: project share must be below {max_bps} bps")]
    InvalidShare { max_bps: u16 },

    #[error("Invalid price: token units per unit of value must be > 0")]
    InvalidPrice,

    #[error("Invalid target: amount to raise must be > 0")]
    InvalidTarget,

    #[error("Reentrant call rejected")]
    Reentrancy,

    #[error("Crowd sale is paused")]
    Paused,

    #[error("Crowd sale is already paused")]
    AlreadyPaused,

    #[error("Crowd sale is already unpaused")]
    AlreadyUnpaused,

    #[error("Crowd sale is not initialized: project token not deployed")]
    NotInitialized,

    #[error("Crowd sale is already initialized")]
    AlreadyInitialized,

    #[error("Insufficient funds attached: declared {declared}, attached {attached}")]
    InsufficientFunds { declared: String, attached: String },

    #[error("Contribution below minimum of {min}")]
    BelowMinimum { min: String },

    #[error("Crowd sale target already reached")]
    SaleCompleted,

    #[error("Treasury transfer failed: {reason}")]
    TreasuryTransferFailed { reason: String },

    #[error("Project token transfer failed: {reason}")]
    TokenTransferFailed { reason: String },

    #[error("Admin cannot remove itself")]
    CannotRemoveSelf,

    #[error("Current lock endpoint {address} is not a contract")]
    EndpointNotContract { address: String },

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },

    #[error("Cannot migrate from {stored} to {expected}")]
    InvalidMigration { stored: String, expected: String },
}
