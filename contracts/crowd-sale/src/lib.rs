pub mod admin;
pub mod contract;
pub mod error;
pub mod execute;
pub mod guard;
pub mod helpers;
pub mod ledger;
pub mod msg;
pub mod query;
pub mod settlement;
pub mod state;

#[cfg(test)]
pub mod testing;
