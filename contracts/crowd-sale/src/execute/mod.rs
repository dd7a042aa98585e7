pub mod contribute;
pub mod endpoints;
pub mod initialize;
pub mod manage_admins;
pub mod pause;
