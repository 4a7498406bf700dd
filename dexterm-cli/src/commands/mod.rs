//! CLI command implementations.

pub mod browse;
pub mod fav;
pub mod filter;
pub mod show;
pub mod types;
