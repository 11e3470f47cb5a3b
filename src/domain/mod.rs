//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — canonical domain types handed to exchange-agnostic code
//! - `wire.rs` — raw serde structs matching exchange payloads
//! - `convert.rs` — adapter functions plus `From`/`TryFrom` impls

pub mod account;
pub mod order;
pub mod ticker;
pub mod trade;
pub mod user_trade;
pub mod wire;
