//! Computes per-transaction commissions for an ordered batch of financial
//! operations (deposits and withdrawals), read as a JSON array.
//!
//! Deposits pay a capped percentage. Organization withdrawals pay a floored
//! percentage. Individual withdrawals spend a rolling 7-day fee-free
//! allowance first, and pay a percentage on whatever exceeds it. All fees
//! are rounded up to the next whole cent.

pub mod engine;
pub mod input;
pub mod output;
pub mod run;
