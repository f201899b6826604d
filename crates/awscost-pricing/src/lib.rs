//! Static price sheet and per-service cost calculators for awscost
//!
//! This crate holds the US East 1 reference rates and the pure
//! per-service calculators that turn deployment parameters into
//! cost line items.

pub mod cost_calculator;
pub mod sheet;

pub use cost_calculator::CostCalculator;
pub use sheet::{HOURS_PER_MONTH, PriceSheet, US_EAST_1};
