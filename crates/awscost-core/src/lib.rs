//! Core types and error handling for awscost
//!
//! This crate provides the foundational value types (instance tiers,
//! estimate configuration, line items, estimates) and the error type
//! shared by the other awscost crates.

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{AwscostError, Result};
pub use types::{DbInstanceClass, Estimate, EstimateConfig, InstanceTier, LineItem, round2};
