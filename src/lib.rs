//! awscost - Estimate monthly AWS infrastructure costs for a MakeDealCRM deployment
//!
//! This library provides functionality to:
//! - Build an estimation configuration from command-line flags or defaults
//! - Compute per-service cost line items from a static price sheet
//! - Aggregate line items into a monthly/annual estimate
//! - Render the estimate as a table or JSON, and optionally save it to a file
//!
//! # Examples
//!
//! ```
//! use awscost::{aggregation::Aggregator, types::EstimateConfig};
//! use awscost_pricing::PriceSheet;
//!
//! let sheet = PriceSheet::default();
//! let aggregator = Aggregator::new(&sheet);
//!
//! let estimate = aggregator.estimate(&EstimateConfig::default());
//! assert_eq!(estimate.breakdown.len(), 6);
//! ```

pub mod aggregation;
pub mod cli;
pub mod output;

// Re-export the core and pricing layers under the familiar module paths
pub use awscost_core::{error, types};
pub use awscost_pricing::{CostCalculator, PriceSheet};

pub use error::{AwscostError, Result};
pub use types::{DbInstanceClass, Estimate, EstimateConfig, InstanceTier, LineItem};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
