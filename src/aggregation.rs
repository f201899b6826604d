//! Aggregation module for assembling a full cost estimate
//!
//! The [`Aggregator`] drives the per-service calculators over one
//! [`EstimateConfig`] and assembles the ordered breakdown, totals, and
//! metadata into an [`Estimate`].
//!
//! EC2, RDS, EBS storage, and data transfer line items are always
//! computed; backups appear only when enabled; the monitoring line item is
//! always present with the calculator itself encoding the
//! enabled/disabled branch. Line items are rounded individually before
//! summation, so the monthly total always equals the sum of the printed
//! breakdown (at the cost of a few cents of drift vs. rounding the raw
//! sum).
//!
//! # Examples
//!
//! ```
//! use awscost::aggregation::Aggregator;
//! use awscost::types::EstimateConfig;
//! use awscost_pricing::PriceSheet;
//!
//! let sheet = PriceSheet::default();
//! let estimate = Aggregator::new(&sheet).estimate(&EstimateConfig::default());
//!
//! let sum: f64 = estimate.breakdown.iter().map(|i| i.monthly_cost).sum();
//! assert_eq!(estimate.total_monthly, awscost::types::round2(sum));
//! ```

use awscost_core::types::{Estimate, EstimateConfig, round2};
use awscost_pricing::{CostCalculator, PriceSheet};
use chrono::{DateTime, Utc};
use tracing::info;

/// Builds a complete [`Estimate`] from an [`EstimateConfig`]
///
/// Pure aside from timestamp capture; [`Aggregator::estimate_with_now`]
/// makes the clock injectable for deterministic tests.
pub struct Aggregator<'a> {
    calculator: CostCalculator<'a>,
}

impl<'a> Aggregator<'a> {
    /// Create a new Aggregator over a price sheet
    pub fn new(sheet: &'a PriceSheet) -> Self {
        Self {
            calculator: CostCalculator::new(sheet),
        }
    }

    /// Compute an estimate, stamping it with the current UTC time
    pub fn estimate(&self, config: &EstimateConfig) -> Estimate {
        self.estimate_with_now(config, Utc::now())
    }

    /// Compute an estimate with an explicit generation timestamp
    pub fn estimate_with_now(&self, config: &EstimateConfig, now: DateTime<Utc>) -> Estimate {
        let mut breakdown = Vec::with_capacity(6);

        breakdown.push(
            self.calculator
                .ec2_cost(config.instance_tier, config.high_availability),
        );
        breakdown.push(self.calculator.rds_cost(config.high_availability));
        breakdown.push(self.calculator.storage_cost(config.storage_gb));
        breakdown.push(self.calculator.data_transfer_cost(config.data_transfer_gb));

        // Disabled backups are absent from the breakdown, not zeroed
        if config.backups_enabled {
            breakdown.push(
                self.calculator
                    .backup_cost(config.backup_gb, config.retention_days),
            );
        }

        breakdown.push(self.calculator.monitoring_cost(config.monitoring_enabled));

        let total_monthly = round2(breakdown.iter().map(|item| item.monthly_cost).sum());
        let total_annual = round2(total_monthly * 12.0);

        info!(
            "Estimated {} line items: ${total_monthly:.2}/mo, ${total_annual:.2}/yr",
            breakdown.len()
        );

        Estimate {
            breakdown,
            total_monthly,
            total_annual,
            currency: "USD".to_string(),
            region: config.region.clone(),
            generated_at: now,
        }
    }
}
