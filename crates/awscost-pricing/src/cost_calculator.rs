//! Cost calculator module for computing per-service costs
//!
//! This module provides the six per-service calculators, one per billable
//! category. Each calculator is a pure function of its inputs and the price
//! sheet, returning a [`LineItem`] with the cost rounded to 2 decimal
//! places. There is no shared mutable state and no input validation here;
//! the command surface has already validated everything that needs it.
//!
//! # Examples
//!
//! ```
//! use awscost_pricing::{CostCalculator, PriceSheet};
//! use awscost_core::types::InstanceTier;
//!
//! let sheet = PriceSheet::default();
//! let calculator = CostCalculator::new(&sheet);
//!
//! let item = calculator.ec2_cost(InstanceTier::T3Small, false);
//! assert_eq!(item.monthly_cost, 15.18);
//!
//! // High availability doubles the instance count
//! let ha = calculator.ec2_cost(InstanceTier::T3Small, true);
//! assert_eq!(ha.monthly_cost, 30.37);
//! ```

use crate::sheet::{HOURS_PER_MONTH, PriceSheet};
use awscost_core::types::{DbInstanceClass, InstanceTier, LineItem};
use tracing::debug;

/// Calculates per-service costs from a price sheet
///
/// Borrows the sheet for the duration of one estimate; every method is
/// pure and independent of the others.
pub struct CostCalculator<'a> {
    sheet: &'a PriceSheet,
}

impl<'a> CostCalculator<'a> {
    /// Create a new CostCalculator over a price sheet
    pub fn new(sheet: &'a PriceSheet) -> Self {
        Self { sheet }
    }

    /// EC2 instance cost
    ///
    /// High availability doubles the instance count; no load-balancer or
    /// failover cost is modeled.
    pub fn ec2_cost(&self, tier: InstanceTier, high_availability: bool) -> LineItem {
        let hourly_rate = self.sheet.ec2_rate(tier);
        let instances = if high_availability { 2 } else { 1 };
        let monthly_cost = hourly_rate * HOURS_PER_MONTH * instances as f64;

        debug!("EC2: {instances}x {tier} at ${hourly_rate}/hr -> ${monthly_cost:.2}/mo");

        LineItem::new(
            "EC2 Instances",
            format!("{instances}x {tier}"),
            monthly_cost,
        )
    }

    /// RDS database cost
    ///
    /// The instance class is derived from the availability mode, and
    /// Multi-AZ doubles the hourly cost on top of the larger class.
    pub fn rds_cost(&self, high_availability: bool) -> LineItem {
        let class = DbInstanceClass::for_availability(high_availability);
        let hourly_rate = self.sheet.rds_rate(class);
        let multiplier = if high_availability { 2.0 } else { 1.0 };
        let monthly_cost = hourly_rate * HOURS_PER_MONTH * multiplier;

        let az = if high_availability {
            "Multi-AZ"
        } else {
            "Single-AZ"
        };
        debug!("RDS: {class} {az} -> ${monthly_cost:.2}/mo");

        LineItem::new("RDS Database", format!("{class} {az}"), monthly_cost)
    }

    /// EBS block storage cost, linear per GB with no tiering
    pub fn storage_cost(&self, storage_gb: u64) -> LineItem {
        let monthly_cost = self.sheet.ebs_gp3_gb_month * storage_gb as f64;

        LineItem::new("EBS Storage", format!("{storage_gb}GB GP3"), monthly_cost)
    }

    /// Outbound data transfer cost
    ///
    /// The first 1 GB per month is free; billable volume is clamped at
    /// zero rather than going negative.
    pub fn data_transfer_cost(&self, gb_per_month: u64) -> LineItem {
        let billable_gb = gb_per_month.saturating_sub(1);
        let monthly_cost = self.sheet.transfer_out_gb * billable_gb as f64;

        LineItem::new(
            "Data Transfer",
            format!("{gb_per_month}GB outbound"),
            monthly_cost,
        )
    }

    /// Backup storage cost
    ///
    /// Models linear accumulation-then-expiry as the average volume held
    /// over the retention window: `backup_gb * retention_days / 2`. This
    /// is a documented estimation policy, not exact per-snapshot
    /// accounting.
    pub fn backup_cost(&self, backup_gb: u64, retention_days: u32) -> LineItem {
        let avg_storage = backup_gb as f64 * (retention_days as f64 / 2.0);
        let monthly_cost = self.sheet.backup_gb_month * avg_storage;

        LineItem::new(
            "Backup Storage",
            format!("{backup_gb}GB daily, {retention_days} day retention"),
            monthly_cost,
        )
    }

    /// CloudWatch monitoring cost
    ///
    /// When enabled, uses a fixed assumed footprint of 5 GB logs, 10
    /// custom metrics, and 5 alarms regardless of the rest of the
    /// configuration. When disabled, the line item is kept with zero cost
    /// and the description "Disabled".
    pub fn monitoring_cost(&self, enabled: bool) -> LineItem {
        if !enabled {
            return LineItem::new("CloudWatch Monitoring", "Disabled", 0.0);
        }

        let logs_cost = self.sheet.cloudwatch_logs_gb * 5.0;
        let metrics_cost = self.sheet.cloudwatch_metric_month * 10.0;
        let alarms_cost = self.sheet.cloudwatch_alarm_month * 5.0;
        let monthly_cost = logs_cost + metrics_cost + alarms_cost;

        debug!(
            "CloudWatch: logs ${logs_cost:.2} + metrics ${metrics_cost:.2} + alarms ${alarms_cost:.2}"
        );

        LineItem::new(
            "CloudWatch Monitoring",
            "Logs, Metrics, Alarms",
            monthly_cost,
        )
    }
}
