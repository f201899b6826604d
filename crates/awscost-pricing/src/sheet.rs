//! Static AWS price sheet
//!
//! Rates are the published US East (N. Virginia) on-demand prices at the
//! time of writing. Live pricing lookups are out of scope; other regions
//! are estimated with these reference rates and labeled accordingly.

use awscost_core::types::{DbInstanceClass, InstanceTier};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Average hours in a month, used to convert hourly rates to monthly costs
pub const HOURS_PER_MONTH: f64 = 730.0;

/// Shared default price sheet (US East 1)
pub static US_EAST_1: Lazy<PriceSheet> = Lazy::new(PriceSheet::default);

/// Unit rates for every billable service category
///
/// All rates are USD. Hourly rates apply per instance-hour; storage and
/// transfer rates apply per GB.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSheet {
    /// EC2 t3.small hourly rate
    pub ec2_small_hourly: f64,
    /// EC2 t3.medium hourly rate
    pub ec2_medium_hourly: f64,
    /// EC2 t3.large hourly rate
    pub ec2_large_hourly: f64,
    /// RDS db.t3.micro hourly rate
    pub rds_micro_hourly: f64,
    /// RDS db.t3.small hourly rate
    pub rds_small_hourly: f64,
    /// EBS gp3 rate per GB-month
    pub ebs_gp3_gb_month: f64,
    /// Outbound data transfer rate per GB (after the 1 GB free tier)
    pub transfer_out_gb: f64,
    /// Backup storage rate per GB-month
    pub backup_gb_month: f64,
    /// CloudWatch logs ingestion rate per GB
    pub cloudwatch_logs_gb: f64,
    /// CloudWatch rate per custom metric per month
    pub cloudwatch_metric_month: f64,
    /// CloudWatch rate per alarm per month
    pub cloudwatch_alarm_month: f64,
}

impl Default for PriceSheet {
    fn default() -> Self {
        Self {
            ec2_small_hourly: 0.0208,
            ec2_medium_hourly: 0.0416,
            ec2_large_hourly: 0.0832,
            rds_micro_hourly: 0.017,
            rds_small_hourly: 0.034,
            ebs_gp3_gb_month: 0.08,
            transfer_out_gb: 0.09,
            backup_gb_month: 0.05,
            cloudwatch_logs_gb: 0.50,
            cloudwatch_metric_month: 0.30,
            cloudwatch_alarm_month: 0.10,
        }
    }
}

impl PriceSheet {
    /// Hourly rate for an EC2 instance tier
    ///
    /// Total over the closed tier enum, so no fallback rate is needed.
    pub fn ec2_rate(&self, tier: InstanceTier) -> f64 {
        match tier {
            InstanceTier::T3Small => self.ec2_small_hourly,
            InstanceTier::T3Medium => self.ec2_medium_hourly,
            InstanceTier::T3Large => self.ec2_large_hourly,
        }
    }

    /// Hourly rate for an RDS instance class
    pub fn rds_rate(&self, class: DbInstanceClass) -> f64 {
        match class {
            DbInstanceClass::DbT3Micro => self.rds_micro_hourly,
            DbInstanceClass::DbT3Small => self.rds_small_hourly,
        }
    }
}
