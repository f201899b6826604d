//! CLI interface for awscost
//!
//! This module defines the command-line interface using clap. Every flag
//! has a default, so `awscost` with no arguments estimates the reference
//! deployment (t3.small, single-AZ, 100 GB storage, backups and
//! monitoring on).
//!
//! The instance type is the only validated input: anything outside the
//! supported tiers is rejected as a usage error before any calculation
//! runs. All other numeric flags are accepted as given.
//!
//! # Example
//!
//! ```bash
//! # Estimate a highly-available t3.medium deployment
//! awscost --instance-type t3.medium --high-availability
//!
//! # Machine-readable output, saved to a file
//! awscost --json --save estimate.json
//! ```

use awscost_core::types::{EstimateConfig, InstanceTier};
use clap::Parser;
use std::path::PathBuf;

/// Default file name for `--save` without an explicit path
pub const DEFAULT_SAVE_PATH: &str = "cost-estimate.json";

/// Estimate monthly AWS infrastructure costs
#[derive(Parser, Debug, Clone)]
#[command(name = "awscost")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// EC2 instance type (t3.small, t3.medium, or t3.large)
    #[arg(long, value_name = "TIER", default_value = "t3.small")]
    pub instance_type: InstanceTier,

    /// Enable Multi-AZ deployment (doubles EC2 and RDS costs)
    #[arg(long)]
    pub high_availability: bool,

    /// Storage size in GB
    #[arg(long, value_name = "GB", default_value = "100")]
    pub storage_gb: u64,

    /// Disable automated backups
    #[arg(long)]
    pub disable_backups: bool,

    /// Disable CloudWatch monitoring
    #[arg(long)]
    pub disable_monitoring: bool,

    /// Estimated monthly outbound data transfer in GB
    #[arg(long, value_name = "GB", default_value = "50")]
    pub data_transfer_gb: u64,

    /// Daily backup volume in GB
    #[arg(long, value_name = "GB", default_value = "50")]
    pub backup_gb: u64,

    /// Backup retention days
    #[arg(long, value_name = "DAYS", default_value = "7")]
    pub retention_days: u32,

    /// AWS region label (display-only; rates are US East 1)
    #[arg(long, value_name = "REGION", default_value = "us-east-1")]
    pub region: String,

    /// Save the estimate as JSON to FILE (default: cost-estimate.json)
    #[arg(long, value_name = "FILE", num_args = 0..=1, default_missing_value = DEFAULT_SAVE_PATH)]
    pub save: Option<PathBuf>,

    /// Print the estimate as JSON instead of the text report
    #[arg(long)]
    pub json: bool,

    /// Show informational output (default is quiet mode with only warnings and errors)
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// Build the immutable estimation configuration from the parsed flags
    pub fn to_config(&self) -> EstimateConfig {
        EstimateConfig {
            instance_tier: self.instance_type,
            high_availability: self.high_availability,
            storage_gb: self.storage_gb,
            data_transfer_gb: self.data_transfer_gb,
            backups_enabled: !self.disable_backups,
            backup_gb: self.backup_gb,
            retention_days: self.retention_days,
            monitoring_enabled: !self.disable_monitoring,
            region: self.region.clone(),
        }
    }
}
