//! Core domain types for awscost
//!
//! This module contains the fundamental types used throughout the awscost
//! workspace: the supported instance tiers, the immutable estimation
//! configuration, and the line-item/estimate records that make up a cost
//! breakdown.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AwscostError;

/// Round a dollar amount to 2 decimal places (half away from zero).
///
/// Line items are rounded independently before summation, so the total can
/// drift a few cents from rounding the raw sum. That drift is accepted.
pub fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Supported EC2 instance tiers
///
/// This is a closed enum: the CLI rejects anything outside it before any
/// calculation runs, so calculators never see an unknown tier.
///
/// # Examples
/// ```
/// use awscost_core::types::InstanceTier;
///
/// let tier: InstanceTier = "t3.medium".parse().unwrap();
/// assert_eq!(tier.as_str(), "t3.medium");
/// assert!("m5.xlarge".parse::<InstanceTier>().is_err());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstanceTier {
    /// t3.small (the default and smallest supported tier)
    #[default]
    #[serde(rename = "t3.small")]
    T3Small,
    /// t3.medium
    #[serde(rename = "t3.medium")]
    T3Medium,
    /// t3.large
    #[serde(rename = "t3.large")]
    T3Large,
}

impl InstanceTier {
    /// All supported tiers, smallest first
    pub const ALL: [InstanceTier; 3] = [Self::T3Small, Self::T3Medium, Self::T3Large];

    /// Get the tier name as used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::T3Small => "t3.small",
            Self::T3Medium => "t3.medium",
            Self::T3Large => "t3.large",
        }
    }
}

impl fmt::Display for InstanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for InstanceTier {
    type Err = AwscostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "t3.small" => Ok(Self::T3Small),
            "t3.medium" => Ok(Self::T3Medium),
            "t3.large" => Ok(Self::T3Large),
            _ => Err(AwscostError::UnknownTier(s.to_string())),
        }
    }
}

/// RDS instance classes
///
/// The database class is derived from the high-availability flag rather
/// than configured independently: HA deployments get the larger class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DbInstanceClass {
    /// db.t3.micro (single-AZ deployments)
    #[serde(rename = "db.t3.micro")]
    DbT3Micro,
    /// db.t3.small (multi-AZ deployments)
    #[serde(rename = "db.t3.small")]
    DbT3Small,
}

impl DbInstanceClass {
    /// Select the class for a deployment's availability mode
    pub fn for_availability(high_availability: bool) -> Self {
        if high_availability {
            Self::DbT3Small
        } else {
            Self::DbT3Micro
        }
    }

    /// Get the class name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DbT3Micro => "db.t3.micro",
            Self::DbT3Small => "db.t3.small",
        }
    }
}

impl fmt::Display for DbInstanceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Immutable estimation inputs
///
/// Built once from command-line flags (or defaults) and never mutated.
/// Sizes are unsigned, so the "negative GB propagates into the arithmetic"
/// latitude of the original tool cannot occur here.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateConfig {
    /// EC2 instance tier
    pub instance_tier: InstanceTier,
    /// Multi-AZ deployment: doubles EC2 instance count and RDS cost
    pub high_availability: bool,
    /// EBS storage size in GB
    pub storage_gb: u64,
    /// Estimated monthly outbound data transfer in GB
    pub data_transfer_gb: u64,
    /// Whether automated backups are included in the estimate
    pub backups_enabled: bool,
    /// Daily backup volume in GB
    pub backup_gb: u64,
    /// Backup retention period in days
    pub retention_days: u32,
    /// Whether CloudWatch monitoring is included in the estimate
    pub monitoring_enabled: bool,
    /// Region label (display-only; rates are always US East 1)
    pub region: String,
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self {
            instance_tier: InstanceTier::T3Small,
            high_availability: false,
            storage_gb: 100,
            data_transfer_gb: 50,
            backups_enabled: true,
            backup_gb: 50,
            retention_days: 7,
            monitoring_enabled: true,
            region: "us-east-1".to_string(),
        }
    }
}

/// One billable component of the cost breakdown
///
/// Immutable once computed; the monthly cost is rounded to 2 decimal
/// places at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Service name, e.g. "EC2 Instances"
    pub service: String,
    /// Human-readable description, e.g. "2x t3.medium"
    pub description: String,
    /// Monthly cost in USD, rounded to 2 decimal places
    pub monthly_cost: f64,
}

impl LineItem {
    /// Create a new line item, rounding the raw cost to 2 decimal places
    pub fn new(service: impl Into<String>, description: impl Into<String>, raw_cost: f64) -> Self {
        Self {
            service: service.into(),
            description: description.into(),
            monthly_cost: round2(raw_cost),
        }
    }
}

/// The aggregate result of one cost calculation
///
/// Produced once per invocation, then printed, serialized, or both.
/// `breakdown` preserves calculation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// Line items in calculation order
    pub breakdown: Vec<LineItem>,
    /// Sum of all line-item costs, rounded to 2 decimal places
    pub total_monthly: f64,
    /// `total_monthly * 12`, rounded to 2 decimal places
    pub total_annual: f64,
    /// Currency code, always "USD"
    pub currency: String,
    /// Region label from the configuration
    pub region: String,
    /// UTC timestamp of when the estimate was generated
    pub generated_at: DateTime<Utc>,
}
