//! Integration tests for awscost

use awscost::{
    aggregation::Aggregator,
    cli::Cli,
    output::{get_formatter, save_estimate},
    types::{EstimateConfig, InstanceTier, round2},
};
use awscost_pricing::PriceSheet;
use chrono::{TimeZone, Utc};
use clap::Parser;

fn estimate_for(config: &EstimateConfig) -> awscost::types::Estimate {
    let sheet = PriceSheet::default();
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    Aggregator::new(&sheet).estimate_with_now(config, now)
}

#[test]
fn test_default_deployment_estimate() {
    let estimate = estimate_for(&EstimateConfig::default());

    let costs: Vec<f64> = estimate.breakdown.iter().map(|i| i.monthly_cost).collect();
    assert_eq!(costs, [15.18, 12.41, 8.0, 4.41, 8.75, 6.0]);
    assert_eq!(estimate.total_monthly, 54.75);
    assert_eq!(estimate.total_annual, 657.0);
    assert_eq!(estimate.currency, "USD");
}

#[test]
fn test_high_availability_deployment() {
    let config = EstimateConfig {
        instance_tier: InstanceTier::T3Medium,
        high_availability: true,
        ..Default::default()
    };
    let estimate = estimate_for(&config);

    let ec2 = &estimate.breakdown[0];
    assert_eq!(ec2.description, "2x t3.medium");
    // 0.0416 * 730 * 2 = 60.736 -> 60.74
    assert_eq!(ec2.monthly_cost, 60.74);

    let rds = &estimate.breakdown[1];
    assert_eq!(rds.description, "db.t3.small Multi-AZ");
    assert_eq!(rds.monthly_cost, 49.64);
}

#[test]
fn test_cli_to_estimate_pipeline() {
    let cli = Cli::parse_from([
        "awscost",
        "--instance-type",
        "t3.large",
        "--high-availability",
        "--storage-gb",
        "250",
        "--disable-backups",
    ]);
    let config = cli.to_config();
    let estimate = estimate_for(&config);

    // No backup line when backups are disabled
    assert_eq!(estimate.breakdown.len(), 5);
    assert!(
        !estimate
            .breakdown
            .iter()
            .any(|item| item.service == "Backup Storage")
    );

    // EC2 still reflects the tier and HA from the CLI
    assert_eq!(estimate.breakdown[0].description, "2x t3.large");

    let sum: f64 = estimate.breakdown.iter().map(|i| i.monthly_cost).sum();
    assert_eq!(estimate.total_monthly, round2(sum));
}

#[test]
fn test_unsupported_tier_fails_before_estimation() {
    let result = Cli::try_parse_from(["awscost", "--instance-type", "c5.4xlarge"]);
    let err = result.unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    assert!(err.to_string().contains("unsupported instance tier"));
}

#[test]
fn test_text_and_json_report_same_estimate() {
    let config = EstimateConfig::default();
    let estimate = estimate_for(&config);

    let text = get_formatter(false).format_estimate(&config, &estimate);
    let json = get_formatter(true).format_estimate(&config, &estimate);

    assert!(text.contains("$54.75"));

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["total_monthly"], 54.75);
    assert_eq!(value["breakdown"].as_array().unwrap().len(), 6);
}

#[test]
fn test_saved_estimate_matches_json_output() {
    let config = EstimateConfig {
        data_transfer_gb: 0,
        ..Default::default()
    };
    let estimate = estimate_for(&config);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cost-estimate.json");
    save_estimate(&estimate, &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, get_formatter(true).format_estimate(&config, &estimate));

    // 0 GB transfer is clamped to zero cost, not negative
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    let transfer = &value["breakdown"][3];
    assert_eq!(transfer["service"], "Data Transfer");
    assert_eq!(transfer["monthly_cost"], 0.0);
}

#[test]
fn test_one_free_gb_of_transfer() {
    let config = EstimateConfig {
        data_transfer_gb: 1,
        ..Default::default()
    };
    let estimate = estimate_for(&config);

    let transfer = estimate
        .breakdown
        .iter()
        .find(|i| i.service == "Data Transfer")
        .unwrap();
    assert_eq!(transfer.monthly_cost, 0.0);
    assert_eq!(transfer.description, "1GB outbound");
}
