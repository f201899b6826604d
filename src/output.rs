//! Output formatting module for awscost
//!
//! This module provides formatters for displaying an estimate in different
//! formats:
//! - Table format for human-readable terminal output
//! - JSON format for machine-readable output and persistence
//!
//! Both formatters render the same [`Estimate`]; text output and the
//! optional file write are independent and may both run in one
//! invocation.
//!
//! # Examples
//!
//! ```
//! use awscost::aggregation::Aggregator;
//! use awscost::output::get_formatter;
//! use awscost::types::EstimateConfig;
//! use awscost_pricing::PriceSheet;
//!
//! let sheet = PriceSheet::default();
//! let config = EstimateConfig::default();
//! let estimate = Aggregator::new(&sheet).estimate(&config);
//!
//! // Human-readable report
//! let formatter = get_formatter(false);
//! println!("{}", formatter.format_estimate(&config, &estimate));
//!
//! // Machine-readable output
//! let json_formatter = get_formatter(true);
//! println!("{}", json_formatter.format_estimate(&config, &estimate));
//! ```

use awscost_core::error::Result;
use awscost_core::types::{Estimate, EstimateConfig};
use prettytable::{Table, format, row};
use serde_json::json;
use std::path::Path;
use tracing::info;

/// Fixed disclaimer notes appended to every text report
const REPORT_NOTES: [&str; 4] = [
    "Prices are estimates based on US East (N. Virginia) region",
    "Actual costs may vary based on usage patterns",
    "AWS Free Tier credits may reduce first-year costs",
    "Data transfer costs are estimated based on typical usage",
];

/// Trait for output formatters
///
/// Implementations render a computed estimate (plus the configuration it
/// was computed from) into a displayable string.
pub trait OutputFormatter {
    /// Format a complete estimate
    fn format_estimate(&self, config: &EstimateConfig, estimate: &Estimate) -> String;
}

/// Table formatter for human-readable output
///
/// Produces a configuration summary, an ASCII breakdown table with
/// right-aligned dollar amounts, monthly/annual totals, and the fixed
/// disclaimer notes.
pub struct TableFormatter;

impl TableFormatter {
    /// Format currency with dollar sign
    fn format_currency(amount: f64) -> String {
        format!("${amount:.2}")
    }

    fn enabled_label(enabled: bool) -> &'static str {
        if enabled { "Enabled" } else { "Disabled" }
    }
}

impl OutputFormatter for TableFormatter {
    fn format_estimate(&self, config: &EstimateConfig, estimate: &Estimate) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", "=".repeat(60)));
        output.push_str("MakeDealCRM AWS Cost Estimate\n");
        output.push_str(&format!("{}\n\n", "=".repeat(60)));

        output.push_str("Configuration:\n");
        output.push_str(&format!("  Instance Type: {}\n", config.instance_tier));
        output.push_str(&format!(
            "  High Availability: {}\n",
            if config.high_availability { "Yes" } else { "No" }
        ));
        output.push_str(&format!("  Storage: {}GB\n", config.storage_gb));
        output.push_str(&format!(
            "  Backups: {}\n",
            Self::enabled_label(config.backups_enabled)
        ));
        output.push_str(&format!(
            "  Monitoring: {}\n",
            Self::enabled_label(config.monitoring_enabled)
        ));
        output.push_str(&format!("  Region: {}\n\n", estimate.region));

        output.push_str("Cost Breakdown:\n");

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
        table.set_titles(row![b -> "Service", b -> "Description", b -> "Monthly Cost"]);

        for item in &estimate.breakdown {
            table.add_row(row![
                item.service,
                item.description,
                r -> Self::format_currency(item.monthly_cost)
            ]);
        }

        table.add_row(row![
            b -> "Total Monthly Cost",
            "",
            br -> Self::format_currency(estimate.total_monthly)
        ]);
        table.add_row(row![
            b -> "Total Annual Cost",
            "",
            br -> Self::format_currency(estimate.total_annual)
        ]);

        output.push_str(&table.to_string());

        output.push_str("\nNotes:\n");
        for note in REPORT_NOTES {
            output.push_str(&format!("- {note}\n"));
        }

        output
    }
}

/// JSON formatter for machine-readable output
///
/// Produces the same document that `--save` persists: an ordered
/// `breakdown` list plus totals and metadata. There is no schema
/// versioning.
pub struct JsonFormatter;

impl JsonFormatter {
    /// Render an estimate as a pretty-printed JSON document
    pub fn to_json_string(estimate: &Estimate) -> String {
        let output = json!({
            "breakdown": estimate.breakdown.iter().map(|item| json!({
                "service": item.service,
                "description": item.description,
                "monthly_cost": item.monthly_cost,
            })).collect::<Vec<_>>(),
            "total_monthly": estimate.total_monthly,
            "total_annual": estimate.total_annual,
            "currency": estimate.currency,
            "region": estimate.region,
            "generated_at": estimate.generated_at.to_rfc3339(),
        });

        serde_json::to_string_pretty(&output).unwrap()
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_estimate(&self, _config: &EstimateConfig, estimate: &Estimate) -> String {
        Self::to_json_string(estimate)
    }
}

/// Get appropriate formatter based on JSON flag
///
/// # Arguments
///
/// * `json` - If true, returns a JSON formatter; otherwise returns a table formatter
pub fn get_formatter(json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonFormatter)
    } else {
        Box::new(TableFormatter)
    }
}

/// Persist an estimate as a JSON document
///
/// One scoped open/write/close per invocation; the file content is
/// identical to the `--json` output.
pub fn save_estimate(estimate: &Estimate, path: &Path) -> Result<()> {
    std::fs::write(path, JsonFormatter::to_json_string(estimate))?;
    info!("Estimate saved to: {}", path.display());
    Ok(())
}
