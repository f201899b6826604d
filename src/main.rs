//! awscost - Estimate monthly AWS infrastructure costs for a MakeDealCRM deployment

use anyhow::Context;
use awscost::{
    aggregation::Aggregator,
    cli::Cli,
    output::{get_formatter, save_estimate},
};
use awscost_pricing::US_EAST_1;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging. The default is quiet; -v or RUST_LOG opts in.
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::new("awscost=info")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("awscost=warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = cli.to_config();
    info!(
        "Estimating costs for {} ({}) in {}",
        config.instance_tier,
        if config.high_availability {
            "multi-AZ"
        } else {
            "single-AZ"
        },
        config.region
    );

    let aggregator = Aggregator::new(&US_EAST_1);
    let estimate = aggregator.estimate(&config);

    let formatter = get_formatter(cli.json);
    println!("{}", formatter.format_estimate(&config, &estimate));

    if let Some(path) = &cli.save {
        save_estimate(&estimate, path)
            .with_context(|| format!("failed to save estimate to {}", path.display()))?;
        println!("Estimate saved to: {}", path.display());
    }

    Ok(())
}
