//! Entity resolver CLI entry point.
//!
//! Loads [`ResolverConfig`], initializes structured logging, and runs one
//! full resolver pass over the two configured CSV sources, writing
//! accepted matches to the configured output CSV.

use entity_resolver::{run_from_config, ResolverConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ResolverConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(&config.log_level)
        .with_target(false)
        .init();

    tracing::info!(
        source_a = %config.source_a_path,
        source_b = %config.source_b_path,
        worker_amount = config.worker_amount,
        threshold = config.score_threshold,
        "starting entity resolver run"
    );

    let summary = run_from_config(&config).await?;

    tracing::info!(
        pairs_compared = summary.pairs_compared,
        matches_accepted = summary.matches_accepted,
        timeouts = summary.timeouts,
        "entity resolver run finished"
    );
    println!(
        "compared {} pairs, accepted {} matches ({} timeouts, {} worker failures) -> {}",
        summary.pairs_compared,
        summary.matches_accepted,
        summary.timeouts,
        summary.worker_failures,
        config.output_path,
    );

    Ok(())
}
