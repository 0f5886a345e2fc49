use std::time::Duration;

use clap::Args;

use pipeline::{ProducerArgs, RunDefaults};

/// 10 000 purchases, one per second.
pub const DEFAULTS: RunDefaults = RunDefaults {
    iterations: 10_000,
    interval: Duration::from_secs(1),
};

#[derive(Args, Clone, Debug)]
pub struct CatalogArgs {
    #[command(flatten)]
    pub common: ProducerArgs,

    /// Seed for the sampler (default: OS entropy)
    #[arg(long, env = "CATALOG_PRODUCER_SEED")]
    pub seed: Option<u64>,
}
