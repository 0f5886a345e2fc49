use std::time::Duration;

use clap::Args;
use serde::Deserialize;

use crate::ProducerError;
use crate::producer::RunPlan;

/// Stream every producer writes to unless overridden.
pub const DEFAULT_STREAM_NAME: &str = "stream-process-receive";

// ═══════════════════════════════════════════════════════════════
//  Config file (TOML)
// ═══════════════════════════════════════════════════════════════

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    pub stream_name: Option<String>,
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
    pub iterations: Option<u64>,
    pub interval_ms: Option<u64>,
    pub dry_run: Option<bool>,
    pub seed: Option<u64>,
}

pub fn load_config(path: &str) -> Result<Config, ProducerError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ProducerError::Config { context: "read", detail: format!("'{path}': {e}") })?;
    toml::from_str(&content)
        .map_err(|e| ProducerError::Config { context: "parse", detail: format!("'{path}': {e}") })
}

// ═══════════════════════════════════════════════════════════════
//  CLI args
// ═══════════════════════════════════════════════════════════════

/// Options shared by every producer binary.
#[derive(Args, Clone, Debug, Default)]
pub struct ProducerArgs {
    /// Path to the TOML config file (ignored when missing)
    #[arg(long, default_value = "producer.toml", env = "STREAM_PRODUCER_CONFIG")]
    pub config: String,

    /// Target stream name
    #[arg(long, env = "STREAM_NAME")]
    pub stream_name: Option<String>,

    /// AWS region (falls back to the SDK provider chain)
    #[arg(long)]
    pub region: Option<String>,

    /// Custom service endpoint, e.g. a local emulator
    #[arg(long, env = "STREAM_ENDPOINT_URL")]
    pub endpoint_url: Option<String>,

    /// Number of records to publish
    #[arg(long)]
    pub iterations: Option<u64>,

    /// Pause after each record, in milliseconds
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Log records instead of sending them
    #[arg(long)]
    pub dry_run: bool,
}

// ═══════════════════════════════════════════════════════════════
//  Effective (merged config)
// ═══════════════════════════════════════════════════════════════

/// Where a producer connects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamConfig {
    pub stream_name: String,
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
}

/// Built-in run shape of a producer binary.
#[derive(Debug, Clone, Copy)]
pub struct RunDefaults {
    pub iterations: u64,
    pub interval: Duration,
}

/// Final configuration after merging: defaults < config file < env/CLI.
#[derive(Debug, Clone)]
pub struct Effective {
    pub stream: StreamConfig,
    pub iterations: u64,
    pub interval: Duration,
    pub dry_run: bool,
    /// Seed from the config file; binaries that sample may override it.
    pub seed: Option<u64>,
}

impl Effective {
    pub fn new(args: &ProducerArgs, defaults: RunDefaults) -> Result<Self, ProducerError> {
        let cfg = match load_config(&args.config) {
            Ok(c) => c,
            Err(e) => {
                if std::path::Path::new(&args.config).exists() {
                    return Err(e);
                }
                Config::default()
            }
        };
        Self::merge(args, cfg, defaults)
    }

    fn merge(
        args: &ProducerArgs,
        cfg: Config,
        defaults: RunDefaults,
    ) -> Result<Self, ProducerError> {
        let stream_name = args
            .stream_name
            .clone()
            .or(cfg.stream_name)
            .unwrap_or_else(|| DEFAULT_STREAM_NAME.to_string());
        if stream_name.trim().is_empty() {
            return Err(ProducerError::Config {
                context: "stream_name",
                detail: "must not be empty".into(),
            });
        }

        let interval = args
            .interval_ms
            .or(cfg.interval_ms)
            .map(Duration::from_millis)
            .unwrap_or(defaults.interval);

        Ok(Self {
            stream: StreamConfig {
                stream_name,
                region: args.region.clone().or(cfg.region),
                endpoint_url: args.endpoint_url.clone().or(cfg.endpoint_url),
            },
            iterations: args.iterations.or(cfg.iterations).unwrap_or(defaults.iterations),
            interval,
            dry_run: args.dry_run || cfg.dry_run.unwrap_or(false),
            seed: cfg.seed,
        })
    }

    pub fn plan(&self) -> RunPlan {
        RunPlan {
            stream_name: self.stream.stream_name.clone(),
            iterations: self.iterations,
            interval: self.interval,
        }
    }
}
