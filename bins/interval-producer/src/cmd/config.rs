use std::time::Duration;

use pipeline::RunDefaults;

/// 1 000 heartbeats, five seconds apart.
pub const DEFAULTS: RunDefaults = RunDefaults {
    iterations: 1_000,
    interval: Duration::from_secs(5),
};
