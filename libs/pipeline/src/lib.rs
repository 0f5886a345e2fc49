pub mod config;
pub mod error;
mod dry_run;
mod kinesis;
mod memory;
pub mod producer;

pub use error::ProducerError;
pub use config::{Effective, ProducerArgs, RunDefaults, StreamConfig, DEFAULT_STREAM_NAME};
pub use dry_run::{DryRunPublisher, LOCAL_SHARD_ID};
pub use kinesis::KinesisPublisher;
pub use memory::MemoryPublisher;
pub use producer::{RunPlan, RunSummary};

use producer_api::RecordPublisher;

/// Build the publisher a run should use: the dry-run logger when asked,
/// otherwise a Kinesis client for the configured stream.
pub async fn load_publisher(eff: &Effective) -> Box<dyn RecordPublisher> {
    if eff.dry_run {
        tracing::info!(stream = %eff.stream.stream_name, "dry run, nothing will be sent");
        Box::new(DryRunPublisher::new())
    } else {
        Box::new(KinesisPublisher::connect(&eff.stream).await)
    }
}
