use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};

use producer_api::{PublishError, PutRecordOutput, PutRecordRequest, RecordPublisher};

/// Shard id reported by publishers that never reach the service.
pub const LOCAL_SHARD_ID: &str = "shardId-000000000000";

/// Logs each record instead of sending it. Replies look like a single-shard
/// stream with increasing sequence numbers.
#[derive(Default)]
pub struct DryRunPublisher {
    seq: AtomicU64,
}

impl DryRunPublisher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordPublisher for DryRunPublisher {
    fn put_record(
        &self,
        request: PutRecordRequest,
    ) -> Pin<Box<dyn Future<Output = Result<PutRecordOutput, PublishError>> + Send + '_>> {
        Box::pin(async move {
            let seq = self.seq.fetch_add(1, Ordering::Relaxed);
            tracing::info!(
                stream = %request.stream_name,
                partition_key = %request.partition_key,
                payload = %String::from_utf8_lossy(&request.data),
                "dry run: record not sent"
            );
            Ok(synthetic_output(seq))
        })
    }
}

/// Reply for the `seq`-th record on the local shard.
pub(crate) fn synthetic_output(seq: u64) -> PutRecordOutput {
    PutRecordOutput {
        shard_id: LOCAL_SHARD_ID.to_string(),
        sequence_number: format!("{seq:056}"),
        encryption_type: None,
    }
}
