use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

mod error;
mod util;

pub use error::{ErrorKind, PublishError};
pub use util::{epoch_timestamp, now_secs};

// ════════════════════════════════════════════════════════════════
//  Records
// ════════════════════════════════════════════════════════════════

/// A flat record that knows which partition key routes it.
///
/// Producers build one per iteration, encode it as JSON and hand it to a
/// [`RecordPublisher`]. Nothing is kept after the call returns.
pub trait PartitionedRecord: Serialize {
    /// Key the ingestion service hashes to pick a shard.
    fn partition_key(&self) -> &str;
}

/// Serialize a record into the JSON bytes sent as the record payload.
pub fn encode_record<R: Serialize + ?Sized>(record: &R) -> Result<Vec<u8>, PublishError> {
    Ok(serde_json::to_vec(record)?)
}

// ════════════════════════════════════════════════════════════════
//  Put record call
// ════════════════════════════════════════════════════════════════

/// The three inputs of a single put-record call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutRecordRequest {
    pub stream_name: String,
    pub data: Vec<u8>,
    pub partition_key: String,
}

impl PutRecordRequest {
    /// Encode `record` and take its partition key.
    pub fn from_record<R: PartitionedRecord>(
        stream_name: impl Into<String>,
        record: &R,
    ) -> Result<Self, PublishError> {
        Ok(Self {
            stream_name: stream_name.into(),
            data: encode_record(record)?,
            partition_key: record.partition_key().to_string(),
        })
    }

    /// Decode the payload back into JSON.
    pub fn data_json(&self) -> Result<serde_json::Value, PublishError> {
        Ok(serde_json::from_slice(&self.data)?)
    }
}

/// Service reply to a put-record call.
///
/// Serialized with the service's own field names so the printed line reads
/// like the raw API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutRecordOutput {
    pub shard_id: String,
    pub sequence_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_type: Option<String>,
}

impl std::fmt::Display for PutRecordOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let line = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&line)
    }
}

// ════════════════════════════════════════════════════════════════
//  Publisher trait
// ════════════════════════════════════════════════════════════════

/// Anything that can submit one record to a named stream.
///
/// Implementations: Kinesis client, dry-run logger, in-memory capture.
/// A single call either succeeds with the service reply or fails; callers
/// do not retry.
pub trait RecordPublisher: Send + Sync {
    fn put_record(
        &self,
        request: PutRecordRequest,
    ) -> Pin<Box<dyn Future<Output = Result<PutRecordOutput, PublishError>> + Send + '_>>;
}
