use std::future::Future;
use std::pin::Pin;

use tokio::sync::RwLock;

use producer_api::{PublishError, PutRecordOutput, PutRecordRequest, RecordPublisher};

use crate::dry_run::synthetic_output;

// ═══════════════════════════════════════════════════════════════
//  MemoryPublisher
// ═══════════════════════════════════════════════════════════════

/// Keeps every accepted request in memory. Stands in for the service
/// when a caller needs to inspect exactly what was published.
#[derive(Default)]
pub struct MemoryPublisher {
    requests: RwLock<Vec<PutRecordRequest>>,
    fail_at: Option<usize>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject the call with zero-based index `call` (and every later one)
    /// with a service error.
    pub fn failing_at(call: usize) -> Self {
        Self { requests: RwLock::default(), fail_at: Some(call) }
    }

    /// Snapshot of accepted requests, in call order.
    pub async fn requests(&self) -> Vec<PutRecordRequest> {
        self.requests.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.requests.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.requests.read().await.is_empty()
    }
}

impl RecordPublisher for MemoryPublisher {
    fn put_record(
        &self,
        request: PutRecordRequest,
    ) -> Pin<Box<dyn Future<Output = Result<PutRecordOutput, PublishError>> + Send + '_>> {
        Box::pin(async move {
            let mut buf = self.requests.write().await;
            if self.fail_at.is_some_and(|n| buf.len() >= n) {
                return Err(PublishError::service(format!(
                    "Rate exceeded for shard shardId-000000000000 in stream {}",
                    request.stream_name
                )));
            }
            let seq = buf.len() as u64;
            buf.push(request);
            Ok(synthetic_output(seq))
        })
    }
}

#[cfg(test)]
mod tests {
    use producer_api::ErrorKind;

    use super::*;

    fn request(key: &str) -> PutRecordRequest {
        PutRecordRequest {
            stream_name: "stream-process-receive".into(),
            data: b"{}".to_vec(),
            partition_key: key.into(),
        }
    }

    #[tokio::test]
    async fn captures_in_order() {
        let publisher = MemoryPublisher::new();
        assert!(publisher.is_empty().await);

        publisher.put_record(request("1")).await.unwrap();
        publisher.put_record(request("2")).await.unwrap();

        let keys: Vec<_> =
            publisher.requests().await.into_iter().map(|r| r.partition_key).collect();
        assert_eq!(keys, ["1", "2"]);
    }

    #[tokio::test]
    async fn fails_from_configured_call() {
        let publisher = MemoryPublisher::failing_at(1);

        assert!(publisher.put_record(request("1")).await.is_ok());
        let err = publisher.put_record(request("2")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Service);
        assert_eq!(publisher.len().await, 1);
    }
}
