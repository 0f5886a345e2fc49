use std::future::Future;
use std::io::Write;
use std::time::Duration;

use tokio::time::Instant;

use producer_api::{PartitionedRecord, PutRecordRequest, RecordPublisher};

use crate::ProducerError;

/// Shape of one producer run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    pub stream_name: String,
    pub iterations: u64,
    /// Pause after every record, the last one included.
    pub interval: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub sent: u64,
    pub elapsed: Duration,
    /// Stopped by the shutdown signal before all iterations ran.
    pub interrupted: bool,
}

// ═══════════════════════════════════════════════════════════════
//  Producer loop
// ═══════════════════════════════════════════════════════════════

/// Publish `plan.iterations` records built by `next_record`, one put-record
/// call each, writing every service reply as a line to `out`.
///
/// The first failed call ends the run with that error. `shutdown` is only
/// raced against the pauses: a call in flight always completes and is
/// counted, then the run stops cleanly.
pub async fn run<P, R, F, W, S>(
    publisher: &P,
    plan: &RunPlan,
    mut next_record: F,
    out: &mut W,
    shutdown: S,
) -> Result<RunSummary, ProducerError>
where
    P: RecordPublisher + ?Sized,
    R: PartitionedRecord,
    F: FnMut() -> R,
    W: Write,
    S: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    tracing::info!(
        stream = %plan.stream_name,
        iterations = plan.iterations,
        interval_ms = plan.interval.as_millis() as u64,
        "producer started"
    );

    let start = Instant::now();
    let mut sent = 0u64;

    for iteration in 0..plan.iterations {
        let record = next_record();
        let request = PutRecordRequest::from_record(plan.stream_name.as_str(), &record)
            .map_err(ProducerError::Encode)?;
        tracing::debug!(
            iteration,
            partition_key = %request.partition_key,
            bytes = request.data.len(),
            "put record"
        );

        let output = publisher
            .put_record(request)
            .await
            .map_err(|source| ProducerError::Publish { iteration, source })?;
        writeln!(out, "{output}")?;
        sent += 1;

        tokio::select! {
            _ = tokio::time::sleep(plan.interval) => {}
            _ = &mut shutdown => return Ok(stopped(plan, sent, start)),
        }
    }

    let elapsed = start.elapsed();
    tracing::info!(
        stream = %plan.stream_name,
        sent,
        elapsed_s = format_args!("{:.1}", elapsed.as_secs_f64()),
        "producer finished"
    );
    Ok(RunSummary { sent, elapsed, interrupted: false })
}

fn stopped(plan: &RunPlan, sent: u64, start: Instant) -> RunSummary {
    let elapsed = start.elapsed();
    tracing::info!(
        stream = %plan.stream_name,
        sent,
        total = plan.iterations,
        elapsed_s = format_args!("{:.1}", elapsed.as_secs_f64()),
        "producer stopped by signal"
    );
    RunSummary { sent, elapsed, interrupted: true }
}

/// Resolves on Ctrl+C. A failure to install the handler is logged and the
/// future then never resolves, so the run is simply not interruptible.
pub async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "cannot listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use std::future::pending;
    use std::pin::Pin;

    use serde::Serialize;

    use producer_api::{ErrorKind, PublishError, PutRecordOutput};

    use super::*;
    use crate::MemoryPublisher;

    #[derive(Serialize)]
    struct Tick {
        timestamp: String,
        n: u64,
    }

    impl PartitionedRecord for Tick {
        fn partition_key(&self) -> &str {
            &self.timestamp
        }
    }

    fn ticks() -> impl FnMut() -> Tick {
        let mut n = 0;
        move || {
            n += 1;
            Tick { timestamp: format!("{}", 1_700_000_000 + n), n }
        }
    }

    fn plan(iterations: u64, interval: Duration) -> RunPlan {
        RunPlan { stream_name: "stream-process-receive".into(), iterations, interval }
    }

    /// Takes `delay` to answer each call, then accepts it.
    struct SlowPublisher {
        delay: Duration,
        inner: MemoryPublisher,
    }

    impl RecordPublisher for SlowPublisher {
        fn put_record(
            &self,
            request: PutRecordRequest,
        ) -> Pin<Box<dyn Future<Output = Result<PutRecordOutput, PublishError>> + Send + '_>> {
            Box::pin(async move {
                tokio::time::sleep(self.delay).await;
                self.inner.put_record(request).await
            })
        }
    }

    #[tokio::test(start_paused = true)]
    async fn publishes_exact_count_and_prints_each_reply() {
        let publisher = MemoryPublisher::new();
        let mut out = Vec::new();

        let summary = run(
            &publisher,
            &plan(4, Duration::from_secs(1)),
            ticks(),
            &mut out,
            pending(),
        )
        .await
        .unwrap();

        assert_eq!(summary.sent, 4);
        assert!(!summary.interrupted);
        assert_eq!(publisher.len().await, 4);

        let printed = String::from_utf8(out).unwrap();
        let lines: Vec<_> = printed.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with(r#"{"ShardId":"shardId-000000000000","SequenceNumber":""#));
    }

    #[tokio::test(start_paused = true)]
    async fn sleeps_after_every_record() {
        let publisher = MemoryPublisher::new();
        let summary = run(
            &publisher,
            &plan(3, Duration::from_secs(5)),
            ticks(),
            &mut std::io::sink(),
            pending(),
        )
        .await
        .unwrap();

        assert!(summary.elapsed >= Duration::from_secs(15));
        assert!(summary.elapsed < Duration::from_millis(15_010));
    }

    #[tokio::test(start_paused = true)]
    async fn partition_key_comes_from_record() {
        let publisher = MemoryPublisher::new();
        run(
            &publisher,
            &plan(2, Duration::from_millis(1)),
            ticks(),
            &mut std::io::sink(),
            pending(),
        )
        .await
        .unwrap();

        for req in publisher.requests().await {
            let data = req.data_json().unwrap();
            assert_eq!(data["timestamp"].as_str(), Some(req.partition_key.as_str()));
            assert_eq!(req.stream_name, "stream-process-receive");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn first_failure_aborts_the_run() {
        let publisher = MemoryPublisher::failing_at(2);
        let mut out = Vec::new();

        let err = run(
            &publisher,
            &plan(10, Duration::from_secs(1)),
            ticks(),
            &mut out,
            pending(),
        )
        .await
        .unwrap_err();

        assert_eq!(err.to_string().split(':').next(), Some("put record #3"));
        match err {
            ProducerError::Publish { iteration, source } => {
                assert_eq!(iteration, 2);
                assert_eq!(source.kind(), ErrorKind::Service);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(publisher.len().await, 2);
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_stops_between_records() {
        let publisher = MemoryPublisher::new();
        let shutdown = tokio::time::sleep(Duration::from_millis(2500));

        let summary = run(
            &publisher,
            &plan(100, Duration::from_secs(1)),
            ticks(),
            &mut std::io::sink(),
            shutdown,
        )
        .await
        .unwrap();

        assert!(summary.interrupted);
        assert_eq!(summary.sent, 3);
        assert_eq!(publisher.len().await, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_lets_call_in_flight_finish() {
        let publisher =
            SlowPublisher { delay: Duration::from_secs(2), inner: MemoryPublisher::new() };
        let shutdown = tokio::time::sleep(Duration::from_secs(1));
        let mut out = Vec::new();

        let summary = run(
            &publisher,
            &plan(100, Duration::from_secs(1)),
            ticks(),
            &mut out,
            shutdown,
        )
        .await
        .unwrap();

        assert!(summary.interrupted);
        assert_eq!(summary.sent, 1);
        assert_eq!(publisher.inner.len().await, 1);
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_iterations_publish_nothing() {
        let publisher = MemoryPublisher::new();
        let summary = run(
            &publisher,
            &plan(0, Duration::from_secs(1)),
            ticks(),
            &mut std::io::sink(),
            pending(),
        )
        .await
        .unwrap();

        assert_eq!(summary.sent, 0);
        assert!(publisher.is_empty().await);
    }
}
