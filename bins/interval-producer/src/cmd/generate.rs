use std::future::Future;
use std::io::Write;

use pipeline::producer::{self, RunPlan, RunSummary};
use pipeline::{Effective, ProducerArgs, ProducerError};
use producer_api::RecordPublisher;

use super::config::DEFAULTS;
use super::domain::HeartbeatRecord;

pub async fn run(args: &ProducerArgs) -> Result<RunSummary, ProducerError> {
    let eff = Effective::new(args, DEFAULTS)?;
    tracing::info!(
        stream = %eff.stream.stream_name,
        iterations = eff.iterations,
        interval_ms = eff.interval.as_millis() as u64,
        dry_run = eff.dry_run,
        "heartbeat plan"
    );
    let publisher = pipeline::load_publisher(&eff).await;
    let mut out = std::io::stdout();
    produce(publisher.as_ref(), &eff.plan(), &mut out, producer::ctrl_c()).await
}

pub async fn produce<P, W, S>(
    publisher: &P,
    plan: &RunPlan,
    out: &mut W,
    shutdown: S,
) -> Result<RunSummary, ProducerError>
where
    P: RecordPublisher + ?Sized,
    W: Write,
    S: Future<Output = ()>,
{
    producer::run(publisher, plan, HeartbeatRecord::now, out, shutdown).await
}
