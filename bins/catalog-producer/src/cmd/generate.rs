use std::future::Future;
use std::io::Write;

use pipeline::producer::{self, RunPlan, RunSummary};
use pipeline::{Effective, ProducerError};
use producer_api::RecordPublisher;

use super::config::{CatalogArgs, DEFAULTS};
use super::domain::Sampler;

pub async fn run(args: &CatalogArgs) -> Result<RunSummary, ProducerError> {
    let eff = Effective::new(&args.common, DEFAULTS)?;
    let seed = args.seed.or(eff.seed);
    if let Some(seed) = seed {
        tracing::info!(seed, "sampler seeded");
    }

    let publisher = pipeline::load_publisher(&eff).await;
    let mut out = std::io::stdout();
    produce(publisher.as_ref(), &eff.plan(), seed, &mut out, producer::ctrl_c()).await
}

/// Publish purchases sampled from the catalog until the plan is exhausted.
pub async fn produce<P, W, S>(
    publisher: &P,
    plan: &RunPlan,
    seed: Option<u64>,
    out: &mut W,
    shutdown: S,
) -> Result<RunSummary, ProducerError>
where
    P: RecordPublisher + ?Sized,
    W: Write,
    S: Future<Output = ()>,
{
    let mut sampler = Sampler::new(seed);
    producer::run(publisher, plan, || sampler.next_record(), out, shutdown).await
}
