use std::future::Future;
use std::pin::Pin;

use aws_config::{BehaviorVersion, Region};
use aws_sdk_kinesis::Client;
use aws_sdk_kinesis::error::{DisplayErrorContext, SdkError};
use aws_sdk_kinesis::operation::put_record::PutRecordError;
use aws_sdk_kinesis::primitives::Blob;

use producer_api::{ErrorKind, PublishError, PutRecordOutput, PutRecordRequest, RecordPublisher};

use crate::config::StreamConfig;

/// Publishes records to Kinesis Data Streams with one `PutRecord` call each.
///
/// Credentials and region come from the SDK default provider chain unless
/// the stream config overrides them. The client is owned by this publisher
/// for the whole run.
pub struct KinesisPublisher {
    client: Client,
}

impl KinesisPublisher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn connect(cfg: &StreamConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(ref region) = cfg.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(ref url) = cfg.endpoint_url {
            loader = loader.endpoint_url(url);
        }
        let sdk_config = loader.load().await;

        tracing::info!(
            stream = %cfg.stream_name,
            region = ?sdk_config.region(),
            endpoint = ?cfg.endpoint_url,
            "kinesis client ready"
        );
        Self::new(Client::new(&sdk_config))
    }
}

impl RecordPublisher for KinesisPublisher {
    fn put_record(
        &self,
        request: PutRecordRequest,
    ) -> Pin<Box<dyn Future<Output = Result<PutRecordOutput, PublishError>> + Send + '_>> {
        Box::pin(async move {
            let PutRecordRequest { stream_name, data, partition_key } = request;
            let out = self
                .client
                .put_record()
                .stream_name(stream_name)
                .partition_key(partition_key)
                .data(Blob::new(data))
                .send()
                .await
                .map_err(put_record_error)?;

            Ok(PutRecordOutput {
                shard_id: out.shard_id().to_string(),
                sequence_number: out.sequence_number().to_string(),
                encryption_type: out.encryption_type().map(|e| e.as_str().to_string()),
            })
        })
    }
}

fn put_record_error(err: SdkError<PutRecordError>) -> PublishError {
    let kind = match &err {
        SdkError::ConstructionFailure(_) => ErrorKind::Config,
        SdkError::ServiceError(ctx) => match ctx.err() {
            PutRecordError::ResourceNotFoundException(_) => ErrorKind::Config,
            _ => ErrorKind::Service,
        },
        _ => ErrorKind::Io,
    };
    PublishError::new(kind, DisplayErrorContext(&err).to_string())
}
