use producer_api::PublishError;

#[derive(Debug, thiserror::Error)]
pub enum ProducerError {
    #[error("config ({context}): {detail}")]
    Config { context: &'static str, detail: String },

    #[error("encode record: {0}")]
    Encode(PublishError),

    /// `iteration` is zero-based; the message counts from one.
    #[error("put record #{}: {source}", .iteration + 1)]
    Publish { iteration: u64, source: PublishError },

    #[error("write output: {0}")]
    Output(#[from] std::io::Error),
}
