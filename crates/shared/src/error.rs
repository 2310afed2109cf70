use thiserror::Error;

/// Classified failures of a publish run. Anything not covered here (for
/// example a connection failure while posting to a sink) propagates as a
/// plain `anyhow` error with context.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("problem catalog unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("missing configuration: {0} is not set")]
    ConfigMissing(&'static str),

    #[error("{sink} rejected the request: {status} - {body}")]
    SinkRejected {
        sink: &'static str,
        status: u16,
        body: String,
    },
}
