/// Category of a publish error. Lets callers tell a misconfigured client
/// from a network hiccup or a service-side rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid client setup or unknown stream.
    Config,
    /// Dispatch failure, timeout or local I/O.
    Io,
    /// Record could not be serialized.
    Format,
    /// Rejected by the service (throttling, validation, access).
    Service,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Config => f.write_str("config"),
            ErrorKind::Io => f.write_str("io"),
            ErrorKind::Format => f.write_str("format"),
            ErrorKind::Service => f.write_str("service"),
        }
    }
}

/// Error returned by every [`RecordPublisher`](crate::RecordPublisher).
///
/// Carries an `ErrorKind` and a human-readable message. `From` impls assign
/// the kind automatically so publishers can use `?`.
#[derive(Clone)]
pub struct PublishError {
    kind: ErrorKind,
    message: String,
}

impl PublishError {
    pub fn new(kind: ErrorKind, msg: impl Into<String>) -> Self {
        Self { kind, message: msg.into() }
    }

    /// Service-side rejection.
    pub fn service(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Service, msg)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Debug for PublishError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

impl std::fmt::Display for PublishError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for PublishError {}

impl From<std::io::Error> for PublishError {
    fn from(e: std::io::Error) -> Self {
        Self { kind: ErrorKind::Io, message: e.to_string() }
    }
}

impl From<serde_json::Error> for PublishError {
    fn from(e: serde_json::Error) -> Self {
        Self { kind: ErrorKind::Format, message: e.to_string() }
    }
}
