use core::fmt;

#[derive(Debug, Clone)]
pub enum AecError {
    /// Invalid configuration parameters or flag combination.
    InvalidConfig(&'static str),
    /// Caller misuse detected by the convenience APIs.
    InvalidInput(&'static str),
    /// A flush was requested but the stream never reached its flushed state
    /// (the caller did not supply enough output buffer).
    IncompleteStream,
}

impl fmt::Display for AecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AecError::InvalidConfig(s) => write!(f, "invalid configuration: {s}"),
            AecError::InvalidInput(s) => write!(f, "invalid input: {s}"),
            AecError::IncompleteStream => write!(f, "flush requested but stream was not flushed"),
        }
    }
}

impl std::error::Error for AecError {}
