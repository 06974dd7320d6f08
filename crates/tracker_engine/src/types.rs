use std::fmt;

use tracker_core::{ProfileReference, ResolveError, StatusReport};

/// One registry entry's classification for one cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileStatus {
    pub reference: ProfileReference,
    pub report: StatusReport,
}

/// The complete, ordered result of one pass over the registry. Delivered to
/// the sink as a unit; a later outcome fully replaces an earlier one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleOutcome {
    /// 1-based cycle counter, for log correlation.
    pub cycle: u64,
    pub results: Vec<ProfileStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerEvent {
    CycleCompleted(CycleOutcome),
}

/// Synchronous outcome of asking the tracker to follow a new profile.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddProfileError {
    #[error("invalid profile input: {0}")]
    InvalidInput(#[from] ResolveError),
    #[error("profile is already tracked")]
    AlreadyTracked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    Decode,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::Decode => write!(f, "undecodable body"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
