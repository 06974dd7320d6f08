//! Tracker engine: fetch/parse pipeline and the polling scheduler.
mod fetch;
mod parse;
mod persist;
mod scheduler;
mod types;

pub use fetch::{FetchSettings, FetchedPage, PageFetcher, ReqwestFetcher};
pub use parse::{StatusParser, SteamStatusParser};
pub use persist::{
    ensure_dir, load_profile_lines, save_profile_lines, AtomicFileWriter, PersistError,
};
pub use scheduler::{
    run_poll_cycle, ChannelCycleSink, CycleSink, PollConfig, SharedRegistry, TrackerHandle,
    TrackerSettings,
};
pub use types::{
    AddProfileError, CycleOutcome, FailureKind, FetchError, ProfileStatus, TrackerEvent,
};
