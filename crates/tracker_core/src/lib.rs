//! Tracker core: pure profile and status domain logic, no IO.
mod registry;
mod resolver;
mod status;

pub use registry::Registry;
pub use resolver::{ProfileReference, ProfileResolver, ResolveError, DEFAULT_BASE_URL};
pub use status::{StatusKind, StatusReport, StatusVocabulary, UNKNOWN_DISPLAY_NAME};
