use std::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use futures_util::{stream, StreamExt};
use tracker_core::{
    ProfileReference, ProfileResolver, Registry, StatusReport, StatusVocabulary,
};
use tracker_logging::{tracker_debug, tracker_info};

use crate::fetch::{FetchSettings, PageFetcher, ReqwestFetcher};
use crate::parse::{StatusParser, SteamStatusParser};
use crate::types::{AddProfileError, CycleOutcome, ProfileStatus, TrackerEvent};

/// Default refresh interval in seconds.
const DEFAULT_INTERVAL_SECS: u64 = 15;

/// Cap on simultaneous outbound fetches within one cycle.
const DEFAULT_FETCH_CONCURRENCY: usize = 4;

#[derive(Debug, Clone)]
pub struct TrackerSettings {
    pub fetch: FetchSettings,
    pub resolver: ProfileResolver,
    pub vocabulary: StatusVocabulary,
    pub interval: NonZeroU64,
    pub fetch_concurrency: usize,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            fetch: FetchSettings::default(),
            resolver: ProfileResolver::default(),
            vocabulary: StatusVocabulary::default(),
            interval: NonZeroU64::new(DEFAULT_INTERVAL_SECS).expect("nonzero default interval"),
            fetch_concurrency: DEFAULT_FETCH_CONCURRENCY,
        }
    }
}

/// Mutable poll interval, shared between the controlling surface and the
/// loop. The loop reads it once per sleep phase, so a change never shortens
/// or stretches the sleep already in progress.
#[derive(Debug)]
pub struct PollConfig {
    interval_secs: AtomicU64,
}

impl PollConfig {
    pub fn new(interval: NonZeroU64) -> Self {
        Self {
            interval_secs: AtomicU64::new(interval.get()),
        }
    }

    pub fn set_interval(&self, interval: NonZeroU64) {
        self.interval_secs.store(interval.get(), Ordering::Relaxed);
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs.load(Ordering::Relaxed))
    }
}

/// Registry behind a mutex so user additions and the scheduler's per-cycle
/// snapshot never race. Entries added mid-cycle are picked up at the next
/// cycle boundary.
#[derive(Clone)]
pub struct SharedRegistry {
    inner: Arc<Mutex<Registry>>,
}

impl SharedRegistry {
    pub fn new(registry: Registry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    pub fn add(&self, reference: ProfileReference) -> bool {
        self.inner.lock().expect("registry lock").add(reference)
    }

    pub fn snapshot(&self) -> Vec<ProfileReference> {
        self.inner.lock().expect("registry lock").snapshot()
    }

    pub fn dump_lines(&self) -> String {
        self.inner.lock().expect("registry lock").dump_lines()
    }
}

pub trait CycleSink: Send + Sync {
    /// Receives one complete cycle; called from the polling task's context.
    fn publish(&self, cycle: CycleOutcome);
}

pub struct ChannelCycleSink {
    tx: mpsc::Sender<TrackerEvent>,
}

impl ChannelCycleSink {
    pub fn new(tx: mpsc::Sender<TrackerEvent>) -> Self {
        Self { tx }
    }
}

impl CycleSink for ChannelCycleSink {
    fn publish(&self, cycle: CycleOutcome) {
        let _ = self.tx.send(TrackerEvent::CycleCompleted(cycle));
    }
}

/// Fetches and classifies every snapshot entry. Fetches run concurrently up
/// to `concurrency`, but `buffered` yields results in snapshot order, which
/// is what keeps the rendered list stable across cycles.
pub async fn run_poll_cycle(
    fetcher: &dyn PageFetcher,
    parser: &dyn StatusParser,
    snapshot: &[ProfileReference],
    concurrency: usize,
) -> Vec<ProfileStatus> {
    stream::iter(snapshot.iter().cloned())
        .map(|reference| async move {
            let report = poll_one(fetcher, parser, &reference).await;
            ProfileStatus { reference, report }
        })
        .buffered(concurrency.max(1))
        .collect()
        .await
}

/// One entry's fetch+parse. Every failure folds into the report; nothing in
/// the polling path may abort the cycle.
async fn poll_one(
    fetcher: &dyn PageFetcher,
    parser: &dyn StatusParser,
    reference: &ProfileReference,
) -> StatusReport {
    match fetcher.fetch(reference.address()).await {
        Ok(page) => parser.parse(&page.body),
        Err(err) => {
            tracker_debug!("Fetch failed for {}: {} ({})", reference, err.kind, err.message);
            StatusReport::fetch_failed(err.kind.to_string())
        }
    }
}

async fn run_poll_loop(
    fetcher: Arc<dyn PageFetcher>,
    parser: Arc<dyn StatusParser>,
    registry: SharedRegistry,
    config: Arc<PollConfig>,
    sink: Arc<dyn CycleSink>,
    concurrency: usize,
) {
    let mut cycle: u64 = 0;
    loop {
        cycle += 1;
        tracker_logging::set_poll_cycle(cycle);

        let snapshot = registry.snapshot();
        tracker_debug!("Cycle {}: polling {} profiles", cycle, snapshot.len());
        let results =
            run_poll_cycle(fetcher.as_ref(), parser.as_ref(), &snapshot, concurrency).await;
        sink.publish(CycleOutcome { cycle, results });

        // Interval is read here, once, at sleep start.
        tokio::time::sleep(config.interval()).await;
    }
}

/// Owns the background polling thread and is the configuration surface for
/// the rest of the program. The loop runs for the process lifetime; there is
/// no stop operation.
pub struct TrackerHandle {
    registry: SharedRegistry,
    config: Arc<PollConfig>,
    resolver: ProfileResolver,
    event_rx: mpsc::Receiver<TrackerEvent>,
}

impl TrackerHandle {
    pub fn new(settings: TrackerSettings) -> Self {
        Self::with_registry(settings, Registry::new())
    }

    /// Starts polling a pre-populated registry, e.g. one loaded from the
    /// profiles file.
    pub fn with_registry(settings: TrackerSettings, registry: Registry) -> Self {
        let (event_tx, event_rx) = mpsc::channel();
        let shared = SharedRegistry::new(registry);
        let config = Arc::new(PollConfig::new(settings.interval));

        let fetcher: Arc<dyn PageFetcher> = Arc::new(ReqwestFetcher::new(settings.fetch));
        let parser: Arc<dyn StatusParser> = Arc::new(SteamStatusParser::new(settings.vocabulary));
        let sink: Arc<dyn CycleSink> = Arc::new(ChannelCycleSink::new(event_tx));

        {
            let registry = shared.clone();
            let config = config.clone();
            let concurrency = settings.fetch_concurrency;
            thread::spawn(move || {
                let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
                runtime.block_on(run_poll_loop(
                    fetcher,
                    parser,
                    registry,
                    config,
                    sink,
                    concurrency,
                ));
            });
        }

        tracker_info!("Polling started");
        Self {
            registry: shared,
            config,
            resolver: settings.resolver,
            event_rx,
        }
    }

    /// Resolves and tracks a new profile. The entry joins the poll set at
    /// the next cycle boundary.
    pub fn add_profile(&self, raw: &str) -> Result<ProfileReference, AddProfileError> {
        let reference = self.resolver.resolve(raw)?;
        if self.registry.add(reference.clone()) {
            tracker_info!("Now tracking {}", reference);
            Ok(reference)
        } else {
            Err(AddProfileError::AlreadyTracked)
        }
    }

    /// Takes effect after the sleep currently pending, never mid-sleep.
    pub fn set_interval(&self, interval: NonZeroU64) {
        self.config.set_interval(interval);
        tracker_info!("Poll interval set to {}s", interval);
    }

    pub fn tracked(&self) -> Vec<ProfileReference> {
        self.registry.snapshot()
    }

    /// Current membership in persistence form, one address per line.
    pub fn dump_lines(&self) -> String {
        self.registry.dump_lines()
    }

    pub fn try_recv(&self) -> Option<TrackerEvent> {
        self.event_rx.try_recv().ok()
    }
}
