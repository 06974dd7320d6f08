mod config;
mod logging;
mod texts;

use std::io::{self, BufRead};
use std::num::NonZeroU64;
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use tracker_core::Registry;
use tracker_engine::{
    load_profile_lines, save_profile_lines, CycleOutcome, TrackerEvent, TrackerHandle,
    TrackerSettings,
};
use tracker_logging::{tracker_error, tracker_info};

use crate::texts::Language;

const PROFILE_FILENAME: &str = "profiles.txt";

fn main() {
    logging::initialize(logging::LogDestination::Both);

    let config = config::load(Path::new(config::CONFIG_FILENAME));
    let language = config.language;

    let mut registry = Registry::new();
    let loaded = registry.load_lines(&load_profile_lines(Path::new(PROFILE_FILENAME)));
    tracker_info!("Loaded {} tracked profiles from {}", loaded, PROFILE_FILENAME);

    let settings = TrackerSettings {
        vocabulary: config.vocabulary(),
        interval: config.interval(),
        ..TrackerSettings::default()
    };
    let handle = TrackerHandle::with_registry(settings, registry);

    // Stdin is read on its own thread so user input never waits on a fetch.
    let (line_tx, line_rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });

    println!("Commands: add <id>, interval <secs>, list, quit");
    loop {
        while let Some(TrackerEvent::CycleCompleted(outcome)) = handle.try_recv() {
            render_cycle(&outcome, language);
        }

        match line_rx.try_recv() {
            Ok(line) => {
                if !dispatch(&handle, line.trim()) {
                    break;
                }
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => break,
        }

        thread::sleep(Duration::from_millis(50));
    }

    save_registry(&handle);
}

fn render_cycle(outcome: &CycleOutcome, language: Language) {
    let stamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    println!("--- cycle {} at {} ---", outcome.cycle, stamp);
    for status in &outcome.results {
        println!("{}", texts::status_line(&status.report, language));
    }
}

/// Handles one command line; returns false when the user asked to quit.
fn dispatch(handle: &TrackerHandle, line: &str) -> bool {
    let (command, rest) = match line.split_once(' ') {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "" => {}
        "quit" | "exit" => return false,
        "add" => match handle.add_profile(rest) {
            Ok(reference) => {
                println!("Tracking {reference}");
                save_registry(handle);
            }
            Err(err) => println!("Cannot add profile: {err}"),
        },
        "interval" => match rest.parse::<u64>().ok().and_then(NonZeroU64::new) {
            Some(interval) => {
                handle.set_interval(interval);
                println!("Interval set to {interval}s (from the next cycle)");
            }
            None => println!("Usage: interval <seconds>, seconds > 0"),
        },
        "list" => {
            for reference in handle.tracked() {
                println!("{reference}");
            }
        }
        _ => println!("Commands: add <id>, interval <secs>, list, quit"),
    }
    true
}

fn save_registry(handle: &TrackerHandle) {
    if let Err(err) = save_profile_lines(Path::new(PROFILE_FILENAME), &handle.dump_lines()) {
        tracker_error!("Failed to save {}: {}", PROFILE_FILENAME, err);
        println!("Warning: could not save the profile list: {err}");
    }
}
