//! Background thread that prunes the engine on a fixed cadence.
//!
//! The engine never schedules its own cleanup; this is the caller-side
//! schedule used by the REPL.

use std::io;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{mpsc, Arc};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use autocomplete::TrieAutocompleteService;
use tracing::{debug, warn};

pub struct CleanupWorker {
    stop_tx: Option<mpsc::Sender<()>>,
    handle: Option<JoinHandle<()>>,
    runs: Arc<AtomicU64>,
}

impl CleanupWorker {
    /// Run `cleanup_default()` every `interval` until stopped or dropped.
    pub fn spawn(service: Arc<TrieAutocompleteService>, interval: Duration) -> io::Result<Self> {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let runs = Arc::new(AtomicU64::new(0));
        let handle = {
            let runs = Arc::clone(&runs);
            thread::Builder::new()
                .name("autocomplete-cleanup".into())
                .spawn(move || cleanup_loop(stop_rx, service, interval, runs))?
        };
        Ok(Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
            runs,
        })
    }

    /// Completed cleanup passes so far.
    pub fn runs(&self) -> u64 {
        self.runs.load(Ordering::SeqCst)
    }

    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        // Dropping the sender wakes the worker with `Disconnected`.
        self.stop_tx.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for CleanupWorker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn cleanup_loop(
    stop_rx: mpsc::Receiver<()>,
    service: Arc<TrieAutocompleteService>,
    interval: Duration,
    runs: Arc<AtomicU64>,
) {
    loop {
        match stop_rx.recv_timeout(interval) {
            Err(mpsc::RecvTimeoutError::Timeout) => {
                match service.cleanup_default() {
                    Ok(removed) => debug!(removed, "periodic cleanup"),
                    Err(e) => warn!(error = %e, "periodic cleanup failed"),
                }
                runs.fetch_add(1, Ordering::SeqCst);
            }
            Ok(()) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }
}
