use std::io;
use std::path::Path;
use std::sync::Arc;

use crate::cleanup_worker::CleanupWorker;
use crate::die;
use crate::repl;
use crate::setup::build_service;

pub fn repl(config: Option<&Path>, vocab: Option<&Path>, background_cleanup: bool) {
    let svc = Arc::new(die!(build_service(config, vocab), "Error: {}"));
    let worker = if background_cleanup {
        let interval = svc.config().cleanup_interval();
        Some(die!(
            CleanupWorker::spawn(Arc::clone(&svc), interval),
            "Error starting cleanup worker: {}"
        ))
    } else {
        None
    };

    eprintln!(
        "{} words loaded. Type a prefix, or :help.",
        svc.len().unwrap_or_default()
    );
    let stdin = io::stdin();
    let stdout = io::stdout();
    die!(repl::run(&svc, stdin.lock(), stdout.lock()), "Error: {}");

    if let Some(worker) = worker {
        worker.stop();
    }
}
