use std::sync::Arc;
use std::thread;
use std::time::Duration;

use autocomplete::{AutocompleteError, AutocompleteService, Config, TrieAutocompleteService};

fn words(results: &[autocomplete::Suggestion]) -> Vec<&str> {
    results.iter().map(|s| s.word.as_str()).collect()
}

fn default_service() -> TrieAutocompleteService {
    TrieAutocompleteService::with_vocabulary(
        Config::default(),
        [("elastic", 1.0), ("elephant", 0.3)],
    )
    .unwrap()
}

#[test]
fn test_default_scenario() {
    let svc = default_service();
    let el = svc.search("el", 5).unwrap();
    assert_eq!(words(&el), vec!["elastic", "elephant"]);
    assert!(svc.search("xyz", 5).unwrap().is_empty());
    assert!(svc.search("", 5).unwrap().is_empty());
}

#[test]
fn test_invalid_config_is_construction_error() {
    let mut config = Config::default();
    config.cache.capacity = 0;
    let err = TrieAutocompleteService::new(config).err().unwrap();
    assert!(matches!(err, AutocompleteError::InvalidConfig(_)));
    assert!(err.to_string().contains("cache.capacity"));
}

#[test]
fn test_add_word_then_search() {
    let svc = TrieAutocompleteService::new(Config::default()).unwrap();
    assert!(svc.is_empty().unwrap());
    svc.add_word("Elastic", 1.0).unwrap();
    let r = svc.search("ELA", 5).unwrap();
    assert_eq!(words(&r), vec!["elastic"]);
    assert_eq!(svc.len().unwrap(), 1);
}

#[test]
fn test_record_selection_unknown_word_is_ok() {
    let svc = default_service();
    svc.record_selection("zebra").unwrap();
    svc.record_selection("ela").unwrap();
    let s = svc.lookup("elastic").unwrap().unwrap();
    assert_eq!(s.frequency, 0);
}

#[test]
fn test_record_selection_reorders() {
    let svc = default_service();
    svc.record_selection("elephant").unwrap();
    let r = svc.search("el", 5).unwrap();
    assert_eq!(words(&r), vec!["elephant", "elastic"]);
    assert_eq!(r[0].frequency, 1);
    assert!(r[0].last_used > 0);
}

#[test]
fn test_search_default_uses_max_results() {
    let mut config = Config::default();
    config.search.max_results = 1;
    let svc =
        TrieAutocompleteService::with_vocabulary(config, [("ab", 1.0), ("ac", 2.0)]).unwrap();
    let r = svc.search_default("a").unwrap();
    assert_eq!(words(&r), vec!["ac"]);
}

#[test]
fn test_cleanup_keeps_unused_words() {
    let svc = default_service();
    svc.cleanup(Duration::from_secs(1)).unwrap();
    assert_eq!(svc.cleanup_default().unwrap(), 0);
    assert_eq!(svc.len().unwrap(), 2);
}

#[test]
fn test_cleanup_prunes_stale_selection() {
    let svc = default_service();
    svc.record_selection("elastic").unwrap();
    // zero age: anything used at least one second ago is stale
    thread::sleep(Duration::from_millis(1100));
    assert!(svc.prune(Duration::ZERO).unwrap() > 0);
    let r = svc.search("el", 5).unwrap();
    assert_eq!(words(&r), vec!["elephant"]);
}

#[test]
fn test_usable_as_trait_object_across_threads() {
    let svc: Arc<dyn AutocompleteService> = Arc::new(default_service());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let svc = Arc::clone(&svc);
            thread::spawn(move || {
                for j in 0..50 {
                    svc.add_word(&format!("el{i}x{j}"), 0.01).unwrap();
                    let r = svc.search("el", 3).unwrap();
                    assert!(r.len() <= 3);
                    svc.record_selection("elastic").unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let r = svc.search("elastic", 1).unwrap();
    assert_eq!(r[0].frequency, 200);
    let all = svc.search("el", 1000).unwrap();
    assert_eq!(all.len(), 2 + 4 * 50);
}

#[test]
fn test_engine_version() {
    assert!(!autocomplete::engine_version().is_empty());
}
