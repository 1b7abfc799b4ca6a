use std::fs;
use std::io;
use std::path::Path;

use ac_core::settings::{parse_config_toml, Config, ConfigError};
use autocomplete::{AutocompleteError, TrieAutocompleteService};

use crate::vocabulary::{default_vocabulary, load_vocabulary, VocabularyError};

#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("{path}: {source}")]
    Io { path: String, source: io::Error },
    #[error("{path}: {source}")]
    Config { path: String, source: ConfigError },
    #[error("{path}: {source}")]
    Vocabulary {
        path: String,
        source: VocabularyError,
    },
    #[error(transparent)]
    Service(#[from] AutocompleteError),
}

/// Default config, or the TOML file at `path`.
pub fn load_config(path: Option<&Path>) -> Result<Config, SetupError> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let content = fs::read_to_string(path).map_err(|source| SetupError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_config_toml(&content).map_err(|source| SetupError::Config {
        path: path.display().to_string(),
        source,
    })
}

/// Build a service seeded from `vocab` (or the built-in demo vocabulary).
pub fn build_service(
    config_path: Option<&Path>,
    vocab: Option<&Path>,
) -> Result<TrieAutocompleteService, SetupError> {
    let config = load_config(config_path)?;
    let words = match vocab {
        Some(path) => load_vocabulary(path).map_err(|source| SetupError::Vocabulary {
            path: path.display().to_string(),
            source,
        })?,
        None => default_vocabulary(),
    };
    Ok(TrieAutocompleteService::with_vocabulary(config, words)?)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use autocomplete::AutocompleteService;

    use super::*;

    #[test]
    fn test_build_with_defaults() {
        let svc = build_service(None, None).unwrap();
        assert_eq!(svc.len().unwrap(), 10);
        let r = svc.search("ele", 3).unwrap();
        assert_eq!(r[0].word, "element");
    }

    #[test]
    fn test_build_with_files() {
        let mut cfg = tempfile::NamedTempFile::new().unwrap();
        write!(
            cfg,
            "{}",
            ac_core::settings::default_toml().replace("max_results = 10", "max_results = 2")
        )
        .unwrap();
        let mut vocab = tempfile::NamedTempFile::new().unwrap();
        writeln!(vocab, "rust 1.0\nruby 0.5\nrune 0.1").unwrap();

        let svc = build_service(Some(cfg.path()), Some(vocab.path())).unwrap();
        assert_eq!(svc.config().search.max_results, 2);
        let r = svc.search_default("ru").unwrap();
        assert_eq!(r.len(), 2);
        assert_eq!(r[0].word, "rust");
    }

    #[test]
    fn test_bad_config_reports_path() {
        let mut cfg = tempfile::NamedTempFile::new().unwrap();
        write!(cfg, "[cache]\ncapacity = 0\n").unwrap();
        let err = build_service(Some(cfg.path()), None).err().unwrap();
        assert!(matches!(err, SetupError::Config { .. }));
        assert!(err.to_string().contains(&cfg.path().display().to_string()));
    }
}
