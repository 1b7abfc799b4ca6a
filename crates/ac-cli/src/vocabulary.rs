//! Seed vocabulary files: one `word<whitespace>score` pair per line.
//!
//! Blank lines and lines starting with `#` are skipped.

use std::fs;
use std::io;
use std::path::Path;

pub const DEFAULT_VOCABULARY: &str = include_str!("default_vocabulary.tsv");

#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

pub fn parse_vocabulary(text: &str) -> Result<Vec<(String, f64)>, VocabularyError> {
    let mut words = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let parse_err = |reason: String| VocabularyError::Parse {
            line: idx + 1,
            reason,
        };
        let Some((word, score)) = line.rsplit_once(char::is_whitespace) else {
            return Err(parse_err("expected `word score`".to_string()));
        };
        let score: f64 = score
            .parse()
            .map_err(|_| parse_err(format!("invalid score {score:?}")))?;
        if !score.is_finite() {
            return Err(parse_err(format!("score must be finite, got {score}")));
        }
        words.push((word.trim().to_string(), score));
    }
    Ok(words)
}

pub fn load_vocabulary(path: &Path) -> Result<Vec<(String, f64)>, VocabularyError> {
    let text = fs::read_to_string(path)?;
    parse_vocabulary(&text)
}

pub fn default_vocabulary() -> Vec<(String, f64)> {
    parse_vocabulary(DEFAULT_VOCABULARY).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_vocabulary() {
        let words = parse_vocabulary(DEFAULT_VOCABULARY).unwrap();
        assert_eq!(words.len(), 10);
        assert_eq!(words[0], ("elastic".to_string(), 1.0));
        assert_eq!(default_vocabulary().len(), 10);
    }

    #[test]
    fn test_skips_comments_and_blank_lines() {
        let words = parse_vocabulary("# header\n\nfoo 0.5\n  \nbar\t2\n").unwrap();
        assert_eq!(
            words,
            vec![("foo".to_string(), 0.5), ("bar".to_string(), 2.0)]
        );
    }

    #[test]
    fn test_multi_word_entry_keeps_inner_space() {
        let words = parse_vocabulary("new york 0.9\n").unwrap();
        assert_eq!(words, vec![("new york".to_string(), 0.9)]);
    }

    #[test]
    fn test_missing_score() {
        let err = parse_vocabulary("ok 1.0\nlonely\n").unwrap_err();
        assert!(err.to_string().starts_with("line 2"));
    }

    #[test]
    fn test_bad_score() {
        let err = parse_vocabulary("word abc\n").unwrap_err();
        assert!(err.to_string().contains("invalid score"));
        let err = parse_vocabulary("word NaN\n").unwrap_err();
        assert!(err.to_string().contains("finite"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "alpha\t0.1").unwrap();
        writeln!(file, "beta\t0.2").unwrap();
        let words = load_vocabulary(file.path()).unwrap();
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_vocabulary(Path::new("/nonexistent/vocab.tsv")).unwrap_err();
        assert!(matches!(err, VocabularyError::Io(_)));
    }
}
