//! Dictionary loading and word normalization.
//!
//! A dictionary is a plain text file with one word per line. Words are trimmed,
//! blank lines dropped, and the remaining words case-folded to a canonical form.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Errors opening a word source.
#[derive(Debug, thiserror::Error)]
pub enum WordSourceError {
    #[error("cannot open dictionary {}: {source}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Canonical casing applied to every word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseFold {
    #[default]
    Upper,
    Lower,
    /// Keep the word as written (after trimming).
    Preserve,
}

impl CaseFold {
    pub fn apply(self, word: &str) -> String {
        match self {
            Self::Upper => word.to_uppercase(),
            Self::Lower => word.to_lowercase(),
            Self::Preserve => word.to_string(),
        }
    }
}

impl FromStr for CaseFold {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "upper" => Ok(Self::Upper),
            "lower" => Ok(Self::Lower),
            "preserve" => Ok(Self::Preserve),
            other => Err(format!(
                "unknown case fold '{}' (expected upper, lower, or preserve)",
                other
            )),
        }
    }
}

/// Trim and case-fold a raw word. Returns None for blank input.
pub fn normalize(raw: &str, fold: CaseFold) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(fold.apply(trimmed))
    }
}

/// Lazy, deduplicated stream of normalized words read from a dictionary file.
///
/// Read failures partway through the file (I/O errors, invalid UTF-8) are
/// yielded as `Err` items rather than ending the stream silently.
pub struct WordStream {
    lines: Lines<BufReader<File>>,
    fold: CaseFold,
    seen: HashSet<String>,
}

/// Open a dictionary file as a [`WordStream`].
pub fn open(path: &Path, fold: CaseFold) -> Result<WordStream, WordSourceError> {
    let file = File::open(path).map_err(|source| WordSourceError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("opened dictionary {}", path.display());
    Ok(WordStream {
        lines: BufReader::new(file).lines(),
        fold,
        seen: HashSet::new(),
    })
}

impl Iterator for WordStream {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e)),
            };
            let Some(word) = normalize(&line, self.fold) else {
                continue;
            };
            if self.seen.insert(word.clone()) {
                return Some(Ok(word));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_folds() {
        assert_eq!(normalize("  cat \t", CaseFold::Upper), Some("CAT".to_string()));
        assert_eq!(normalize("Cat", CaseFold::Lower), Some("cat".to_string()));
        assert_eq!(normalize(" Cat ", CaseFold::Preserve), Some("Cat".to_string()));
    }

    #[test]
    fn test_normalize_blank() {
        assert_eq!(normalize("", CaseFold::Upper), None);
        assert_eq!(normalize("   \t", CaseFold::Upper), None);
    }

    #[test]
    fn test_case_fold_from_str() {
        assert_eq!("upper".parse::<CaseFold>(), Ok(CaseFold::Upper));
        assert_eq!(" LOWER ".parse::<CaseFold>(), Ok(CaseFold::Lower));
        assert_eq!("preserve".parse::<CaseFold>(), Ok(CaseFold::Preserve));
        assert!("title".parse::<CaseFold>().is_err());
    }

    #[test]
    fn test_open_missing_file() {
        let err = open(Path::new("/nonexistent/words.txt"), CaseFold::Upper)
            .err()
            .expect("missing file should fail");
        assert!(matches!(err, WordSourceError::Unavailable { .. }));
        assert!(err.to_string().contains("/nonexistent/words.txt"));
    }

    #[test]
    fn test_stream_skips_blanks_and_duplicates() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("words.txt");
        std::fs::write(&path, "cat\n\n  rat  \nCAT\nhat\n   \nrat\n").unwrap();

        let words: Vec<String> = open(&path, CaseFold::Upper)
            .unwrap()
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(words, vec!["CAT", "RAT", "HAT"]);
    }

    #[test]
    fn test_stream_yields_error_on_invalid_utf8() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("words.txt");
        std::fs::write(&path, b"cat\n\xff\xfe\nrat\n").unwrap();

        let mut stream = open(&path, CaseFold::Upper).unwrap();
        assert_eq!(stream.next().unwrap().unwrap(), "CAT");
        assert!(stream.next().unwrap().is_err());
    }
}
