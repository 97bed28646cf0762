use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use spot_core::{ErrorInfo, SpotError};
use walkdir::WalkDir;

/// Ordered symbol identifiers supplied by the caller.
///
/// Position in the pool defines the point index a symbol is assigned to.
/// The pool never removes duplicates; a repeated identifier shows up as a
/// duplicate-symbol diagnostic once the deck is mapped.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolPool {
    symbols: Vec<String>,
}

impl SymbolPool {
    /// Creates a pool from identifiers in the order given.
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symbols: symbols.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses a newline separated manifest, skipping blank lines and `#` comments.
    pub fn from_lines(text: &str) -> Self {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// Reads a manifest file with one identifier per line.
    pub fn from_manifest(path: &Path) -> Result<Self, SpotError> {
        let text = fs::read_to_string(path).map_err(|err| {
            SpotError::Io(
                ErrorInfo::new("pool-manifest-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        Ok(Self::from_lines(&text))
    }

    /// Lists the regular files directly inside `dir` by base name.
    ///
    /// Names are sorted so the same directory always yields the same pool.
    /// Hidden files are skipped. A name that is not valid UTF-8 is an error.
    pub fn from_dir(dir: &Path) -> Result<Self, SpotError> {
        let mut names = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|err| {
                SpotError::Io(
                    ErrorInfo::new("pool-dir-read", err.to_string())
                        .with_context("path", dir.display().to_string()),
                )
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                return Err(SpotError::Io(
                    ErrorInfo::new("pool-dir-non-utf8", "symbol file name is not valid UTF-8")
                        .with_context("path", entry.path().display().to_string())
                        .with_hint("rename the file so its name is valid UTF-8"),
                ));
            };
            if name.starts_with('.') {
                continue;
            }
            names.push(name);
        }
        names.sort();
        tracing::debug!(path = %dir.display(), symbols = names.len(), "loaded symbol directory");
        Ok(Self { symbols: names })
    }

    /// Loads a pool from a directory listing or a manifest file.
    pub fn from_path(path: &Path) -> Result<Self, SpotError> {
        if path.is_dir() {
            Self::from_dir(path)
        } else {
            Self::from_manifest(path)
        }
    }

    /// Returns the identifiers in pool order.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Returns the first `count` identifiers, or the whole pool if it is shorter.
    pub fn prefix(&self, count: usize) -> &[String] {
        &self.symbols[..count.min(self.symbols.len())]
    }

    /// Returns the number of identifiers.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns whether the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SymbolPool {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
