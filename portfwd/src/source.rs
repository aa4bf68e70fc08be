mod test;

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use crate::{Error, Result};

/// Path that makes [`Source::File`] read stdin.
pub const STDIN_PATH: &str = "-";

/// Where the source addresses of the rules come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Comma separated list, e.g. `10.0.0.1,10.1.0.0/16`.
    Inline(String),
    /// One address per line. `-` reads stdin.
    File(PathBuf),
}

impl Source {
    /// Resolves the raw, not yet validated, source addresses.
    pub fn addresses(&self) -> Result<Vec<String>> {
        let addresses = match self {
            Source::Inline(list) => from_inline(list),
            Source::File(path) => from_path(path)?,
        };
        if addresses.is_empty() {
            tracing::warn!(source = ?self, "No source addresses, nothing to generate");
        }
        Ok(addresses)
    }
}

/// Splits a comma separated list, trimming every entry.
///
/// Empty entries are kept so they fail validation instead of being silently dropped.
pub fn from_inline(list: &str) -> Vec<String> {
    list.split(',').map(|s| s.trim().to_string()).collect()
}

/// Reads one address per line. Blank lines and `#` comments are skipped.
pub fn from_reader(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut addresses = Vec::new();
    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            tracing::trace!(line = n + 1, "Skipping line");
            continue;
        }
        addresses.push(line.to_string());
    }
    Ok(addresses)
}

/// Reads addresses from the file at `path`, or from stdin if `path` is `-`.
pub fn from_path(path: &Path) -> Result<Vec<String>> {
    from_path_or(path, || io::stdin().lock())
}

// `stdin` is only opened when `path` is `-`.
fn from_path_or<R: BufRead>(path: &Path, stdin: impl FnOnce() -> R) -> Result<Vec<String>> {
    let read = || -> io::Result<Vec<String>> {
        if path == Path::new(STDIN_PATH) {
            from_reader(stdin())
        } else {
            from_reader(BufReader::new(File::open(path)?))
        }
    };
    read().map_err(|source| Error::SourceFile {
        path: path.to_path_buf(),
        source,
    })
}
