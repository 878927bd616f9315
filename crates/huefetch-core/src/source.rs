//! URL list reader.
//!
//! Yields one entry per input line, in file order, with the line terminator
//! and surrounding whitespace stripped. Blank lines are forwarded as-is; deciding what to do with them is
//! up to the pipeline.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// One input line and its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlEntry {
    pub ordinal: usize,
    pub url: String,
}

impl UrlEntry {
    pub fn new(ordinal: usize, url: impl Into<String>) -> Self {
        Self {
            ordinal,
            url: url.into(),
        }
    }

    /// True for empty or whitespace-only lines.
    pub fn is_blank(&self) -> bool {
        self.url.trim().is_empty()
    }
}

/// Lazy, single-pass sequence of [`UrlEntry`] over a buffered reader.
pub struct UrlSource<R> {
    lines: io::Lines<R>,
    ordinal: usize,
}

impl UrlSource<BufReader<File>> {
    /// Open a URL list file. The handle is closed when the source is dropped.
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> UrlSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            ordinal: 0,
        }
    }
}

impl<R: BufRead> Iterator for UrlSource<R> {
    type Item = io::Result<UrlEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        self.ordinal += 1;
        Some(line.map(|url| UrlEntry::new(self.ordinal, url.trim())))
    }
}
