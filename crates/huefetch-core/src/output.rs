//! Result file: one `url;r,g,b;r,g,b;r,g,b` line per processed URL.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::extract::Palette;

/// Record for one successfully processed URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultLine {
    pub url: String,
    pub palette: Palette,
}

impl fmt::Display for ResultLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{}", self.url, self.palette)
    }
}

/// Append-only writer for result lines. Buffered; the buffer is flushed by
/// [`ResultWriter::finish`] and, on early exit, when the writer is dropped.
pub struct ResultWriter<W: Write> {
    inner: W,
    lines: u64,
}

impl ResultWriter<BufWriter<File>> {
    /// Create (or truncate) the result file.
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> ResultWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, lines: 0 }
    }

    pub fn write_line(&mut self, line: &ResultLine) -> io::Result<()> {
        writeln!(self.inner, "{}", line)?;
        self.lines += 1;
        Ok(())
    }

    pub fn lines_written(&self) -> u64 {
        self.lines
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::Rgb;

    fn line(url: &str) -> ResultLine {
        ResultLine {
            url: url.to_string(),
            palette: Palette::new([Rgb::new(12, 34, 56), Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]),
        }
    }

    #[test]
    fn formats_semicolon_delimited_triples() {
        assert_eq!(
            line("http://a/img1.jpg").to_string(),
            "http://a/img1.jpg;12,34,56;0,0,0;255,255,255"
        );
    }

    #[test]
    fn writes_lines_in_call_order() {
        let mut w = ResultWriter::new(Vec::new());
        w.write_line(&line("http://a/1")).unwrap();
        w.write_line(&line("http://a/2")).unwrap();
        assert_eq!(w.lines_written(), 2);
        let out = String::from_utf8(w.finish().unwrap()).unwrap();
        let urls: Vec<&str> = out.lines().map(|l| l.split(';').next().unwrap()).collect();
        assert_eq!(urls, ["http://a/1", "http://a/2"]);
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn dropped_writer_still_flushes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.csv");
        {
            let mut w = ResultWriter::create(&path).unwrap();
            w.write_line(&line("http://a/1")).unwrap();
        }
        let out = std::fs::read_to_string(&path).unwrap();
        assert_eq!(out, "http://a/1;12,34,56;0,0,0;255,255,255\n");
    }

    #[test]
    fn create_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.csv");
        std::fs::write(&path, "stale\n").unwrap();
        ResultWriter::create(&path).unwrap().finish().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }
}
