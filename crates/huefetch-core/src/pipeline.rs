//! Per-URL processing and the sequential batch loop.
//!
//! Each URL goes fetch → decode → [save raw] → resize → quantize →
//! [save swatch] → write line → progress. A non-200 response skips the URL;
//! any [`PipelineError`] ends the run. Lines already written stay in the
//! result file because the writer flushes when dropped.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::HuefetchConfig;
use crate::error::PipelineError;
use crate::extract;
use crate::fetch::{Fetch, FetchOutcome};
use crate::output::{ResultLine, ResultWriter};
use crate::persist;
use crate::progress::ProgressReporter;
use crate::source::{UrlEntry, UrlSource};

/// Knobs for one run, derived from config plus the `save` mode.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Downsample before quantizing.
    pub resize: bool,
    /// When set, raw images and swatches are written here.
    pub image_dir: Option<PathBuf>,
    pub skip_blank_lines: bool,
    /// Batch size for throughput logging; 0 disables it.
    pub report_every: u64,
}

impl PipelineOptions {
    pub fn from_config(cfg: &HuefetchConfig, save_images: bool) -> Self {
        Self {
            resize: cfg.resize,
            image_dir: save_images.then(|| cfg.image_dir.clone()),
            skip_blank_lines: cfg.skip_blank_lines,
            report_every: cfg.report_every,
        }
    }
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self::from_config(&HuefetchConfig::default(), false)
    }
}

/// What happened to one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Written(ResultLine),
    /// Server answered with a status other than 200.
    Missed { status: u32 },
    /// Blank line skipped without a request.
    Blank,
}

/// Counts for a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub lines_read: u64,
    pub written: u64,
    pub missed: u64,
    pub blank: u64,
    /// Throughput batches logged by the progress reporter.
    pub batches_reported: u64,
}

pub struct Pipeline<F, W: Write> {
    fetcher: F,
    writer: ResultWriter<W>,
    reporter: ProgressReporter,
    options: PipelineOptions,
}

impl<F: Fetch, W: Write> Pipeline<F, W> {
    pub fn new(fetcher: F, writer: ResultWriter<W>, options: PipelineOptions) -> Self {
        Self {
            fetcher,
            writer,
            reporter: ProgressReporter::new(options.report_every),
            options,
        }
    }

    pub fn batches_reported(&self) -> u64 {
        self.reporter.batches_reported()
    }

    /// Process a single input line.
    pub fn process(&mut self, entry: &UrlEntry) -> Result<Outcome, PipelineError> {
        if self.options.skip_blank_lines && entry.is_blank() {
            tracing::debug!(line = entry.ordinal, "skipping blank line");
            return Ok(Outcome::Blank);
        }

        let bytes = match self.fetcher.fetch(&entry.url)? {
            FetchOutcome::Fetched(bytes) => bytes,
            FetchOutcome::Missed { status } => {
                println!("Missed image: {}", entry.url);
                tracing::warn!(url = %entry.url, status, "missed image");
                return Ok(Outcome::Missed { status });
            }
        };

        let extract_err = |source: extract::ExtractError| PipelineError::Extract {
            url: entry.url.clone(),
            source,
        };
        let img = extract::decode(&bytes).map_err(extract_err)?;

        let paths = self
            .options
            .image_dir
            .as_deref()
            .map(|dir| persist::image_paths(dir, entry.ordinal));
        if let Some(paths) = &paths {
            persist::save_raw(&paths.raw, &bytes)?;
        }
        drop(bytes);

        let palette =
            extract::palette_of(&extract::prepare(img, self.options.resize)).map_err(extract_err)?;
        if let Some(paths) = &paths {
            persist::save_swatch(&paths.colors, &palette)?;
        }

        let line = ResultLine {
            url: entry.url.clone(),
            palette,
        };
        self.writer.write_line(&line).map_err(PipelineError::Write)?;
        self.reporter.record_success();
        Ok(Outcome::Written(line))
    }

    /// Process every entry in order, stopping at the first error.
    /// Returns the summary and the flushed underlying writer.
    pub fn run<I>(mut self, entries: I) -> Result<(RunSummary, W), PipelineError>
    where
        I: IntoIterator<Item = io::Result<UrlEntry>>,
    {
        let mut summary = RunSummary::default();
        for entry in entries {
            let entry = entry.map_err(PipelineError::Source)?;
            summary.lines_read += 1;
            match self.process(&entry)? {
                Outcome::Written(_) => {}
                Outcome::Missed { .. } => summary.missed += 1,
                Outcome::Blank => summary.blank += 1,
            }
        }
        summary.written = self.writer.lines_written();
        summary.batches_reported = self.reporter.batches_reported();
        let inner = self.writer.finish().map_err(PipelineError::Write)?;
        tracing::info!(
            lines = summary.lines_read,
            written = summary.written,
            missed = summary.missed,
            blank = summary.blank,
            batches = summary.batches_reported,
            "run finished"
        );
        Ok((summary, inner))
    }
}

/// Open the URL list, create the result file (and image dir when saving) and run.
pub fn run_batch<F: Fetch>(
    cfg: &HuefetchConfig,
    save_images: bool,
    fetcher: F,
) -> Result<RunSummary, PipelineError> {
    let source = UrlSource::open(&cfg.input_path).map_err(|source| PipelineError::Setup {
        what: "failed to open URL list",
        path: cfg.input_path.clone(),
        source,
    })?;
    let writer = ResultWriter::create(&cfg.output_path).map_err(|source| PipelineError::Setup {
        what: "failed to create result file",
        path: cfg.output_path.clone(),
        source,
    })?;
    if save_images {
        fs::create_dir_all(&cfg.image_dir).map_err(|source| PipelineError::Setup {
            what: "failed to create image directory",
            path: cfg.image_dir.clone(),
            source,
        })?;
    }

    tracing::info!(
        input = %cfg.input_path.display(),
        output = %cfg.output_path.display(),
        save_images,
        resize = cfg.resize,
        "starting run"
    );
    let options = PipelineOptions::from_config(cfg, save_images);
    let (summary, _) = Pipeline::new(fetcher, writer, options).run(source)?;
    Ok(summary)
}
