//! Run-level error taxonomy.
//!
//! A non-200 response is not an error (see `pipeline::Outcome::Missed`); every
//! variant here aborts the whole run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::extract::ExtractError;
use crate::fetch::FetchError;
use crate::persist::PersistError;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// Opening the URL list, creating the result file or the image directory failed.
    #[error("{what}: {}", path.display())]
    Setup {
        what: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Reading a line from the URL list failed.
    #[error("failed to read URL list")]
    Source(#[source] io::Error),
    /// Network-level failure (DNS, connect, TLS, malformed URL).
    #[error(transparent)]
    Transport(#[from] FetchError),
    /// The fetched bytes could not be decoded or quantized.
    #[error("failed to extract palette from {url}")]
    Extract {
        url: String,
        #[source]
        source: ExtractError,
    },
    /// Raw image or swatch could not be saved.
    #[error(transparent)]
    Persist(#[from] PersistError),
    /// A result line could not be written or flushed.
    #[error("failed to write result file")]
    Write(#[source] io::Error),
}
