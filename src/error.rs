//! Error types for a wordfreq run.
//!
//! Only the input side can fail: opening or reading the text, or loading
//! report files in `--zipf` mode. Normalizing, counting and ranking are total.
use std::io;
use std::path::PathBuf;

/// Failure to obtain text from the input source.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The named file could not be opened.
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading failed partway through the stream.
    #[error("error reading {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: io::Error,
    },
}

/// Failure to load or summarize a previously written report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("cannot read report {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}:{line}: malformed report line: {text:?}", path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        text: String,
    },

    #[error("{}: need at least two entries, found {found}", path.display())]
    TooFewEntries { path: PathBuf, found: usize },
}

/// Top-level error for one invocation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("cannot write output: {0}")]
    Output(#[source] io::Error),

    #[error("cannot encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// True when stdout was closed by the reader (e.g. `wordfreq | head`).
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            Error::Output(e) => e.kind() == io::ErrorKind::BrokenPipe,
            Error::Json(e) => e.io_error_kind() == Some(io::ErrorKind::BrokenPipe),
            _ => false,
        }
    }
}
