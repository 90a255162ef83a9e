//! CLI failures and their exit codes.
//!
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: the color engine rejected the input (bad hex, zero samples)
//! - 11: a file could not be read or written (request file, PNG)
//! - 12: the invocation is unusable (malformed request file, empty `--spaces`)
//! - 13: JSON output could not be produced

use huepath_core::ColorError;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error("cannot read request file {}: {source}", .path.display())]
    ReadRequest { path: PathBuf, source: io::Error },

    #[error("cannot write {}: {reason}", .path.display())]
    WritePng { path: PathBuf, reason: String },

    #[error("invalid request file {}: {source}", .path.display())]
    MalformedRequest {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("--spaces needs at least one color space")]
    NoSpaces,

    #[error("cannot serialize output: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    /// Wraps a failure from the PNG writer. I/O failures name the output
    /// path; anything else is the engine's.
    pub fn png_write(path: &Path, err: ColorError) -> Self {
        match err {
            ColorError::Io(reason) => CliError::WritePng {
                path: path.to_path_buf(),
                reason,
            },
            other => CliError::Color(other),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Color(_) => 10,
            CliError::ReadRequest { .. } | CliError::WritePng { .. } => 11,
            CliError::MalformedRequest { .. } | CliError::NoSpaces => 12,
            CliError::Serialization(_) => 13,
        }
    }
}
