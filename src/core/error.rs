//! Typed failure taxonomy for the assembly pipeline.
//!
//! Every kind is fatal: the tool generates build-time documents, and a
//! partially-wrong document is worse than a hard stop. The core never logs
//! and never exits; callers decide what to do with these values.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AssembleError {
    /// Marker config missing or unreadable
    #[error("failed to read marker config {path}: {source}")]
    ConfigLoad {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Marker config present but not valid YAML
    #[error("malformed marker config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to open manifest {path}: {source}")]
    ManifestOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read manifest {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to open output {path}: {source}")]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No configured marker covers this extension
    #[error("no marker configured for `{extension}`; edit the marker config")]
    MarkerNotFound { extension: String },

    #[error("failed to open source file {path}: {source}")]
    SourceOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read source line: {0}")]
    SourceRead(#[source] io::Error),

    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),
}
