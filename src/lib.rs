//! **narrative** - Literate-programming document assembler
//!
//! Reads an ordered manifest of source files, lifts the prose out of
//! comment-delimited regions, inverts the surrounding code into indented
//! markdown blocks, and appends everything to one combined document.

/// Command-line interface with clap integration
pub mod cli;

/// Shell completion generation
pub mod completion;

/// Core pipeline - marker lookup, extraction state machine, manifest loop
pub mod core {
    /// Typed error taxonomy shared across the pipeline
    pub mod error;
    pub use error::AssembleError;

    /// Per-extension prose delimiter registry
    pub mod markers;
    pub use markers::{Marker, MarkerRegistry};

    /// Line-oriented prose/code extraction state machine
    pub mod engine;
    pub use engine::weave;

    /// Manifest-driven assembly into one output document
    pub mod assemble;
    pub use assemble::run as assemble_run;
}

/// Infrastructure - marker-config scaffolding
pub mod infra {
    /// Starter narrative.yaml generation
    pub mod config;
    pub use config::{default_registry, init as config_init};
}

// Strategic re-exports for clean CLI interface
pub use cli::{AppContext, Cli, Commands};
pub use core::{AssembleError, Marker, MarkerRegistry, assemble_run, weave};
