//! Marker registry: which comment delimiters bound prose in which file type.
//!
//! Loaded once per run from a YAML document shaped like:
//!
//! ```yaml
//! Marker:
//!   - Ext: [go, rs, tf]
//!     Start: "/*"
//!     End: "*/"
//!   - Ext: [md, markdown]
//!     Start: ""
//!     End: ""
//! ```
//!
//! Empty `Start`/`End` means the file type is already prose and should be
//! passed through untouched.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::AssembleError;

/// One file type's prose-region definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    /// Extensions this marker covers, without the leading dot
    #[serde(rename = "Ext")]
    pub ext: Vec<String>,

    /// Line that opens a prose region
    #[serde(rename = "Start")]
    pub start: String,

    /// Line that closes a prose region
    #[serde(rename = "End")]
    pub end: String,
}

/// Ordered marker set, immutable after loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerRegistry {
    #[serde(rename = "Marker")]
    pub markers: Vec<Marker>,
}

impl MarkerRegistry {
    /// Load and deserialize the marker configuration document.
    pub fn load(path: &Path) -> Result<Self, AssembleError> {
        let raw = fs::read_to_string(path).map_err(|source| AssembleError::ConfigLoad {
            path: path.to_path_buf(),
            source,
        })?;

        serde_yaml::from_str(&raw).map_err(|source| AssembleError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Find the marker covering a lowercase, dot-prefixed extension
    /// (e.g. `.go`).
    ///
    /// Markers are scanned in registration order and the first declaration
    /// of an extension wins; the extension lists carry no ordering
    /// invariant. Matching is exact — no wildcards, no prefixes.
    pub fn lookup(&self, extension: &str) -> Result<&Marker, AssembleError> {
        // Anything shorter than ".x" cannot hold a dot plus a name
        let Some(sought) = extension.strip_prefix('.').filter(|s| !s.is_empty()) else {
            return Err(AssembleError::MarkerNotFound {
                extension: extension.to_string(),
            });
        };

        for marker in &self.markers {
            if marker.ext.iter().any(|e| e == sought) {
                return Ok(marker);
            }
        }

        Err(AssembleError::MarkerNotFound {
            extension: extension.to_string(),
        })
    }
}
