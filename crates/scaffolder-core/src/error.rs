//! Error types for scaffolding operations

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures that abort a scaffolding run
///
/// User cancellation is not an error: it is reported through
/// [`Outcome::Cancelled`](crate::flow::Outcome::Cancelled).
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Template '{id}' not found (expected directory {dir})")]
    TemplateNotFound { id: String, dir: PathBuf },

    #[error("'{0}' is not a known template")]
    UnknownTemplate(String),

    #[error("Failed to {action} {path}")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse manifest {path}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Manifest {path} is not a JSON object")]
    ManifestNotObject { path: PathBuf },

    #[error("Prompt failed")]
    Prompt(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Build a `map_err` adapter that attaches an action and path to an I/O error
pub(crate) fn io_error(action: &'static str, path: &Path) -> impl FnOnce(io::Error) -> ScaffoldError {
    let path = path.to_path_buf();
    move |source| ScaffoldError::Io {
        action,
        path,
        source,
    }
}
