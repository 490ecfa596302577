use miette::Diagnostic;
use thiserror::Error;

/// Main error type for grimoire operations
#[derive(Error, Diagnostic, Debug)]
pub enum GrimoireError {
    #[error("IO error: {0}")]
    #[diagnostic(code(grimoire::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(grimoire::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Unsupported input: {message}")]
    #[diagnostic(code(grimoire::input))]
    Input {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("CSV error: {0}")]
    #[diagnostic(code(grimoire::csv))]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    #[diagnostic(code(grimoire::json))]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GrimoireError>;
