use miette::Diagnostic;
use thiserror::Error;

/// Main error type for chromatext operations
#[derive(Error, Diagnostic, Debug)]
pub enum ChromaError {
    #[error("IO error: {0}")]
    #[diagnostic(code(chromatext::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(chromatext::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Invalid hex colour: {value}")]
    #[diagnostic(code(chromatext::hex))]
    InvalidHex {
        value: String,
        #[help]
        help: Option<String>,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(chromatext::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Usage error: {message}")]
    #[diagnostic(code(chromatext::usage))]
    Usage {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Legacy palette has no entries")]
    #[diagnostic(
        code(chromatext::palette),
        help("A palette needs at least one entry to quantize against")
    )]
    EmptyPalette,
}

pub type Result<T> = std::result::Result<T, ChromaError>;
