// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VibelintError {
    #[error("I/O error: {source} (path: {})", path.display())]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
}

pub type Result<T> = std::result::Result<T, VibelintError>;
