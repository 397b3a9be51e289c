use sqlx::Error as SqlxError;
use std::io;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("Database error: {0}")]
    Sqlx(#[from] SqlxError),

    #[error("Client exited with {status}: {stderr}")]
    Client { status: ExitStatus, stderr: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Unsupported connection URL: {0}")]
    UnsupportedUrl(String),
}
