//! Render errors.

use thiserror::Error;

/// Errors raised while writing a page.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Shell not written before sections")]
    ShellNotWritten,

    #[error("Shell already written")]
    ShellAlreadyWritten,

    #[error("Page already finished")]
    AlreadyFinished,

    #[error("Write error: {0}")]
    Io(#[from] std::io::Error),
}
