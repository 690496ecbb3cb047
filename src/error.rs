//! Error taxonomy for the embedded child.
//!
//! Every variant except [`ChildError::FrameSkipped`] is fatal: it is reported
//! through a modal dialog and the process exits with [`FATAL_EXIT_CODE`].

use thiserror::Error;

/// Process exit code for any bootstrap failure.
pub const FATAL_EXIT_CODE: u8 = 1;

/// Errors raised while bootstrapping or rendering the child window.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChildError {
    #[error("Unable to allocate console: {0}")]
    ConsoleUnavailable(String),
    #[error("Unable to parse command line: {0}")]
    CommandLine(String),
    #[error("Unable to parse command line")]
    MissingParentPid,
    #[error("Unable to find parent PID")]
    InvalidParentPid(String),
    #[error("Unable to find parent window with PID {pid}")]
    ParentWindowNotFound { class: String, pid: u32 },
    #[error("Unable to find parent window with PID {expected}")]
    ParentPidMismatch { expected: u32, actual: u32 },
    #[error("{0}")]
    WindowRect(String),
    #[error("Failed to initialize graphics: {0}")]
    GraphicsInit(String),
    #[error("Failed to create window: {0}")]
    WindowCreation(String),
    #[error("Failed to create graphics context: {0}")]
    ContextCreation(String),
    #[error("Unable to retrieve handle for created window: {0}")]
    NativeHandleUnavailable(String),
    #[error("Unable to retrieve handle for created window: unexpected windowing backend {0}")]
    UnexpectedWindowingBackend(String),
    #[error("{0}")]
    Reparent(String),
    #[error("Embedding into a native parent window is only supported on Windows")]
    UnsupportedPlatform,
    #[error("Frame skipped: {0}")]
    FrameSkipped(String),
}

impl ChildError {
    /// Whether the error ends the process.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::FrameSkipped(_))
    }

    /// Exit code reported to the launching process.
    pub fn exit_code(&self) -> u8 {
        if self.is_fatal() { FATAL_EXIT_CODE } else { 0 }
    }
}

pub type ChildResult<T> = Result<T, ChildError>;
