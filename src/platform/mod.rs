//! OS services: host window lookup, console and error dialogs.
//!
//! Embedding needs Win32. Other platforms get a [`NativeHost`] whose lookups
//! fail, so the binary still builds and reports a clear error.

/// Caption of the fatal error dialog.
pub const DIALOG_CAPTION: &str = "ERROR";

#[cfg(windows)]
mod win32;
#[cfg(windows)]
pub use win32::{NativeHost, attach_console, show_error_dialog};

#[cfg(not(windows))]
mod unsupported;
#[cfg(not(windows))]
pub use unsupported::{NativeHost, attach_console, show_error_dialog};
