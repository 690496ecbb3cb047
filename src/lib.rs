//! # Embedded Child
//!
//! Renders into a borderless window that lives inside another process's
//! top-level window.
//!
//! ## Overview
//!
//! - [`ChildArgs`] - Command line: parent pid and options
//! - [`HostWindows`] - Lookup and re-parenting on foreign top-level windows
//! - [`GraphicsSystem`] / [`RenderSurface`] - Window creation, events and presentation
//! - [`RenderLoop`] - Poll-then-render loop with the space-key color toggle
//! - [`bootstrap::run`] - The whole lifecycle, generic over the capabilities above
//!
//! ## Example
//!
//! ```ignore
//! use embedded_child::{ChildArgs, WinitGraphics, bootstrap, platform::NativeHost};
//!
//! let args = ChildArgs::parse_env()?;
//! let summary = bootstrap::run(&NativeHost::new(), &args, WinitGraphics::new)?;
//! ```

pub mod args;
pub mod bootstrap;
pub mod color;
pub mod error;
pub mod host;
pub mod platform;
pub mod render_loop;
pub mod surface;
pub mod winit_backend;

pub use args::ChildArgs;
pub use bootstrap::{Embedding, embed, run};
pub use color::ClearColor;
pub use error::{ChildError, ChildResult, FATAL_EXIT_CODE};
pub use host::{HostWindows, NativeHandle, ParentWindow, ScreenRect, locate_parent};
pub use render_loop::{LoopState, LoopSummary, RenderLoop, StopReason, transition};
pub use surface::{GraphicsSystem, Key, LoopEvent, RenderSurface, SurfaceSpec};
pub use winit_backend::{WinitGraphics, WinitSurface};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log the crate version.
///
/// Call once logging is initialized.
pub fn init() {
    log::info!("Embedded Child v{} initialized", VERSION);
}
