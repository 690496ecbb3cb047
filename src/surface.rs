//! Rendering window capabilities.
//!
//! The bootstrap and render loop only see these traits. The winit + wgpu
//! implementation lives in [`crate::winit_backend`]; tests use in-memory ones.

use crate::color::ClearColor;
use crate::error::ChildResult;
use crate::host::{NativeHandle, ScreenRect};

/// Title of the created window.
pub const CHILD_WINDOW_TITLE: &str = "Child";

/// Describes the window to create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceSpec {
    /// Window title.
    pub title: String,
    /// Initial position in physical pixels.
    pub position: (i32, i32),
    /// Size in physical pixels.
    pub width: u32,
    pub height: u32,
    /// Whether the window has OS decorations.
    pub decorations: bool,
    /// Whether presentation waits for vertical blank.
    pub vsync: bool,
}

impl SurfaceSpec {
    /// Borderless window at the origin, sized like `rect`.
    ///
    /// The origin becomes the parent's client origin once re-parented.
    pub fn matching(rect: ScreenRect) -> Self {
        Self {
            title: CHILD_WINDOW_TITLE.to_string(),
            position: (0, 0),
            width: rect.width(),
            height: rect.height(),
            decorations: false,
            vsync: true,
        }
    }

    /// Set whether presentation waits for vertical blank.
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }
}

/// Keys the loop distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Other,
}

/// Input event as seen by the render loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopEvent {
    /// Window close or event loop exit.
    Quit,
    /// Key pressed (including auto-repeat).
    KeyDown(Key),
    /// Anything else; ignored.
    Other,
}

/// A created window with a bound graphics context.
pub trait RenderSurface {
    /// OS handle of the window.
    fn native_handle(&self) -> ChildResult<NativeHandle>;

    /// Drain every queued input event into `events` without blocking.
    fn poll_events(&mut self, events: &mut Vec<LoopEvent>);

    /// Make the context current, clear to `color` and present the frame.
    fn present(&mut self, color: ClearColor) -> ChildResult<()>;

    /// Current size in physical pixels.
    fn size(&self) -> (u32, u32);

    /// Destroy the context, then the window, then the windowing subsystem.
    fn shutdown(self)
    where
        Self: Sized,
    {
    }
}

/// An initialized windowing/graphics subsystem.
pub trait GraphicsSystem {
    type Surface: RenderSurface;

    /// Create the window and its graphics context.
    fn create_surface(self, spec: SurfaceSpec) -> ChildResult<Self::Surface>;
}
