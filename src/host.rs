//! Foreign host windows.
//!
//! The parent window belongs to another process. This module models it as an
//! opaque [`NativeHandle`] plus the [`HostWindows`] lookup capability; nothing
//! here owns, mutates or destroys it.

use std::fmt;

use crate::error::{ChildError, ChildResult};

/// Opaque OS window identifier (an `HWND` on Windows).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NativeHandle(isize);

impl NativeHandle {
    /// Wrap a raw handle value.
    pub const fn from_raw(raw: isize) -> Self {
        Self(raw)
    }

    /// Raw handle value.
    pub const fn raw(self) -> isize {
        self.0
    }
}

impl fmt::Debug for NativeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NativeHandle({:#x})", self.0)
    }
}

/// Screen-space window rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl ScreenRect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Width in pixels, zero for an inverted rectangle.
    pub fn width(&self) -> u32 {
        (self.right as i64 - self.left as i64).max(0) as u32
    }

    /// Height in pixels, zero for an inverted rectangle.
    pub fn height(&self) -> u32 {
        (self.bottom as i64 - self.top as i64).max(0) as u32
    }

    /// `(width, height)` in pixels.
    pub fn size(&self) -> (u32, u32) {
        (self.width(), self.height())
    }
}

/// A window owned by another process.
///
/// `Copy` and without `Drop`: the handle is borrowed from the host process for
/// the lifetime of this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentWindow {
    handle: NativeHandle,
    pid: u32,
}

impl ParentWindow {
    pub fn handle(&self) -> NativeHandle {
        self.handle
    }

    /// Id of the process that owns the window.
    pub fn pid(&self) -> u32 {
        self.pid
    }
}

/// OS windowing operations on top-level windows of other processes.
pub trait HostWindows {
    /// First top-level window whose window class equals `class`.
    fn find_top_level_by_class(&self, class: &str) -> Option<NativeHandle>;

    /// Id of the process that created `window`, if it still exists.
    fn owning_process_id(&self, window: NativeHandle) -> Option<u32>;

    /// Screen rectangle of `window`.
    fn screen_rect(&self, window: NativeHandle) -> ChildResult<ScreenRect>;

    /// Make `child` a child window of `parent`.
    fn set_parent(&self, child: NativeHandle, parent: NativeHandle) -> ChildResult<()>;
}

/// Find the top-level window of `class` and check it belongs to `pid`.
pub fn locate_parent<H>(host: &H, class: &str, pid: u32) -> ChildResult<ParentWindow>
where
    H: HostWindows + ?Sized,
{
    let handle = host
        .find_top_level_by_class(class)
        .ok_or_else(|| ChildError::ParentWindowNotFound {
            class: class.to_string(),
            pid,
        })?;

    // A vanished window reports no owner, which can never match a nonzero pid.
    let owner = host.owning_process_id(handle).unwrap_or(0);
    if owner != pid {
        return Err(ChildError::ParentPidMismatch {
            expected: pid,
            actual: owner,
        });
    }

    log::info!("Found parent window {:?} of class '{}' owned by {}", handle, class, pid);
    Ok(ParentWindow { handle, pid })
}
