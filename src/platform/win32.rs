//! Win32 implementation of [`HostWindows`].

use std::ffi::c_void;

use windows::Win32::Foundation::{HWND, RECT};
use windows::Win32::System::Console::AllocConsole;
use windows::Win32::UI::WindowsAndMessaging::{
    FindWindowExW, GetWindowRect, GetWindowThreadProcessId, MB_ICONEXCLAMATION, MB_OK,
    MessageBoxW, SetParent,
};
use windows::core::{HSTRING, PCWSTR};

use super::DIALOG_CAPTION;
use crate::error::{ChildError, ChildResult};
use crate::host::{HostWindows, NativeHandle, ScreenRect};

fn to_hwnd(handle: NativeHandle) -> HWND {
    HWND(handle.raw() as *mut c_void)
}

fn from_hwnd(hwnd: HWND) -> NativeHandle {
    NativeHandle::from_raw(hwnd.0 as isize)
}

/// Top-level windows of the current desktop.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeHost;

impl NativeHost {
    pub fn new() -> Self {
        Self
    }
}

impl HostWindows for NativeHost {
    fn find_top_level_by_class(&self, class: &str) -> Option<NativeHandle> {
        let class = HSTRING::from(class);
        // SAFETY: both strings outlive the call; null parent searches top-level windows.
        let found = unsafe {
            FindWindowExW(
                HWND::default(),
                HWND::default(),
                PCWSTR(class.as_ptr()),
                PCWSTR::null(),
            )
        };
        match found {
            Ok(hwnd) if !hwnd.is_invalid() => Some(from_hwnd(hwnd)),
            Ok(_) => None,
            Err(e) => {
                log::debug!("FindWindowExW failed: {}", e);
                None
            }
        }
    }

    fn owning_process_id(&self, window: NativeHandle) -> Option<u32> {
        let mut pid = 0u32;
        // SAFETY: `pid` is a valid out pointer for the duration of the call.
        let thread =
            unsafe { GetWindowThreadProcessId(to_hwnd(window), Some(&mut pid as *mut u32)) };
        (thread != 0).then_some(pid)
    }

    fn screen_rect(&self, window: NativeHandle) -> ChildResult<ScreenRect> {
        let mut rect = RECT::default();
        // SAFETY: `rect` is a valid out pointer for the duration of the call.
        unsafe { GetWindowRect(to_hwnd(window), &mut rect) }
            .map_err(|e| ChildError::WindowRect(e.message().to_string()))?;
        Ok(ScreenRect::new(rect.left, rect.top, rect.right, rect.bottom))
    }

    fn set_parent(&self, child: NativeHandle, parent: NativeHandle) -> ChildResult<()> {
        // SAFETY: `child` belongs to this process; `parent` is only used as the new parent.
        unsafe { SetParent(to_hwnd(child), to_hwnd(parent)) }
            .map(|_previous| ())
            .map_err(|e| ChildError::Reparent(e.message().to_string()))
    }
}

/// Allocate a console so stdout and stderr are visible.
///
/// The binary uses the GUI subsystem and starts without one.
pub fn attach_console() -> ChildResult<()> {
    // SAFETY: no preconditions.
    unsafe { AllocConsole() }
        .map_err(|e| ChildError::ConsoleUnavailable(e.message().to_string()))
}

/// Show a blocking error message box.
pub fn show_error_dialog(message: &str) {
    let text = HSTRING::from(message);
    let caption = HSTRING::from(DIALOG_CAPTION);
    // SAFETY: both strings outlive the call; no owner window.
    let _ = unsafe {
        MessageBoxW(
            HWND::default(),
            PCWSTR(text.as_ptr()),
            PCWSTR(caption.as_ptr()),
            MB_ICONEXCLAMATION | MB_OK,
        )
    };
}
