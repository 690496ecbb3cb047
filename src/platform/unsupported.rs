//! Fallback for platforms without Win32 window embedding.

use super::DIALOG_CAPTION;
use crate::error::{ChildError, ChildResult};
use crate::host::{HostWindows, NativeHandle, ScreenRect};

/// Host with no discoverable foreign windows.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeHost;

impl NativeHost {
    pub fn new() -> Self {
        Self
    }
}

impl HostWindows for NativeHost {
    fn find_top_level_by_class(&self, class: &str) -> Option<NativeHandle> {
        log::warn!("Cannot search for window class '{}' on this platform", class);
        None
    }

    fn owning_process_id(&self, _window: NativeHandle) -> Option<u32> {
        None
    }

    fn screen_rect(&self, _window: NativeHandle) -> ChildResult<ScreenRect> {
        Err(ChildError::UnsupportedPlatform)
    }

    fn set_parent(&self, _child: NativeHandle, _parent: NativeHandle) -> ChildResult<()> {
        Err(ChildError::UnsupportedPlatform)
    }
}

/// Standard streams are already attached to the launching terminal.
pub fn attach_console() -> ChildResult<()> {
    Ok(())
}

/// No native dialog; the message goes to stderr.
pub fn show_error_dialog(message: &str) {
    eprintln!("{}: {}", DIALOG_CAPTION, message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::locate_parent;

    #[test]
    fn test_lookup_never_finds_a_parent() {
        let host = NativeHost::new();
        assert!(matches!(
            locate_parent(&host, "Parent", 4242),
            Err(ChildError::ParentWindowNotFound { pid: 4242, .. })
        ));
    }

    #[test]
    fn test_reparent_unsupported() {
        let host = NativeHost::new();
        let handle = NativeHandle::from_raw(1);
        assert_eq!(host.set_parent(handle, handle), Err(ChildError::UnsupportedPlatform));
        assert_eq!(host.screen_rect(handle), Err(ChildError::UnsupportedPlatform));
    }
}
