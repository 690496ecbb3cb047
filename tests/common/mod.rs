//! Shared test doubles for the host windowing API and the rendering window.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use embedded_child::{
    ChildError, ChildResult, ClearColor, GraphicsSystem, HostWindows, LoopEvent, NativeHandle,
    RenderSurface, ScreenRect, SurfaceSpec,
};

pub const PARENT_HANDLE: NativeHandle = NativeHandle::from_raw(0x1000);
pub const CHILD_HANDLE: NativeHandle = NativeHandle::from_raw(0x2000);

/// A foreign top-level window as the host desktop reports it.
#[derive(Debug, Clone)]
pub struct HostWindow {
    pub class: String,
    pub handle: NativeHandle,
    pub owner_pid: u32,
    pub rect: ScreenRect,
}

impl HostWindow {
    pub fn parent(owner_pid: u32, rect: ScreenRect) -> Self {
        Self {
            class: "Parent".to_string(),
            handle: PARENT_HANDLE,
            owner_pid,
            rect,
        }
    }
}

/// In-memory desktop.
#[derive(Debug, Default)]
pub struct MockHost {
    pub windows: Vec<HostWindow>,
    pub rect_error: Option<String>,
    pub reparent_error: Option<String>,
    pub reparented: RefCell<Vec<(NativeHandle, NativeHandle)>>,
}

impl MockHost {
    pub fn with_window(window: HostWindow) -> Self {
        Self {
            windows: vec![window],
            ..Default::default()
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

impl HostWindows for MockHost {
    fn find_top_level_by_class(&self, class: &str) -> Option<NativeHandle> {
        self.windows
            .iter()
            .find(|w| w.class == class)
            .map(|w| w.handle)
    }

    fn owning_process_id(&self, window: NativeHandle) -> Option<u32> {
        self.windows
            .iter()
            .find(|w| w.handle == window)
            .map(|w| w.owner_pid)
    }

    fn screen_rect(&self, window: NativeHandle) -> ChildResult<ScreenRect> {
        if let Some(message) = &self.rect_error {
            return Err(ChildError::WindowRect(message.clone()));
        }
        self.windows
            .iter()
            .find(|w| w.handle == window)
            .map(|w| w.rect)
            .ok_or_else(|| ChildError::WindowRect("Invalid window handle.".to_string()))
    }

    fn set_parent(&self, child: NativeHandle, parent: NativeHandle) -> ChildResult<()> {
        if let Some(message) = &self.reparent_error {
            return Err(ChildError::Reparent(message.clone()));
        }
        self.reparented.borrow_mut().push((child, parent));
        Ok(())
    }
}

/// Everything the fake graphics stack observed, shared with the test body.
#[derive(Debug, Default)]
pub struct Recorder {
    pub init_calls: Cell<u32>,
    pub created: RefCell<Vec<SurfaceSpec>>,
    pub presented: RefCell<Vec<ClearColor>>,
    pub shut_down: Cell<bool>,
}

/// Fake windowing/graphics subsystem.
pub struct MockGraphics {
    pub recorder: Rc<Recorder>,
    pub batches: VecDeque<Vec<LoopEvent>>,
    pub create_error: Option<ChildError>,
    pub handle: ChildResult<NativeHandle>,
}

impl MockGraphics {
    pub fn new(recorder: Rc<Recorder>, batches: Vec<Vec<LoopEvent>>) -> Self {
        Self {
            recorder,
            batches: batches.into(),
            create_error: None,
            handle: Ok(CHILD_HANDLE),
        }
    }

    /// Factory for `embed`/`run` that counts initializations.
    pub fn factory(self) -> impl FnOnce() -> ChildResult<MockGraphics> {
        move || {
            self.recorder.init_calls.set(self.recorder.init_calls.get() + 1);
            Ok(self)
        }
    }
}

impl GraphicsSystem for MockGraphics {
    type Surface = MockSurface;

    fn create_surface(self, spec: SurfaceSpec) -> ChildResult<MockSurface> {
        if let Some(e) = self.create_error {
            return Err(e);
        }
        let size = (spec.width, spec.height);
        self.recorder.created.borrow_mut().push(spec);
        Ok(MockSurface {
            recorder: self.recorder,
            batches: self.batches,
            handle: self.handle,
            size,
        })
    }
}

/// Fake rendering window that replays one event batch per poll.
pub struct MockSurface {
    recorder: Rc<Recorder>,
    batches: VecDeque<Vec<LoopEvent>>,
    handle: ChildResult<NativeHandle>,
    size: (u32, u32),
}

impl RenderSurface for MockSurface {
    fn native_handle(&self) -> ChildResult<NativeHandle> {
        self.handle.clone()
    }

    fn poll_events(&mut self, events: &mut Vec<LoopEvent>) {
        if let Some(batch) = self.batches.pop_front() {
            events.extend(batch);
        }
    }

    fn present(&mut self, color: ClearColor) -> ChildResult<()> {
        self.recorder.presented.borrow_mut().push(color);
        Ok(())
    }

    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn shutdown(self) {
        self.recorder.shut_down.set(true);
    }
}
