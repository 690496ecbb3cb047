//! winit + wgpu implementation of the rendering capabilities.
//!
//! The event loop is driven with `pump_app_events` and a zero timeout, so each
//! [`RenderSurface::poll_events`] call drains whatever the OS has queued and
//! returns immediately.

mod gpu;
pub mod input;

use std::sync::Arc;
use std::time::Duration;

use raw_window_handle::{HasWindowHandle, RawWindowHandle};
use winit::application::ApplicationHandler;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowId};

use crate::color::ClearColor;
use crate::error::{ChildError, ChildResult};
use crate::host::NativeHandle;
use crate::surface::{GraphicsSystem, LoopEvent, RenderSurface, SurfaceSpec};

use gpu::GpuContext;

/// Pumps allowed for the event loop to resume and create the window.
const WINDOW_CREATION_PUMPS: u32 = 16;

/// Creates the window on resume and collects window events between pumps.
struct EventCollector {
    pending_spec: Option<SurfaceSpec>,
    window: Option<Arc<Window>>,
    creation_error: Option<ChildError>,
    events: Vec<LoopEvent>,
}

impl EventCollector {
    fn new(spec: SurfaceSpec) -> Self {
        Self {
            pending_spec: Some(spec),
            window: None,
            creation_error: None,
            events: Vec::new(),
        }
    }
}

impl ApplicationHandler for EventCollector {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let Some(spec) = self.pending_spec.take() else {
            return;
        };

        let window_attributes = Window::default_attributes()
            .with_title(spec.title.clone())
            .with_decorations(spec.decorations)
            .with_position(PhysicalPosition::new(spec.position.0, spec.position.1))
            .with_inner_size(PhysicalSize::new(spec.width.max(1), spec.height.max(1)))
            .with_visible(true);

        match event_loop.create_window(window_attributes) {
            Ok(window) => {
                log::info!("Window created ({}x{})", spec.width, spec.height);
                self.window = Some(Arc::new(window));
            }
            Err(e) => {
                self.creation_error = Some(ChildError::WindowCreation(e.to_string()));
            }
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        self.events.push(input::map_window_event(&event));
    }
}

/// Initialized winit event loop and wgpu instance.
pub struct WinitGraphics {
    event_loop: EventLoop<()>,
    instance: wgpu::Instance,
}

impl WinitGraphics {
    /// Initialize the windowing and graphics subsystems.
    pub fn new() -> ChildResult<Self> {
        let event_loop = EventLoop::new().map_err(|e| ChildError::GraphicsInit(e.to_string()))?;
        let instance = gpu::create_instance();
        log::info!("Windowing and graphics subsystems initialized");
        Ok(Self {
            event_loop,
            instance,
        })
    }
}

impl std::fmt::Debug for WinitGraphics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WinitGraphics").finish_non_exhaustive()
    }
}

impl GraphicsSystem for WinitGraphics {
    type Surface = WinitSurface;

    fn create_surface(mut self, spec: SurfaceSpec) -> ChildResult<WinitSurface> {
        let mut collector = EventCollector::new(spec.clone());

        let mut window = None;
        for _ in 0..WINDOW_CREATION_PUMPS {
            let status = self
                .event_loop
                .pump_app_events(Some(Duration::ZERO), &mut collector);
            if let Some(e) = collector.creation_error.take() {
                return Err(e);
            }
            if let Some(created) = &collector.window {
                window = Some(Arc::clone(created));
                break;
            }
            if let PumpStatus::Exit(code) = status {
                return Err(ChildError::WindowCreation(format!(
                    "event loop exited with code {code} before the window was created"
                )));
            }
        }

        let window = window.ok_or_else(|| {
            ChildError::WindowCreation("event loop never resumed".to_string())
        })?;
        let gpu = GpuContext::new(&self.instance, Arc::clone(&window), &spec)?;

        Ok(WinitSurface {
            gpu,
            collector,
            window,
            event_loop: self.event_loop,
        })
    }
}

/// Borderless winit window with a wgpu context.
///
/// Fields drop in declaration order: context, window, event loop.
pub struct WinitSurface {
    gpu: GpuContext,
    collector: EventCollector,
    window: Arc<Window>,
    event_loop: EventLoop<()>,
}

impl std::fmt::Debug for WinitSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WinitSurface")
            .field("gpu", &self.gpu)
            .field("window", &self.window.id())
            .finish_non_exhaustive()
    }
}

impl RenderSurface for WinitSurface {
    fn native_handle(&self) -> ChildResult<NativeHandle> {
        let handle = self
            .window
            .window_handle()
            .map_err(|e| ChildError::NativeHandleUnavailable(e.to_string()))?;

        match handle.as_raw() {
            RawWindowHandle::Win32(win32) => Ok(NativeHandle::from_raw(win32.hwnd.get())),
            other => Err(ChildError::UnexpectedWindowingBackend(
                windowing_backend_name(&other).to_string(),
            )),
        }
    }

    fn poll_events(&mut self, events: &mut Vec<LoopEvent>) {
        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.collector);
        events.append(&mut self.collector.events);

        if let PumpStatus::Exit(code) = status {
            log::info!("Event loop exited with code {}", code);
            events.push(LoopEvent::Quit);
        }
    }

    fn present(&mut self, color: ClearColor) -> ChildResult<()> {
        self.gpu.clear_and_present(color)
    }

    fn size(&self) -> (u32, u32) {
        self.gpu.size()
    }

    fn shutdown(self) {
        let Self {
            gpu,
            collector,
            window,
            event_loop,
        } = self;

        drop(gpu);
        log::info!("Graphics context destroyed");
        drop(collector);
        drop(window);
        log::info!("Window destroyed");
        drop(event_loop);
        log::info!("Windowing subsystem shut down");
    }
}

fn windowing_backend_name(handle: &RawWindowHandle) -> &'static str {
    match handle {
        RawWindowHandle::Win32(_) => "Win32",
        RawWindowHandle::WinRt(_) => "WinRT",
        RawWindowHandle::Xlib(_) => "Xlib",
        RawWindowHandle::Xcb(_) => "Xcb",
        RawWindowHandle::Wayland(_) => "Wayland",
        RawWindowHandle::AppKit(_) => "AppKit",
        RawWindowHandle::UiKit(_) => "UIKit",
        RawWindowHandle::AndroidNdk(_) => "AndroidNdk",
        RawWindowHandle::Web(_) => "Web",
        _ => "unknown",
    }
}
