//! Startup sequence and full process lifecycle.

use crate::args::ChildArgs;
use crate::error::ChildResult;
use crate::host::{HostWindows, NativeHandle, ParentWindow, ScreenRect, locate_parent};
use crate::render_loop::{LoopSummary, RenderLoop};
use crate::surface::{GraphicsSystem, RenderSurface, SurfaceSpec};

/// Result of a successful embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Embedding {
    /// The foreign parent window.
    pub parent: ParentWindow,
    /// Parent rectangle captured at startup.
    pub parent_rect: ScreenRect,
    /// Handle of the created child window.
    pub child: NativeHandle,
}

/// Locate the parent, create a matching window and re-parent it.
///
/// `init_graphics` is only called once the parent window has been found and
/// measured, so a missing or mismatched parent never creates a window.
pub fn embed<H, G, F>(
    host: &H,
    args: &ChildArgs,
    init_graphics: F,
) -> ChildResult<(G::Surface, Embedding)>
where
    H: HostWindows + ?Sized,
    G: GraphicsSystem,
    F: FnOnce() -> ChildResult<G>,
{
    let parent = locate_parent(host, args.parent_class(), args.parent_pid())?;

    let parent_rect = host.screen_rect(parent.handle())?;
    log::info!(
        "Parent rectangle ({}, {}, {}, {})",
        parent_rect.left,
        parent_rect.top,
        parent_rect.right,
        parent_rect.bottom
    );

    let graphics = init_graphics()?;
    let spec = SurfaceSpec::matching(parent_rect).with_vsync(args.vsync());
    let surface = graphics.create_surface(spec)?;

    let child = surface.native_handle()?;
    host.set_parent(child, parent.handle())?;
    log::info!("Re-parented {:?} under {:?}", child, parent.handle());

    Ok((
        surface,
        Embedding {
            parent,
            parent_rect,
            child,
        },
    ))
}

/// Embed, render until quit, then shut the surface down.
pub fn run<H, G, F>(host: &H, args: &ChildArgs, init_graphics: F) -> ChildResult<LoopSummary>
where
    H: HostWindows + ?Sized,
    G: GraphicsSystem,
    F: FnOnce() -> ChildResult<G>,
{
    let (mut surface, _embedding) = embed(host, args, init_graphics)?;

    let summary = RenderLoop::new()
        .with_frame_delay(args.frame_delay())
        .with_max_frames(args.max_frames())
        .run(&mut surface);

    surface.shutdown();
    log::info!(
        "Render loop finished: {:?} after {} frames",
        summary.reason,
        summary.frames_presented
    );
    Ok(summary)
}
