//! Poll-then-render loop.

use std::time::Duration;

use crate::color::ClearColor;
use crate::surface::{Key, LoopEvent, RenderSurface};

/// Loop state. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Running,
    Stopped,
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A quit event arrived.
    Quit,
    /// The configured frame limit was reached.
    FrameLimit,
}

/// Outcome of [`RenderLoop::run`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopSummary {
    pub frames_presented: u64,
    pub final_color: ClearColor,
    pub reason: StopReason,
}

/// Apply one event to the loop state.
pub fn transition(state: LoopState, event: LoopEvent, color: &mut ClearColor) -> LoopState {
    match (state, event) {
        (LoopState::Stopped, _) => LoopState::Stopped,
        (LoopState::Running, LoopEvent::Quit) => LoopState::Stopped,
        (LoopState::Running, LoopEvent::KeyDown(Key::Space)) => {
            color.swap_red_green();
            LoopState::Running
        }
        (LoopState::Running, _) => LoopState::Running,
    }
}

/// Drives a [`RenderSurface`] until quit.
#[derive(Debug, Clone)]
pub struct RenderLoop {
    color: ClearColor,
    frame_delay: Duration,
    max_frames: Option<u64>,
}

impl Default for RenderLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderLoop {
    pub fn new() -> Self {
        Self {
            color: ClearColor::INITIAL,
            frame_delay: Duration::ZERO,
            max_frames: None,
        }
    }

    /// Set the pause after each frame.
    pub fn with_frame_delay(mut self, delay: Duration) -> Self {
        self.frame_delay = delay;
        self
    }

    /// Stop after presenting this many frames.
    pub fn with_max_frames(mut self, max_frames: Option<u64>) -> Self {
        self.max_frames = max_frames;
        self
    }

    fn frame_limit_reached(&self, frames_presented: u64) -> bool {
        self.max_frames.is_some_and(|max| frames_presented >= max)
    }

    /// Run until a quit event or the frame limit.
    ///
    /// Each iteration drains every pending event, then renders one frame if
    /// the loop is still running. A frame the surface cannot present is logged
    /// and skipped.
    pub fn run<S: RenderSurface>(&mut self, surface: &mut S) -> LoopSummary {
        let mut state = LoopState::Running;
        let mut events = Vec::new();
        let mut frames_presented = 0u64;

        log::info!("Entering render loop ({}x{})", surface.size().0, surface.size().1);

        let reason = loop {
            events.clear();
            surface.poll_events(&mut events);
            for event in events.drain(..) {
                let previous = self.color;
                state = transition(state, event, &mut self.color);
                if previous != self.color {
                    log::debug!("Background color now {:?}", self.color.channels());
                }
            }

            if state == LoopState::Stopped {
                log::info!("Quit received after {} frames", frames_presented);
                break StopReason::Quit;
            }

            if self.frame_limit_reached(frames_presented) {
                break StopReason::FrameLimit;
            }

            match surface.present(self.color) {
                Ok(()) => frames_presented += 1,
                Err(e) => log::warn!("{}", e),
            }

            if self.frame_limit_reached(frames_presented) {
                break StopReason::FrameLimit;
            }

            if !self.frame_delay.is_zero() {
                std::thread::sleep(self.frame_delay);
            }
        };

        if reason == StopReason::FrameLimit {
            log::info!("Reached max frames limit ({}), exiting", frames_presented);
        }

        LoopSummary {
            frames_presented,
            final_color: self.color,
            reason,
        }
    }
}
