//! Input conversion utilities.
//!
//! Maps winit window events to the loop's [`LoopEvent`] values.

use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{self, NamedKey};

use crate::surface::{Key, LoopEvent};

/// Convert a winit logical key to a loop [`Key`].
pub fn map_winit_key(key: &keyboard::Key) -> Key {
    match key {
        keyboard::Key::Named(NamedKey::Space) => Key::Space,
        _ => Key::Other,
    }
}

/// Convert a winit [`WindowEvent`] to a [`LoopEvent`].
///
/// Auto-repeated key presses are key-down events too.
pub fn map_window_event(event: &WindowEvent) -> LoopEvent {
    match event {
        WindowEvent::CloseRequested | WindowEvent::Destroyed => LoopEvent::Quit,
        WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
            LoopEvent::KeyDown(map_winit_key(&event.logical_key))
        }
        _ => LoopEvent::Other,
    }
}
