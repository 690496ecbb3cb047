//! Background clear color.

/// Four-channel RGBA clear color with every channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClearColor([f32; 4]);

impl ClearColor {
    /// Color the child window starts with.
    pub const INITIAL: Self = Self([0.2, 0.4, 0.1, 1.0]);

    /// Create a color, clamping each channel into `[0, 1]`.
    #[cfg(test)]
    pub(crate) fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self([r, g, b, a].map(|c| c.clamp(0.0, 1.0)))
    }

    /// Swap the red and green channels. Applying it twice is a no-op.
    pub fn swap_red_green(&mut self) {
        self.0.swap(0, 1);
    }

    /// Channels in RGBA order.
    pub fn channels(&self) -> [f32; 4] {
        self.0
    }
}

impl Default for ClearColor {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl From<ClearColor> for wgpu::Color {
    fn from(color: ClearColor) -> Self {
        let [r, g, b, a] = color.0;
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        }
    }
}
