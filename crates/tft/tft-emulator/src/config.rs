//! Emulator configuration

/// Configuration for screenshot output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmulatorConfig {
    /// Upscaling factor (1 = no scaling, 2 = 2x for visibility, etc.)
    pub scale: u32,
}

impl EmulatorConfig {
    /// No upscaling (1:1 pixel mapping)
    pub const NATIVE: Self = Self { scale: 1 };

    /// 2x upscaling; a 128×128 panel is hard to read at 1:1
    pub const SCALED_2X: Self = Self { scale: 2 };

    /// Scale clamped to at least 1
    pub fn effective_scale(&self) -> u32 {
        self.scale.max(1)
    }
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        Self::NATIVE
    }
}
