//! Display session
//!
//! Owns the panel driver and the enable state. Drawing only reaches the
//! driver through [`Session::active`], which hands it out while the session
//! is enabled and returns `None` otherwise.
//!
//! # State machine
//!
//! ```text
//!              enable(true): init, rotate, backlight, clear
//!   Disabled ──────────────────────────────────────────────► Enabled
//!      ▲                                                        │
//!      └────────────────────── enable(false) ───────────────────┘
//! ```
//!
//! Repeating the current state is a no-op. Disabling does not blank the
//! panel or release the driver; the next enable re-runs the full init.

use platform::PanelDriver;
use tft_specs::PanelSpec;

use crate::config::SessionConfig;
use crate::grid::GridPalette;

/// Enable state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionState {
    /// Draw calls are dropped
    #[default]
    Disabled,
    /// Draw calls reach the panel
    Enabled,
}

/// Panel session: one driver, one panel spec, one enable state
pub struct Session<D> {
    driver: D,
    spec: &'static PanelSpec,
    palette: GridPalette,
    state: SessionState,
}

impl<D: PanelDriver> Session<D> {
    /// Disabled session for the panel `config` selects
    pub fn new(driver: D, config: &SessionConfig) -> Self {
        let palette = GridPalette {
            on: config.on_color.to_color16(),
            off: config.off_color.to_color16(),
        };
        Self::with_spec(driver, config.variant.spec(), palette)
    }

    /// Disabled session for an explicit panel spec
    pub fn with_spec(driver: D, spec: &'static PanelSpec, palette: GridPalette) -> Self {
        Self {
            driver,
            spec,
            palette,
            state: SessionState::Disabled,
        }
    }

    /// Enable or disable drawing
    ///
    /// Enabling a disabled session initialises the panel, applies the
    /// session rotation, switches the backlight on where the board has one
    /// and clears to the off color. A driver error during that sequence
    /// leaves the session disabled.
    pub fn enable(&mut self, on: bool) -> Result<(), D::Error> {
        match (self.state, on) {
            (SessionState::Disabled, true) => {
                self.power_up()?;
                self.state = SessionState::Enabled;
                tracing::debug!(
                    panel = self.spec.name,
                    width = self.driver.width(),
                    height = self.driver.height(),
                    "display session enabled"
                );
                #[cfg(feature = "defmt")]
                defmt::debug!("display session enabled: {=str}", self.spec.name);
            }
            (SessionState::Enabled, false) => {
                self.state = SessionState::Disabled;
                tracing::debug!(panel = self.spec.name, "display session disabled");
                #[cfg(feature = "defmt")]
                defmt::debug!("display session disabled");
            }
            _ => {}
        }
        Ok(())
    }

    fn power_up(&mut self) -> Result<(), D::Error> {
        self.driver.init(self.spec)?;
        self.driver.set_rotation(self.spec.rotation)?;
        if let Some(pin) = self.spec.backlight_pin {
            self.driver.set_backlight(pin, true)?;
        }
        self.driver.fill_screen(self.palette.off)
    }

    /// Driver, if drawing is currently allowed
    pub fn active(&mut self) -> Option<&mut D> {
        match self.state {
            SessionState::Enabled => Some(&mut self.driver),
            SessionState::Disabled => None,
        }
    }

    /// Current state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether drawing is allowed
    pub fn is_enabled(&self) -> bool {
        self.state == SessionState::Enabled
    }

    /// Panel this session drives
    pub fn spec(&self) -> &'static PanelSpec {
        self.spec
    }

    /// Grid colors, reduced
    pub fn palette(&self) -> GridPalette {
        self.palette
    }

    /// Driver, regardless of state
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Release the driver
    pub fn into_driver(self) -> D {
        self.driver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color24;
    use platform::mocks::{PanelCall, RecordingPanel};
    use platform::{Color16, Controller, Rotation};
    use tft_specs::PanelVariant;

    fn session(variant: PanelVariant) -> Session<RecordingPanel> {
        let config = SessionConfig::for_variant(variant);
        Session::new(RecordingPanel::for_spec(variant.spec()), &config)
    }

    #[test]
    fn test_starts_disabled() {
        let mut s = session(PanelVariant::St7735);
        assert_eq!(s.state(), SessionState::Disabled);
        assert!(s.active().is_none());
        assert!(s.driver().calls().is_empty());
    }

    #[test]
    fn test_st7735_power_up_sequence() {
        let mut s = session(PanelVariant::St7735);
        s.enable(true).unwrap();
        assert_eq!(
            s.driver().calls(),
            &[
                PanelCall::Init(Controller::ST7735),
                PanelCall::SetRotation(Rotation::Degrees0),
                PanelCall::FillScreen(Color16::BLACK),
            ]
        );
        assert!(s.is_enabled());
    }

    #[test]
    fn test_ili9341_power_up_turns_on_backlight() {
        let mut s = session(PanelVariant::Ili9341);
        s.enable(true).unwrap();
        assert_eq!(
            s.driver().calls(),
            &[
                PanelCall::Init(Controller::ILI9341),
                PanelCall::SetRotation(Rotation::Degrees90),
                PanelCall::SetBacklight { pin: 33, on: true },
                PanelCall::FillScreen(Color16::BLACK),
            ]
        );
        assert_eq!((s.driver().width(), s.driver().height()), (320, 240));
    }

    #[test]
    fn test_enable_twice_initialises_once() {
        let mut s = session(PanelVariant::St7735);
        s.enable(true).unwrap();
        s.enable(true).unwrap();
        assert_eq!(s.driver().init_count(), 1);
        assert_eq!(s.driver().calls().len(), 3);
    }

    #[test]
    fn test_disable_is_state_only() {
        let mut s = session(PanelVariant::St7735);
        s.enable(true).unwrap();
        let before = s.driver().calls().len();
        s.enable(false).unwrap();
        s.enable(false).unwrap();
        assert_eq!(s.state(), SessionState::Disabled);
        assert_eq!(s.driver().calls().len(), before);
        assert!(s.active().is_none());
    }

    #[test]
    fn test_reenable_reinitialises() {
        let mut s = session(PanelVariant::St7735);
        s.enable(true).unwrap();
        s.enable(false).unwrap();
        s.enable(true).unwrap();
        assert_eq!(s.driver().init_count(), 2);
    }

    #[test]
    fn test_clear_uses_configured_off_color() {
        let config = SessionConfig {
            off_color: Color24(0x0000FF),
            ..SessionConfig::default()
        };
        let mut s = Session::new(RecordingPanel::new(128, 128), &config);
        s.enable(true).unwrap();
        assert_eq!(s.driver().last_call(), Some(&PanelCall::FillScreen(Color16(0x001F))));
        assert_eq!(s.palette().on, Color16::GREEN);
    }
}
