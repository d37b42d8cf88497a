//! Status indicator configuration.
//!
//! Fixed at initialization and never changed afterwards. Uses
//! `heapless::String` for the boot banner so the whole tree stays
//! `no_std`-friendly.
//!
//! # Example
//!
//! ```rust
//! use status_indicator::config::{DisplayConfig, IndicatorConfig, LedConfig};
//!
//! // LED only, on GPIO 4
//! let config = IndicatorConfig::default();
//!
//! // Add a TM1637 on GPIO 16/17
//! let config = IndicatorConfig::default()
//!     .with_led(LedConfig::default().with_max_brightness(64))
//!     .with_display(DisplayConfig::default().with_pins(16, 17).with_boot_text("v1.2"));
//! assert!(config.display.present);
//! ```

use heapless::String as HString;

use crate::traits::PinId;

/// Characters the display can show at once.
pub const MAX_BANNER_CHARS: usize = crate::segment::DIGITS;

/// Byte capacity of a banner (four characters of up to four bytes each).
pub const MAX_BANNER_BYTES: usize = MAX_BANNER_CHARS * 4;

/// Type alias for display banner strings
pub type BannerString = HString<MAX_BANNER_BYTES>;

/// Pin number meaning "not connected".
pub const PIN_NOT_CONNECTED: PinId = -1;

// ============================================================================
// Helper for creating heapless strings
// ============================================================================

/// Create a BannerString from a &str, keeping the first four characters
pub fn banner_string(s: &str) -> BannerString {
    let mut hs = BannerString::new();
    for c in s.chars().take(MAX_BANNER_CHARS) {
        // Cannot fail: four chars never exceed the byte capacity.
        let _ = hs.push(c);
    }
    hs
}

// ============================================================================
// Main Config
// ============================================================================

/// Complete indicator configuration
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndicatorConfig {
    /// Status LED
    pub led: LedConfig,
    /// Segment display
    pub display: DisplayConfig,
}

impl IndicatorConfig {
    /// Set LED configuration
    pub fn with_led(mut self, led: LedConfig) -> Self {
        self.led = led;
        self
    }

    /// Set display configuration
    pub fn with_display(mut self, display: DisplayConfig) -> Self {
        self.display = display;
        self
    }
}

// ============================================================================
// LED Config
// ============================================================================

/// Status LED configuration
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LedConfig {
    /// GPIO driving the addressable LED
    pub pin: PinId,
    /// Upper bound of every brightness the engine produces
    pub max_brightness: u8,
    /// Triangle period for Classic and Flow, in milliseconds
    pub period_ms: u32,
}

impl Default for LedConfig {
    fn default() -> Self {
        Self {
            pin: 4,
            max_brightness: 40,
            period_ms: crate::brightness::DEFAULT_PERIOD_MS,
        }
    }
}

impl LedConfig {
    /// Set the LED pin
    pub fn with_pin(mut self, pin: PinId) -> Self {
        self.pin = pin;
        self
    }

    /// Set the maximum brightness
    pub fn with_max_brightness(mut self, max: u8) -> Self {
        self.max_brightness = max;
        self
    }

    /// Set the triangle period (at least 1 ms)
    pub fn with_period_ms(mut self, ms: u32) -> Self {
        self.period_ms = ms.max(1);
        self
    }
}

// ============================================================================
// Display Config
// ============================================================================

/// Segment display configuration
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayConfig {
    /// Clock line GPIO
    pub clk_pin: PinId,
    /// Data line GPIO
    pub dio_pin: PinId,
    /// Brightness nibble (0 to 7)
    pub brightness: u8,
    /// Whether a display is fitted
    pub present: bool,
    /// Minimum spacing between refreshes in milliseconds
    pub refresh_interval_ms: u32,
    /// Text shown right after initialization
    pub boot_text: BannerString,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            clk_pin: PIN_NOT_CONNECTED,
            dio_pin: PIN_NOT_CONNECTED,
            brightness: crate::tm1637::MAX_BRIGHTNESS,
            present: false,
            refresh_interval_ms: crate::rotator::DEFAULT_REFRESH_INTERVAL_MS,
            boot_text: banner_string("boot"),
        }
    }
}

impl DisplayConfig {
    /// Set the bus pins and mark the display present
    pub fn with_pins(mut self, clk: PinId, dio: PinId) -> Self {
        self.clk_pin = clk;
        self.dio_pin = dio;
        self.present = true;
        self
    }

    /// Set the brightness nibble (masked to 0..=7)
    pub fn with_brightness(mut self, level: u8) -> Self {
        self.brightness = level & crate::tm1637::MAX_BRIGHTNESS;
        self
    }

    /// Mark the display present or absent
    pub fn with_present(mut self, present: bool) -> Self {
        self.present = present;
        self
    }

    /// Set the refresh interval
    pub fn with_refresh_interval_ms(mut self, ms: u32) -> Self {
        self.refresh_interval_ms = ms;
        self
    }

    /// Set the boot banner (first four characters kept)
    pub fn with_boot_text(mut self, text: &str) -> Self {
        self.boot_text = banner_string(text);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = IndicatorConfig::default();
        assert_eq!(config.led.pin, 4);
        assert_eq!(config.led.max_brightness, 40);
        assert_eq!(config.led.period_ms, 3000);
        assert!(!config.display.present);
        assert_eq!(config.display.clk_pin, PIN_NOT_CONNECTED);
        assert_eq!(config.display.brightness, 7);
        assert_eq!(config.display.refresh_interval_ms, 1000);
        assert_eq!(config.display.boot_text.as_str(), "boot");
    }

    #[test]
    fn test_builder_pattern() {
        let config = IndicatorConfig::default()
            .with_led(LedConfig::default().with_pin(21).with_max_brightness(255))
            .with_display(DisplayConfig::default().with_pins(16, 17).with_brightness(3));

        assert_eq!(config.led.pin, 21);
        assert_eq!(config.led.max_brightness, 255);
        assert!(config.display.present);
        assert_eq!(config.display.clk_pin, 16);
        assert_eq!(config.display.dio_pin, 17);
        assert_eq!(config.display.brightness, 3);
    }

    #[test]
    fn test_brightness_masked() {
        let display = DisplayConfig::default().with_brightness(0x0F);
        assert_eq!(display.brightness, 7);
    }

    #[test]
    fn test_period_at_least_one() {
        assert_eq!(LedConfig::default().with_period_ms(0).period_ms, 1);
    }

    #[test]
    fn test_present_toggle() {
        let display = DisplayConfig::default().with_pins(1, 2).with_present(false);
        assert!(!display.present);
        assert_eq!(display.clk_pin, 1);
    }

    #[test]
    fn test_banner_truncation() {
        assert_eq!(banner_string("v1.2.3").as_str(), "v1.2");
        assert_eq!(banner_string("ok").as_str(), "ok");
        assert_eq!(banner_string("").as_str(), "");
    }

    #[test]
    fn test_banner_utf8_boundary() {
        let s = banner_string("12°C!");
        assert_eq!(s.as_str(), "12°C");
    }
}
