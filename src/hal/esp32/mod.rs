//! ESP32 hardware abstraction layer for the status indicator.
//!
//! This module provides hardware implementations for an ESP32 board with a
//! single WS2812 status LED and an optional TM1637 four-digit display.
//!
//! # Hardware Configuration
//!
//! - **Status LED**: WS2812 / SK6812 addressable pixel, driven by the RMT peripheral
//! - **Display**: TM1637 module, bit-banged on two GPIOs
//!
//! # Pin Assignments
//!
//! See the [`pins`] module for the default GPIO assignments.

mod clock;
mod delay;
mod pixel;
mod two_wire;

pub use clock::Esp32Clock;
pub use delay::Esp32Delay;
pub use pixel::Esp32Pixel;
pub use two_wire::Esp32TwoWire;

/// Default pin assignments.
///
/// These match [`IndicatorConfig::default`](crate::IndicatorConfig) for the
/// LED. The display pins are only used when a module is fitted.
pub mod pins {
    // =========================================================================
    // Status LED (WS2812)
    // =========================================================================

    /// WS2812 data input
    pub const STATUS_LED: i32 = 4;

    // =========================================================================
    // Segment Display (TM1637)
    // =========================================================================

    /// TM1637 CLK
    pub const DISPLAY_CLK: i32 = 16;

    /// TM1637 DIO (open drain, module has its own pull-up)
    pub const DISPLAY_DIO: i32 = 17;
}
