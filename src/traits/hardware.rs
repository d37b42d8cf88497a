//! Hardware abstraction traits for the status LED and the two-wire display bus.
//!
//! This module defines the hardware interfaces that let the indicator run on
//! ESP32 hardware or against desktop mocks.
//!
//! # Key Traits
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | [`Clock`] | Monotonic millisecond counter |
//! | [`DelayUs`] | Blocking microsecond busy-wait |
//! | [`TwoWirePins`] | Clock and data lines of the bit-banged display bus |
//! | [`PixelSink`] | Single addressable RGB pixel |
//! | [`PinAllocator`] | Claims GPIOs at startup |
//!
//! # Implementation
//!
//! For testing and desktop development, use the mock implementations
//! from [`crate::hal::mock`]. For ESP32 hardware, use the
//! implementations from `hal::esp32` (requires `esp32` feature).
//!
//! # Example
//!
//! ```rust
//! use status_indicator::traits::{PixelSink, Rgb};
//! use status_indicator::hal::MockPixel;
//!
//! let mut pixel = MockPixel::new();
//! pixel.set_color(Rgb::new(0, 40, 0)).unwrap();
//! pixel.show().unwrap();
//!
//! assert_eq!(pixel.shown, vec![Rgb::new(0, 40, 0)]);
//! ```

pub use smart_leds::RGB8 as Rgb;

/// GPIO number as understood by the board support layer.
pub type PinId = i32;

/// Time source trait for `no_std` compatibility.
///
/// Provides a monotonic millisecond counter in the style of Arduino's
/// `millis()`. The counter is 32 bits wide and wraps after ~49.7 days;
/// every consumer in this crate uses wrapping arithmetic on it.
///
/// # Example
///
/// ```rust
/// use status_indicator::traits::Clock;
/// use status_indicator::hal::MockClock;
///
/// let mut clock = MockClock::new();
/// assert_eq!(clock.now_ms(), 0);
///
/// clock.advance(100);
/// assert_eq!(clock.now_ms(), 100);
/// ```
pub trait Clock {
    /// Returns current time in milliseconds since an arbitrary epoch.
    ///
    /// Must be monotonically increasing (modulo wraparound).
    fn now_ms(&self) -> u32;

    /// Returns whole seconds elapsed, derived from [`now_ms`](Self::now_ms).
    fn now_s(&self) -> u32 {
        self.now_ms() / 1000
    }
}

/// Blocking microsecond delay.
///
/// The display bus is bit-banged, so its timing depends on real elapsed
/// time. Implementations must busy-wait rather than yield.
pub trait DelayUs {
    /// Block for at least `us` microseconds.
    fn delay_us(&mut self, us: u32);
}

/// Clock and data lines of the two-wire display bus.
///
/// The clock line is always an output. The data line is an output while the
/// host transmits and is released (switched to input) while the display
/// drives the acknowledgement bit.
///
/// Pin writes on a configured GPIO do not fail in practice, so these
/// operations are infallible.
pub trait TwoWirePins {
    /// Drive the clock line.
    fn set_clk(&mut self, high: bool);

    /// Drive the data line. Only meaningful while the data line is an output.
    fn set_dio(&mut self, high: bool);

    /// Switch the data line to input so the display can drive it.
    fn release_dio(&mut self);

    /// Switch the data line back to output.
    fn drive_dio(&mut self);

    /// Sample the data line.
    fn read_dio(&mut self) -> bool;
}

/// A single RGB status pixel (e.g. an onboard WS2812).
///
/// Colors are latched by [`set_color`](Self::set_color) and only reach the
/// hardware on [`show`](Self::show).
pub trait PixelSink {
    /// Error type for pixel operations.
    type Error;

    /// Latch the color for the next [`show`](Self::show).
    fn set_color(&mut self, color: Rgb) -> Result<(), Self::Error>;

    /// Push the latched color to the hardware.
    fn show(&mut self) -> Result<(), Self::Error>;
}

/// GPIO allocation service supplied by the board layer.
///
/// Claiming is all-or-nothing per call: when any pin is already owned by
/// someone else, nothing is claimed and `false` is returned.
pub trait PinAllocator {
    /// Claim `pins` for `owner`. Returns `false` on conflict.
    fn alloc_pins(&mut self, owner: &'static str, pins: &[PinId]) -> bool;

    /// Release every pin held by `owner`.
    fn free_pins(&mut self, owner: &'static str);
}
