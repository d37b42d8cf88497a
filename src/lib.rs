//! # status-indicator
//!
//! Status LED and four-digit segment display driver for embedded battery
//! controllers.
//!
//! ## Features
//!
//! - **Animated status LED**: Classic breathing, power-flow skewed breathing
//!   and an alert-paced heartbeat, colored by device health
//! - **Rotating diagnostics**: State of charge, voltage, current and capacity
//!   on a fixed 16 second duty cycle
//! - **TM1637 driver**: Bit-banged two-wire protocol over any pair of GPIOs
//! - **Hardware abstraction**: Traits at every seam, mocks for desktop tests
//!
//! ## Architecture
//!
//! The crate is structured to allow testing on desktop without hardware:
//!
//! - `traits` - Hardware abstractions (clock, delay, pins, pixel, display)
//! - `segment` - Character to seven-segment glyph encoding
//! - `format` - Numbers, times and text into four-digit frames
//! - `tm1637` - Two-wire protocol driver
//! - `brightness` / `color` - LED waveform and color selection
//! - `rotator` - Which metric the display shows when
//! - `indicator` - The subsystem the main loop ticks
//! - `hal` - Concrete implementations (mock for testing, esp32 for hardware)
//!
//! ## Example
//!
//! ```rust
//! use status_indicator::{
//!     AnimationMode, HealthStatus, IndicatorConfig, StatusIndicator, SystemSnapshot,
//!     config::DisplayConfig,
//!     hal::{MockBus, MockDelay, MockPixel, PinRegistry},
//!     tm1637::Tm1637,
//! };
//!
//! let config = IndicatorConfig::default()
//!     .with_display(DisplayConfig::default().with_pins(16, 17));
//! let mut pins = PinRegistry::new();
//! let display = Tm1637::new(MockBus::new(), MockDelay::new());
//!
//! let mut indicator =
//!     StatusIndicator::init(&config, &mut pins, MockPixel::new(), Some(display)).unwrap();
//!
//! let state = SystemSnapshot {
//!     mode: AnimationMode::Heartbeat,
//!     health: HealthStatus::Ok,
//!     ..Default::default()
//! };
//!
//! // Call from your main loop
//! indicator.tick(20, &state).unwrap();
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

/// LED brightness waveforms.
pub mod brightness;
/// Health status to LED color.
pub mod color;
/// Shared configuration for desktop and ESP32.
pub mod config;
/// Initialization errors.
pub mod error;
/// Request-based frame formatting.
pub mod format;
/// Hardware abstraction layer with mock implementations for testing.
pub mod hal;
/// The periodic status indicator entry point.
pub mod indicator;
/// Display rotation schedule and rate limit.
pub mod rotator;
/// Seven-segment glyph encoding.
pub mod segment;
/// TM1637 two-wire display driver.
pub mod tm1637;
/// Core traits for hardware abstraction.
pub mod traits;

// Re-exports for convenience
pub use brightness::{AlertLevel, AnimationMode, BrightnessEngine};
pub use color::HealthStatus;
pub use error::IndicatorError;
pub use format::{format, FormatRequest};
pub use indicator::{DisplayUpdate, StatusIndicator, SystemSnapshot, Telemetry, TickReport};
pub use rotator::{select_slot, DisplayRotator, Metric, Slot, SlotKind};
pub use segment::{encode, DotMask, SegmentFrame};
pub use tm1637::Tm1637;
pub use traits::{Clock, DelayUs, PinAllocator, PinId, PixelSink, Rgb, SegmentDisplay, TwoWirePins};

// Config re-exports
pub use config::{DisplayConfig, IndicatorConfig, LedConfig};
