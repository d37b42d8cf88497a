//! Trait definitions for hardware abstraction.
//!
//! This module defines the abstractions that allow the indicator to run on
//! ESP32 hardware or against desktop mocks.
//!
//! # Submodules
//!
//! - `hardware`: Clock, microsecond delay, two-wire bus pins, RGB pixel, pin allocation
//! - `display`: Seven-segment display trait
//!
//! # Hardware Abstraction
//!
//! The key hardware traits are:
//!
//! - [`Clock`]: Monotonic millisecond counter
//! - [`DelayUs`]: Busy-wait used for bus timing
//! - [`TwoWirePins`]: Clock/data lines of the display bus
//! - [`PixelSink`]: Status LED output
//! - [`PinAllocator`]: Startup GPIO claims
//! - [`SegmentDisplay`]: Frame-level display access

pub mod display;
pub mod hardware;

pub use display::*;
pub use hardware::*;
