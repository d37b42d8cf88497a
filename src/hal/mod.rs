//! Hardware Abstraction Layer implementations.
//!
//! This module contains concrete implementations of the traits
//! defined in [`crate::traits`] for various platforms.
//!
//! # Available Implementations
//!
//! - `mock`: Test implementations for desktop development
//! - `pins`: Board-independent GPIO ownership registry
//! - `esp32`: ESP32-S3 with WS2812 status LED and TM1637 display (requires `esp32` feature)

pub mod mock;
pub mod pins;

#[cfg(feature = "esp32")]
pub mod esp32;

pub use mock::*;
pub use pins::PinRegistry;

#[cfg(feature = "esp32")]
pub use esp32::*;
