//! Display abstraction for four-digit seven-segment modules.
//!
//! This module defines the [`SegmentDisplay`] trait. The bit-banged
//! [`Tm1637`](crate::tm1637::Tm1637) driver implements it; tests can use
//! [`MockSegmentDisplay`](crate::hal::MockSegmentDisplay) to capture frames
//! without timing a bus.

use crate::format::{format, FormatRequest};
use crate::segment::SegmentFrame;

/// Four-digit seven-segment display.
///
/// Writes are fire-and-forget: the bus has no recoverable error channel, so
/// none of these methods return a `Result`.
///
/// # Example
///
/// ```
/// use status_indicator::traits::SegmentDisplay;
/// use status_indicator::hal::MockSegmentDisplay;
/// use status_indicator::FormatRequest;
///
/// let mut display = MockSegmentDisplay::new();
/// display.show(&FormatRequest::text("SOC"));
/// assert_eq!(display.frames.len(), 1);
/// ```
pub trait SegmentDisplay {
    /// Transmit a complete frame, followed by the display-control command.
    fn write_frame(&mut self, frame: &SegmentFrame);

    /// Set the brightness nibble (0..=7) and apply it immediately.
    fn set_brightness(&mut self, level: u8);

    /// Bring the display up: store `brightness` and blank it.
    fn begin(&mut self, brightness: u8) {
        self.set_brightness(brightness);
        self.clear();
    }

    /// Blank every digit.
    fn clear(&mut self) {
        self.write_frame(&SegmentFrame::BLANK);
    }

    /// Format `request` and transmit the result.
    fn show(&mut self, request: &FormatRequest<'_>) {
        let frame = format(request);
        self.write_frame(&frame);
    }
}
