//! Mock implementations for testing without hardware.
//!
//! This module provides test doubles for the hardware traits, enabling
//! development and testing on desktop without a board attached.
//!
//! # Available Mocks
//!
//! | Mock | Trait | Purpose |
//! |------|-------|---------|
//! | [`MockClock`] | [`Clock`] | Controllable time source |
//! | [`MockDelay`] | [`DelayUs`] | Accumulates requested delays |
//! | [`MockBus`] | [`TwoWirePins`] | Decodes pin edges into bus events |
//! | [`MockPixel`] | [`PixelSink`] | Records latched and shown colors |
//! | [`MockSegmentDisplay`] | [`SegmentDisplay`] | Captures frames without a bus |
//!
//! # Example
//!
//! ```rust
//! use status_indicator::hal::{MockBus, MockDelay};
//! use status_indicator::tm1637::Tm1637;
//! use status_indicator::traits::SegmentDisplay;
//! use status_indicator::segment::SegmentFrame;
//!
//! let mut display = Tm1637::new(MockBus::new(), MockDelay::new());
//! display.write_frame(&SegmentFrame::from_text("CAP"));
//!
//! let (bus, _) = display.release();
//! assert_eq!(bus.transactions().len(), 3);
//! assert_eq!(bus.ack_reads(), 7);
//! ```
//!
//! [`Clock`]: crate::traits::Clock
//! [`DelayUs`]: crate::traits::DelayUs
//! [`TwoWirePins`]: crate::traits::TwoWirePins
//! [`PixelSink`]: crate::traits::PixelSink
//! [`SegmentDisplay`]: crate::traits::SegmentDisplay

extern crate alloc;
use alloc::vec::Vec;

use crate::segment::SegmentFrame;
use crate::traits::{Clock, DelayUs, PixelSink, Rgb, SegmentDisplay, TwoWirePins};

// ============================================================================
// Time Mocks
// ============================================================================

/// Mock clock for testing.
///
/// Provides a controllable time source for testing time-dependent behavior.
/// Advancing wraps at `u32::MAX` like a hardware millisecond counter.
///
/// # Example
///
/// ```rust
/// use status_indicator::hal::MockClock;
/// use status_indicator::traits::Clock;
///
/// let mut clock = MockClock::new();
/// assert_eq!(clock.now_ms(), 0);
///
/// clock.set(1000);
/// assert_eq!(clock.now_ms(), 1000);
///
/// clock.advance(500);
/// assert_eq!(clock.now_ms(), 1500);
/// ```
#[derive(Debug)]
pub struct MockClock {
    current_ms: u32,
}

impl MockClock {
    /// Creates a new mock clock starting at 0ms.
    pub fn new() -> Self {
        Self { current_ms: 0 }
    }

    /// Sets the current time in milliseconds.
    pub fn set(&mut self, ms: u32) {
        self.current_ms = ms;
    }

    /// Advances the clock by the given duration.
    pub fn advance(&mut self, ms: u32) {
        self.current_ms = self.current_ms.wrapping_add(ms);
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u32 {
        self.current_ms
    }
}

/// Mock delay that returns immediately and tallies what was requested.
#[derive(Debug, Default)]
pub struct MockDelay {
    /// Sum of all requested delays in microseconds.
    pub total_us: u64,
    /// Number of `delay_us` calls.
    pub calls: usize,
}

impl MockDelay {
    /// Creates a new mock delay with zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DelayUs for MockDelay {
    fn delay_us(&mut self, us: u32) {
        self.total_us += u64::from(us);
        self.calls += 1;
    }
}

// ============================================================================
// Bus Mock
// ============================================================================

/// Protocol-level event decoded from pin activity on [`MockBus`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BusEvent {
    /// Data fell while clock was high.
    Start,
    /// Data rose while clock was high.
    Stop,
    /// A data bit was clocked in by a full clock pulse.
    BitLatched(bool),
    /// The host released the data line for an acknowledgement.
    Released,
    /// The host sampled the data line; carries the level read.
    AckRead(bool),
}

/// Two-wire bus mock that watches pin edges the way the display would.
///
/// A bit is recorded when the clock rises with the data line driven and
/// then falls again; a data edge while the clock is high is a start or stop
/// condition instead. [`bytes`](Self::bytes) and
/// [`transactions`](Self::transactions) reassemble LSB-first bytes.
#[derive(Debug)]
pub struct MockBus {
    /// Decoded events in order.
    pub events: Vec<BusEvent>,
    clk: bool,
    dio: bool,
    dio_output: bool,
    in_transaction: bool,
    pending_bit: Option<bool>,
    acknowledge: bool,
}

impl MockBus {
    /// Creates an idle bus (both lines high) with a display that acknowledges.
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            clk: true,
            dio: true,
            dio_output: true,
            in_transaction: false,
            pending_bit: None,
            acknowledge: true,
        }
    }

    /// Simulate a bus with no display attached: the data line floats high
    /// during the acknowledgement slot.
    pub fn without_ack(mut self) -> Self {
        self.acknowledge = false;
        self
    }

    /// Whether the host is currently driving the data line.
    pub fn dio_is_output(&self) -> bool {
        self.dio_output
    }

    /// Number of events matching `pred`.
    pub fn count(&self, pred: impl Fn(&BusEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }

    /// Number of acknowledgement samples taken.
    pub fn ack_reads(&self) -> usize {
        self.count(|e| matches!(e, BusEvent::AckRead(_)))
    }

    /// Bytes grouped by start/stop transaction.
    pub fn transactions(&self) -> Vec<Vec<u8>> {
        let mut out = Vec::new();
        let mut current: Vec<u8> = Vec::new();
        let mut byte = 0u8;
        let mut bits = 0;

        for event in &self.events {
            match *event {
                BusEvent::Start => {
                    current = Vec::new();
                    byte = 0;
                    bits = 0;
                }
                BusEvent::BitLatched(b) => {
                    if b {
                        byte |= 1 << bits;
                    }
                    bits += 1;
                    if bits == 8 {
                        current.push(byte);
                        byte = 0;
                        bits = 0;
                    }
                }
                BusEvent::Stop => out.push(core::mem::take(&mut current)),
                BusEvent::Released | BusEvent::AckRead(_) => {}
            }
        }

        out
    }

    /// Every transmitted byte in order.
    pub fn bytes(&self) -> Vec<u8> {
        self.transactions().into_iter().flatten().collect()
    }

    /// Frames written with the data/address sequence, in order.
    pub fn frames(&self) -> Vec<SegmentFrame> {
        self.transactions()
            .iter()
            .filter(|t| t.len() == 5 && t[0] == crate::tm1637::CMD_ADDRESS)
            .map(|t| SegmentFrame::new([t[1], t[2], t[3], t[4]]))
            .collect()
    }

    /// Level on the data line as seen by both ends.
    fn line_level(&self) -> bool {
        if self.dio_output {
            self.dio
        } else {
            !self.acknowledge
        }
    }
}

impl Default for MockBus {
    fn default() -> Self {
        Self::new()
    }
}

impl TwoWirePins for MockBus {
    fn set_clk(&mut self, high: bool) {
        match (self.clk, high) {
            (false, true) if self.in_transaction && self.dio_output => {
                self.pending_bit = Some(self.dio);
            }
            (true, false) => {
                if let Some(bit) = self.pending_bit.take() {
                    self.events.push(BusEvent::BitLatched(bit));
                }
            }
            _ => {}
        }
        self.clk = high;
    }

    fn set_dio(&mut self, high: bool) {
        if self.dio_output && self.clk && self.dio != high {
            if high && self.in_transaction {
                self.pending_bit = None;
                self.in_transaction = false;
                self.events.push(BusEvent::Stop);
            } else if !high && !self.in_transaction {
                self.in_transaction = true;
                self.events.push(BusEvent::Start);
            }
        }
        self.dio = high;
    }

    fn release_dio(&mut self) {
        self.dio_output = false;
        self.events.push(BusEvent::Released);
    }

    fn drive_dio(&mut self) {
        self.dio_output = true;
    }

    fn read_dio(&mut self) -> bool {
        let level = self.line_level();
        self.events.push(BusEvent::AckRead(level));
        level
    }
}

// ============================================================================
// Output Mocks
// ============================================================================

/// Mock status pixel.
///
/// `latched` follows [`PixelSink::set_color`]; `shown` receives a copy of the
/// latched color on every [`PixelSink::show`].
///
/// # Example
///
/// ```rust
/// use status_indicator::hal::MockPixel;
/// use status_indicator::traits::{PixelSink, Rgb};
///
/// let mut pixel = MockPixel::new();
/// pixel.set_color(Rgb::new(0, 0, 9)).unwrap();
/// assert!(pixel.shown.is_empty());
///
/// pixel.show().unwrap();
/// assert_eq!(pixel.shown, vec![Rgb::new(0, 0, 9)]);
/// ```
#[derive(Debug, Default)]
pub struct MockPixel {
    /// Color waiting for the next `show`.
    pub latched: Rgb,
    /// Colors pushed to the "hardware", oldest first.
    pub shown: Vec<Rgb>,
    /// Number of `set_color` calls.
    pub set_count: usize,
    /// When set, every operation fails.
    pub fail: bool,
}

impl MockPixel {
    /// Creates a new mock pixel (off, nothing shown).
    pub fn new() -> Self {
        Self::default()
    }

    /// A pixel whose operations always fail.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// The last color that reached the hardware.
    pub fn last_shown(&self) -> Option<Rgb> {
        self.shown.last().copied()
    }
}

impl PixelSink for MockPixel {
    type Error = ();

    fn set_color(&mut self, color: Rgb) -> Result<(), ()> {
        if self.fail {
            return Err(());
        }
        self.latched = color;
        self.set_count += 1;
        Ok(())
    }

    fn show(&mut self) -> Result<(), ()> {
        if self.fail {
            return Err(());
        }
        self.shown.push(self.latched);
        Ok(())
    }
}

/// Mock display that records frames instead of clocking a bus.
#[derive(Debug)]
pub struct MockSegmentDisplay {
    /// Frames written, oldest first.
    pub frames: Vec<SegmentFrame>,
    /// Current brightness nibble.
    pub brightness: u8,
}

impl MockSegmentDisplay {
    /// Creates a new mock display at full brightness.
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            brightness: crate::tm1637::MAX_BRIGHTNESS,
        }
    }

    /// The most recent frame.
    pub fn last_frame(&self) -> Option<SegmentFrame> {
        self.frames.last().copied()
    }
}

impl Default for MockSegmentDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl SegmentDisplay for MockSegmentDisplay {
    fn write_frame(&mut self, frame: &SegmentFrame) {
        self.frames.push(*frame);
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness = level & crate::tm1637::MAX_BRIGHTNESS;
    }
}
