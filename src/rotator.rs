//! Time-sliced diagnostic rotation for the segment display.
//!
//! The display cycles through four metrics on a fixed 16 second duty cycle.
//! Each metric gets two 2 second windows: its label first, then its live
//! value.
//!
//! ```text
//! second  0-1   2-3    4-5   6-7    8-9   10-11  12-13  14-15
//! shows   SOC   87.50  VOLT  48.2V  CURR  12.5A  CAP    45.3k
//! ```
//!
//! Slot selection is a pure table lookup; [`DisplayRotator`] only adds the
//! once-per-second rate limit so the bus is not hammered every tick.

use crate::format::FormatRequest;
use crate::indicator::Telemetry;
use crate::segment::DotMask;

/// Length of the full rotation in seconds.
pub const CYCLE_SECONDS: u32 = 16;

/// Seconds each window stays on screen.
pub const WINDOW_SECONDS: u32 = 2;

/// Default minimum spacing between display refreshes.
pub const DEFAULT_REFRESH_INTERVAL_MS: u32 = 1000;

/// Voltages from this many decivolts up are shown as whole volts.
const WHOLE_VOLTS_FROM_DV: u16 = 1000;

/// A telemetry quantity shown on the display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Metric {
    /// State of charge.
    Charge,
    /// Pack voltage.
    Voltage,
    /// Pack current.
    Current,
    /// Remaining capacity.
    Capacity,
}

impl Metric {
    /// Four-character caption.
    pub const fn label(self) -> &'static str {
        match self {
            Metric::Charge => "SOC ",
            Metric::Voltage => "VOLT",
            Metric::Current => "CURR",
            Metric::Capacity => "CAP ",
        }
    }

    /// Formatting request for this metric's live value.
    ///
    /// Values are fed to the fixed-point formatter half a display unit high
    /// so truncation lands on the integer telemetry value exactly.
    pub fn value_request(self, telemetry: &Telemetry) -> FormatRequest<'static> {
        match self {
            Metric::Charge => {
                let percent = (f32::from(telemetry.charge_pptt) + 0.5) / 100.0;
                FormatRequest::fixed_two_decimals(percent, DotMask::at(1))
            }
            Metric::Voltage if telemetry.voltage_dv >= WHOLE_VOLTS_FROM_DV => {
                FormatRequest::integer(i32::from(telemetry.voltage_dv / 10), false)
            }
            Metric::Voltage => {
                let volts = (f32::from(telemetry.voltage_dv) + 0.5) / 10.0;
                FormatRequest::fixed_with_suffix_auto(volts, "V", true)
            }
            Metric::Current => {
                let amps = (f32::from(telemetry.current_da.unsigned_abs()) + 0.5) / 10.0;
                FormatRequest::fixed_with_suffix_auto(amps, "A", true)
            }
            Metric::Capacity => {
                // Tenths of a kWh.
                let tenths = telemetry.capacity_wh / 100;
                let kwh = (tenths as f32 + 0.5) / 10.0;
                FormatRequest::fixed_with_suffix_auto(kwh, "k", true)
            }
        }
    }
}

/// Whether a window shows a metric's caption or its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SlotKind {
    /// Caption, e.g. `VOLT`.
    Label,
    /// Live reading.
    Value,
}

/// One 2 second window of the rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Slot {
    /// Caption or value.
    pub kind: SlotKind,
    /// Which metric.
    pub metric: Metric,
}

impl Slot {
    const fn label(metric: Metric) -> Self {
        Self {
            kind: SlotKind::Label,
            metric,
        }
    }

    const fn value(metric: Metric) -> Self {
        Self {
            kind: SlotKind::Value,
            metric,
        }
    }

    /// What to put on the display for this window.
    pub fn request(&self, telemetry: &Telemetry) -> FormatRequest<'static> {
        match self.kind {
            SlotKind::Label => FormatRequest::text(self.metric.label()),
            SlotKind::Value => self.metric.value_request(telemetry),
        }
    }
}

/// The rotation, one entry per 2 second window.
pub const DUTY_CYCLE: [Slot; (CYCLE_SECONDS / WINDOW_SECONDS) as usize] = [
    Slot::label(Metric::Charge),
    Slot::value(Metric::Charge),
    Slot::label(Metric::Voltage),
    Slot::value(Metric::Voltage),
    Slot::label(Metric::Current),
    Slot::value(Metric::Current),
    Slot::label(Metric::Capacity),
    Slot::value(Metric::Capacity),
];

/// Window for a time in whole seconds.
pub const fn select_slot(now_s: u32) -> Slot {
    DUTY_CYCLE[((now_s % CYCLE_SECONDS) / WINDOW_SECONDS) as usize]
}

/// Rate-limited slot source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayRotator {
    last_refresh_ms: Option<u32>,
    interval_ms: u32,
}

impl Default for DisplayRotator {
    fn default() -> Self {
        Self::new(DEFAULT_REFRESH_INTERVAL_MS)
    }
}

impl DisplayRotator {
    /// Rotator that refreshes at most once per `interval_ms`.
    pub const fn new(interval_ms: u32) -> Self {
        Self {
            last_refresh_ms: None,
            interval_ms,
        }
    }

    /// Minimum spacing between refreshes.
    pub const fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Timestamp of the last refresh, if any.
    pub const fn last_refresh_ms(&self) -> Option<u32> {
        self.last_refresh_ms
    }

    /// The slot to draw now, or `None` if the last refresh is too recent.
    ///
    /// The first call always refreshes. Elapsed time is computed with
    /// wrapping subtraction so counter rollover does not stall the display.
    pub fn poll(&mut self, now_ms: u32) -> Option<Slot> {
        if let Some(last) = self.last_refresh_ms {
            if now_ms.wrapping_sub(last) < self.interval_ms {
                return None;
            }
        }
        self.last_refresh_ms = Some(now_ms);
        Some(select_slot(now_ms / 1000))
    }
}
