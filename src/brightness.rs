//! Status LED brightness waveforms.
//!
//! [`BrightnessEngine::compute`] is a pure function of the millisecond
//! counter: each mode takes `now_ms` modulo its period, so nothing carries
//! over between ticks and the output is reproducible for any timestamp.
//!
//! # Modes
//!
//! | Mode | Shape | Period |
//! |------|-------|--------|
//! | [`Classic`](AnimationMode::Classic) | Symmetric triangle | 3000 ms |
//! | [`Flow`](AnimationMode::Flow) | Triangle skewed by power flow | 3000 ms |
//! | [`Heartbeat`](AnimationMode::Heartbeat) | Double pulse | 60000 / bpm |
//!
//! # Example
//!
//! ```rust
//! use status_indicator::brightness::{AlertLevel, AnimationMode, BrightnessEngine};
//!
//! let engine = BrightnessEngine::new(50);
//!
//! // Classic peaks halfway through the period
//! assert_eq!(engine.compute(AnimationMode::Classic, 0, AlertLevel::Normal, 0), 0);
//! assert_eq!(engine.compute(AnimationMode::Classic, 1500, AlertLevel::Normal, 0), 50);
//!
//! // Heartbeat idles at 15% of max
//! assert_eq!(engine.compute(AnimationMode::Heartbeat, 0, AlertLevel::Normal, 0), 7);
//! ```

/// Default triangle period in milliseconds.
pub const DEFAULT_PERIOD_MS: u32 = 3000;

/// Power (W) beyond which Flow mode skews the triangle.
pub const FLOW_THRESHOLD_W: i32 = 50;

/// How the status LED animates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AnimationMode {
    /// Symmetric breathing.
    #[default]
    Classic,
    /// Breathing skewed by charge/discharge direction.
    Flow,
    /// Cardiac double pulse whose rate follows the alert level.
    Heartbeat,
}

/// Severity of the most serious active event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AlertLevel {
    /// Nothing to report.
    #[default]
    Normal,
    /// Degraded operation.
    Warning,
    /// Fault.
    Error,
}

impl AlertLevel {
    /// Heart rate used by the Heartbeat animation.
    pub const fn bpm(self) -> u32 {
        match self {
            AlertLevel::Normal => 35,
            AlertLevel::Warning => 70,
            AlertLevel::Error => 100,
        }
    }

    /// Heartbeat period in milliseconds (`60000 / bpm`, truncated).
    pub const fn heartbeat_period_ms(self) -> u32 {
        60_000 / self.bpm()
    }
}

const HEARTBEAT_BASE: f32 = 0.15;
const HEARTBEAT_PEAK1: f32 = 0.80;
const HEARTBEAT_PEAK2: f32 = 0.55;
const HEARTBEAT_DEVIATION: f32 = 0.05;

/// `(phase, level)` keyframes of one heartbeat, both as fractions.
///
/// Consecutive pairs bound the seven linear segments. The curve starts and
/// ends at the baseline so it repeats without a jump.
pub const HEARTBEAT_KEYFRAMES: [(f32, f32); 8] = [
    (0.00, HEARTBEAT_BASE),
    (0.10, HEARTBEAT_BASE - HEARTBEAT_DEVIATION),
    (0.20, HEARTBEAT_BASE - HEARTBEAT_DEVIATION * 2.0),
    (0.25, HEARTBEAT_PEAK1),
    (0.30, HEARTBEAT_BASE - HEARTBEAT_DEVIATION),
    (0.40, HEARTBEAT_PEAK2),
    (0.55, HEARTBEAT_BASE + HEARTBEAT_DEVIATION * 2.0),
    (1.00, HEARTBEAT_BASE),
];

/// Arduino-style integer `map`: project `x` from `[in_min, in_max]` onto
/// `[out_min, out_max]`. Degenerate input ranges map to `out_min`.
fn map_u32(x: u32, in_min: u32, in_max: u32, out_min: u32, out_max: u32) -> u32 {
    if in_max <= in_min {
        return out_min;
    }
    let x = x.clamp(in_min, in_max);
    // period * span exceeds u32 above roughly 16.8e6 ms at full scale.
    let scaled =
        u64::from(x - in_min) * u64::from(out_max - out_min) / u64::from(in_max - in_min);
    scaled as u32 + out_min
}

/// Linear interpolation of `x` from `[in_min, in_max]` onto `[out_min, out_max]`.
fn map_f32(x: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    (x - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Computes the status LED brightness for a point in time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BrightnessEngine {
    max_brightness: u8,
    period_ms: u32,
}

impl BrightnessEngine {
    /// Engine with the default 3000 ms triangle period.
    pub const fn new(max_brightness: u8) -> Self {
        Self {
            max_brightness,
            period_ms: DEFAULT_PERIOD_MS,
        }
    }

    /// Override the triangle period (Classic and Flow). Zero is raised to 1.
    pub const fn with_period_ms(mut self, period_ms: u32) -> Self {
        self.period_ms = if period_ms == 0 { 1 } else { period_ms };
        self
    }

    /// Upper bound of every output.
    pub const fn max_brightness(&self) -> u8 {
        self.max_brightness
    }

    /// Triangle period for Classic and Flow.
    pub const fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Brightness in `0..=max_brightness` at `now_ms`.
    ///
    /// `power_w` is positive while charging and negative while discharging;
    /// only Flow uses it. `alert` only affects Heartbeat.
    pub fn compute(&self, mode: AnimationMode, now_ms: u32, alert: AlertLevel, power_w: i32) -> u8 {
        match mode {
            AnimationMode::Classic => self.triangle(now_ms, 0.5),
            AnimationMode::Flow => self.triangle(now_ms, Self::flow_midpoint(power_w)),
            AnimationMode::Heartbeat => self.heartbeat(now_ms, alert),
        }
    }

    /// Where the Flow triangle peaks, as a fraction of the period.
    ///
    /// Discharging gives a long rise and a short fall, charging the reverse.
    pub fn flow_midpoint(power_w: i32) -> f32 {
        if power_w < -FLOW_THRESHOLD_W {
            0.95
        } else if power_w > FLOW_THRESHOLD_W {
            0.05
        } else {
            0.5
        }
    }

    /// Triangle wave: 0 → max over `[0, midpoint)`, max → 0 over the rest.
    pub fn triangle(&self, now_ms: u32, midpoint: f32) -> u8 {
        let max = u32::from(self.max_brightness);
        let period = self.period_ms;
        // NaN clamps to NaN; `as` then yields 0.
        let mid = (midpoint.clamp(0.0, 1.0) * period as f32) as u32;
        let ms = now_ms % period;

        let level = if ms < mid {
            map_u32(ms, 0, mid, 0, max)
        } else {
            max - map_u32(ms, mid, period, 0, max)
        };

        level.min(max) as u8
    }

    /// Heartbeat curve for the given alert level.
    pub fn heartbeat(&self, now_ms: u32, alert: AlertLevel) -> u8 {
        let period = alert.heartbeat_period_ms();
        let phase = (now_ms % period) as f32 / period as f32;
        let level = heartbeat_level(phase);

        let value = (level * f32::from(self.max_brightness)) as u32;
        value.min(u32::from(self.max_brightness)) as u8
    }
}

/// Heartbeat level (fraction of max) at `phase` in `[0, 1)`.
pub fn heartbeat_level(phase: f32) -> f32 {
    let phase = phase.clamp(0.0, 1.0);
    HEARTBEAT_KEYFRAMES
        .windows(2)
        .find(|w| phase < w[1].0)
        .map(|w| map_f32(phase, w[0].0, w[1].0, w[0].1, w[1].1))
        .unwrap_or(HEARTBEAT_BASE)
        .clamp(0.0, 1.0)
}
