//! The status indicator subsystem.
//!
//! [`StatusIndicator`] owns the pixel sink and the optional segment display
//! and is driven by the outer loop through [`tick`](StatusIndicator::tick).
//! Each tick has two independent paths:
//!
//! ```text
//!   display:  rotator.poll ──► Slot ──► FormatRequest ──► SegmentDisplay::show
//!   LED:      BrightnessEngine ──► color::select ──► set_color ──► show
//! ```
//!
//! The display path runs at most once per refresh interval and is skipped
//! entirely when no display is fitted. The LED path runs every tick.
//!
//! # Concurrency
//!
//! Not reentrant. Every method takes `&mut self` and a frame write
//! busy-waits on the bus, so the indicator must be driven from a single
//! execution context (typically the main loop).
//!
//! # Example
//!
//! ```rust
//! use status_indicator::{IndicatorConfig, StatusIndicator, SystemSnapshot};
//! use status_indicator::config::DisplayConfig;
//! use status_indicator::hal::{MockPixel, MockSegmentDisplay, PinRegistry};
//!
//! let config = IndicatorConfig::default()
//!     .with_display(DisplayConfig::default().with_pins(16, 17));
//! let mut pins = PinRegistry::new();
//!
//! let mut indicator = StatusIndicator::init(
//!     &config,
//!     &mut pins,
//!     MockPixel::new(),
//!     Some(MockSegmentDisplay::new()),
//! )
//! .unwrap();
//!
//! let report = indicator.tick(1500, &SystemSnapshot::default()).unwrap();
//! assert_eq!(report.brightness, 40);
//! assert_eq!(pins.owner(16), Some("TM1637"));
//! ```

use crate::brightness::{AlertLevel, AnimationMode, BrightnessEngine};
use crate::color::{self, HealthStatus};
use crate::config::IndicatorConfig;
use crate::error::IndicatorError;
use crate::format::FormatRequest;
use crate::rotator::{DisplayRotator, Slot};
use crate::traits::{PinAllocator, PixelSink, Rgb, SegmentDisplay};

/// Pin owner name for the status LED.
pub const LED_OWNER: &str = "LED";

/// Pin owner name for the segment display.
pub const DISPLAY_OWNER: &str = "TM1637";

// ============================================================================
// Inputs
// ============================================================================

/// Battery readings shown on the display, in fixed-point units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Telemetry {
    /// State of charge in hundredths of a percent (`0..=10000`).
    pub charge_pptt: u16,
    /// Pack voltage in decivolts.
    pub voltage_dv: u16,
    /// Pack current in deciamps; sign is ignored for display.
    pub current_da: i16,
    /// Remaining capacity in watt-hours.
    pub capacity_wh: u32,
}

/// Read-only view of device state for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemSnapshot {
    /// LED animation.
    pub mode: AnimationMode,
    /// Most severe active event.
    pub alert: AlertLevel,
    /// Overall health, selects the LED color.
    pub health: HealthStatus,
    /// Active power in watts; positive while charging.
    pub power_w: i32,
    /// Values for the display rotation.
    pub telemetry: Telemetry,
}

// ============================================================================
// Outputs
// ============================================================================

/// What the display path did during a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayUpdate {
    /// No display fitted.
    Absent,
    /// Refresh interval not yet elapsed; the previous frame stays up.
    Held,
    /// This slot was drawn.
    Shown(Slot),
}

/// Result of one [`StatusIndicator::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickReport {
    /// Brightness computed by the engine.
    pub brightness: u8,
    /// Color sent to the pixel.
    pub color: Rgb,
    /// Display path outcome.
    pub display: DisplayUpdate,
}

// ============================================================================
// Indicator
// ============================================================================

/// Status LED plus optional rotating segment display.
///
/// # Type Parameters
///
/// - `L`: Addressable LED ([`PixelSink`])
/// - `S`: Segment display ([`SegmentDisplay`])
pub struct StatusIndicator<L: PixelSink, S: SegmentDisplay> {
    pixel: L,
    display: Option<S>,
    engine: BrightnessEngine,
    rotator: DisplayRotator,
}

impl<L: PixelSink, S: SegmentDisplay> StatusIndicator<L, S> {
    /// Claim pins and bring up the hardware.
    ///
    /// The LED pin is claimed as `"LED"`. When the display is configured
    /// present its CLK/DIO pins are claimed as `"TM1637"`, then it is
    /// started at the configured brightness and shows the boot banner.
    /// A display that is configured absent is dropped.
    ///
    /// # Errors
    ///
    /// [`IndicatorError::PinAllocation`] if either claim is refused. A refused
    /// display claim also releases the LED pin, so a failed init holds nothing.
    pub fn init<A>(
        config: &IndicatorConfig,
        allocator: &mut A,
        pixel: L,
        display: Option<S>,
    ) -> Result<Self, IndicatorError>
    where
        A: PinAllocator + ?Sized,
    {
        if !allocator.alloc_pins(LED_OWNER, &[config.led.pin]) {
            #[cfg(feature = "defmt")]
            defmt::warn!("indicator: LED setup failed on GPIO {}", config.led.pin);
            return Err(IndicatorError::PinAllocation {
                owner: LED_OWNER,
                pin: config.led.pin,
            });
        }

        let engine = BrightnessEngine::new(config.led.max_brightness)
            .with_period_ms(config.led.period_ms);
        let rotator = DisplayRotator::new(config.display.refresh_interval_ms);

        let display = match display {
            Some(mut display) if config.display.present => {
                let pins = [config.display.clk_pin, config.display.dio_pin];
                if !allocator.alloc_pins(DISPLAY_OWNER, &pins) {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("indicator: display setup failed on GPIO {}", pins);
                    allocator.free_pins(LED_OWNER);
                    return Err(IndicatorError::PinAllocation {
                        owner: DISPLAY_OWNER,
                        pin: config.display.clk_pin,
                    });
                }
                display.begin(config.display.brightness);
                display.show(&FormatRequest::text(config.display.boot_text.as_str()));
                Some(display)
            }
            _ => None,
        };

        #[cfg(feature = "defmt")]
        defmt::info!("indicator: ready, display={}", display.is_some());

        Ok(Self {
            pixel,
            display,
            engine,
            rotator,
        })
    }

    /// Run one update of both paths.
    ///
    /// # Errors
    ///
    /// Propagates the pixel sink's error. The display path has no error
    /// channel.
    pub fn tick(&mut self, now_ms: u32, state: &SystemSnapshot) -> Result<TickReport, L::Error> {
        let display = self.refresh_display(now_ms, state);

        let brightness = self
            .engine
            .compute(state.mode, now_ms, state.alert, state.power_w);
        let color = color::select(state.health, brightness, self.engine.max_brightness());
        self.pixel.set_color(color)?;
        self.pixel.show()?;

        Ok(TickReport {
            brightness,
            color,
            display,
        })
    }

    fn refresh_display(&mut self, now_ms: u32, state: &SystemSnapshot) -> DisplayUpdate {
        let Some(display) = self.display.as_mut() else {
            return DisplayUpdate::Absent;
        };
        let Some(slot) = self.rotator.poll(now_ms) else {
            return DisplayUpdate::Held;
        };

        #[cfg(feature = "defmt")]
        defmt::debug!("indicator: slot {}", slot);
        display.show(&slot.request(&state.telemetry));
        DisplayUpdate::Shown(slot)
    }

    /// Whether the display path is active.
    pub fn has_display(&self) -> bool {
        self.display.is_some()
    }

    /// The brightness engine in use.
    pub fn engine(&self) -> &BrightnessEngine {
        &self.engine
    }

    /// The display rotator.
    pub fn rotator(&self) -> &DisplayRotator {
        &self.rotator
    }

    /// The pixel sink.
    pub fn pixel(&self) -> &L {
        &self.pixel
    }

    /// The segment display, if fitted.
    pub fn display(&self) -> Option<&S> {
        self.display.as_ref()
    }

    /// Give back the hardware handles.
    pub fn release(self) -> (L, Option<S>) {
        (self.pixel, self.display)
    }
}
