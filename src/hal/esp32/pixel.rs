//! WS2812 status LED on the ESP32 RMT peripheral.

use esp_idf_hal::gpio::OutputPin;
use esp_idf_hal::peripheral::Peripheral;
use esp_idf_hal::rmt::RmtChannel;
use smart_leds::SmartLedsWrite;
use ws2812_esp32_rmt_driver::{Ws2812Esp32Rmt, Ws2812Esp32RmtDriverError};

use crate::traits::{PixelSink, Rgb};

/// Single WS2812 pixel.
///
/// `set_color` only latches; nothing reaches the LED until `show`, which
/// hands the latched color to the RMT writer (GRB wire order is handled
/// by the driver).
///
/// # Example
///
/// ```ignore
/// use status_indicator::hal::esp32::Esp32Pixel;
/// use status_indicator::traits::{PixelSink, Rgb};
///
/// let peripherals = Peripherals::take()?;
/// let mut led = Esp32Pixel::new(peripherals.rmt.channel0, peripherals.pins.gpio4)?;
/// led.set_color(Rgb::new(0, 40, 0))?;
/// led.show()?;
/// ```
pub struct Esp32Pixel<'d> {
    ws: Ws2812Esp32Rmt<'d>,
    latched: Rgb,
}

impl<'d> Esp32Pixel<'d> {
    /// Creates the RMT writer for the LED data pin. The LED starts off.
    ///
    /// # Errors
    ///
    /// Returns an error if the RMT channel cannot be configured.
    pub fn new<C: RmtChannel>(
        channel: impl Peripheral<P = C> + 'd,
        pin: impl Peripheral<P = impl OutputPin> + 'd,
    ) -> Result<Self, Ws2812Esp32RmtDriverError> {
        let ws = Ws2812Esp32Rmt::new(channel, pin)?;
        Ok(Self {
            ws,
            latched: Rgb::default(),
        })
    }
}

impl PixelSink for Esp32Pixel<'_> {
    type Error = Ws2812Esp32RmtDriverError;

    fn set_color(&mut self, color: Rgb) -> Result<(), Self::Error> {
        self.latched = color;
        Ok(())
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        self.ws.write(core::iter::once(self.latched))
    }
}
