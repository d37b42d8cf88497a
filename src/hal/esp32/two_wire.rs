//! TM1637 bus lines on ESP32 GPIOs.
//!
//! CLK is a push-pull output. DIO is configured open drain with input
//! enabled, so "releasing" it is just writing high: the module's pull-up
//! holds the line and the display can pull it low to acknowledge.

use esp_idf_hal::gpio::{InputOutput, InputPin, Output, OutputPin, PinDriver, Pull};
use esp_idf_hal::peripheral::Peripheral;

use crate::traits::TwoWirePins;

/// CLK/DIO pair for a bit-banged TM1637.
///
/// # Example
///
/// ```ignore
/// use status_indicator::hal::esp32::{Esp32Delay, Esp32TwoWire};
/// use status_indicator::tm1637::Tm1637;
///
/// let peripherals = Peripherals::take()?;
/// let bus = Esp32TwoWire::new(peripherals.pins.gpio16, peripherals.pins.gpio17)?;
/// let display = Tm1637::new(bus, Esp32Delay::new());
/// ```
pub struct Esp32TwoWire<'d, CLK, DIO>
where
    CLK: OutputPin,
    DIO: InputPin + OutputPin,
{
    clk: PinDriver<'d, CLK, Output>,
    dio: PinDriver<'d, DIO, InputOutput>,
}

impl<'d, CLK, DIO> Esp32TwoWire<'d, CLK, DIO>
where
    CLK: OutputPin,
    DIO: InputPin + OutputPin,
{
    /// Configures both lines and leaves the bus idle (both high).
    ///
    /// # Errors
    ///
    /// Returns an error if GPIO initialization fails.
    pub fn new(
        clk_pin: impl Peripheral<P = CLK> + 'd,
        dio_pin: impl Peripheral<P = DIO> + 'd,
    ) -> Result<Self, esp_idf_hal::sys::EspError> {
        let mut clk = PinDriver::output(clk_pin)?;
        let mut dio = PinDriver::input_output_od(dio_pin)?;

        dio.set_pull(Pull::Up)?;
        clk.set_high()?;
        dio.set_high()?;

        Ok(Self { clk, dio })
    }
}

// GPIO writes on a configured pin only fail on invalid arguments, which
// `new` already ruled out.
impl<CLK, DIO> TwoWirePins for Esp32TwoWire<'_, CLK, DIO>
where
    CLK: OutputPin,
    DIO: InputPin + OutputPin,
{
    fn set_clk(&mut self, high: bool) {
        let _ = self.clk.set_level(high.into());
    }

    fn set_dio(&mut self, high: bool) {
        let _ = self.dio.set_level(high.into());
    }

    fn release_dio(&mut self) {
        let _ = self.dio.set_high();
    }

    fn drive_dio(&mut self) {
        // Open drain: the next set_dio takes the line back.
    }

    fn read_dio(&mut self) -> bool {
        self.dio.is_high()
    }
}
