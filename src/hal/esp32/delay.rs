//! Busy-wait delay on the ROM `ets_delay_us` routine.

use embedded_hal::delay::DelayNs;
use esp_idf_hal::delay::Ets;

use crate::traits::DelayUs;

/// Microsecond busy-wait that never yields to the scheduler.
///
/// FreeRTOS delays have tick resolution and would stretch a 5 µs bus
/// half-period to milliseconds.
pub struct Esp32Delay {
    ets: Ets,
}

impl Esp32Delay {
    /// Creates a new delay.
    pub fn new() -> Self {
        Self { ets: Ets }
    }
}

impl Default for Esp32Delay {
    fn default() -> Self {
        Self::new()
    }
}

impl DelayUs for Esp32Delay {
    #[inline]
    fn delay_us(&mut self, us: u32) {
        DelayNs::delay_us(&mut self.ets, us);
    }
}
