//! Bit-banged driver for TM1637-class four-digit display controllers.
//!
//! The controller speaks a two-wire protocol that resembles, but is not, I2C:
//! there is no device address, and bytes travel least-significant bit first.
//!
//! # Transactions
//!
//! A frame write is three transactions, each framed by start/stop:
//!
//! ```text
//! [START] 0x40 [ACK] [STOP]                               data command, auto-increment
//! [START] 0xC0 [ACK] b0 [ACK] b1 [ACK] b2 [ACK] b3 [ACK] [STOP]   address 0, four digits
//! [START] 0x88|level [ACK] [STOP]                         display on, brightness
//! ```
//!
//! The acknowledgement bit is clocked and sampled but never acted on; a
//! missing display simply leaves the bus idle.
//!
//! # Concurrency
//!
//! Every operation busy-waits on [`DelayUs`] and takes `&mut self`. The
//! driver must only be used from one execution context; sharing it between
//! an interrupt handler and the main loop would interleave bus edges.
//!
//! # Example
//!
//! ```rust
//! use status_indicator::tm1637::Tm1637;
//! use status_indicator::traits::SegmentDisplay;
//! use status_indicator::hal::{MockBus, MockDelay};
//! use status_indicator::FormatRequest;
//!
//! let mut display = Tm1637::new(MockBus::new(), MockDelay::new());
//! display.begin(7);
//! display.show(&FormatRequest::text("SOC"));
//!
//! let (bus, _delay) = display.release();
//! assert_eq!(bus.bytes().last(), Some(&0x8F));
//! ```

use crate::segment::SegmentFrame;
use crate::traits::{DelayUs, SegmentDisplay, TwoWirePins};

/// Data command: write to display registers with automatic address increment.
pub const CMD_DATA_WRITE: u8 = 0x40;

/// Address command for digit 0.
pub const CMD_ADDRESS: u8 = 0xC0;

/// Display control command with the display-on bit set. OR in the brightness.
pub const CMD_DISPLAY_ON: u8 = 0x88;

/// Highest brightness nibble.
pub const MAX_BRIGHTNESS: u8 = 0x07;

/// Settle time around start/stop edges.
const EDGE_DELAY_US: u32 = 2;

/// Half-period of a data clock pulse.
const BIT_DELAY_US: u32 = 5;

/// TM1637 driver over a pair of bit-banged GPIOs.
///
/// # Type Parameters
///
/// - `P`: Clock/data lines ([`TwoWirePins`])
/// - `D`: Busy-wait delay ([`DelayUs`])
pub struct Tm1637<P: TwoWirePins, D: DelayUs> {
    pins: P,
    delay: D,
    brightness: u8,
}

impl<P: TwoWirePins, D: DelayUs> Tm1637<P, D> {
    /// Create a driver at full brightness. Nothing is sent until
    /// [`begin`](SegmentDisplay::begin) or the first write.
    pub fn new(pins: P, delay: D) -> Self {
        Self {
            pins,
            delay,
            brightness: MAX_BRIGHTNESS,
        }
    }

    /// The brightness nibble that is re-sent after every frame.
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Give back the pins and delay.
    pub fn release(self) -> (P, D) {
        (self.pins, self.delay)
    }

    /// Start condition: data falls while clock is high.
    fn start(&mut self) {
        self.pins.set_clk(true);
        self.pins.set_dio(true);
        self.delay.delay_us(EDGE_DELAY_US);
        self.pins.set_dio(false);
        self.delay.delay_us(EDGE_DELAY_US);
        self.pins.set_clk(false);
    }

    /// Stop condition: data rises while clock is high.
    fn stop(&mut self) {
        self.pins.set_clk(false);
        self.delay.delay_us(EDGE_DELAY_US);
        self.pins.set_dio(false);
        self.delay.delay_us(EDGE_DELAY_US);
        self.pins.set_clk(true);
        self.delay.delay_us(EDGE_DELAY_US);
        self.pins.set_dio(true);
    }

    /// Shift out one byte LSB first, then clock the acknowledgement bit.
    fn write_byte(&mut self, byte: u8) {
        for bit in 0..8 {
            self.pins.set_clk(false);
            self.pins.set_dio((byte >> bit) & 0x01 != 0);
            self.delay.delay_us(BIT_DELAY_US);
            self.pins.set_clk(true);
            self.delay.delay_us(BIT_DELAY_US);
        }

        self.pins.set_clk(false);
        self.pins.release_dio();
        self.delay.delay_us(BIT_DELAY_US);
        self.pins.set_clk(true);
        // Display pulls DIO low to acknowledge; not enforced.
        let _ack = self.pins.read_dio();
        #[cfg(feature = "defmt")]
        defmt::trace!("tm1637: byte {=u8:#x} ack={}", byte, !_ack);
        self.delay.delay_us(BIT_DELAY_US);
        self.pins.drive_dio();
    }

    fn send_display_control(&mut self) {
        self.start();
        self.write_byte(CMD_DISPLAY_ON | self.brightness);
        self.stop();
    }
}

impl<P: TwoWirePins, D: DelayUs> SegmentDisplay for Tm1637<P, D> {
    /// Put the bus in its idle state (both lines high), store the brightness
    /// and blank the display.
    fn begin(&mut self, brightness: u8) {
        self.pins.drive_dio();
        self.pins.set_clk(true);
        self.pins.set_dio(true);
        self.brightness = brightness & MAX_BRIGHTNESS;
        self.write_frame(&SegmentFrame::BLANK);
    }

    fn write_frame(&mut self, frame: &SegmentFrame) {
        self.start();
        self.write_byte(CMD_DATA_WRITE);
        self.stop();

        self.start();
        self.write_byte(CMD_ADDRESS);
        for byte in frame.bytes() {
            self.write_byte(byte);
        }
        self.stop();

        // Brightness goes out after every frame, changed or not.
        self.send_display_control();
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness = level & MAX_BRIGHTNESS;
        self.send_display_control();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::FormatRequest;
    use crate::hal::{BusEvent, MockBus, MockDelay};

    fn driver() -> Tm1637<MockBus, MockDelay> {
        Tm1637::new(MockBus::new(), MockDelay::new())
    }

    // =========================================================================
    // Frame Write Tests
    // =========================================================================

    #[test]
    fn frame_write_sends_seven_bytes() {
        let mut display = driver();
        let frame = SegmentFrame::new([0x3F, 0x06, 0x5B, 0x4F]);
        display.write_frame(&frame);

        let (bus, _) = display.release();
        assert_eq!(
            bus.bytes(),
            vec![0x40, 0xC0, 0x3F, 0x06, 0x5B, 0x4F, 0x8F]
        );
        assert_eq!(bus.ack_reads(), 7);
    }

    #[test]
    fn frame_write_is_three_transactions() {
        let mut display = driver();
        display.write_frame(&SegmentFrame::BLANK);

        let (bus, _) = display.release();
        assert_eq!(bus.transactions(), vec![vec![0x40], vec![0xC0, 0, 0, 0, 0], vec![0x8F]]);
    }

    #[test]
    fn brightness_resent_on_every_frame() {
        let mut display = driver();
        display.set_brightness(3);
        display.write_frame(&SegmentFrame::BLANK);
        display.write_frame(&SegmentFrame::BLANK);

        let (bus, _) = display.release();
        let control: Vec<u8> = bus
            .bytes()
            .into_iter()
            .filter(|b| b & 0xF8 == CMD_DISPLAY_ON)
            .collect();
        assert_eq!(control, vec![0x8B, 0x8B, 0x8B]);
    }

    #[test]
    fn set_brightness_masks_to_three_bits() {
        let mut display = driver();
        display.set_brightness(0x0F);
        assert_eq!(display.brightness(), 7);
        display.set_brightness(0x12);
        assert_eq!(display.brightness(), 2);

        let (bus, _) = display.release();
        assert_eq!(bus.bytes(), vec![0x8F, 0x8A]);
    }

    #[test]
    fn begin_clears_with_stored_brightness() {
        let mut display = driver();
        display.begin(2);

        let (bus, _) = display.release();
        assert_eq!(bus.bytes(), vec![0x40, 0xC0, 0, 0, 0, 0, 0x8A]);
    }

    #[test]
    fn show_formats_then_writes() {
        let mut display = driver();
        display.show(&FormatRequest::integer(22, false));

        let (bus, _) = display.release();
        assert_eq!(bus.bytes(), vec![0x40, 0xC0, 0, 0, 0x5B, 0x5B, 0x8F]);
    }

    // =========================================================================
    // Bus Timing Tests
    // =========================================================================

    #[test]
    fn bytes_are_lsb_first() {
        let mut display = driver();
        display.set_brightness(0);

        let (bus, _) = display.release();
        let bits: Vec<bool> = bus
            .events
            .iter()
            .filter_map(|e| match e {
                BusEvent::BitLatched(b) => Some(*b),
                _ => None,
            })
            .collect();
        // 0x88 = 0b1000_1000, LSB first
        assert_eq!(
            bits,
            vec![false, false, false, true, false, false, false, true]
        );
    }

    #[test]
    fn start_and_stop_happen_with_clock_high() {
        let mut display = driver();
        display.set_brightness(7);

        let (bus, _) = display.release();
        assert_eq!(bus.count(|e| *e == BusEvent::Start), 1);
        assert_eq!(bus.count(|e| *e == BusEvent::Stop), 1);
    }

    #[test]
    fn data_line_restored_after_ack() {
        let mut display = driver();
        display.write_frame(&SegmentFrame::BLANK);

        let (bus, _) = display.release();
        assert!(bus.dio_is_output());
        assert_eq!(bus.count(|e| *e == BusEvent::Released), 7);
    }

    #[test]
    fn missing_ack_is_ignored() {
        let mut display = Tm1637::new(MockBus::new().without_ack(), MockDelay::new());
        display.write_frame(&SegmentFrame::from_text("8888"));

        let (bus, _) = display.release();
        assert_eq!(bus.bytes().len(), 7);
    }

    #[test]
    fn frame_write_delay_is_bounded() {
        let mut display = driver();
        display.write_frame(&SegmentFrame::BLANK);

        let (_, delay) = display.release();
        // 7 bytes * (8 bits * 10us + 10us ack) + 3 * (2 start + 3 stop) * 2us
        assert_eq!(delay.total_us, 7 * 90 + 3 * 10);
    }
}
