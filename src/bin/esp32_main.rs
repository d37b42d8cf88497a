//! ESP32 status indicator bring-up firmware.
//!
//! Runs the indicator in a 50Hz loop against a synthetic device state so
//! the LED animations and the display rotation can be checked on a bench
//! without the rest of the controller:
//! - Cycles Classic, Flow and Heartbeat every 20 seconds
//! - Steps the alert level and health with the mode
//! - Feeds slowly changing telemetry to the display
//!
//! # Hardware Setup
//!
//! - WS2812 data on GPIO4 (RMT channel 0)
//! - TM1637 CLK on GPIO16, DIO on GPIO17
//!
//! # Build
//!
//! ```bash
//! cargo build --release --features esp32 --bin esp32_main
//! ```

use esp_idf_hal::peripherals::Peripherals;
use status_indicator::config::{DisplayConfig, IndicatorConfig, LedConfig};
use status_indicator::hal::esp32::{pins, Esp32Clock, Esp32Delay, Esp32Pixel, Esp32TwoWire};
use status_indicator::hal::PinRegistry;
use status_indicator::traits::Clock;
use status_indicator::{
    AlertLevel, AnimationMode, HealthStatus, StatusIndicator, SystemSnapshot, Telemetry, Tm1637,
};
use std::thread;
use std::time::Duration;

/// Main loop interval in milliseconds (50Hz = 20ms)
const LOOP_INTERVAL_MS: u64 = 20;

/// How long each demo phase lasts
const PHASE_MS: u32 = 20_000;

fn main() -> anyhow::Result<()> {
    // Initialize ESP-IDF
    esp_idf_hal::sys::link_patches();

    println!();
    println!("================================");
    println!("  status-indicator bring-up");
    println!("================================");
    println!();

    // =========================================================================
    // Configuration
    // =========================================================================
    let config = IndicatorConfig::default()
        .with_led(LedConfig::default().with_pin(pins::STATUS_LED))
        .with_display(
            DisplayConfig::default()
                .with_pins(pins::DISPLAY_CLK, pins::DISPLAY_DIO)
                .with_boot_text(option_env!("BOOT_BANNER").unwrap_or("boot")),
        );

    let peripherals = Peripherals::take()?;

    // =========================================================================
    // Initialize Status LED (WS2812 on GPIO4)
    // =========================================================================
    let pixel = Esp32Pixel::new(peripherals.rmt.channel0, peripherals.pins.gpio4)
        .map_err(|e| anyhow::anyhow!("Status LED init failed: {:?}", e))?;
    println!("[OK] Status LED initialized (GPIO{} RMT)", pins::STATUS_LED);

    // =========================================================================
    // Initialize Display (TM1637 on GPIO16/17)
    // =========================================================================
    let bus = Esp32TwoWire::new(peripherals.pins.gpio16, peripherals.pins.gpio17)?;
    let display = Tm1637::new(bus, Esp32Delay::new());
    println!(
        "[OK] Display bus initialized (GPIO{}/{})",
        pins::DISPLAY_CLK,
        pins::DISPLAY_DIO
    );

    // =========================================================================
    // Initialize Indicator
    // =========================================================================
    let mut registry = PinRegistry::new();
    let mut indicator = StatusIndicator::init(&config, &mut registry, pixel, Some(display))
        .map_err(|e| anyhow::anyhow!("Indicator init failed: {}", e))?;
    println!(
        "[OK] Indicator ready (display: {})",
        if indicator.has_display() { "yes" } else { "no" }
    );

    let clock = Esp32Clock::new();

    println!();
    println!("Starting indicator loop (50Hz)...");
    println!();

    // =========================================================================
    // Main Loop (50Hz)
    // =========================================================================
    let mut last_phase = None;
    loop {
        let now = clock.now_ms();
        let phase = (now / PHASE_MS) % 3;
        let state = demo_state(now, phase);

        if last_phase != Some(phase) {
            println!(
                "Mode: {:?}, alert: {:?}, health: {:?}",
                state.mode, state.alert, state.health
            );
            last_phase = Some(phase);
        }

        indicator
            .tick(now, &state)
            .map_err(|e| anyhow::anyhow!("Status LED write failed: {:?}", e))?;

        // Sleep until next tick
        thread::sleep(Duration::from_millis(LOOP_INTERVAL_MS));
    }
}

/// Synthetic device state for bench testing.
fn demo_state(now_ms: u32, phase: u32) -> SystemSnapshot {
    let (mode, alert, health) = match phase {
        0 => (AnimationMode::Classic, AlertLevel::Normal, HealthStatus::Ok),
        1 => (AnimationMode::Flow, AlertLevel::Warning, HealthStatus::Warning),
        _ => (AnimationMode::Heartbeat, AlertLevel::Error, HealthStatus::Updating),
    };

    // One slow sweep per minute
    let sweep = (now_ms / 1000 % 60) as i32;

    SystemSnapshot {
        mode,
        alert,
        health,
        power_w: (sweep - 30) * 100,
        telemetry: Telemetry {
            charge_pptt: 5000 + sweep as u16 * 50,
            voltage_dv: 480 + sweep as u16,
            current_da: (sweep as i16 - 30) * 10,
            capacity_wh: 40_000 + sweep as u32 * 100,
        },
    }
}
