//! End-to-end tests: indicator driving a TM1637 over the mock bus

use status_indicator::{
    config::{DisplayConfig, IndicatorConfig, LedConfig},
    hal::{MockBus, MockDelay, MockPixel, PinRegistry},
    AlertLevel, AnimationMode, DisplayUpdate, HealthStatus, Metric, Rgb, SegmentFrame, Slot,
    SlotKind, StatusIndicator, SystemSnapshot, Telemetry, Tm1637,
};

type Indicator = StatusIndicator<MockPixel, Tm1637<MockBus, MockDelay>>;

fn config() -> IndicatorConfig {
    IndicatorConfig::default()
        .with_led(LedConfig::default().with_pin(4).with_max_brightness(60))
        .with_display(
            DisplayConfig::default()
                .with_pins(16, 17)
                .with_brightness(5)
                .with_boot_text("v0.9"),
        )
}

fn indicator() -> Indicator {
    let mut pins = PinRegistry::new();
    let display = Tm1637::new(MockBus::new(), MockDelay::new());
    StatusIndicator::init(&config(), &mut pins, MockPixel::new(), Some(display)).unwrap()
}

fn snapshot() -> SystemSnapshot {
    SystemSnapshot {
        mode: AnimationMode::Classic,
        alert: AlertLevel::Normal,
        health: HealthStatus::Ok,
        power_w: 0,
        telemetry: Telemetry {
            charge_pptt: 6_420,
            voltage_dv: 515,
            current_da: 87,
            capacity_wh: 12_340,
        },
    }
}

/// Tear the indicator down to the bus.
fn bus_of(indicator: Indicator) -> MockBus {
    let (_, display) = indicator.release();
    let (bus, _) = display.unwrap().release();
    bus
}

// ============================================================================
// Startup Tests
// ============================================================================

#[test]
fn startup_clears_then_shows_banner() {
    let bus = bus_of(indicator());

    assert_eq!(
        bus.bytes(),
        vec![
            // begin(5): blank frame
            0x40,
            0xC0,
            0,
            0,
            0,
            0,
            0x8D,
            // banner
            0x40,
            0xC0,
            status_indicator::encode('v'),
            status_indicator::encode('0'),
            status_indicator::encode('.'),
            status_indicator::encode('9'),
            0x8D,
        ]
    );
}

#[test]
fn every_byte_is_acknowledged() {
    let mut indicator = indicator();
    indicator.tick(0, &snapshot()).unwrap();

    let bus = bus_of(indicator);
    assert_eq!(bus.bytes().len(), 21);
    assert_eq!(bus.ack_reads(), 21);
}

// ============================================================================
// Rotation Tests
// ============================================================================

#[test]
fn full_rotation_over_sixteen_seconds() {
    let mut indicator = indicator();
    let state = snapshot();

    let mut shown = Vec::new();
    // 50Hz for 16 seconds
    for tick in 0..800u32 {
        let report = indicator.tick(tick * 20, &state).unwrap();
        if let DisplayUpdate::Shown(slot) = report.display {
            shown.push(slot);
        }
    }

    assert_eq!(shown.len(), 16);
    assert_eq!(
        shown[0],
        Slot {
            kind: SlotKind::Label,
            metric: Metric::Charge
        }
    );
    assert_eq!(
        shown[15],
        Slot {
            kind: SlotKind::Value,
            metric: Metric::Capacity
        }
    );

    let frames = bus_of(indicator).frames();
    // blank + banner + 16 refreshes
    assert_eq!(frames.len(), 18);
    assert_eq!(frames[2], SegmentFrame::from_text("SOC"));
    assert_eq!(frames[4], SegmentFrame::from_text("6420").with_dot(1));
    assert_eq!(frames[6], SegmentFrame::from_text("VOLT"));
    assert_eq!(frames[8], SegmentFrame::from_text("515V").with_dot(1));
    assert_eq!(frames[10], SegmentFrame::from_text("CURR"));
    assert_eq!(frames[12], SegmentFrame::from_text("087A").with_dot(1));
    assert_eq!(frames[14], SegmentFrame::from_text("CAP"));
    assert_eq!(frames[16], SegmentFrame::from_text("123k").with_dot(1));
}

#[test]
fn value_follows_live_telemetry() {
    let mut indicator = indicator();
    let mut state = snapshot();

    indicator.tick(6_000, &state).unwrap();
    state.telemetry.voltage_dv = 498;
    indicator.tick(7_000, &state).unwrap();

    let frames = bus_of(indicator).frames();
    assert_eq!(frames[2], SegmentFrame::from_text("515V").with_dot(1));
    assert_eq!(frames[3], SegmentFrame::from_text("498V").with_dot(1));
}

// ============================================================================
// LED Tests
// ============================================================================

#[test]
fn led_shown_once_per_tick() {
    let mut indicator = indicator();
    for tick in 0..50u32 {
        indicator.tick(tick * 20, &snapshot()).unwrap();
    }
    assert_eq!(indicator.pixel().shown.len(), 50);
}

#[test]
fn led_colors_by_health() {
    let mut indicator = indicator();
    let mut state = snapshot();

    // Classic peak with max 60
    let report = indicator.tick(1_500, &state).unwrap();
    assert_eq!(report.color, Rgb::new(0, 60, 0));

    state.health = HealthStatus::Updating;
    let report = indicator.tick(1_500, &state).unwrap();
    assert_eq!(report.color, Rgb::new(0, 0, 60));

    state.health = HealthStatus::Error;
    let report = indicator.tick(0, &state).unwrap();
    assert_eq!(report.brightness, 0);
    assert_eq!(report.color, Rgb::new(60, 0, 0));
}

#[test]
fn heartbeat_peak_reaches_led() {
    let mut indicator = indicator();
    let state = SystemSnapshot {
        mode: AnimationMode::Heartbeat,
        alert: AlertLevel::Error,
        ..snapshot()
    };

    // Quarter of the 600 ms period: 80% of 60
    let report = indicator.tick(150, &state).unwrap();
    assert_eq!(report.brightness, 48);
    assert_eq!(indicator.pixel().last_shown(), Some(Rgb::new(0, 48, 0)));
}

#[test]
fn led_runs_without_display() {
    let config = config().with_display(DisplayConfig::default());
    let mut pins = PinRegistry::new();
    let mut indicator: Indicator =
        StatusIndicator::init(&config, &mut pins, MockPixel::new(), None).unwrap();

    for tick in 0..10u32 {
        let report = indicator.tick(tick * 100, &snapshot()).unwrap();
        assert_eq!(report.display, DisplayUpdate::Absent);
    }
    assert_eq!(indicator.pixel().shown.len(), 10);
}
