//! Health status to LED color.

use crate::traits::Rgb;

/// Overall device health as shown on the status LED.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HealthStatus {
    /// Running normally. Pulsing green.
    #[default]
    Ok,
    /// Degraded. Pulsing yellow.
    Warning,
    /// Faulted. Solid red at full brightness.
    Error,
    /// Firmware update in progress. Pulsing blue.
    Updating,
}

/// Pick the LED color for `status`.
///
/// `brightness` is the animated intensity from the brightness engine.
/// `Error` ignores it and uses `max` so a fault never looks like it is
/// breathing.
///
/// ```rust
/// use status_indicator::color::{select, HealthStatus};
/// use status_indicator::traits::Rgb;
///
/// assert_eq!(select(HealthStatus::Warning, 20, 50), Rgb::new(20, 20, 0));
/// assert_eq!(select(HealthStatus::Error, 20, 50), Rgb::new(50, 0, 0));
/// ```
pub const fn select(status: HealthStatus, brightness: u8, max: u8) -> Rgb {
    match status {
        HealthStatus::Ok => Rgb::new(0, brightness, 0),
        HealthStatus::Warning => Rgb::new(brightness, brightness, 0),
        HealthStatus::Error => Rgb::new(max, 0, 0),
        HealthStatus::Updating => Rgb::new(0, 0, brightness),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulsing_colors_follow_brightness() {
        assert_eq!(select(HealthStatus::Ok, 17, 50), Rgb::new(0, 17, 0));
        assert_eq!(select(HealthStatus::Warning, 17, 50), Rgb::new(17, 17, 0));
        assert_eq!(select(HealthStatus::Updating, 17, 50), Rgb::new(0, 0, 17));
    }

    #[test]
    fn error_is_solid_red() {
        for b in [0, 1, 25, 50] {
            assert_eq!(select(HealthStatus::Error, b, 50), Rgb::new(50, 0, 0));
        }
    }

    #[test]
    fn dark_at_zero_brightness() {
        assert_eq!(select(HealthStatus::Ok, 0, 50), Rgb::new(0, 0, 0));
        assert_eq!(select(HealthStatus::Updating, 0, 255), Rgb::default());
    }
}
