//! Initialization errors.

use core::fmt;

use crate::traits::PinId;

/// Why [`StatusIndicator::init`](crate::StatusIndicator::init) failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorError {
    /// A pin was already claimed by another subsystem.
    PinAllocation {
        /// Subsystem that asked for the pin (`"LED"` or `"TM1637"`).
        owner: &'static str,
        /// First pin of the rejected request.
        pin: PinId,
    },
}

impl fmt::Display for IndicatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorError::PinAllocation { owner, pin } => {
                write!(f, "{} setup failed: GPIO {} unavailable", owner, pin)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for IndicatorError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_names_owner_and_pin() {
        let err = IndicatorError::PinAllocation {
            owner: "LED",
            pin: 4,
        };
        assert_eq!(err.to_string(), "LED setup failed: GPIO 4 unavailable");
    }
}
