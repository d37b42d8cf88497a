//! GPIO ownership registry.
//!
//! Boards share a handful of pins between several subsystems, so each one
//! claims its pins by name at startup. A conflicting claim fails without
//! side effects and the caller decides whether to start at all.
//!
//! # Example
//!
//! ```rust
//! use status_indicator::hal::PinRegistry;
//! use status_indicator::traits::PinAllocator;
//!
//! let mut pins = PinRegistry::new();
//! assert!(pins.alloc_pins("LED", &[48]));
//! assert!(!pins.alloc_pins("TM1637", &[47, 48])); // 48 is taken
//! assert_eq!(pins.owner(47), None);               // nothing claimed on failure
//! ```

use heapless::LinearMap;

use crate::traits::{PinAllocator, PinId};

/// Maximum number of GPIOs the registry tracks.
pub const MAX_PINS: usize = 48;

/// Board-level GPIO claims, keyed by pin number.
#[derive(Debug, Default)]
pub struct PinRegistry {
    owners: LinearMap<PinId, &'static str, MAX_PINS>,
}

impl PinRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Who owns `pin`, if anyone.
    pub fn owner(&self, pin: PinId) -> Option<&'static str> {
        self.owners.get(&pin).copied()
    }

    /// Number of claimed pins.
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    /// Whether no pin is claimed.
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

impl PinAllocator for PinRegistry {
    fn alloc_pins(&mut self, owner: &'static str, pins: &[PinId]) -> bool {
        // Negative numbers mean "not connected" on the board tables.
        let wanted = pins.iter().copied().filter(|&p| p >= 0);

        let conflict = wanted
            .clone()
            .any(|p| matches!(self.owner(p), Some(other) if other != owner));
        if conflict {
            return false;
        }

        let new_pins = wanted.clone().filter(|p| !self.owners.contains_key(p)).count();
        if self.owners.len() + new_pins > MAX_PINS {
            return false;
        }

        for pin in wanted {
            // Capacity was checked above.
            let _ = self.owners.insert(pin, owner);
        }
        true
    }

    fn free_pins(&mut self, owner: &'static str) {
        let held: heapless::Vec<PinId, MAX_PINS> = self
            .owners
            .iter()
            .filter(|(_, o)| **o == owner)
            .map(|(&pin, _)| pin)
            .collect();
        for pin in held {
            self.owners.remove(&pin);
        }
    }
}
