//! Saturation for color control.

use serde::{Deserialize, Serialize};

/// Color saturation from 0 (white) to 254 (fully saturated).
#[derive(Default, Debug, Serialize, Deserialize, Clone)]
pub struct Saturation {
    pub(crate) value: u8,
}

impl Saturation {
    pub const MAX: u8 = 254;

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Returns None if value is outside valid range (0-254).
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_bridge_rs::Saturation;
    ///
    /// assert!(Saturation::create(0).is_some());
    /// assert!(Saturation::create(254).is_some());
    /// assert!(Saturation::create(255).is_none());
    /// ```
    pub fn create(value: u8) -> Option<Self> {
        if value <= Self::MAX {
            Some(Saturation { value })
        } else {
            None
        }
    }
}
