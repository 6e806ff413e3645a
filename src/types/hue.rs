//! Hue angle for color control.

use serde::{Deserialize, Serialize};

/// Hue angle on the bridge's color wheel, from 0 to 65535.
///
/// 0 and 65535 are both red, 25500 is green and 46920 is blue.
#[derive(Default, Debug, Serialize, Deserialize, Clone)]
pub struct Hue {
    pub(crate) value: u16,
}

impl Hue {
    pub const MAX: u32 = 65535;

    pub fn value(&self) -> u16 {
        self.value
    }

    /// Returns None if value is outside valid range (0-65535).
    ///
    /// Takes a `u32` so that out-of-range inputs such as 65536 are
    /// representable and rejected rather than silently truncated.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_bridge_rs::Hue;
    ///
    /// assert!(Hue::create(0).is_some());
    /// assert!(Hue::create(65535).is_some());
    /// assert!(Hue::create(65536).is_none());
    /// ```
    pub fn create(value: u32) -> Option<Self> {
        if value <= Self::MAX {
            Some(Hue {
                value: value as u16,
            })
        } else {
            None
        }
    }
}
