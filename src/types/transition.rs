//! Transition time for state changes.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Duration of a state transition, in multiples of 100 ms.
///
/// The bridge default is 4 (400 ms) when no transition time is sent.
#[derive(Default, Debug, Serialize, Deserialize, Clone)]
pub struct TransitionTime {
    pub(crate) value: u16,
}

impl TransitionTime {
    /// Create a transition time from a raw decisecond count.
    pub fn deciseconds(value: u16) -> Self {
        TransitionTime { value }
    }

    /// Create a transition time from a [`Duration`], rounded down to the
    /// bridge's 100 ms granularity and capped at the largest encodable value.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use hue_bridge_rs::TransitionTime;
    ///
    /// let t = TransitionTime::from_duration(Duration::from_secs(2));
    /// assert_eq!(t.value(), 20);
    /// ```
    pub fn from_duration(duration: Duration) -> Self {
        let deciseconds = (duration.as_millis() / 100).min(u16::MAX as u128);
        TransitionTime {
            value: deciseconds as u16,
        }
    }

    pub fn value(&self) -> u16 {
        self.value
    }
}
