//! Temporary alert effects.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Temporary alert effect for a light or group.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Alert {
    /// No alert effect
    None,
    /// One breathe cycle
    Select,
    /// Breathe cycles for 15 seconds
    LSelect,
}
