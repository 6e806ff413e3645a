//! Dynamic light effects.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Dynamic effect for a light or group.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Effect {
    /// No effect
    None,
    /// Cycle through all hues at the current brightness and saturation
    ColorLoop,
}
