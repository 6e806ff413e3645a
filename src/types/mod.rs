//! Value types for light control parameters.

mod alert;
mod brightness;
mod effect;
mod hue;
mod saturation;
mod transition;

pub use alert::Alert;
pub use brightness::Brightness;
pub use effect::Effect;
pub use hue::Hue;
pub use saturation::Saturation;
pub use transition::TransitionTime;
