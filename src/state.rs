//! Sparse state updates for lights and groups.

use serde::{Deserialize, Serialize};

use crate::errors::Error;
use crate::types::{Alert, Brightness, Effect, Hue, Saturation, TransitionTime};

type Result<T> = std::result::Result<T, Error>;

/// A sparse state update to send to a light or group.
///
/// Only the attributes explicitly set are encoded; the bridge leaves every
/// omitted attribute unchanged. This matters because a present-zero field
/// means "set to zero", not "ignore".
///
/// # Creating Updates
///
/// You can create an update in two ways:
///
/// 1. **From a single attribute** using the [`From`] trait:
///    ```
///    use hue_bridge_rs::{StateUpdate, Brightness};
///    let update = StateUpdate::from(&Brightness::create(128).unwrap());
///    ```
///
/// 2. **Builder pattern** for combining multiple attributes:
///    ```
///    use hue_bridge_rs::{StateUpdate, Brightness, Hue};
///    let mut update = StateUpdate::new();
///    update.on(true);
///    update.brightness(&Brightness::create(200).unwrap());
///    update.hue(&Hue::create(46920).unwrap());
///    ```
///
/// # Raw Overrides
///
/// [`StateUpdate::raw_override`] replaces the typed encoding entirely with a
/// caller-built payload. This is the escape hatch for bridge extensions the
/// typed model does not cover; when an override is present the typed fields
/// are not merged in.
#[serde_with::skip_serializing_none]
#[derive(Default, Debug, Serialize, Deserialize, Clone)]
pub struct StateUpdate {
    pub(crate) on: Option<bool>,
    #[serde(rename = "bri")]
    pub(crate) brightness: Option<u8>,
    pub(crate) hue: Option<u16>,
    #[serde(rename = "sat")]
    pub(crate) saturation: Option<u8>,
    pub(crate) effect: Option<Effect>,
    #[serde(rename = "transitiontime")]
    pub(crate) transition_time: Option<u16>,
    pub(crate) alert: Option<Alert>,
    #[serde(skip)]
    pub(crate) raw: Option<Vec<u8>>,
}

impl StateUpdate {
    /// Create a new empty update.
    ///
    /// At least one attribute must be set for the update to be valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_bridge_rs::StateUpdate;
    ///
    /// let update = StateUpdate::new();
    /// assert_eq!(update.is_valid(), false);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if this update contains at least one attribute or a raw override.
    pub fn is_valid(&self) -> bool {
        self.on.is_some()
            || self.brightness.is_some()
            || self.hue.is_some()
            || self.saturation.is_some()
            || self.effect.is_some()
            || self.transition_time.is_some()
            || self.alert.is_some()
            || self.raw.as_ref().is_some_and(|raw| !raw.is_empty())
    }

    /// Set the power state.
    pub fn on(&mut self, on: bool) {
        self.on = Some(on);
    }

    /// Set the brightness level.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_bridge_rs::{StateUpdate, Brightness};
    ///
    /// let mut update = StateUpdate::new();
    /// update.brightness(&Brightness::create(254).unwrap());
    /// assert_eq!(update.is_valid(), true);
    /// ```
    pub fn brightness(&mut self, brightness: &Brightness) {
        self.brightness = Some(brightness.value);
    }

    /// Set the hue angle.
    pub fn hue(&mut self, hue: &Hue) {
        self.hue = Some(hue.value);
    }

    /// Set the color saturation.
    pub fn saturation(&mut self, saturation: &Saturation) {
        self.saturation = Some(saturation.value);
    }

    /// Set a dynamic effect.
    pub fn effect(&mut self, effect: &Effect) {
        self.effect = Some(effect.clone());
    }

    /// Set the transition time for this update.
    pub fn transition_time(&mut self, transition: &TransitionTime) {
        self.transition_time = Some(transition.value);
    }

    /// Set a temporary alert effect.
    pub fn alert(&mut self, alert: &Alert) {
        self.alert = Some(alert.clone());
    }

    /// Replace the encoded payload with caller-built bytes.
    ///
    /// When a non-empty override is present, [`StateUpdate::encode`] emits
    /// exactly these bytes and ignores every typed attribute. The override is
    /// a total replacement, never a merge.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_bridge_rs::StateUpdate;
    ///
    /// let mut update = StateUpdate::new();
    /// update.raw_override(br#"{"scene":"abc-123"}"#.to_vec());
    /// assert_eq!(update.encode().unwrap(), br#"{"scene":"abc-123"}"#);
    /// ```
    pub fn raw_override(&mut self, raw: Vec<u8>) {
        self.raw = Some(raw);
    }

    /// Encode this update into transport-ready bytes.
    ///
    /// Pure transformation; no network access.
    pub fn encode(&self) -> Result<Vec<u8>> {
        match &self.raw {
            Some(raw) if !raw.is_empty() => Ok(raw.clone()),
            _ => serde_json::to_vec(self).map_err(Error::JsonDump),
        }
    }
}

impl From<&Brightness> for StateUpdate {
    fn from(brightness: &Brightness) -> Self {
        let mut update = StateUpdate::new();
        update.brightness(brightness);
        update
    }
}

impl From<&Hue> for StateUpdate {
    fn from(hue: &Hue) -> Self {
        let mut update = StateUpdate::new();
        update.hue(hue);
        update
    }
}

impl From<&Saturation> for StateUpdate {
    fn from(saturation: &Saturation) -> Self {
        let mut update = StateUpdate::new();
        update.saturation(saturation);
        update
    }
}

impl From<&Effect> for StateUpdate {
    fn from(effect: &Effect) -> Self {
        let mut update = StateUpdate::new();
        update.effect(effect);
        update
    }
}

impl From<&Alert> for StateUpdate {
    fn from(alert: &Alert) -> Self {
        let mut update = StateUpdate::new();
        update.alert(alert);
        update
    }
}
