//! Light resources and state operations.

use std::collections::HashMap;

use log::debug;
use reqwest::Method;
use serde::Deserialize;

use crate::bridge::{Bridge, RequestBody};
use crate::errors::Error;
use crate::state::StateUpdate;
use crate::types::{Brightness, Hue, Saturation};

type Result<T> = std::result::Result<T, Error>;

/// A light known to the bridge.
#[derive(Debug, Deserialize, Clone)]
pub struct Light {
    /// Bridge-assigned resource id (the key in the lights listing).
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub state: LightState,
    #[serde(default, rename = "type")]
    pub light_type: String,
    #[serde(default, rename = "modelid")]
    pub model_id: String,
    #[serde(default, rename = "uniqueid")]
    pub unique_id: String,
    #[serde(default, rename = "manufacturername")]
    pub manufacturer_name: String,
}

/// State snapshot of a light, as reported by the bridge.
#[derive(Default, Debug, Deserialize, Clone)]
pub struct LightState {
    #[serde(default)]
    pub on: bool,
    #[serde(default, rename = "bri")]
    pub brightness: u8,
    #[serde(default)]
    pub hue: u16,
    #[serde(default, rename = "sat")]
    pub saturation: u8,
    #[serde(default)]
    pub effect: String,
    #[serde(default)]
    pub alert: String,
    #[serde(default)]
    pub reachable: bool,
}

impl Bridge {
    /// Fetch all lights from the bridge.
    ///
    /// The bridge returns a map keyed by resource id; the ids are folded into
    /// the returned [`Light`] values.
    pub async fn get_lights(&self) -> Result<Vec<Light>> {
        let data = self.request(Method::GET, "lights", None).await?;
        let lights: HashMap<String, Light> =
            serde_json::from_slice(&data).map_err(Error::JsonLoad)?;

        Ok(lights
            .into_iter()
            .map(|(id, mut light)| {
                light.id = id;
                light
            })
            .collect())
    }

    /// Fetch a specific light by its id.
    pub async fn get_light(&self, id: &str) -> Result<Light> {
        let data = self
            .request(Method::GET, &format!("lights/{id}"), None)
            .await?;
        let mut light: Light = serde_json::from_slice(&data).map_err(Error::JsonLoad)?;
        light.id = id.to_string();
        Ok(light)
    }

    /// Apply a sparse state update to a light.
    ///
    /// The update is encoded once by [`StateUpdate::encode`] (honoring a raw
    /// override when present) and sent in a single attempt. The raw response
    /// body is returned for callers that want the bridge's per-field
    /// confirmation.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// use hue_bridge_rs::{Brightness, StateUpdate};
    ///
    /// let mut update = StateUpdate::new();
    /// update.on(true);
    /// update.brightness(&Brightness::create(180).unwrap());
    /// bridge.set_light_state("1", &update).await?;
    /// ```
    pub async fn set_light_state(&self, id: &str, update: &StateUpdate) -> Result<Vec<u8>> {
        if !update.is_valid() {
            return Err(Error::EmptyUpdate);
        }

        let body = update.encode()?;
        debug!(
            "sending state update to light {id}: {}",
            String::from_utf8_lossy(&body)
        );

        let response = self
            .request(
                Method::PUT,
                &format!("lights/{id}/state"),
                Some(RequestBody::Raw(body)),
            )
            .await?;

        debug!("bridge response: {}", String::from_utf8_lossy(&response));
        Ok(response)
    }

    /// Turn a light on.
    pub async fn turn_on_light(&self, id: &str) -> Result<()> {
        self.toggle_light(id, true).await
    }

    /// Turn a light off.
    pub async fn turn_off_light(&self, id: &str) -> Result<()> {
        self.toggle_light(id, false).await
    }

    /// Set the on/off state of a light.
    pub async fn toggle_light(&self, id: &str, on: bool) -> Result<()> {
        let mut update = StateUpdate::new();
        update.on(on);
        self.set_light_state(id, &update).await?;
        Ok(())
    }

    /// Set the brightness of a light.
    ///
    /// Fails with [`Error::OutOfRange`] before any network call if
    /// `brightness` is outside 1-254.
    pub async fn set_light_brightness(&self, id: &str, brightness: u8) -> Result<()> {
        let brightness = Brightness::create(brightness).ok_or_else(|| {
            Error::out_of_range(
                "brightness",
                brightness as i64,
                Brightness::MIN as i64,
                Brightness::MAX as i64,
            )
        })?;

        self.set_light_state(id, &StateUpdate::from(&brightness))
            .await?;
        Ok(())
    }

    /// Set the color of a light by hue and saturation.
    ///
    /// Fails with [`Error::OutOfRange`] before any network call if `hue` is
    /// outside 0-65535 or `saturation` outside 0-254.
    pub async fn set_light_color(&self, id: &str, hue: u32, saturation: u8) -> Result<()> {
        let hue = Hue::create(hue)
            .ok_or_else(|| Error::out_of_range("hue", hue as i64, 0, Hue::MAX as i64))?;
        let saturation = Saturation::create(saturation).ok_or_else(|| {
            Error::out_of_range("saturation", saturation as i64, 0, Saturation::MAX as i64)
        })?;

        let mut update = StateUpdate::new();
        update.hue(&hue);
        update.saturation(&saturation);
        self.set_light_state(id, &update).await?;
        Ok(())
    }
}
