//! Scene resources.

use std::collections::HashMap;

use reqwest::Method;
use serde::Deserialize;
use serde_json::json;

use crate::bridge::Bridge;
use crate::errors::Error;
use crate::state::StateUpdate;

type Result<T> = std::result::Result<T, Error>;

/// A stored scene on the bridge.
#[derive(Debug, Deserialize, Clone)]
pub struct Scene {
    /// Bridge-assigned resource id (the key in the scenes listing).
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub owner: String,
    /// Ids of the lights this scene applies to.
    #[serde(default)]
    pub lights: Vec<String>,
    #[serde(default, rename = "type")]
    pub scene_type: String,
    #[serde(default)]
    pub recycle: bool,
    #[serde(default)]
    pub locked: bool,
    #[serde(default, rename = "created")]
    pub creation_time: String,
    #[serde(default, rename = "lastupdated")]
    pub last_updated_time: String,
}

impl Bridge {
    /// Fetch all scenes from the bridge.
    pub async fn get_scenes(&self) -> Result<Vec<Scene>> {
        let data = self.request(Method::GET, "scenes", None).await?;
        let scenes: HashMap<String, Scene> =
            serde_json::from_slice(&data).map_err(Error::JsonLoad)?;

        Ok(scenes
            .into_iter()
            .map(|(id, mut scene)| {
                scene.id = id;
                scene
            })
            .collect())
    }

    /// Recall a scene on a group.
    ///
    /// The scene reference is not part of the typed state model, so this goes
    /// through the raw-override path of [`StateUpdate`].
    pub async fn recall_scene(&self, group_id: &str, scene_id: &str) -> Result<()> {
        let body = serde_json::to_vec(&json!({ "scene": scene_id })).map_err(Error::JsonDump)?;

        let mut update = StateUpdate::new();
        update.raw_override(body);
        self.set_group_state(group_id, &update).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_scenes_fills_in_ids() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/testuser/scenes")
            .with_status(200)
            .with_body(
                r#"{
                    "ab-12": {
                        "name": "Relax",
                        "owner": "testuser",
                        "lights": ["1"],
                        "type": "LightScene",
                        "recycle": false,
                        "locked": true,
                        "created": "2024-01-01T00:00:00",
                        "lastupdated": "2024-06-01T00:00:00"
                    }
                }"#,
            )
            .create_async()
            .await;

        let bridge = Bridge::new(&server.host_with_port(), "testuser").unwrap();
        let scenes = bridge.get_scenes().await.unwrap();

        assert_eq!(scenes.len(), 1);
        assert_eq!(scenes[0].id, "ab-12");
        assert_eq!(scenes[0].name, "Relax");
        assert!(scenes[0].locked);
        assert!(!scenes[0].recycle);
    }

    #[tokio::test]
    async fn test_recall_scene_sends_raw_scene_reference() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/api/testuser/groups/0/action")
            .match_body(r#"{"scene":"ab-12"}"#)
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let bridge = Bridge::new(&server.host_with_port(), "testuser").unwrap();
        bridge.recall_scene("0", "ab-12").await.unwrap();
        mock.assert_async().await;
    }
}
