//! Group resources and state operations.

use std::collections::HashMap;

use log::debug;
use reqwest::Method;
use serde::Deserialize;

use crate::bridge::{Bridge, RequestBody};
use crate::errors::Error;
use crate::state::StateUpdate;

type Result<T> = std::result::Result<T, Error>;

/// A group of lights known to the bridge.
#[derive(Debug, Deserialize, Clone)]
pub struct Group {
    /// Bridge-assigned resource id (the key in the groups listing).
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub group_type: String,
    /// Ids of the lights belonging to this group.
    #[serde(default)]
    pub lights: Vec<String>,
}

impl Bridge {
    /// Fetch all groups from the bridge.
    pub async fn get_groups(&self) -> Result<Vec<Group>> {
        let data = self.request(Method::GET, "groups", None).await?;
        let groups: HashMap<String, Group> =
            serde_json::from_slice(&data).map_err(Error::JsonLoad)?;

        Ok(groups
            .into_iter()
            .map(|(id, mut group)| {
                group.id = id;
                group
            })
            .collect())
    }

    /// Fetch a specific group by its id.
    pub async fn get_group(&self, id: &str) -> Result<Group> {
        let data = self
            .request(Method::GET, &format!("groups/{id}"), None)
            .await?;
        let mut group: Group = serde_json::from_slice(&data).map_err(Error::JsonLoad)?;
        group.id = id.to_string();
        Ok(group)
    }

    /// Apply a sparse state update to every light in a group.
    ///
    /// Same encoding contract as
    /// [`set_light_state`](Bridge::set_light_state), sent to the group's
    /// `action` endpoint.
    pub async fn set_group_state(&self, id: &str, update: &StateUpdate) -> Result<Vec<u8>> {
        if !update.is_valid() {
            return Err(Error::EmptyUpdate);
        }

        let body = update.encode()?;
        debug!(
            "sending state update to group {id}: {}",
            String::from_utf8_lossy(&body)
        );

        let response = self
            .request(
                Method::PUT,
                &format!("groups/{id}/action"),
                Some(RequestBody::Raw(body)),
            )
            .await?;

        debug!("bridge response: {}", String::from_utf8_lossy(&response));
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_groups_fills_in_ids() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/testuser/groups")
            .with_status(200)
            .with_body(
                r#"{
                    "1": {"name": "Living room", "type": "Room", "lights": ["1", "3"]}
                }"#,
            )
            .create_async()
            .await;

        let bridge = Bridge::new(&server.host_with_port(), "testuser").unwrap();
        let groups = bridge.get_groups().await.unwrap();

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].id, "1");
        assert_eq!(groups[0].name, "Living room");
        assert_eq!(groups[0].lights, vec!["1", "3"]);
    }

    #[tokio::test]
    async fn test_group_update_targets_action_endpoint() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/api/testuser/groups/1/action")
            .match_body(r#"{"on":false}"#)
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let bridge = Bridge::new(&server.host_with_port(), "testuser").unwrap();
        let mut update = StateUpdate::new();
        update.on(false);
        bridge.set_group_state("1", &update).await.unwrap();
        mock.assert_async().await;
    }
}
