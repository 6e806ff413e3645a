//! Bridge transport.

use std::time::Duration;

use reqwest::Method;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use crate::errors::Error;

type Result<T> = std::result::Result<T, Error>;

/// Body of a single exchange with the bridge.
///
/// `Raw` bytes are sent verbatim; `Json` values are serialized by the
/// transport. The raw path exists so that callers who already built the exact
/// payload (see [`crate::StateUpdate::raw_override`]) get it on the wire
/// unchanged.
#[derive(Debug)]
pub(crate) enum RequestBody {
    Raw(Vec<u8>),
    Json(Value),
}

/// A paired connection to a Hue bridge.
///
/// A `Bridge` holds the bridge's network address and the credential obtained
/// from [`crate::authenticate`], plus a reusable HTTP client with a bounded
/// timeout. It stays usable after any failed exchange; nothing here retries
/// or caches.
///
/// A single `Bridge` is meant for sequential use by one logical caller.
/// Address two bridges (or two credentials) with two `Bridge` values.
///
/// # Example
///
/// ```ignore
/// use hue_bridge_rs::Bridge;
///
/// let bridge = Bridge::new("192.168.1.10", "abc123")?;
/// for light in bridge.get_lights().await? {
///     println!("{}: {}", light.id, light.name);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Bridge {
    address: String,
    username: String,
    client: reqwest::Client,
}

impl Bridge {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Create a bridge client with the default 10 second exchange timeout.
    pub fn new(address: &str, username: &str) -> Result<Self> {
        Self::with_timeout(address, username, Self::DEFAULT_TIMEOUT)
    }

    /// Create a bridge client with a caller-chosen exchange timeout.
    pub fn with_timeout(address: &str, username: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::http("build", e))?;

        Ok(Bridge {
            address: address.to_string(),
            username: username.to_string(),
            client,
        })
    }

    /// The bridge's network address (`host` or `host:port`).
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The credential used for every exchange.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Perform one exchange against `http://{address}/api/{username}/{path}`.
    ///
    /// The response body is always read back, even on a non-success status,
    /// because bridge error payloads carry diagnostic detail. Outcomes:
    ///
    /// * `Ok(bytes)` - the bridge reported success; bytes are the raw payload.
    /// * [`Error::RemoteRejected`] - the bridge answered with a non-2xx
    ///   status; the body is preserved.
    /// * [`Error::Http`] - the exchange could not be completed at all.
    ///
    /// Single attempt, no retry.
    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<RequestBody>,
    ) -> Result<Vec<u8>> {
        let url = format!("http://{}/api/{}/{}", self.address, self.username, path);

        let mut request = self.client.request(method, &url);
        if let Some(body) = body {
            request = match body {
                RequestBody::Raw(bytes) => request
                    .header(CONTENT_TYPE, "application/json")
                    .body(bytes),
                RequestBody::Json(value) => request.json(&value),
            };
        }

        let response = request.send().await.map_err(|e| Error::http("send", e))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::http("read", e))?;

        if !status.is_success() {
            return Err(Error::remote_rejected(status.as_u16(), bytes.to_vec()));
        }

        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn bridge_for(server: &mockito::ServerGuard) -> Bridge {
        Bridge::new(&server.host_with_port(), "testuser").unwrap()
    }

    #[tokio::test]
    async fn test_success_returns_raw_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/testuser/lights")
            .with_status(200)
            .with_body(r#"{"ok":true}"#)
            .create_async()
            .await;

        let bridge = bridge_for(&server).await;
        let body = bridge.request(Method::GET, "lights", None).await.unwrap();

        assert_eq!(body, br#"{"ok":true}"#);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_preserves_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/testuser/lights/99")
            .with_status(404)
            .with_body(r#"[{"error":{"type":3,"description":"resource not available"}}]"#)
            .create_async()
            .await;

        let bridge = bridge_for(&server).await;
        let err = bridge
            .request(Method::GET, "lights/99", None)
            .await
            .unwrap_err();

        match err {
            Error::RemoteRejected { status, body } => {
                assert_eq!(status, 404);
                assert!(String::from_utf8_lossy(&body).contains("resource not available"));
            }
            other => panic!("expected RemoteRejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_connection_refused_is_http_error() {
        // Bind and drop a listener to get a port with nothing behind it.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap().to_string();
        drop(listener);

        let bridge = Bridge::new(&address, "testuser").unwrap();
        let err = bridge.request(Method::GET, "lights", None).await.unwrap_err();

        assert!(matches!(err, Error::Http { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn test_raw_body_is_sent_verbatim() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/api/testuser/lights/1/state")
            .match_header("content-type", "application/json")
            .match_body(r#"{"custom":"payload"}"#)
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let bridge = bridge_for(&server).await;
        bridge
            .request(
                Method::PUT,
                "lights/1/state",
                Some(RequestBody::Raw(br#"{"custom":"payload"}"#.to_vec())),
            )
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_json_body_is_serialized() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/api/testuser/lights/1/state")
            .match_body(mockito::Matcher::Json(serde_json::json!({"on": true})))
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let bridge = bridge_for(&server).await;
        bridge
            .request(
                Method::PUT,
                "lights/1/state",
                Some(RequestBody::Json(serde_json::json!({"on": true}))),
            )
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_bridge_reusable_after_failure() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/testuser/groups")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;
        server
            .mock("GET", "/api/testuser/lights")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let bridge = bridge_for(&server).await;
        assert!(bridge.request(Method::GET, "groups", None).await.is_err());
        assert!(bridge.request(Method::GET, "lights", None).await.is_ok());
    }
}
