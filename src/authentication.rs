//! Pairing handshake with the bridge.

use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;
use serde_json::{Value, json};

use crate::bridge::Bridge;
use crate::errors::Error;

type Result<T> = std::result::Result<T, Error>;

/// One element of the bridge's answer to a user-creation request.
#[derive(Debug, Deserialize)]
struct AuthResponse {
    success: Option<HashMap<String, Value>>,
    error: Option<AuthError>,
}

#[derive(Debug, Deserialize)]
struct AuthError {
    #[serde(rename = "type")]
    error_type: Option<i64>,
    description: Option<String>,
}

/// Authenticate with a bridge, waiting up to 10 seconds.
///
/// See [`authenticate_with_timeout`].
pub async fn authenticate(address: &str, app_name: &str) -> Result<String> {
    authenticate_with_timeout(address, app_name, Bridge::DEFAULT_TIMEOUT).await
}

/// Create a new user on the bridge and return its credential.
///
/// The link button on the bridge must be pressed shortly before calling this;
/// otherwise the bridge rejects the request with "link button not pressed"
/// and this returns [`Error::AuthRejected`] carrying that description.
///
/// `app_name` identifies your application to the bridge (conventionally
/// `"my_app#my_device"`). The returned username is the credential to pass to
/// [`Bridge::new`](crate::Bridge::new) from then on; this crate does not
/// store it anywhere.
///
/// # Examples
///
/// ```ignore
/// use hue_bridge_rs::{Bridge, authenticate};
///
/// let username = authenticate("192.168.1.10", "my_app#desktop").await?;
/// let bridge = Bridge::new("192.168.1.10", &username)?;
/// ```
pub async fn authenticate_with_timeout(
    address: &str,
    app_name: &str,
    timeout: Duration,
) -> Result<String> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| Error::http("build", e))?;

    // The one endpoint reached without a credential segment.
    let url = format!("http://{address}/api");
    let response = client
        .post(&url)
        .json(&json!({ "devicetype": app_name }))
        .send()
        .await
        .map_err(|e| Error::http("send", e))?;

    let status = response.status();
    let bytes = response
        .bytes()
        .await
        .map_err(|e| Error::http("read", e))?;

    if !status.is_success() {
        return Err(Error::remote_rejected(status.as_u16(), bytes.to_vec()));
    }

    let results: Vec<AuthResponse> = serde_json::from_slice(&bytes).map_err(Error::JsonLoad)?;
    credential_from_results(results)
}

fn credential_from_results(results: Vec<AuthResponse>) -> Result<String> {
    let first = results.into_iter().next().ok_or(Error::AuthEmptyResponse)?;

    if let Some(error) = first.error {
        let description = error.description.unwrap_or_else(|| {
            format!("bridge error type {}", error.error_type.unwrap_or(0))
        });
        return Err(Error::AuthRejected { description });
    }

    match first.success.and_then(|mut success| success.remove("username")) {
        Some(Value::String(username)) => Ok(username),
        _ => Err(Error::AuthMissingUsername),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Result<String> {
        credential_from_results(serde_json::from_str(body).unwrap())
    }

    #[test]
    fn test_success_yields_username() {
        let credential = parse(r#"[{"success":{"username":"abc123"}}]"#).unwrap();
        assert_eq!(credential, "abc123");
    }

    #[test]
    fn test_link_button_error_is_rejected() {
        let err =
            parse(r#"[{"error":{"type":101,"description":"link button not pressed"}}]"#)
                .unwrap_err();
        match err {
            Error::AuthRejected { description } => {
                assert_eq!(description, "link button not pressed");
            }
            other => panic!("expected AuthRejected, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_response_is_distinct() {
        assert_eq!(parse("[]").unwrap_err(), Error::AuthEmptyResponse);
    }

    #[test]
    fn test_missing_username_is_distinct() {
        let err = parse(r#"[{"success":{"clientkey":"zzz"}}]"#).unwrap_err();
        assert_eq!(err, Error::AuthMissingUsername);
    }

    #[tokio::test]
    async fn test_handshake_against_server() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api")
            .match_body(mockito::Matcher::Json(json!({"devicetype": "hue-cli#test"})))
            .with_status(200)
            .with_body(r#"[{"success":{"username":"abc123"}}]"#)
            .create_async()
            .await;

        let credential = authenticate(&server.host_with_port(), "hue-cli#test")
            .await
            .unwrap();
        assert_eq!(credential, "abc123");
        mock.assert_async().await;
    }
}
