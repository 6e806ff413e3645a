/// All error types that can occur when talking to a Hue bridge.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to serialize data to JSON.
    #[error("failed to dump json: {0:?}")]
    JsonDump(serde_json::Error),

    /// Failed to deserialize JSON data.
    #[error("failed to load json: {0:?}")]
    JsonLoad(serde_json::Error),

    /// An HTTP exchange with the bridge could not be completed.
    #[error("http {action} error: {err:?}")]
    Http { action: String, err: reqwest::Error },

    /// The bridge answered with a non-success status code.
    ///
    /// The raw response body is preserved because bridge error payloads
    /// carry diagnostic detail.
    #[error("bridge rejected request with status {status}: {}", String::from_utf8_lossy(.body))]
    RemoteRejected { status: u16, body: Vec<u8> },

    /// A control parameter is outside the range the bridge accepts.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// The mDNS resolver could not be initialized.
    #[error("failed to initialize mdns resolver: {0}")]
    ResolverInit(mdns_sd::Error),

    /// Discovery reached its deadline without finding a bridge.
    #[error("bridge discovery timed out")]
    DiscoveryTimeout,

    /// The discovery stream ended without producing a usable bridge entry.
    #[error("no bridges found")]
    BridgeNotFound,

    /// The bridge refused to create a user (e.g., link button not pressed).
    #[error("authentication failed: {description}")]
    AuthRejected { description: String },

    /// The pairing handshake returned an empty result list.
    #[error("unexpected response from bridge: no data returned")]
    AuthEmptyResponse,

    /// The pairing handshake succeeded but carried no username.
    #[error("unexpected response from bridge: username not found")]
    AuthMissingUsername,

    /// Attempted to send a [`crate::StateUpdate`] with no attributes set.
    #[error("invalid state update; no attributes set")]
    EmptyUpdate,
}

impl Error {
    /// Create a new http error
    pub fn http(action: &str, err: reqwest::Error) -> Self {
        Error::Http {
            action: action.to_string(),
            err,
        }
    }

    /// Create a new out of range error
    pub fn out_of_range(field: &'static str, value: i64, min: i64, max: i64) -> Self {
        Error::OutOfRange {
            field,
            value,
            min,
            max,
        }
    }

    /// Create a new remote rejected error
    pub fn remote_rejected(status: u16, body: Vec<u8>) -> Self {
        Error::RemoteRejected { status, body }
    }
}

/// Hacky implementation of PartialEq for testing
#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}
