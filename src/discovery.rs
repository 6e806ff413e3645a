//! Bridge discovery via mDNS.

use std::net::IpAddr;
use std::time::Duration;

use log::debug;
use mdns_sd::{ServiceDaemon, ServiceEvent};
use tokio::sync::mpsc;

use crate::errors::Error;

type Result<T> = std::result::Result<T, Error>;

/// Service type Hue bridges advertise on the local segment.
const HUE_SERVICE: &str = "_hue._tcp.local.";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Discover a Hue bridge on the local network, waiting up to 10 seconds.
///
/// See [`discover_bridge_with_timeout`].
pub async fn discover_bridge() -> Result<IpAddr> {
    discover_bridge_with_timeout(DEFAULT_TIMEOUT).await
}

/// Discover a Hue bridge on the local network via mDNS.
///
/// Browses for `_hue._tcp` services and returns the address of the first
/// bridge that resolves with at least one address; when several bridges are
/// present, whichever answers first wins. The browse is torn down before this
/// function returns, whatever the outcome.
///
/// Three negative outcomes are distinguished:
///
/// * [`Error::ResolverInit`] - the mDNS daemon could not be started; a local
///   environment problem, not an absent bridge.
/// * [`Error::DiscoveryTimeout`] - the deadline elapsed first.
/// * [`Error::BridgeNotFound`] - the browse ended without a usable entry.
///
/// # Examples
///
/// ```ignore
/// use std::time::Duration;
/// use hue_bridge_rs::discover_bridge_with_timeout;
///
/// let ip = discover_bridge_with_timeout(Duration::from_secs(5)).await?;
/// println!("bridge at {ip}");
/// ```
pub async fn discover_bridge_with_timeout(timeout: Duration) -> Result<IpAddr> {
    let daemon = ServiceDaemon::new().map_err(Error::ResolverInit)?;
    let events = daemon.browse(HUE_SERVICE).map_err(Error::ResolverInit)?;

    // Forward resolved entries into a channel the deadline race below can
    // consume. The forwarder ends when the daemon shuts down (channel closed)
    // or when the consumer is gone.
    let (entry_tx, mut entry_rx) = mpsc::channel::<Vec<IpAddr>>(8);
    let forwarder = tokio::spawn(async move {
        while let Ok(event) = events.recv_async().await {
            if let ServiceEvent::ServiceResolved(info) = event {
                debug!("resolved mdns entry: {}", info.get_fullname());
                let addresses: Vec<IpAddr> = info.get_addresses().iter().copied().collect();
                if entry_tx.send(addresses).await.is_err() {
                    break;
                }
            }
        }
    });

    let outcome = first_usable_address(&mut entry_rx, timeout).await;

    // Tear down the abandoned browse so no further notification is observed
    // after a result has been accepted.
    entry_rx.close();
    forwarder.abort();
    let _ = daemon.stop_browse(HUE_SERVICE);
    let _ = daemon.shutdown();

    outcome
}

/// Race the entry stream against a deadline; first qualifying entry wins.
async fn first_usable_address(
    entries: &mut mpsc::Receiver<Vec<IpAddr>>,
    timeout: Duration,
) -> Result<IpAddr> {
    let deadline = tokio::time::sleep(timeout);
    tokio::pin!(deadline);

    loop {
        tokio::select! {
            entry = entries.recv() => match entry {
                Some(addresses) => {
                    if let Some(address) = addresses.first() {
                        return Ok(*address);
                    }
                    // Entry without addresses; keep waiting.
                }
                None => return Err(Error::BridgeNotFound),
            },
            () = &mut deadline => return Err(Error::DiscoveryTimeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_first_entry_with_address_wins() {
        let (tx, mut rx) = mpsc::channel(4);
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            // An entry that resolved without addresses must not terminate
            // the wait.
            tx.send(Vec::new()).await.unwrap();
            tx.send(vec![IpAddr::from([192, 168, 1, 7])])
                .await
                .unwrap();
            tx.send(vec![IpAddr::from([192, 168, 1, 8])])
                .await
                .unwrap();
        });

        let address = first_usable_address(&mut rx, Duration::from_millis(500))
            .await
            .unwrap();
        assert_eq!(address, IpAddr::from([192, 168, 1, 7]));
    }

    #[tokio::test]
    async fn test_deadline_elapses_without_entries() {
        let (tx, mut rx) = mpsc::channel::<Vec<IpAddr>>(1);

        let start = Instant::now();
        let err = first_usable_address(&mut rx, Duration::from_millis(50))
            .await
            .unwrap_err();

        assert_eq!(err, Error::DiscoveryTimeout);
        assert!(start.elapsed() < Duration::from_millis(500));
        drop(tx); // sender kept alive so the channel does not close early
    }

    #[tokio::test]
    async fn test_closed_stream_is_not_found() {
        let (tx, mut rx) = mpsc::channel::<Vec<IpAddr>>(1);
        drop(tx);

        let err = first_usable_address(&mut rx, Duration::from_millis(500))
            .await
            .unwrap_err();
        assert_eq!(err, Error::BridgeNotFound);
    }
}
