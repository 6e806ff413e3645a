//! # hue_bridge_rs
//!
//! An async Rust library for controlling lights through a Philips Hue bridge.
//!
//! This crate finds a Hue bridge on your local network via mDNS, performs the
//! link-button pairing handshake, and talks to the bridge's REST API to list
//! and control lights, groups, and scenes with sparse partial updates.
//!
//! ## Quick Start
//!
//! ```ignore
//! use hue_bridge_rs::{Bridge, StateUpdate, Brightness, authenticate, discover_bridge};
//!
//! async fn dim_everything() -> Result<(), Box<dyn std::error::Error>> {
//!     // Find the bridge and pair with it (press the link button first!)
//!     let ip = discover_bridge().await?;
//!     let username = authenticate(&ip.to_string(), "my_app#desktop").await?;
//!     let bridge = Bridge::new(&ip.to_string(), &username)?;
//!
//!     // Dim every light to half brightness
//!     let mut update = StateUpdate::new();
//!     update.on(true);
//!     update.brightness(&Brightness::create(127).unwrap());
//!     for light in bridge.get_lights().await? {
//!         bridge.set_light_state(&light.id, &update).await?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Discovery**: Find the bridge on your network with [`discover_bridge`],
//!   bounded by a deadline and cleanly cancelled on timeout
//! - **Pairing**: Obtain a credential with [`authenticate`]
//! - **Lights**: List and control individual lights via [`Bridge`]
//! - **Groups**: Apply one update to a whole room with
//!   [`Bridge::set_group_state`]
//! - **Scenes**: List stored scenes and recall them with
//!   [`Bridge::recall_scene`]
//! - **Sparse Updates**: [`StateUpdate`] encodes only the attributes you set,
//!   so everything else is left unchanged by the bridge
//! - **Raw Overrides**: [`StateUpdate::raw_override`] sends a payload you
//!   built yourself, for bridge extensions the typed model does not cover
//!
//! ## Communication
//!
//! All communication with the bridge is plain HTTP against
//! `http://{address}/api/{username}/...` on the local network, one bounded
//! exchange at a time; discovery uses mDNS (`_hue._tcp`). Failures are
//! reported to the caller and never retried internally, so a `Bridge` stays
//! usable after any error. This crate does not persist discovered addresses
//! or credentials; storing the username between runs is the application's
//! job.

mod authentication;
mod bridge;
mod discovery;
mod errors;
mod group;
mod light;
mod scene;
mod state;
mod types;

// Re-export public API
pub use authentication::{authenticate, authenticate_with_timeout};
pub use bridge::Bridge;
pub use discovery::{discover_bridge, discover_bridge_with_timeout};
pub use errors::Error;
pub use group::Group;
pub use light::{Light, LightState};
pub use scene::Scene;
pub use state::StateUpdate;
pub use types::{Alert, Brightness, Effect, Hue, Saturation, TransitionTime};
