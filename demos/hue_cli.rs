//! CLI application for controlling Hue lights through a bridge.
//!
//! This example demonstrates discovery, pairing, and the common control
//! operations.
//!
//! Run with: cargo run --example hue_cli -- --help

use std::time::Duration;

use clap::{Parser, Subcommand};
use hue_bridge_rs::{Bridge, authenticate, discover_bridge_with_timeout};

#[derive(Parser)]
#[command(name = "hue-cli")]
#[command(about = "Control Hue lights from the command line", long_about = None)]
struct Cli {
    /// Bridge address (not required for discover/pair commands)
    #[arg(short, long, global = true)]
    bridge: Option<String>,

    /// Credential obtained from the pair command
    #[arg(short, long, global = true)]
    username: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Discover the Hue bridge on the network
    Discover {
        /// Discovery timeout in seconds (default: 10)
        #[arg(short, long, default_value = "10")]
        timeout: u64,
    },

    /// Pair with the bridge (press the link button first)
    Pair,

    /// List all lights
    Lights,

    /// List all groups
    Groups,

    /// List all scenes
    Scenes,

    /// Turn a light on
    On {
        /// Light id
        id: String,
    },

    /// Turn a light off
    Off {
        /// Light id
        id: String,
    },

    /// Set brightness (1-254)
    Brightness {
        /// Light id
        id: String,
        /// Brightness level (1-254)
        level: u8,
    },

    /// Set color by hue (0-65535) and saturation (0-254)
    Color {
        /// Light id
        id: String,
        /// Hue angle (0-65535)
        hue: u32,
        /// Saturation (0-254)
        saturation: u8,
    },

    /// Recall a scene on a group
    Scene {
        /// Group id ("0" targets all lights)
        group: String,
        /// Scene id
        scene: String,
    },
}

fn bridge_from(cli: &Cli) -> Result<Bridge, Box<dyn std::error::Error>> {
    let address = cli
        .bridge
        .as_deref()
        .ok_or("missing --bridge address (run `hue_cli discover` first)")?;
    let username = cli
        .username
        .as_deref()
        .ok_or("missing --username credential (run `hue_cli pair` first)")?;
    Ok(Bridge::new(address, username)?)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Discover { timeout } => {
            let ip = discover_bridge_with_timeout(Duration::from_secs(*timeout)).await?;
            println!("found bridge at {ip}");
        }
        Commands::Pair => {
            let address = cli
                .bridge
                .as_deref()
                .ok_or("missing --bridge address (run `hue_cli discover` first)")?;
            let username = authenticate(address, "hue-cli#demo").await?;
            println!("paired; pass --username {username} from now on");
        }
        Commands::Lights => {
            let bridge = bridge_from(&cli)?;
            for light in bridge.get_lights().await? {
                let state = if light.state.on { "on" } else { "off" };
                println!("{}: {} ({}, bri {})", light.id, light.name, state, light.state.brightness);
            }
        }
        Commands::Groups => {
            let bridge = bridge_from(&cli)?;
            for group in bridge.get_groups().await? {
                println!("{}: {} ({} lights)", group.id, group.name, group.lights.len());
            }
        }
        Commands::Scenes => {
            let bridge = bridge_from(&cli)?;
            for scene in bridge.get_scenes().await? {
                println!("{}: {}", scene.id, scene.name);
            }
        }
        Commands::On { id } => {
            bridge_from(&cli)?.turn_on_light(id).await?;
        }
        Commands::Off { id } => {
            bridge_from(&cli)?.turn_off_light(id).await?;
        }
        Commands::Brightness { id, level } => {
            bridge_from(&cli)?.set_light_brightness(id, *level).await?;
        }
        Commands::Color { id, hue, saturation } => {
            bridge_from(&cli)?
                .set_light_color(id, *hue, *saturation)
                .await?;
        }
        Commands::Scene { group, scene } => {
            bridge_from(&cli)?.recall_scene(group, scene).await?;
        }
    }

    Ok(())
}
