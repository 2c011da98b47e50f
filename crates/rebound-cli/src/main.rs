//! Rebound CLI - Command-line interface for bounce curve generation

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{bounce, play, scene, CurveArgs};

#[derive(Parser)]
#[command(name = "rebound")]
#[command(about = "Generate and preview physics-based bounce animations", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a bounce curve and print its keyframes
    Bounce {
        #[command(flatten)]
        curve: CurveArgs,

        /// Resting height the curve settles at
        #[arg(long, default_value = "0")]
        base_height: f64,

        /// Output format (text, json or toml)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Play a bounce curve in real time steps and print the height per frame
    Play {
        #[command(flatten)]
        curve: CurveArgs,

        /// Resting height the curve settles at
        #[arg(long, default_value = "0")]
        base_height: f64,

        /// Display frames per second
        #[arg(long, default_value = "30")]
        fps: u32,
    },

    /// Drop an object in a scene (the built-in demo scene if no file is given)
    Scene {
        /// Path to a scene TOML file
        scene: Option<String>,

        /// Name of the object to drop; lists the objects when omitted
        #[arg(long)]
        object: Option<String>,

        /// Write the scene (objects at rest) to a TOML file
        #[arg(long)]
        save: Option<String>,

        #[command(flatten)]
        curve: CurveArgs,

        /// Display frames per second
        #[arg(long, default_value = "30")]
        fps: u32,
    },
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Bounce {
            curve,
            base_height,
            format,
        } => bounce::run(bounce::BounceArgs {
            curve,
            base_height,
            format,
        }),
        Commands::Play {
            curve,
            base_height,
            fps,
        } => play::run(play::PlayArgs {
            curve,
            base_height,
            fps,
        }),
        Commands::Scene {
            scene,
            object,
            save,
            curve,
            fps,
        } => scene::run(scene::SceneArgs {
            scene,
            object,
            save,
            curve,
            fps,
        }),
    }
}
