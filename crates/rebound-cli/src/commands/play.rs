//! Play command - step a curve through the player at a fixed display rate

use super::{height_bar, CurveArgs};
use anyhow::{Context, Result};
use rebound_animation::player::{advance, PlaybackState};
use rebound_animation::generate;

pub struct PlayArgs {
    pub curve: CurveArgs,
    pub base_height: f64,
    pub fps: u32,
}

pub fn run(args: PlayArgs) -> Result<()> {
    if args.fps == 0 {
        anyhow::bail!("fps must be greater than 0");
    }

    let config = args.curve.config()?;
    let curve = generate(&args.curve.params(), args.base_height, &config)
        .context("Failed to generate bounce curve")?;

    println!(
        "Playing {} bounce: {:.3} s at {} fps ({} curve frames at {} fps)",
        curve.strategy,
        curve.playback_seconds(),
        args.fps,
        curve.total_frames,
        curve.sample_rate
    );

    let dt = 1.0 / args.fps as f64;
    let top = curve.first_value().max(args.base_height);
    let mut state = PlaybackState::new(1.0, false, true);
    let mut elapsed = 0.0;
    let mut height = advance(&mut state, &curve, 0.0);

    loop {
        println!(
            "{:>8.3}s {:>10.4} |{}",
            elapsed,
            height,
            height_bar(height - args.base_height, top - args.base_height, 50)
        );
        if !state.playing {
            break;
        }
        height = advance(&mut state, &curve, dt);
        elapsed += dt;
    }

    Ok(())
}
