//! Bounce command - generate a curve and print it

use super::CurveArgs;
use anyhow::{Context, Result};
use rebound_animation::{generate, BounceCurve};

pub struct BounceArgs {
    pub curve: CurveArgs,
    pub base_height: f64,
    pub format: String,
}

pub fn run(args: BounceArgs) -> Result<()> {
    let config = args.curve.config()?;
    let curve = generate(&args.curve.params(), args.base_height, &config)
        .context("Failed to generate bounce curve")?;

    let output = match args.format.as_str() {
        "text" => format_text(&curve),
        "json" => serde_json::to_string_pretty(&curve)?,
        "toml" => toml::to_string_pretty(&curve)?,
        _ => anyhow::bail!("Unknown format: {}", args.format),
    };

    println!("{}", output);

    Ok(())
}

fn format_text(curve: &BounceCurve) -> String {
    let mut out = String::new();
    out.push_str(&format!("Strategy:      {}\n", curve.strategy));
    out.push_str(&format!("Keyframes:     {}\n", curve.keyframes.len()));
    out.push_str(&format!("Total frames:  {}\n", curve.total_frames));
    out.push_str(&format!("Sample rate:   {} fps\n", curve.sample_rate));
    out.push_str(&format!("Playback:      {:.3} s\n", curve.playback_seconds()));
    out.push_str(&format!("Interpolation: {:?}\n", curve.interpolation));
    if curve.truncated {
        out.push_str("Warning: frame cap reached before the object came to rest\n");
    }
    out.push('\n');
    out.push_str(" frame      height\n");
    for kf in &curve.keyframes {
        out.push_str(&format!("{:>6}  {:>10.4}\n", kf.frame, kf.value));
    }
    out
}
