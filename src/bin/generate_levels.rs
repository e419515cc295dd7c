// Small utility: print the Game.ini level/XP fragment for a level preset.
//
// Usage:
//   cargo run --bin generate_levels -- [preset_name] [curve] [multiplier]
//
// Defaults: "Default (150)", official curve, multiplier 1.0.
// Curve is one of linear / exponential / flat / official and applies to both tables.

use anyhow::{anyhow, Context, Result};
use ark_config_studio::config::presets::{builtin_level_presets, find_level_preset};
use ark_config_studio::domain::types::CurveType;
use ark_config_studio::engine::ProgressionGenerator;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);

    let preset_name = args.next().unwrap_or_else(|| "Default (150)".to_string());
    let preset = match find_level_preset(&preset_name) {
        Some(preset) => preset,
        None => {
            let names: Vec<&str> = builtin_level_presets().iter().map(|p| p.name.as_str()).collect();
            return Err(anyhow!(
                "unknown level preset '{}', expected one of: {}",
                preset_name,
                names.join(", ")
            ));
        }
    };

    let curve = match args.next() {
        Some(raw) => raw.parse::<CurveType>().map_err(|e| anyhow!(e))?,
        None => CurveType::Official,
    };

    let multiplier = match args.next() {
        Some(raw) => raw
            .parse::<f64>()
            .with_context(|| format!("invalid multiplier '{}'", raw))?,
        None => 1.0,
    };

    let config = ProgressionGenerator::new().generate_level_config(preset, curve, curve, multiplier)?;

    eprintln!(
        "preset={} curve={} multiplier={} player_levels={} dino_levels={}",
        preset.name,
        curve,
        multiplier,
        config.player_levels.len(),
        config.dino_levels.len()
    );
    println!("{}", config.ini_code);
    Ok(())
}
