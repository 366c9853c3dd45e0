//! # Geocalc CLI Application
//!
//! Interactive terminal front end for the beam point-load calculation.
//! Set `RUST_LOG=debug` to see which canonical case was selected.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use geocalc_core::{BeamPointLoad, BeamPointLoadInput, FailureMode, SupportType};
use serde::Serialize;

/// Number of table rows printed from the sampled profiles
const TABLE_ROWS: usize = 11;

fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;
    Some(input.trim().to_string())
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    read_line(prompt)
        .and_then(|input| input.parse().ok())
        .unwrap_or(default)
}

fn prompt_support(prompt: &str, default: SupportType) -> SupportType {
    match read_line(prompt) {
        Some(input) if !input.is_empty() => SupportType::from_str(&input).unwrap_or_else(|e| {
            eprintln!("  {} - using {}", e, default);
            default
        }),
        _ => default,
    }
}

/// Labelled pretty JSON, or the serialization error message
fn json_block<T: Serialize>(label: &str, value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value)
        .map(|json| format!("{}:\n{}", label, json))
        .map_err(|e| format!("{} could not be serialized: {}", label, e))
}

fn main() {
    env_logger::init();

    println!("Geocalc CLI - Beam Point Load Calculator");
    println!("========================================");
    println!();
    println!("Supports: {}", SupportType::NAMES.join(", "));
    println!();

    let beam_length = prompt_f64("Beam length L (m) [6.0]: ", 6.0);
    let youngs_modulus = prompt_f64("Young's modulus E (kPa) [210e6]: ", 210e6);
    let moment_of_inertia = prompt_f64("Moment of inertia I (m^4) [1e-4]: ", 1e-4);
    let point_load = prompt_f64("Point load P (kN) [25.0]: ", 25.0);
    let load_position = prompt_f64("Load position a (m) [2.0]: ", 2.0);
    let left = prompt_support("Left support [Support]: ", SupportType::Support);
    let right = prompt_support("Right support [Clamped]: ", SupportType::Clamped);

    let input = BeamPointLoadInput::new(beam_length, youngs_modulus, moment_of_inertia, point_load)
        .with_load_position(load_position)
        .with_supports(left, right)
        .with_failure_mode(FailureMode::Strict);

    let beam = match BeamPointLoad::new(input) {
        Ok(beam) => beam,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            match json_block("Error JSON", &e) {
                Ok(block) | Err(block) => eprintln!("{}", block),
            }
            std::process::exit(1);
        }
    };

    let result = beam.result();
    log::info!(
        "computed {} samples for {} / {} beam",
        beam.positions().len(),
        left,
        right
    );

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  BEAM POINT LOAD RESULTS");
    println!("═══════════════════════════════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Span:     {:.2} m", beam_length);
    println!("  Load:     {:.2} kN at {:.2} m", point_load, load_position);
    println!("  Supports: {} / {}", left, right);
    if let Some(case) = result.case {
        println!(
            "  Case:     {}{}",
            case,
            if result.mirrored { " (mirrored)" } else { "" }
        );
    }
    println!();
    println!(
        "  {:>8}  {:>12}  {:>12}  {:>12}  {:>12}",
        "x (m)", "V (kN)", "M (kNm)", "θ (rad)", "δ (m)"
    );

    let n = beam.positions().len();
    let step = ((n.saturating_sub(1)) / (TABLE_ROWS - 1)).max(1);
    let mut rows: Vec<usize> = (0..n).step_by(step).collect();
    if rows.last() != Some(&(n.saturating_sub(1))) && n > 0 {
        rows.push(n - 1);
    }
    for i in rows {
        println!(
            "  {:>8.3}  {:>12.4}  {:>12.4}  {:>12.4e}  {:>12.4e}",
            beam.positions()[i],
            beam.shear_force()[i],
            beam.bending_moment()[i],
            beam.slope()[i],
            beam.deflection()[i],
        );
    }

    println!();
    if let Some((x, deflection)) = beam.max_abs_deflection() {
        println!("  |δ|max = {:.4e} m at x = {:.3} m", deflection.abs(), x);
    }
    println!("═══════════════════════════════════════════════════════════════");

    println!();
    match json_block("JSON Output", result) {
        Ok(block) => println!("{}", block),
        Err(message) => eprintln!("Error: {}", message),
    }
}
