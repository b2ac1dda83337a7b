//! Example: Load and inspect a survey file.
//!
//! Run with: cargo run --example load_survey -- survey.json

use std::env;

use strata_core::{load_survey, Survey};
use strata_math::radians_to_degrees;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let survey = if args.len() < 2 {
        println!("Usage: load_survey <path-to-survey.json>");
        println!("No file given, showing the built-in survey.\n");
        Survey::default()
    } else {
        match load_survey(&args[1]) {
            Ok(survey) => survey,
            Err(e) => {
                eprintln!("Failed to load survey: {}", e);
                std::process::exit(1);
            }
        }
    };

    let stack = match survey.layer_stack() {
        Ok(stack) => stack,
        Err(e) => {
            eprintln!("Invalid survey: {}", e);
            std::process::exit(1);
        }
    };

    println!("=== Layers ({}) ===", stack.len());
    let depths = stack.boundary_depths(0.0);
    for (i, layer) in stack.layers().iter().enumerate() {
        println!(
            "  [{}] {:>8.1} -> {:>8.1}  v = {:.1}",
            i,
            depths[i],
            depths[i + 1],
            layer.velocity
        );
    }

    println!("\n--- Origins ---");
    for origin in survey.origin_points() {
        println!("  ({:.2}, {:.2})", origin.x, origin.y);
    }

    println!("\n--- Launch angles ---");
    for angle in survey.launch_angles() {
        println!("  {:.2}°", radians_to_degrees(angle));
    }
}
