//! Critical angle sweep example.
//!
//! Fires a fan of rays at a slow-over-fast interface and reports which ones
//! transmit. Saves the section to `critical_angle.png`.

use strata_tracer::{
    critical_angle, render_plot, save_plot, trace_parallel, LayerStack, PlotConfig, Point, RayStatus,
};
use strata_math::{degrees_to_radians, radians_to_degrees};

fn main() {
    println!("Strata - Critical Angle Example");
    println!("===============================");

    let stack = LayerStack::new(&[-400.0, -600.0], &[1500.0, 3000.0]).expect("valid stack");
    let critical = critical_angle(1500.0, 3000.0).expect("slow over fast");
    println!("Critical angle: {:.2}°", radians_to_degrees(critical));

    let angles: Vec<f64> = (0..=12).map(|i| degrees_to_radians(i as f64 * 5.0)).collect();

    let start = std::time::Instant::now();
    let traces = trace_parallel(&stack, &[Point::ZERO], &angles).expect("valid rays");
    println!("Traced {} rays in {:?}", traces.len(), start.elapsed());

    for trace in &traces {
        let outcome = match trace.status {
            RayStatus::Completed => format!("transmits at {:.2}°", radians_to_degrees(trace.exit_angle())),
            RayStatus::TotalInternalReflection { .. } => "reflects".to_string(),
        };
        println!("  {:>5.1}° -> {}", radians_to_degrees(trace.launch_angle), outcome);
    }

    let image = render_plot(&stack, &traces, &PlotConfig::default()).expect("plot");
    let filename = "critical_angle.png";
    save_plot(&image, filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}
