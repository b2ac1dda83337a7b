use anyhow::{Context, Result};
use clap::Parser;

mod cli;
mod logger;
mod report;

use cli::Args;
use logger::init_logger;
use strata_core::{load_survey, Survey};
use strata_tracer::{flatten, render_plot, save_plot, trace, trace_parallel, PlotConfig};

fn load(args: &Args) -> Result<Survey> {
    match &args.survey {
        Some(path) => load_survey(path)
            .with_context(|| format!("Failed to load survey {}", path.display())),
        None => {
            log::info!("No survey given, using the built-in seven-layer survey");
            Ok(Survey::default())
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    log::info!("Starting Strata {}", env!("CARGO_PKG_VERSION"));

    let survey = load(&args)?;
    let stack = survey.layer_stack()?;
    let origins = survey.origin_points();
    let angles = survey.launch_angles();

    log::info!(
        "{} layers, {} origins, {} launch angles",
        stack.len(),
        origins.len(),
        angles.len()
    );

    let traces = if args.sequential {
        trace(&stack, &origins, &angles)?
    } else {
        trace_parallel(&stack, &origins, &angles)?
    };

    if args.flat {
        print!("{}", report::format_flat(&flatten(&traces)));
    } else {
        for ray in &traces {
            println!("{}", report::format_trace(ray));
        }
    }

    if args.no_plot {
        return Ok(());
    }

    let config = PlotConfig {
        width: args.width.unwrap_or(survey.plot.width),
        height: args.height.unwrap_or(survey.plot.height),
        seed: survey.plot.seed,
        ..Default::default()
    };
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| survey.plot.output.clone().into());

    let image = render_plot(&stack, &traces, &config).context("Failed to render plot")?;
    save_plot(&image, &output).with_context(|| format!("Failed to save {}", output.display()))?;

    Ok(())
}
