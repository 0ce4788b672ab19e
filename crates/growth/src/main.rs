//! Runs a growth-rate analysis and writes the count tables.
//!
//! Usage: `growth [config.json] [output-dir]`. Without a config file the
//! defaults are used; the output directory defaults to the current one.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use env_logger::Env;
use growth::{Analysis, AnalysisConfig, AnalysisError, Metric};
use log::{error, info};

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AnalysisError> {
    let args: Vec<String> = std::env::args().collect();
    let config = match args.get(1) {
        Some(path) => AnalysisConfig::from_path(path)?,
        None => AnalysisConfig::default(),
    };
    let out_dir = PathBuf::from(args.get(2).map_or(".", String::as_str));

    let analysis = Analysis::from_config(&config)?;

    if config.visualize {
        let stdout = io::stdout();
        analysis.animate(&config, &mut stdout.lock())?;
    }

    let report = analysis.run()?;

    fs::create_dir_all(&out_dir)?;
    for metric in [Metric::Comparisons, Metric::Swaps] {
        let path = out_dir.join(format!("{}.csv", metric.label()));
        report.write_csv(metric, fs::File::create(&path)?)?;
        info!("wrote {}", path.display());

        println!("Growth rate: {}", metric.label());
        print!("{}", report.to_csv(metric));
        println!();
    }

    let points = serde_json::json!({
        "comparisons": report.melt(Metric::Comparisons),
        "swaps": report.melt(Metric::Swaps),
    });
    let path = out_dir.join("growth_points.json");
    fs::write(&path, serde_json::to_string_pretty(&points)?)?;
    info!("wrote {}", path.display());

    let path = out_dir.join("report.json");
    fs::write(&path, report.to_json()?)?;
    info!("wrote {}", path.display());

    Ok(())
}
