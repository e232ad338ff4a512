use std::fs;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result, ensure};
use clap::Parser as ClapParser;
use log::{info, warn};
use rand::SeedableRng;
use rand::prelude::SmallRng;

use sa::config::SAConfig;
use sa::io;
use sa::io::cli::Cli;
use sa::io::output::SAOutput;
use sa::io::read_instance;
use sa::opt::annealing::SAOptimizer;
use sa::opt::multi_start::multi_start;
use sa::opt::observer::LogObserver;
use tierpack::io::{export, import};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            SAConfig::default()
        }
        Some(config_file) => io::read_json::<SAConfig>(&config_file).context("incorrect config file format")?,
    };
    config.validate()?;
    info!("[MAIN] Successfully parsed SAConfig: {config:?}");

    ensure!(
        args.fraction > 0.0 && args.fraction <= 1.0,
        "fraction should be in (0, 1], got {}",
        args.fraction
    );

    let input_stem = args
        .input
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input path should end in a valid file or folder name")?;

    fs::create_dir_all(&args.solution_folder)
        .with_context(|| format!("could not create solution folder: {:?}", args.solution_folder))?;

    let ext_instance = read_instance(&args.input)?;
    let instance = {
        let instance = import::import(&ext_instance, config.pack)?;
        match args.fraction < 1.0 {
            true => instance.truncated(args.fraction),
            false => instance,
        }
    };
    info!(
        "[MAIN] instance {:?}: {} products, pallet: {:?}, container: {:?}",
        ext_instance.name,
        instance.n_products(),
        instance.pallet(),
        instance.container()
    );
    let instance = Arc::new(instance);

    let start = Instant::now();
    let solution = match config.n_runs {
        1 => {
            let rng = match config.prng_seed {
                Some(seed) => SmallRng::seed_from_u64(seed),
                None => SmallRng::from_os_rng(),
            };
            let mut optimizer = SAOptimizer::new(instance.clone(), config.clone(), rng)?;
            optimizer.solve_with(&mut LogObserver::new(config.log_interval))
        }
        n_runs => multi_start(instance.clone(), &config, n_runs)?,
    };

    let output = SAOutput {
        instance: export::export_instance(&instance, &ext_instance.name),
        solution: export::export(&solution, start.elapsed()),
        config,
    };
    let solution_path = args.solution_folder.join(format!("sol_{input_stem}.json"));
    io::write_json(&output, &solution_path)?;

    let assignment_path = args.solution_folder.join(format!("assignment_{input_stem}.json"));
    io::write_json(&export::export_assignment(&solution), &assignment_path)?;

    Ok(())
}
