use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use serde::Serialize;
use serde::de::DeserializeOwned;

use tierpack::io::ext_repr::{ExtAssignment, ExtInstance};
use tierpack::io::table::{parse_capacities, parse_products, table_path};

use crate::EPOCH;

pub mod cli;
pub mod output;

pub const PRODUCTS_TABLE: &str = "products";
pub const CAPACITIES_TABLE: &str = "capacities";

/// Reads an instance, either from a JSON file or from a folder containing
/// a `products.csv` and a `capacities.csv` table
pub fn read_instance(path: &Path) -> Result<ExtInstance> {
    if !path.is_dir() {
        return read_json(path);
    }
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("instance")
        .to_string();
    let products = {
        let table = table_path(&path.join(PRODUCTS_TABLE))?;
        parse_products(&read_text(&table)?, &table.display().to_string())?
    };
    let capacities = {
        let table = table_path(&path.join(CAPACITIES_TABLE))?;
        parse_capacities(&read_text(&table)?, &table.display().to_string())?
    };
    Ok(ExtInstance {
        name,
        products,
        capacities,
    })
}

pub fn read_assignment(path: &Path) -> Result<ExtAssignment> {
    read_json(path)
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).with_context(|| format!("could not open file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).with_context(|| format!("could not parse file: {}", path.display()))
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("could not read file: {}", path.display()))
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("could not open solution file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write solution file: {}", path.display()))?;

    info!(
        "[IO] solution written to file:///{}",
        fs::canonicalize(path)?.to_str().unwrap_or("-").trim_start_matches('/')
    );
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        // Add blanket level filter
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    info!("[MAIN] epoch: {}", jiff::Timestamp::now());
    Ok(())
}
