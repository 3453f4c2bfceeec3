//! bitsieve CLI - build a Bloom filter, probe it, size it

use anyhow::{bail, Context, Result};
use bitsieve_core::{config::DEFAULT_FP_RATE, BloomFilter, FilterConfig};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "bitsieve", version, about = "bitsieve - fixed-size Bloom filter")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Run the built-in smoke test on a default (15 bit, 3 round) filter
    Demo,

    /// Add elements to a fresh filter, then check others against it
    Probe {
        /// Number of bits (defaults to 15)
        #[arg(long)]
        bits: Option<usize>,
        /// Number of hash rounds (defaults to 3)
        #[arg(long)]
        hashes: Option<usize>,
        /// JSON file with `num_bits` and `num_hashes`
        #[arg(long, conflicts_with_all = ["bits", "hashes"])]
        config: Option<PathBuf>,
        /// Elements to add
        #[arg(long, num_args = 1.., value_delimiter = ',')]
        add: Vec<String>,
        /// Elements to check
        #[arg(long, num_args = 1.., value_delimiter = ',')]
        check: Vec<String>,
        /// Print results as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Suggest a geometry for an expected element count
    Suggest {
        /// Expected number of distinct elements
        #[arg(long)]
        capacity: usize,
        /// Target false positive rate
        #[arg(long, default_value_t = DEFAULT_FP_RATE)]
        fp_rate: f64,
    },
}

#[derive(Serialize)]
struct ProbeReport {
    config: FilterConfig,
    bits_set: usize,
    results: Vec<ProbeResult>,
}

#[derive(Serialize)]
struct ProbeResult {
    element: String,
    present: bool,
}

#[derive(Serialize)]
struct Suggestion {
    #[serde(flatten)]
    config: FilterConfig,
    expected_false_positive_rate: f64,
}

fn main() -> Result<()> {
    // Initialize logging; stdout is reserved for results
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Demo => demo(),
        Cmd::Probe {
            bits,
            hashes,
            config,
            add,
            check,
            json,
        } => {
            let config = match config {
                Some(path) => FilterConfig::from_json_file(&path)
                    .with_context(|| format!("loading config {:?}", path))?,
                None => {
                    let defaults = FilterConfig::default();
                    FilterConfig::new(
                        bits.unwrap_or(defaults.num_bits),
                        hashes.unwrap_or(defaults.num_hashes),
                    )
                }
            };
            probe(config, &add, &check, json)
        }
        Cmd::Suggest { capacity, fp_rate } => suggest(capacity, fp_rate),
    }
}

fn demo() -> Result<()> {
    let mut filter = BloomFilter::default();
    info!("Running smoke test on {}", filter);

    filter.add("hello")?;
    filter.add("world")?;

    if !filter.check("hello")? {
        bail!("\"hello\" was added but is reported absent");
    }
    if filter.check("hello world")? {
        bail!("\"hello world\" was never added but is reported present");
    }

    println!("{}: {} of {} bits set", filter, filter.count_ones(), filter.num_bits());
    println!("check(\"hello\") = true");
    println!("check(\"hello world\") = false");
    println!("ok");
    Ok(())
}

fn probe(config: FilterConfig, add: &[String], check: &[String], json: bool) -> Result<()> {
    let mut filter = BloomFilter::with_config(config).context("invalid filter geometry")?;
    filter.add_all(add)?;
    debug!(added = add.len(), bits_set = filter.count_ones(), "filter populated");

    let results = check
        .iter()
        .map(|element| -> Result<ProbeResult> {
            Ok(ProbeResult {
                element: element.clone(),
                present: filter.check(element)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if json {
        let report = ProbeReport {
            config: filter.config(),
            bits_set: filter.count_ones(),
            results,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for result in &results {
            let verdict = if result.present {
                "possibly present"
            } else {
                "absent"
            };
            println!("{}\t{}", result.element, verdict);
        }
    }
    Ok(())
}

fn suggest(capacity: usize, fp_rate: f64) -> Result<()> {
    let config = FilterConfig::for_capacity(capacity, fp_rate)?;
    let suggestion = Suggestion {
        config,
        expected_false_positive_rate: config.false_positive_rate(capacity),
    };
    println!("{}", serde_json::to_string_pretty(&suggestion)?);
    Ok(())
}
