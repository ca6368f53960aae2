//! Batch prediction CLI
//!
//! Scores one customer profile from a JSON file and prints the result.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use churn_predictor::{batch, config, logging, Artifacts};

#[derive(Parser)]
#[command(name = "predict")]
#[command(about = "Predict churn for one customer profile", long_about = None)]
struct Args {
    /// Path to JSON with raw customer fields
    #[arg(short, long)]
    input: PathBuf,

    /// Save result JSON here as well
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Model artifact
    #[arg(long, env = "MODEL_PATH", default_value = config::DEFAULT_MODEL_PATH)]
    model: PathBuf,

    /// Decision threshold file
    #[arg(long, env = "THRESHOLD_PATH", default_value = config::DEFAULT_THRESHOLD_PATH)]
    threshold: PathBuf,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    logging::init("churn_predictor=warn,predict=warn", logging::LogFormat::Pretty);

    let predictor = Artifacts::load(&args.model, &args.threshold)
        .context("Failed to load model artifacts")?
        .into_predictor();

    let json = batch::run(&predictor, &args.input, args.out.as_deref())?;
    println!("{}", json);

    Ok(())
}
