//! mlpforge CLI: builds the demo perceptron engine.
//!
//! Runs the classic flow end-to-end: persist the trained parameters through
//! the weight store, load them back as a separate pipeline would, define the
//! network, build it, and write the serialized engine to disk.

use std::error::Error;
use std::path::PathBuf;
use std::process;

use clap::{Arg, ArgMatches, Command};
use tracing::info;
use tracing_subscriber::EnvFilter;

use mlpforge_builder::{
    Activation, BuildConfig, EngineBuilder, NetworkDef, PassthroughBuilder, TensorDef,
};

/// fc1 parameters of the demo perceptron: 3 inputs, 2 outputs.
const FC1_WEIGHTS: [f32; 6] = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6];
const FC1_BIAS: [f32; 2] = [0.1, 0.5];

fn build_cli() -> Command {
    Command::new("mlpforge")
        .about("Builds a two-layer perceptron engine through the weight store")
        .arg(
            Arg::new("model-dir")
                .long("model-dir")
                .value_name("DIR")
                .default_value("model")
                .help("Directory for weight and engine files"),
        )
        .arg(
            Arg::new("engine-out")
                .long("engine-out")
                .value_name("FILE")
                .help("Engine output path (default: <model-dir>/mlp.engine)"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .default_value("info")
                .help("Minimum log severity; RUST_LOG takes precedence"),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    // One process-wide subscriber with a severity floor, installed here and
    // nowhere else; library crates only emit through the tracing facade.
    let level = matches
        .get_one::<String>("log-level")
        .cloned()
        .unwrap_or_else(|| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();

    if let Err(e) = run(&matches) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let model_dir = matches
        .get_one::<String>("model-dir")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("model"));
    std::fs::create_dir_all(&model_dir)?;

    let weights_path = model_dir.join("fc1.wts");
    let bias_path = model_dir.join("fc1.bias");

    // Persist the parameters, then reload them through the store, the same
    // way a training pipeline on the other side of the file would hand them
    // over.
    mlpforge_weights::save(&weights_path, &FC1_WEIGHTS)?;
    mlpforge_weights::save(&bias_path, &FC1_BIAS)?;
    info!(
        target: "mlpforge::cli",
        dir = %model_dir.display(),
        "Saved fc1 weights and bias"
    );

    let fc1_weights = mlpforge_weights::load(&weights_path)?;
    let fc1_bias = mlpforge_weights::load(&bias_path)?;

    // input(1, 3, 1, 1) -> fc1 -> sigmoid -> "output"
    let mut network = NetworkDef::new(TensorDef::new("data", vec![1, 3, 1, 1]));
    network
        .add_fully_connected(2, fc1_weights, fc1_bias)
        .add_activation(Activation::Sigmoid)
        .mark_output("output");

    let config = BuildConfig::default();
    let engine = PassthroughBuilder.build(&network, &config)?;

    let engine_path = matches
        .get_one::<String>("engine-out")
        .map(PathBuf::from)
        .unwrap_or_else(|| model_dir.join("mlp.engine"));
    engine.write_to(&engine_path)?;
    info!(
        target: "mlpforge::cli",
        path = %engine_path.display(),
        bytes = engine.len(),
        "Engine written"
    );

    Ok(())
}
