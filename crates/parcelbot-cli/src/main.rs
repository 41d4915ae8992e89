//! Parcelbot CLI - chat front-end for the tracking resolver.

use parcelbot_cli::{repl, Cli, Command, Config, Formatter};
use parcelbot_cli::output::INFO_CARD;
use parcelbot_llm::GeminiProvider;
use parcelbot_resolver::Resolver;
use parcelbot_tracking::{LoadOutcome, TrackingDataset};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> parcelbot_cli::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;

    // Seed the default config file on first run
    if cli.config.is_none() {
        if let Ok(path) = Config::path() {
            if !path.exists() {
                config.save().ok();
            }
        }
    }

    config.apply_overrides(&cli);

    let formatter = Formatter::new(config.color);

    // The dataset path never fails startup; a bad file means an empty
    // dataset and a visible warning.
    let (dataset, outcome) = TrackingDataset::load(&config.dataset_path);
    if let LoadOutcome::Unavailable { reason } = &outcome {
        eprintln!(
            "{}",
            formatter.warning(&format!("Tracking data niet geladen: {reason}"))
        );
    }

    match cli.command {
        Some(Command::Samples(args)) => {
            let n = dataset.len().min(args.limit);
            println!("{}", formatter.format_samples(&dataset.records()[..n]));
            return Ok(());
        }
        Some(Command::Info) => {
            println!("{INFO_CARD}");
            return Ok(());
        }
        _ => {}
    }

    // Chat and ask need the provider
    let api_key = config.api_key.clone().unwrap_or_default();
    let provider = GeminiProvider::new(api_key, config.model.clone());
    let resolver = Resolver::new(dataset, provider);

    match cli.command {
        None | Some(Command::Chat) => repl::run_chat(&resolver, &formatter)?,
        Some(Command::Ask(args)) => {
            println!("{}", resolver.respond(&args.question));
        }
        Some(Command::Samples(_)) | Some(Command::Info) => unreachable!(),
    }

    Ok(())
}
