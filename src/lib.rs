pub mod casing;
pub mod cli;
pub mod error;
pub mod transform;
pub mod value;

use std::{
    env,
    io::{self, Read, Write},
    sync::OnceLock,
};

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, debug, info};

use crate::{
    cli::{Cli, Commands, TransformArgs},
    transform::{CaseTransformer, Conversion},
    value::Value,
};

pub use crate::{casing::Casing, error::Error};

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("recase", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Forward(args) => handle_transform(&args, Direction::Forward),
        Commands::Backward(args) => handle_transform(&args, Direction::Backward),
    }
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Forward,
    Backward,
}

fn handle_transform(args: &TransformArgs, direction: Direction) -> Result<()> {
    let transformer = transformer_from_args(args);
    info!(
        "Transforming {} (source casing '{}', target casing '{}', locale '{}')",
        match direction {
            Direction::Forward => "source -> target",
            Direction::Backward => "target -> source",
        },
        transformer.source_casing(),
        transformer.target_casing(),
        args.locale
            .as_ref()
            .map(|l| l.to_string())
            .unwrap_or_else(|| "und".into()),
    );

    let text = match &args.text {
        Some(text) => text.clone(),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Reading text from stdin")?;
            buffer
        }
    };

    let locale = args.locale.as_ref();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in text.lines() {
        let value = Value::from(line);
        let conversion = match direction {
            Direction::Forward => transformer.forward(&value, locale),
            Direction::Backward => transformer.backward(&value, locale),
        };
        match conversion {
            Conversion::Converted(cased) => {
                writeln!(out, "{cased}").context("Writing transformed text")?
            }
            Conversion::NotApplicable => debug!("Skipping non-string input"),
        }
    }
    Ok(())
}

fn transformer_from_args(args: &TransformArgs) -> CaseTransformer {
    match args.casing {
        Some(casing) => CaseTransformer::with_casing(casing),
        None => CaseTransformer::with_casings(args.source_casing, args.target_casing),
    }
}
