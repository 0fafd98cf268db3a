use std::io::{self, prelude::*, BufWriter};
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, Level};

use loguniform::{generate_samples, seed::Seeder, LoguniformError};

const DEFAULT_MIN: f64 = 1.5;
const DEFAULT_MAX: f64 = 20.06;
const DEFAULT_NB_SAMPLES: usize = 100;

#[derive(Parser)]
#[command(version, about, long_about = None, allow_negative_numbers = true)]
struct Cli {
    /// lower bound of the distribution, in log-space
    #[arg(long, default_value_t = DEFAULT_MIN)]
    min: f64,

    /// upper bound of the distribution, in log-space
    #[arg(long, default_value_t = DEFAULT_MAX)]
    max: f64,

    /// number of samples to draw
    #[arg(short, default_value_t = DEFAULT_NB_SAMPLES)]
    n: usize,

    /// log more, can be repeated up to three times
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn write_samples(out: &mut impl Write, samples: &[f64]) -> io::Result<()> {
    for s in samples {
        writeln!(out, "{}", s)?;
    }
    out.flush()
}

fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let seed = Seeder::Automatic.seed();
    let samples = generate_samples(cli.min, cli.max, cli.n, seed)?;

    info!("writing {} samples", samples.len());
    write_samples(out, &samples)?;

    Ok(())
}

/// the line written to stderr when [`run`] fails
fn report(e: &anyhow::Error) -> String {
    match e.downcast_ref::<LoguniformError>() {
        Some(e) => format!("ERROR: {}", e),
        None => {
            debug!("unexpected failure: {:?}", e);
            "UNCAUGHT EXCEPTION DETECTED".to_string()
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(log_level(cli.verbose))
        .try_init()
        .expect("cannot init logger");

    let stdout = io::stdout();
    match run(&cli, &mut BufWriter::new(stdout.lock())) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", report(&e));
            ExitCode::FAILURE
        }
    }
}
