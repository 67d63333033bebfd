use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use collider::cli::Cli;
use collider::report;
use collider::{Collider, Config, EntropySource, Outcome, RandomSource, SeededSource};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default = if verbose { "collider=debug" } else { "collider=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn emit(msg: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(msg.as_bytes())?;
    stdout.flush()
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match Config::from_cli(&cli) {
        Ok(c) => c,
        Err(e) => {
            error!("invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Seeded runs are reproducible, otherwise every draw gets fresh entropy
    //
    let source: Box<dyn RandomSource> = match cli.seed {
        Some(seed) => {
            debug!(seed, "using seeded source");
            Box::new(SeededSource::new(seed))
        }
        None => Box::new(EntropySource::new()),
    };

    let mut game = Collider::new(&config, source).with_progress(cli.progress_every);

    info!(
        "Drawing {} from {} until {} comes up (1 in {} per draw)",
        config.draw_size(),
        config.pool_size(),
        config.target(),
        game.sampler().combinations()
    );

    let outcome = game.run(cli.max_draws);
    if let Outcome::Exhausted { draws } = outcome {
        warn!(draws, "draw limit reached without a collision");
    }

    // Only the result goes to stdout, logging stays on stderr
    //
    let mut msg_buf = String::with_capacity(256);
    let mut itoa_buf = itoa::Buffer::new();
    report::write_outcome(&mut msg_buf, &mut itoa_buf, &outcome);

    if let Err(e) = emit(&msg_buf) {
        error!("failed to write result: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
