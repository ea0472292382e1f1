extern crate env_logger;
#[macro_use]
extern crate log;
use std::{
    io::{stdin, stdout, Write},
    path::Path,
};

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

mod cli;
mod generate;
mod io;
mod prompt;
mod seq;
mod stats;

use cli::Cli;

/// Seeds the generator from `--seed` if one was given, or from the OS otherwise.
fn get_rng(seed: Option<u64>) -> Xoshiro256PlusPlus {
    match seed {
        Some(s) => {
            info!("Using seed {s}");
            Xoshiro256PlusPlus::seed_from_u64(s)
        }
        None => Xoshiro256PlusPlus::from_entropy(),
    }
}

fn try_main() -> Result<()> {
    // info lines would be interleaved with the prompts, so only warnings are shown by default
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_target(false)
        .init();

    let cli = Cli::parse();
    info!("seqsplice v{}", cli::VERSION);

    let mut input = stdin().lock();
    let mut output = stdout().lock();

    let request = prompt::collect_request(&mut input, &mut output)
        .context("Could not collect the sequence details")?;

    let mut rng = get_rng(cli.seed);

    // files go to the working directory
    let outcome = generate::generate(&request, &mut rng, Path::new(""))?;
    outcome.report(&mut output)?;
    output.flush()?;

    Ok(())
}

fn main() {
    if let Err(err) = try_main() {
        error!("{}", err);

        // report any errors that are produced
        err.chain()
            .skip(1)
            .for_each(|cause| error!("  because: {}", cause));

        std::process::exit(1);
    }
}
