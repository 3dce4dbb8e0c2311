//! `dogapi sub-breeds` command.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use dogapi::{BreedFetcher, CachingBreedFetcher, DogApiBreedFetcher};

use crate::args::ApiArgs;

#[derive(clap::Args)]
pub struct Args {
    /// Breeds to look up; repeated breeds are answered from the cache
    #[arg(required = true)]
    breeds: Vec<String>,

    #[command(flatten)]
    api: ApiArgs,

    /// Print call and cache statistics after the lookups
    #[arg(long)]
    stats: bool,
}

pub fn run(args: Args) -> anyhow::Result<ExitCode> {
    let remote =
        DogApiBreedFetcher::new(args.api.to_options()).context("failed to build HTTP client")?;

    let failed = lookup(
        remote,
        &args.breeds,
        args.stats,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Look up every breed through a cache around `fetcher`.
///
/// Results go to `out`, per-breed failures to `err`. Returns whether any
/// lookup failed.
fn lookup<F: BreedFetcher>(
    fetcher: F,
    breeds: &[String],
    stats: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    let mut fetcher = CachingBreedFetcher::new(fetcher);

    let mut failed = false;
    for breed in breeds {
        match fetcher.fetch_sub_breeds(breed) {
            Ok(sub_breeds) => writeln!(out, "{}", format_line(breed, &sub_breeds))?,
            Err(e) => {
                writeln!(err, "Error: {breed}: {e}")?;
                failed = true;
            }
        }
    }

    if stats {
        writeln!(
            out,
            "{} calls made, {} breeds cached",
            fetcher.calls_made(),
            fetcher.cached_len()
        )?;
    }

    tracing::debug!(calls = fetcher.calls_made(), "lookups finished");

    Ok(failed)
}

fn format_line(breed: &str, sub_breeds: &[String]) -> String {
    if sub_breeds.is_empty() {
        format!("{breed}: (none)")
    } else {
        format!("{breed}: {}", sub_breeds.join(", "))
    }
}
