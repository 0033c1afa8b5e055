//! godecl CLI: explains fragments of Go code in English.

use std::io::{self, BufRead};

use clap::Parser;
use miette::{IntoDiagnostic, Result};

use godecl::{go_to_english, EXAMPLES};

#[derive(Parser)]
#[command(name = "godecl", version, about = "Like cdecl, but for Go")]
struct Cli {
    /// Go fragments to explain. Reads standard input line by line when none
    /// are given.
    fragments: Vec<String>,

    /// Print every built-in example with its English rendering.
    #[arg(long)]
    examples: bool,

    /// Report unparseable fragments and carry on with the rest.
    #[arg(long)]
    keep_going: bool,

    /// More logging (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok();

    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    if cli.examples {
        for src in EXAMPLES {
            println!("{src}");
            println!("  {}", go_to_english(src)?);
        }
        return Ok(());
    }

    if !cli.fragments.is_empty() {
        for frag in &cli.fragments {
            explain(frag, cli.keep_going)?;
        }
        return Ok(());
    }

    tracing::info!("reading fragments from standard input");
    for line in io::stdin().lock().lines() {
        explain(&line.into_diagnostic()?, cli.keep_going)?;
    }
    Ok(())
}

fn explain(frag: &str, keep_going: bool) -> Result<()> {
    match go_to_english(frag) {
        Ok(english) => println!("{english}"),
        Err(e) if keep_going => println!("error: {e}"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
