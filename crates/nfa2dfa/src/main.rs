use anyhow::{Context, Result};
use clap::Parser;
use nfa2dfa::{dfa_dot, dfa_report, parse_nfa, subset_construction};
use std::path::PathBuf;
use tracing::{Level, debug};

#[derive(Parser, Debug)]
#[command(name = "nfa2dfa", version, about = "Convert an epsilon-NFA to an equivalent DFA")]
struct Cli {
    /// File holding the NFA description; reads stdin when omitted
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Write a Graphviz rendering of the DFA to this path
    #[arg(long, value_name = "PATH")]
    dot: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_level(true)
        .with_max_level(level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let text = match &cli.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?,
        None => {
            debug!("no input file specified, using stdin");
            std::io::read_to_string(std::io::stdin()).context("could not read stdin")?
        }
    };

    let nfa = parse_nfa(&text).context("invalid NFA description")?;
    let dfa = subset_construction(&nfa);

    println!("{}", dfa_report(&dfa));

    if let Some(path) = &cli.dot {
        std::fs::write(path, dfa_dot(&dfa))
            .with_context(|| format!("could not write {}", path.display()))?;
        debug!("wrote DOT rendering to {}", path.display());
    }

    Ok(())
}
