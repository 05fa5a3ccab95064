use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use taper_core::{Board, STARTING_FEN};
use taper_eval::{Evaluator, TaperedEval, breakdown};
use tracing::level_filters::LevelFilter;
use tracing::{debug, info, warn};

/// Score chess positions with the tapered static evaluator.
///
/// Scores are relative to the side to move. Positions come from the command
/// line, or one FEN per line on stdin when none are given.
#[derive(Parser, Debug)]
#[command(name = "taper", version)]
struct Args {
    /// FEN strings to evaluate (quote each one).
    fens: Vec<String>,

    /// Evaluate the standard starting position.
    #[arg(long)]
    startpos: bool,

    /// Print the board and every intermediate value, not just the score.
    #[arg(short, long)]
    breakdown: bool,

    /// Raise log verbosity on stderr: -v for debug, -vv for trace.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let evaluator = TaperedEval;
    let mut out = io::stdout().lock();

    if args.startpos {
        report(&mut out, &evaluator, STARTING_FEN, args.breakdown)?;
    }
    for fen in &args.fens {
        report(&mut out, &evaluator, fen, args.breakdown)?;
    }

    if !args.startpos && args.fens.is_empty() {
        info!("reading positions from stdin");
        for line in io::stdin().lock().lines() {
            let line = line.context("failed to read stdin")?;
            let fen = line.trim();
            if fen.is_empty() || fen.starts_with('#') {
                continue;
            }
            // A bad line in a batch is skipped rather than ending the run.
            if let Err(err) = report(&mut out, &evaluator, fen, args.breakdown) {
                let error = format!("{err:#}");
                warn!(error = %error, "skipping position");
            }
        }
    }

    Ok(())
}

fn report<E: Evaluator<Board>>(
    out: &mut impl Write,
    evaluator: &E,
    fen: &str,
    detailed: bool,
) -> Result<()> {
    let board: Board = fen
        .parse()
        .with_context(|| format!("invalid FEN \"{fen}\""))?;
    debug!(fen, evaluator = evaluator.name(), "evaluating");

    if detailed {
        writeln!(out, "{}", board.pretty())?;
        writeln!(out, "{}", breakdown(&board))?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", evaluator.evaluate(&board))?;
    }
    Ok(())
}
