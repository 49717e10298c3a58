/// Find every set in a deck of Set cards read from a file
///
/// CLI Usage:
///   cargo run -- deck.txt                      # print the sets, one per line
///   cargo run -- deck.txt --format json        # print the sets as JSON
///   cargo run -- deck.txt --verify             # cross-check with brute force
///   cargo run -- deck.txt -o sets.txt --log-file
///
/// The deck file holds a 'dimensions,values' header line, then one card per
/// line as comma-separated values.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use separator::Separatable;

use set_solver::input::{InputError, load_deck};
use set_solver::output::{render_json, render_text, sorted_sets};
use set_solver::solver::{PairwiseSolver, brute_force_sets, build_cards};
use set_solver::utils::*;
use set_solver::Dimensions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// CLI arguments structure
#[derive(Parser, Debug)]
#[command(name = "set_solver")]
#[command(about = "Find every valid set in a deck of Set cards", long_about = None)]
struct Args {
    /// Deck file: 'dimensions,values' header, then one card per line
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write the sets to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Cross-check the result with the O(n^3) brute-force search
    #[arg(long)]
    verify: bool,

    /// Print the solver's debug trace
    #[arg(short, long)]
    debug: bool,

    /// Only print the sets
    #[arg(short, long)]
    quiet: bool,

    /// Mirror progress messages into a timestamped log file
    #[arg(long)]
    log_file: bool,
}

fn run(args: &Args) -> Result<(), String> {
    let deck = load_deck(&args.input).map_err(|e| e.to_string())?;
    info_print(&format!(
        "Deck {}: {} dimensions, {} values per dimension, {} cards",
        args.input.display(),
        deck.dimension_count,
        deck.values_size,
        deck.records.len().separated_string()
    ));

    let dims = Dimensions::new(deck.dimension_count, deck.values_size)
        .map_err(|e| InputError::from(e).to_string())?;
    let cards = build_cards(&dims, &deck.records).map_err(|e| InputError::from(e).to_string())?;

    let start_time = Instant::now();
    let mut solver = PairwiseSolver::new(&dims);
    let sets = solver.run(&cards);
    let elapsed = start_time.elapsed().as_secs_f64();
    info_print(&format!("   ... {}", solver.stats().to_string()));
    info_print(&format!("   ... solved in {:.3}s", elapsed));

    if args.verify {
        let start_time = Instant::now();
        let reference = brute_force_sets(&cards);
        info_print(&format!(
            "   ... brute force found {} sets in {:.3}s",
            reference.len().separated_string(),
            start_time.elapsed().as_secs_f64()
        ));
        if reference != sets {
            return Err(format!(
                "verification failed: pairwise solver found {} sets, brute force found {}",
                sets.len(),
                reference.len()
            ));
        }
        info_print("   ... verification passed");
    }

    let sorted = sorted_sets(&sets);
    let rendered = match args.format {
        OutputFormat::Text => render_text(&sorted),
        OutputFormat::Json => {
            let mut json = render_json(&dims, &sorted).map_err(|e| e.to_string())?;
            json.push('\n');
            json
        }
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .map_err(|e| format!("cannot write {}: {}", path.display(), e))?;
            info_print(&format!("Wrote {} sets to {}", sorted.len().separated_string(), path.display()));
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.debug {
        debug_print_on();
    } else {
        debug_print_off();
    }
    if args.quiet {
        info_print_off();
    } else {
        info_print_on();
    }
    if args.log_file {
        match init_log_file() {
            Ok(path) => debug_print(&format!("log file created: {}", path.display())),
            Err(e) => eprintln!("Warning: could not create log file: {}", e),
        }
    }

    banner("Set Solver");

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("error: {}", msg);
            ExitCode::FAILURE
        }
    }
}
