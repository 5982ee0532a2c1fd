use std::{path::PathBuf, process};

use clap::Parser;
use stackcalc::batch::{DEFAULT_INPUT, DEFAULT_OUTPUT, process_file};
use tracing_subscriber::{EnvFilter, fmt};

/// stackcalc evaluates one arithmetic expression per line of a text file and
/// writes one result per line to another.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File with one infix expression per line.
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// File that receives one result per input line.
    #[arg(default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter)
         .with_writer(std::io::stderr)
         .with_target(false)
         .init();

    match process_file(&args.input, &args.output) {
        Ok(_) => println!("Results written successfully to '{}'.", args.output.display()),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        },
    }
}
