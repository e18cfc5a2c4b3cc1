//! Aris - Command Line Interface
//!
//! Runs a propositional logic program from a file

use aris_logic::{run_reader, InterpreterConfig};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "aris")]
#[command(about = "Interpreter for propositional logic arguments", long_about = None)]
#[command(version)]
struct Args {
    /// Program file to run (required)
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Echo each statement before executing it
    #[arg(short = 'e', long = "echo")]
    echo: bool,

    /// Print a summary of the recorded results at the end
    #[arg(short = 's', long = "summary")]
    summary: bool,

    /// Output file (writes to stdout if not specified)
    #[arg(short = 'O', long = "out-file")]
    output_file: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = InterpreterConfig {
        echo: args.echo,
        summary: args.summary,
    };

    let reader = match File::open(&args.input) {
        Ok(file) => BufReader::new(file),
        Err(e) => {
            eprintln!("Error reading program file '{}': {}", args.input.display(), e);
            process::exit(1);
        }
    };

    let sink: Box<dyn Write> = match args.output_file {
        Some(ref output_path) => match File::create(output_path) {
            Ok(file) => Box::new(BufWriter::new(file)),
            Err(e) => {
                eprintln!("Error creating output file '{}': {}", output_path.display(), e);
                process::exit(1);
            }
        },
        None => Box::new(io::stdout().lock()),
    };

    if let Err(e) = run_reader(reader, sink, config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
