use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use proto2c_compiler::error::GenError;
use proto2c_compiler::{generate_file, load_descriptor_set, output_file_name};

#[derive(Parser)]
#[command(name = "proto2c")]
#[command(about = "Generate C struct headers from parsed protobuf descriptors", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one C header per descriptor file in the set
    Generate {
        /// Input descriptor-set JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Directory to write headers into (defaults to the current directory)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },

    /// Run generation in memory and report per-file status, writing nothing
    Check {
        /// Input descriptor-set JSON file
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Generate { input, out_dir } => {
            let dir = out_dir.clone().unwrap_or_else(|| PathBuf::from("."));
            run_generate(input, &dir)
        }
        Commands::Check { input } => run_check(input),
    };

    match result {
        Ok(failures) if failures == 0 => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

/// Compile every file in the set and write its header. One file's failure,
/// whether in generation or in writing the artifact, must not stop its
/// siblings; returns how many files failed.
fn run_generate(input: &Path, out_dir: &Path) -> Result<usize, GenError> {
    let set = load_descriptor_set(input)?;
    let mut failures = 0;

    for file in &set.files {
        let outcome = generate_file(file).and_then(|text| {
            let out_path = out_dir.join(output_file_name(&file.name));
            write_header(&out_path, &text)?;
            Ok(out_path)
        });
        match outcome {
            Ok(out_path) => {
                println!("Generated {} → {}", file.name, out_path.display());
            }
            Err(err) => {
                eprintln!("{}: {}", file.name, err);
                failures += 1;
            }
        }
    }
    Ok(failures)
}

fn write_header(out_path: &Path, text: &str) -> Result<(), GenError> {
    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(out_path, text)?;
    Ok(())
}

fn run_check(input: &Path) -> Result<usize, GenError> {
    let set = load_descriptor_set(input)?;
    let mut failures = 0;

    for file in &set.files {
        match generate_file(file) {
            Ok(_) => println!("{}: ok", file.name),
            Err(err) => {
                eprintln!("{}: {}", file.name, err);
                failures += 1;
            }
        }
    }
    Ok(failures)
}
