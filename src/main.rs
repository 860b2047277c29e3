//! calcsv - calculate integer formula cells in a CSV table.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::Context;
use calcsv_core::storage::csv;

fn print_usage() {
    eprintln!("Usage: calcsv <FILE>");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <FILE>    Table to calculate (header line: ,col1,col2,...)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -h, --help    Print help");
}

fn run(path: &Path) -> anyhow::Result<()> {
    let mut table =
        csv::load(path).with_context(|| format!("cannot load {}", path.display()))?;
    table.calculate()?;
    print!("{}", csv::render(&table));
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut file_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option: {}", arg);
                print_usage();
                std::process::exit(1);
            }
            _ => {
                if file_path.is_none() {
                    file_path = Some(PathBuf::from(&args[i]));
                } else {
                    eprintln!("Error: Unexpected argument: {}", args[i]);
                    print_usage();
                    std::process::exit(1);
                }
            }
        }
        i += 1;
    }

    let Some(file_path) = file_path else {
        print_usage();
        std::process::exit(1);
    };

    if let Err(e) = run(&file_path) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
