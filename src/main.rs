//! CLI entry point for converting images into pixel matrices

use clap::Parser;
use pixelmatrix::io::cli::{Cli, FileProcessor};

// Reports are the program's output
#[allow(clippy::print_stdout)]
fn main() -> pixelmatrix::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    for report in processor.process()? {
        println!("{report}");
    }
    Ok(())
}
