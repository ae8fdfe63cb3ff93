//! CLI tool that writes a prototyping breadboard EAGLE board file
//!
//! Usage:
//!   cargo run --release --bin genprotoboard -- [options] > protoboard.brd
//!
//! Run with `--help` for the option list.

use std::env;
use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use log::{error, info};

use protoboard_gen::config::{CliOptions, USAGE};
use protoboard_gen::{document_to_file, generate_board, write_document};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let options = CliOptions::parse(env::args().skip(1))?;
    if options.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let config = options.resolve()?;
    let params = config.layout_params();
    let settings = config.grid_settings();

    let start = std::time::Instant::now();
    let board = generate_board(&params, &settings).context("Board generation failed")?;
    info!("Board generated in {:.2}ms", start.elapsed().as_secs_f64() * 1000.0);

    // The document is only written once it is complete
    match &options.output {
        Some(path) => {
            document_to_file(&board.document, path)?;
            info!("Wrote {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_document(&board.document, &mut handle)?;
        }
    }
    Ok(())
}
