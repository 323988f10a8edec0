use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::{self, File};
use std::process::ExitCode;

use terminal_mines::core::config;
use terminal_mines::core::difficulty::Difficulty;
use terminal_mines::tui;

#[derive(Parser)]
#[command(name = "mines", about = "Minesweeper in your terminal")]
struct Args {
    /// easy, balanced, intermediate, challenging, expert, or "mines,width,height"
    #[arg(short, long)]
    difficulty: Option<Difficulty>,

    /// Seed for a reproducible mine layout
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };
    let resolved = match config::resolve(&file_config, args.difficulty, args.seed) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };

    // Initialize file logger - the terminal itself is in raw mode
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Some(parent) = resolved.log_file.parent() {
        let _ = fs::create_dir_all(parent);
    }
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!(
        "Mines starting up with difficulty {} (seed {:?})",
        resolved.difficulty,
        resolved.seed
    );

    match tui::run(resolved) {
        Ok(()) => ExitCode::SUCCESS,
        Err(tui::TuiError::Game(e)) => {
            eprintln!("{}", e);
            ExitCode::from(2)
        }
        Err(e) => {
            log::warn!("Terminal error: {}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
