//! Cosmic Reader - A lightweight PDF viewer for the COSMIC desktop
//!
//! Entry point for the application. Handles CLI argument parsing,
//! logging initialization, and application bootstrap.

mod app;
mod config;
mod error;
mod file_handler;
mod menu;
mod message;
mod state;
mod ui;

// Internationalization
mod i18n;

use app::{CosmicReader, Flags};
use std::path::PathBuf;

/// Application name for logging
const APP_NAME: &str = "cosmic-reader";

fn main() -> cosmic::iced::Result {
    init_logging();

    log::info!("Starting Cosmic Reader");
    i18n::init();

    let flags = parse_args();

    // Window size is managed by the compositor
    cosmic::app::run::<CosmicReader>(
        cosmic::app::Settings::default()
            .size_limits(cosmic::iced::Limits::NONE.min_width(360.0).min_height(300.0)),
        flags,
    )
}

/// Initialize the logging system
fn init_logging() {
    // Set default log level if not specified
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info,cosmic_reader=debug");
    }

    env_logger::Builder::from_default_env()
        .format_timestamp_millis()
        .init();
}

/// Parse command line arguments
fn parse_args() -> Flags {
    let mut flags = Flags::default();

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-v" | "--version" => {
                print_version();
                std::process::exit(0);
            }
            arg if arg.starts_with('-') => {
                eprintln!("Unknown option: {}", arg);
                eprintln!("Use --help for usage information");
                std::process::exit(1);
            }
            _ => {
                if flags.file.is_some() {
                    log::warn!("Only one document can be opened; ignoring {}", arg);
                    continue;
                }
                let path = PathBuf::from(&arg);
                if !file_handler::is_document_path(&path) {
                    log::warn!("{} does not look like a PDF document", path.display());
                }
                flags.file = Some(path);
            }
        }
    }

    flags
}

/// Print help message
fn print_help() {
    println!(
        r#"Cosmic Reader - A lightweight PDF viewer

USAGE:
    {APP_NAME} [OPTIONS] [FILE]

OPTIONS:
    -h, --help          Show this help message
    -v, --version       Show version information

KEYBOARD SHORTCUTS:
    Ctrl+O              Open document
    Ctrl+R              Reload document
    Ctrl+W              Close document
    Ctrl+Q              Quit
    Ctrl+F              Find
    F9                  Toggle sidebar
    F10                 Main menu
    F11                 Toggle fullscreen
    Ctrl+= / Ctrl+-     Zoom in / out
    Ctrl+0              Original size
    Page Up/Down        Previous / next page
    Home/End            First / last page"#
    );
}

/// Print version information
fn print_version() {
    println!("{} {}", APP_NAME, env!("CARGO_PKG_VERSION"));
}
