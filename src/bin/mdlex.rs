//! Command-line interface for mdlex
//! This binary inspects markdown files through the processing API and checks
//! that they survive a parse / reconstruct round trip.
//!
//! Usage:
//!   mdlex inspect `<path>` [--format `<format>`]   - Print a file in the given format
//!   mdlex check `<path>`                         - Verify the file round-trips
//!   mdlex list-formats                          - List all available formats
//!
//! `<path>` may be `-` to read standard input. `--config <file>` layers a TOML
//! file over the built-in defaults and `--log-level <level>` sets the stderr
//! log level.

use clap::{Arg, ArgMatches, Command};
use mdlex::mdlex::config::{ConfigError, Loader, MdlexConfig};
use mdlex::mdlex::processor::{
    available_formats, process_source, ProcessingError, ProcessingOptions, ProcessingSpec,
};
use mdlex::{parse_document, ToText};
use std::io::Read;
use std::path::Path;
use std::process;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};

fn main() {
    let matches = Command::new("mdlex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting and round-tripping markdown files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("TOML configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .help("Log level for stderr output (error, warn, info, debug, trace)"),
        )
        .subcommand(
            Command::new("inspect")
                .about("Process a file and print it in the requested format")
                .arg(
                    Arg::new("path")
                        .help("Path to the markdown file, or - for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., ast-treeviz, token-simple)"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Verify that a file reconstructs exactly from its tree")
                .arg(
                    Arg::new("path")
                        .help("Path to the markdown file, or - for stdin")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("list-formats").about("List all available output formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("inspect", sub)) => {
            let config = load_config(sub);
            handle_inspect_command(path_arg(sub), &config);
        }
        Some(("check", sub)) => {
            load_config(sub);
            handle_check_command(path_arg(sub));
        }
        Some(("list-formats", _)) => handle_list_formats_command(),
        _ => unreachable!("a subcommand is required"),
    }
}

fn path_arg(matches: &ArgMatches) -> &str {
    matches
        .get_one::<String>("path")
        .expect("path is a required argument")
}

/// Build the configuration from defaults, `--config` and flag overrides, then
/// install the stderr subscriber at the configured level.
fn load_config(matches: &ArgMatches) -> MdlexConfig {
    let config = build_config(matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        process::exit(1);
    });
    init_logging(&config.logging.level);
    debug!(?config, "configuration loaded");
    config
}

fn build_config(matches: &ArgMatches) -> Result<MdlexConfig, ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(Some(format)) = matches.try_get_one::<String>("format").ok() {
        loader = loader.set_override("inspect.format", format.as_str())?;
    }
    if let Some(level) = matches.get_one::<String>("log-level") {
        loader = loader.set_override("logging.level", level.as_str())?;
    }
    loader.build()
}

fn init_logging(level: &str) {
    let filter = level.parse::<LevelFilter>().unwrap_or_else(|_| {
        eprintln!("Unknown log level '{}', using warn", level);
        LevelFilter::WARN
    });
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(filter)
        .init();
}

fn read_source(path: &str) -> Result<String, ProcessingError> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .map_err(|e| ProcessingError::IoError(e.to_string()))?;
        return Ok(source);
    }
    if !Path::new(path).exists() {
        return Err(ProcessingError::FileNotFound(path.to_string()));
    }
    std::fs::read_to_string(path).map_err(|e| ProcessingError::IoError(e.to_string()))
}

fn inspect(path: &str, config: &MdlexConfig) -> Result<String, ProcessingError> {
    let spec = ProcessingSpec::from_string(&config.inspect.format)?;
    let source = read_source(path)?;
    process_source(&source, &spec, &ProcessingOptions::from(&config.inspect))
}

/// Handle the inspect command
fn handle_inspect_command(path: &str, config: &MdlexConfig) {
    match inspect(path, config) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            if matches!(
                e,
                ProcessingError::InvalidFormat(_)
                    | ProcessingError::InvalidStage(_)
                    | ProcessingError::InvalidFormatType(_)
            ) {
                eprintln!("\nAvailable formats:");
                for format in available_formats() {
                    eprintln!("  {}", format);
                }
            }
            process::exit(1);
        }
    }
}

/// Handle the check command
fn handle_check_command(path: &str) {
    let source = read_source(path).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });
    let doc = parse_document(&source).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    let reconstructed = doc.to_text();
    if reconstructed != source {
        let offset = source
            .bytes()
            .zip(reconstructed.bytes())
            .take_while(|(a, b)| a == b)
            .count();
        eprintln!(
            "Round-trip mismatch in {}: output differs from input at byte {}",
            path, offset
        );
        process::exit(1);
    }

    info!(path, blocks = doc.children.len(), "round trip verified");
    println!("OK: {} ({} blocks)", path, doc.children.len());
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:");
    for format in available_formats() {
        println!("  {}", format);
    }
}
