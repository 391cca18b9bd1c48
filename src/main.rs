// Wed Feb 11 2026 - Alex

use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use struct_offset_extractor::{
    config::Config,
    error::ExtractError,
    input,
    model::TypeArena,
    output::{Emitter, OutputSink, RecordStyle},
    utils::LoggingUtils,
    walk::{AttributeMatcher, PathBuilder, Walker},
};

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Extracts marked struct field offsets from a type dump", long_about = None)]
struct Args {
    /// JSON type dump produced by the compiler frontend
    input: PathBuf,

    /// Destination for offset records (standard output when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Marker attribute that selects fields for export
    #[arg(long, default_value = "extract_offset")]
    attribute: String,

    /// Joiner between qualified path segments
    #[arg(long, default_value = "::")]
    separator: String,

    /// Prepended to every emitted name
    #[arg(long, default_value = "")]
    prefix: String,

    /// Uppercase every path character
    #[arg(long)]
    capitalize: bool,

    /// Append to the destination instead of truncating it
    #[arg(long)]
    append: bool,

    /// Emit raw bit offsets instead of bytes
    #[arg(long)]
    output_bits: bool,

    /// Path buffer capacity
    #[arg(long, default_value_t = 256)]
    max_length: usize,

    /// Emit #define records instead of plain ones
    #[arg(long)]
    macros: bool,

    /// Extra key[=value] settings; unknown keys are reported
    #[arg(long = "set", value_name = "KEY[=VALUE]")]
    set: Vec<String>,

    /// Warn on unknown --set keys instead of failing
    #[arg(long)]
    lenient: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    LoggingUtils::init_logger(LoggingUtils::level_from_verbosity(args.verbose));

    let config = match build_config(&args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{} {}", "[!]".red(), e);
            std::process::exit(1);
        }
    };

    // Status lines go to stderr: stdout is the default record destination
    // and must carry nothing but records.
    eprintln!("{} Loading type dump: {}", "[*]".blue(), args.input.display());

    let arena = match input::load_file(&args.input) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{} Failed to load type dump: {}", "[!]".red(), e);
            std::process::exit(1);
        }
    };

    eprintln!(
        "{} {} aggregate definitions loaded",
        "[+]".green(),
        arena.len()
    );

    match run(&config, &arena) {
        Ok(count) => {
            let destination = config
                .output_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "standard output".to_string());
            eprintln!(
                "{} {} offset records written to {}",
                "[+]".green(),
                count,
                destination
            );
        }
        Err(e) => {
            eprintln!("{} {}", "[!]".red(), e);
            std::process::exit(1);
        }
    }
}

fn build_config(args: &Args) -> Result<Config, ExtractError> {
    let mut config = Config::new()
        .with_attribute(&args.attribute)
        .with_separator(&args.separator)
        .with_prefix(&args.prefix)
        .with_lenient(args.lenient);
    config.capitalize = args.capitalize;
    config.append = args.append;
    config.output_bits = args.output_bits;
    config.max_length = args.max_length;
    config.macros = args.macros;
    config.output_file = args.output.clone();

    config.apply_overrides(&args.set)?;
    config.validate()?;
    Ok(config)
}

fn run(config: &Config, arena: &TypeArena) -> Result<usize, ExtractError> {
    let sink = match &config.output_file {
        Some(path) => OutputSink::open(path, config.append)?,
        None => OutputSink::stdout(),
    };

    let style = if config.macros {
        RecordStyle::Macro
    } else {
        RecordStyle::Plain
    };
    let mut emitter = Emitter::new(sink)
        .with_style(style)
        .with_prefix(&config.prefix)
        .with_separator(&config.separator)
        .with_output_bits(config.output_bits);

    let matcher = AttributeMatcher::new(&config.attribute);
    let path = PathBuilder::new(&config.separator, config.capitalize, config.max_length);

    let mut walker = Walker::new(arena, matcher, path, &mut emitter);
    for id in arena.ids() {
        walker.type_completed(id)?;
    }

    Ok(emitter.records_written())
}
