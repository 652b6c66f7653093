//! bbdelta CLI - BBCode <-> Delta conversion tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use bbdelta::render::{from_json, to_json, to_text};
use bbdelta::{
    decode, decode_with_options, encode, DecodeOptions, Document, DocumentStats, JsonFormat,
};

#[derive(Parser)]
#[command(name = "bbdelta")]
#[command(version)]
#[command(about = "Convert BBCode markup to Delta JSON and back", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert BBCode to Delta JSON
    Decode {
        /// Input BBCode file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Keep every literal fragment as its own run
        #[arg(long)]
        no_merge: bool,

        /// Close all open attributes at the end of each line
        #[arg(long)]
        reset_lines: bool,
    },

    /// Convert Delta JSON to BBCode
    Encode {
        /// Input JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Convert BBCode to plain text
    Text {
        /// Input BBCode file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Check that a BBCode file survives decode -> encode -> decode
    Check {
        /// Input BBCode file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show document information
    Info {
        /// Input BBCode files
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Decode {
            input,
            output,
            compact,
            no_merge,
            reset_lines,
        } => cmd_decode(&input, output.as_deref(), compact, no_merge, reset_lines),
        Commands::Encode { input, output } => cmd_encode(&input, output.as_deref()),
        Commands::Text { input, output } => cmd_text(&input, output.as_deref()),
        Commands::Check { input } => cmd_check(&input),
        Commands::Info { inputs } => cmd_info(&inputs),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        print!("{}", content);
    }
    Ok(())
}

fn cmd_decode(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    no_merge: bool,
    reset_lines: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let markup = fs::read_to_string(input)?;

    let mut options = DecodeOptions::new();
    if no_merge {
        options = options.no_merge();
    }
    if reset_lines {
        options = options.reset_each_line();
    }
    let doc = decode_with_options(&markup, &options);
    log::info!("Decoded {} lines from {}", doc.line_count(), input.display());

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let mut json = to_json(&doc, format)?;
    json.push('\n');
    write_output(output, &json)
}

fn cmd_encode(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let json = fs::read_to_string(input)?;
    let doc = from_json(&json)?;
    let markup = encode(&doc)?;
    write_output(output, &markup)
}

fn cmd_text(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let doc = bbdelta::decode_file(input)?;
    let mut text = to_text(&doc);
    text.push('\n');
    write_output(output, &text)
}

fn cmd_check(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let markup = fs::read_to_string(input)?;
    let first = decode(&markup);
    let encoded = encode(&first)?;
    let second = decode(&encoded);

    if first == second {
        println!(
            "{} {} lines round-trip cleanly",
            "OK".green().bold(),
            first.line_count()
        );
        return Ok(());
    }

    println!("{}", "Round trip changed the document".yellow().bold());
    report_first_difference(&first, &second);
    Err("round trip mismatch".into())
}

fn report_first_difference(first: &Document, second: &Document) {
    if first.line_count() != second.line_count() {
        println!(
            "  {} line count {} -> {}",
            "├─".dimmed(),
            first.line_count(),
            second.line_count()
        );
    }
    let mismatch = first
        .lines()
        .zip(second.lines())
        .position(|(a, b)| a != b);
    if let Some(index) = mismatch {
        println!("  {} first differing line: {}", "└─".dimmed(), index + 1);
    }
}

fn cmd_info(inputs: &[PathBuf]) -> Result<(), Box<dyn std::error::Error>> {
    let mut total = DocumentStats::new();

    for input in inputs {
        let doc = bbdelta::decode_file(input)?;
        let stats = DocumentStats::from_document(&doc);

        println!("{}", "Document Information".cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
        println!("{}: {}", "File".bold(), input.display());
        print_stats(&stats);
        println!();

        total.merge(&stats);
    }

    if inputs.len() > 1 {
        println!("{} ({} files)", "Total".cyan().bold(), inputs.len());
        println!("{}", "─".repeat(40).dimmed());
        print_stats(&total);
    }

    Ok(())
}

fn print_stats(stats: &DocumentStats) {
    println!("{}: {}", "Lines".bold(), stats.line_count);
    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "Text runs".bold(), stats.run_count);
    println!("{}: {}", "Images".bold(), stats.embed_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);
}

fn cmd_version() {
    println!("{} {}", "bbdelta".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("BBCode <-> Delta conversion tool");
    println!();
    println!("License: MIT");
}
