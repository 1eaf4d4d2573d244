use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use exif_stripper::config::Config;
use exif_stripper::exif::{ImageFile, MetadataMap, Value};
use exif_stripper::fields::FieldGroup;
use exif_stripper::pipeline::{self, ProcessOptions};

#[derive(Parser, Debug)]
#[command(
    name = "exif-stripper",
    version,
    about = "Strip EXIF metadata from images (GPS, serials, camera details); exits 1 if anything was stripped"
)]
struct Cli {
    /// Image files (or directories) to process
    #[arg(value_name = "FILENAME", required = true)]
    filenames: Vec<PathBuf>,

    /// The fields to remove from the EXIF metadata. By default, all EXIF
    /// metadata that can safely be deleted is removed.
    #[arg(long, value_enum, num_args = 1.., value_name = "FIELD", help_heading = "Data selection")]
    fields: Option<Vec<FieldGroup>>,

    /// Also remove the image copyright information. By default, the artist
    /// and copyright tags are preserved, if present.
    #[arg(long, help_heading = "Data selection")]
    remove_copyright: bool,

    /// Path to config file (default: .exif-stripper.json in the working directory)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Report what would be stripped without modifying files
    #[arg(long)]
    dry_run: bool,

    /// Output per-file results as JSON
    #[arg(long)]
    json: bool,

    /// Display all EXIF metadata and exit
    #[arg(long = "show-exif")]
    show_exif: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .format_target(false)
        .init();

    match run(cli) {
        Ok(true) => ExitCode::from(1),
        Ok(false) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

/// Returns whether any file had metadata stripped.
fn run(cli: Cli) -> Result<bool> {
    let images = pipeline::collect_images(&cli.filenames);

    // Handle --show-exif
    if cli.show_exif {
        for image_path in &images {
            print_full_exif(image_path);
        }
        return Ok(false);
    }

    // Load config; flags take precedence
    let config = Config::load(cli.config.as_deref())?;
    let mut fields = match cli.fields {
        Some(fields) => fields,
        None => config.field_groups()?,
    };
    if (cli.remove_copyright || config.remove_copyright) && !fields.contains(&FieldGroup::Copyright) {
        fields.push(FieldGroup::Copyright);
    }

    let options = ProcessOptions {
        fields,
        dry_run: cli.dry_run,
    };
    log::debug!(
        "Stripping [{}] from {} file(s)",
        options
            .fields
            .iter()
            .map(|f| f.name())
            .collect::<Vec<_>>()
            .join(", "),
        images.len()
    );

    let results = pipeline::process_images(&images, &options)?;

    // JSON output
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    }

    let changed = results.iter().filter(|r| r.changed).count();
    log::debug!("Done: {changed} of {} file(s) stripped", results.len());

    Ok(pipeline::any_changed(&results))
}

// ANSI color codes
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// Max width for the value column before wrapping.
const VAL_WIDTH: usize = 46;

/// Print full EXIF metadata for a file, nested directories indented.
fn print_full_exif(path: &Path) {
    println!();
    println!("{BOLD}File:{RESET} {}", path.display());
    println!("{DIM}{}{RESET}", "═".repeat(72));

    match ImageFile::open(path) {
        Ok(Some(image)) if !image.metadata().is_empty() => print_map(image.metadata(), 2),
        Ok(Some(_)) => println!("  {DIM}(no EXIF metadata found){RESET}"),
        Ok(None) => println!("  {DIM}(not a supported image){RESET}"),
        Err(e) => println!("  {DIM}(unreadable: {e}){RESET}"),
    }
    println!();
}

fn print_map(map: &MetadataMap, indent: usize) {
    for (tag, entry) in map.iter() {
        let name = entry.directory.tag_name(tag);
        match &entry.value {
            Value::Directory(sub) => {
                println!("{:indent$}{BOLD}{name}{RESET}", "");
                println!("{:indent$}{DIM}{}{RESET}", "", "─".repeat(70 - indent));
                print_map(sub, indent + 2);
            }
            value => print_row(indent, &format!("{name} [{}]", entry.directory), &value.to_string()),
        }
    }
}

/// Print a single row in the EXIF display table.
fn print_row(indent: usize, tag: &str, val: &str) {
    let tag_col = format!("{:<28}", tag);
    let continuation = indent + tag_col.len() + 3;
    let lines = wrap_text(val, VAL_WIDTH);
    for (i, line) in lines.iter().enumerate() {
        if i == 0 {
            println!("{:indent$}{tag_col} : {line}", "");
        } else {
            println!("{:continuation$}{line}", "");
        }
    }
}

/// Wrap text at word boundaries to fit within max_width.
fn wrap_text(s: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in s.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= max_width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(current_line);
            current_line = word.to_string();
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    if lines.is_empty() {
        lines.push(s.to_string());
    }

    lines
}
