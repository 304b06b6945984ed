use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser};
use env_logger::Env;

use chopro::{expand_inputs, ChoproError, Config, Session};

const AFTER_HELP: &str = "\
Each input file (chopro format) produces one HTML page per song, written to the
output directory together with chord.css, chord.js and an index.html linking to
every song. An argument of the form @FILE reads further input paths from FILE,
one per line.

The following chopro directives are interpreted:

    ti, title            | Define song title (also used as filename)
    st, subtitle         | Define song subtitle
    c, comment           | Write the rest of the line as a comment
    soc, start_of_chorus | Start of chorus (marked by black bar to the left)
    eoc, end_of_chorus   | End of chorus
    transpose            | Transpose all chords up or down by the specified number of halftones
    section              | Define a section in the table of contents

The chopro format is documented here:

  https://www.chordpro.org/chordpro/ChordPro-File-Format-Specification.html";

/// Convert song files to HTML
#[derive(Parser)]
#[command(version, about, after_help = AFTER_HELP)]
struct Cli {
    /// Write files to directory DIR [default: Songs]
    #[arg(short = 'd', value_name = "DIR")]
    directory: Option<PathBuf>,

    /// Read settings from a YAML config file
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,

    /// Input files, or @FILE for a list of input files
    files: Vec<String>,
}

fn run(cli: Cli) -> Result<(), ChoproError> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(dir) = cli.directory {
        config.output_dir = dir;
    }

    let inputs = expand_inputs(&cli.files)?;
    let dir = config.output_dir.clone();
    let songs = Session::new(config).run(&inputs)?;
    log::info!("Wrote {} songs to {}", songs, dir.display());
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .init();

    if cli.files.is_empty() {
        // nothing to convert: behave like --help
        if let Err(e) = Cli::command().print_help() {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
        return;
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
