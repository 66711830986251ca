use crate::config::FileConfig;

use clap::Args;
use log::debug;
use std::path::PathBuf;
use strdump::{DumpConfig, MissingMarkerPolicy, OutputFormat, dump};

/// Flags of the `extract` command.
#[derive(Args, Debug, Clone, Default)]
pub struct ExtractArgs {
    /// The strings.xml file to scan
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// The file to write the records to (overwritten)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// TOML file providing defaults for every other flag
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format: text or json
    #[arg(long, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,

    /// What to do with lines lacking a marker: skip, fail or legacy
    #[arg(long = "on-missing", value_parser = parse_policy)]
    pub on_missing: Option<MissingMarkerPolicy>,

    /// Marker in front of the value
    #[arg(long)]
    pub open_marker: Option<String>,

    /// Marker after the value
    #[arg(long)]
    pub close_marker: Option<String>,

    /// Source encoding label (e.g. utf-16le, gbk); a BOM always wins
    #[arg(long)]
    pub encoding: Option<String>,

    /// Do not put a line separator in front of the first record
    #[arg(long)]
    pub no_leading_separator: bool,

    /// Do not echo the output to stdout
    #[arg(short, long)]
    pub quiet: bool,
}

fn parse_output_format(s: &str) -> Result<OutputFormat, String> {
    s.parse().map_err(|e: strdump::Error| e.to_string())
}

fn parse_policy(s: &str) -> Result<MissingMarkerPolicy, String> {
    s.parse().map_err(|e: strdump::Error| e.to_string())
}

/// Merges the config file (if any) with the flags. Flags take precedence.
pub fn resolve_config(args: &ExtractArgs) -> Result<DumpConfig, String> {
    let file = match &args.config {
        Some(path) => {
            debug!("loading config from {}", path.display());
            FileConfig::load(path)?
        }
        None => FileConfig::default(),
    };

    let input = args
        .input
        .clone()
        .or(file.input_path)
        .ok_or("No input file: pass --input or set input_path in the config")?;
    let output = args
        .output
        .clone()
        .or(file.output_path)
        .ok_or("No output file: pass --output or set output_path in the config")?;

    let mut scan = file.scan;
    if let Some(marker) = &args.open_marker {
        scan.open_marker = marker.clone();
    }
    if let Some(marker) = &args.close_marker {
        scan.close_marker = marker.clone();
    }
    if let Some(policy) = args.on_missing {
        scan.on_missing_marker = policy;
    }
    if args.encoding.is_some() {
        scan.encoding = args.encoding.clone();
    }

    let mut render = file.render;
    if let Some(format) = args.format {
        render.format = format;
    }
    if args.no_leading_separator {
        render.leading_separator = false;
    }

    Ok(DumpConfig::new(input, output)
        .with_scan(scan)
        .with_render(render))
}

/// Run the extract command: dump the records to the output file and echo them.
pub fn run_extract_command(args: ExtractArgs) -> Result<(), String> {
    let config = resolve_config(&args)?;
    let result = dump(&config).map_err(|e| e.to_string())?;

    debug!(
        "{} records from {} lines",
        result.extraction.len(),
        result.extraction.lines_scanned
    );
    if !args.quiet {
        if result.content.ends_with('\n') {
            print!("{}", result.content);
        } else {
            println!("{}", result.content);
        }
    }
    Ok(())
}
