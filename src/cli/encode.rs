//! Encode command: apply transforms, then stream text through the mapping.

use crate::cli::common::{CliError, CliResult};
use crate::config::{validate_chunk_size, Config};
use crate::models::KeyboardGrid;
use crate::services::{SkippedToken, StreamEncoder, TransformReport, TransformService};
use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::Args;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Transform the key grid and encode text with it
#[derive(Debug, Clone, Default, Args)]
pub struct EncodeArgs {
    /// Transform commands, comma separated (e.g., "H,V,-3")
    #[arg(short, long, value_name = "CMDS", allow_hyphen_values = true)]
    pub cmds: Option<String>,

    /// File holding the transform commands; takes precedence over --cmds
    /// unless empty
    #[arg(
        short,
        long,
        value_name = "FILE",
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    pub trans: Option<PathBuf>,

    /// Text to encode; reads standard input when omitted or "-"
    #[arg(short = 'i', long, value_name = "FILE")]
    pub text: Option<PathBuf>,

    /// Fail on unrecognized command tokens instead of skipping them
    #[arg(long)]
    pub strict: bool,

    /// Print the transformed grid and mapping instead of encoding
    #[arg(long)]
    pub show_layout: bool,

    /// Output the layout as JSON (with --show-layout)
    #[arg(long, requires = "show_layout")]
    pub json: bool,

    /// Bytes read per chunk (overrides the config file)
    #[arg(long, value_name = "BYTES")]
    pub chunk_size: Option<usize>,

    /// Path to a config file (defaults to the platform config directory)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// JSON view of a transformed grid.
#[derive(Debug, Serialize)]
struct LayoutView {
    commands: Vec<String>,
    skipped: Vec<SkippedToken>,
    rows: Vec<String>,
    mapping: BTreeMap<String, String>,
}

impl LayoutView {
    fn new(grid: &KeyboardGrid, report: &TransformReport) -> Self {
        Self {
            commands: report.applied.iter().map(ToString::to_string).collect(),
            skipped: report.skipped.clone(),
            rows: grid
                .rows()
                .map(|row| String::from_utf8_lossy(row).into_owned())
                .collect(),
            mapping: grid
                .mapping()
                .sorted_entries()
                .into_iter()
                .map(|(from, to)| (char::from(from).to_string(), char::from(to).to_string()))
                .collect(),
        }
    }
}

impl EncodeArgs {
    /// Execute the encode command against stdin/stdout
    pub fn execute(&self) -> CliResult<()> {
        let stdout = io::stdout();
        self.run(io::stdin().lock(), stdout.lock())
    }

    /// Execute with explicit standard input and output streams.
    ///
    /// Every file is opened before anything is written, so an unreadable
    /// command or text file produces no output.
    pub fn run<I: Read, O: Write>(&self, stdin: I, stdout: O) -> CliResult<()> {
        let config = self.load_config()?;

        let chunk_size = self.chunk_size.unwrap_or(config.encode.chunk_size);
        validate_chunk_size(chunk_size).map_err(|e| CliError::validation(format!("{e}")))?;

        let commands = self.resolve_commands(&config)?;
        let strict = self.strict || config.transform.strict;

        let (grid, report) = TransformService::build_grid(&commands, strict)
            .map_err(|e| CliError::validation(e.to_string()))?;
        debug!(
            applied = report.applied.len(),
            skipped = report.skipped.len(),
            "transforms applied"
        );

        if self.show_layout {
            return self.print_layout(&grid, &report, stdout);
        }

        let encoder = StreamEncoder::new(grid.mapping(), chunk_size);

        let result = match self.text_path() {
            Some(path) => {
                let file = File::open(path).map_err(|e| {
                    CliError::io(format!("Failed to open text file {}: {e}", path.display()))
                })?;
                encoder.encode(file, stdout)
            }
            None => encoder.encode(stdin, stdout),
        };
        result.map_err(|e| CliError::io(format!("{e:#}")))?;

        Ok(())
    }

    /// Loads config from `--config`, or the default location if present.
    fn load_config(&self) -> CliResult<Config> {
        let config = match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
        .map_err(|e| CliError::io(format!("{e:#}")))?;

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))?;
        Ok(config)
    }

    /// Picks the command string: --trans file, then --cmds, then config.
    ///
    /// An empty --trans path counts as absent.
    fn resolve_commands(&self, config: &Config) -> CliResult<String> {
        let trans = self
            .trans
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty());
        if let Some(path) = trans {
            return TransformService::load_commands(path)
                .map_err(|e| CliError::io(format!("{e:#}")));
        }
        if let Some(cmds) = &self.cmds {
            return Ok(cmds.clone());
        }
        Ok(config.transform.commands.clone())
    }

    /// Text file path, or `None` for standard input.
    fn text_path(&self) -> Option<&Path> {
        self.text
            .as_deref()
            .filter(|path| *path != Path::new("-"))
    }

    fn print_layout<O: Write>(
        &self,
        grid: &KeyboardGrid,
        report: &TransformReport,
        mut out: O,
    ) -> CliResult<()> {
        let write_err = |e: io::Error| CliError::io(format!("Failed to write layout: {e}"));

        if self.json {
            let view = LayoutView::new(grid, report);
            let json = serde_json::to_string_pretty(&view)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            writeln!(out, "{json}").map_err(write_err)?;
            return Ok(());
        }

        let commands: Vec<String> = report.applied.iter().map(ToString::to_string).collect();
        writeln!(out, "Commands: {}", display_list(&commands)).map_err(write_err)?;
        if !report.skipped.is_empty() {
            let skipped: Vec<String> = report
                .skipped
                .iter()
                .map(|s| format!("{} (#{})", s.token, s.position))
                .collect();
            writeln!(out, "Skipped:  {}", display_list(&skipped)).map_err(write_err)?;
        }
        writeln!(out).map_err(write_err)?;

        for row in grid.rows() {
            let keys: Vec<String> = row.iter().map(|&b| char::from(b).to_string()).collect();
            writeln!(out, "{}", keys.join(" ")).map_err(write_err)?;
        }
        writeln!(out).map_err(write_err)?;

        writeln!(out, "Mapping:").map_err(write_err)?;
        let reference = KeyboardGrid::new();
        for (from, to) in reference.rows().zip(grid.rows()) {
            writeln!(
                out,
                "{} -> {}",
                String::from_utf8_lossy(from),
                String::from_utf8_lossy(to)
            )
            .map_err(write_err)?;
        }

        out.flush().map_err(write_err)?;
        Ok(())
    }
}

fn display_list(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(",")
    }
}
