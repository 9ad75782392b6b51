//! CLI tool for mathsheet - generates an arithmetic worksheet as XLSX
//!
//! Usage:
//!   mathsheet_cli                                 # 90 problems of + - * / to problems.xlsx
//!   mathsheet_cli --ops "+-" --digits 1 --seed 7  # reproducible one-digit sheet
//!   mathsheet_cli --config preset.json --dry-run  # print the grid, write nothing

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use mathsheet::{build_worksheet, generate_sheet, rng_from_seed, FillMode, WorksheetConfig};

/// Arithmetic worksheet generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Operations to use: any of '+', '-', '*' (or 'x'), '/' (or '÷') [default: +-*/]
    #[arg(long, value_name = "OPS")]
    ops: Option<String>,

    /// Maximum digits per number, 1-5 [default: 2]
    #[arg(long, value_name = "N")]
    digits: Option<u32>,

    /// Maximum result; combine with --digits for tighter control (0 = no limit)
    #[arg(long = "max", value_name = "N")]
    max_result: Option<u64>,

    /// Number of problems, 1-500 [default: 90]
    #[arg(long, value_name = "N")]
    count: Option<usize>,

    /// Seed for reproducible output [default: random]
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Output .xlsx file [default: problems.xlsx]
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,

    /// Title shown above the problems; pass "" for none [default: "Math problems"]
    #[arg(long, value_name = "TEXT")]
    title: Option<String>,

    /// Number of columns, 1-10 [default: 3]
    #[arg(long, value_name = "N")]
    cols: Option<usize>,

    /// Fill order: 'down' (column by column) or 'across' (row by row) [default: down]
    #[arg(long, value_name = "MODE", value_parser = parse_fill_mode)]
    fill: Option<FillMode>,

    /// Exclude zero from operands and results
    #[arg(long, conflicts_with = "allow_zero")]
    no_zero: bool,

    /// Allow zero even when the preset excludes it
    #[arg(long)]
    allow_zero: bool,

    /// JSON preset; flags given on the command line override it
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the aligned grid instead of writing a file
    #[arg(long)]
    dry_run: bool,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_fill_mode(s: &str) -> std::result::Result<FillMode, String> {
    s.parse()
}

impl Cli {
    /// Layer: built-in defaults, then the preset, then explicit flags.
    fn resolve_config(&self) -> Result<WorksheetConfig> {
        let mut config = match &self.config {
            Some(path) => WorksheetConfig::load(path)
                .with_context(|| format!("loading preset {}", path.display()))?,
            None => WorksheetConfig::default(),
        };

        if let Some(ops) = &self.ops {
            config.operations.clone_from(ops);
        }
        if let Some(digits) = self.digits {
            config.max_digits = Some(digits);
        }
        if let Some(max_result) = self.max_result {
            config.max_result = Some(max_result);
        }
        if let Some(count) = self.count {
            config.count = count;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(out) = &self.out {
            config.output.clone_from(out);
        }
        if let Some(title) = &self.title {
            config.title = Some(title.clone());
        }
        if let Some(cols) = self.cols {
            config.columns = cols;
        }
        if let Some(fill) = self.fill {
            config.fill = fill;
        }
        if self.no_zero {
            config.exclude_zero = true;
        } else if self.allow_zero {
            config.exclude_zero = false;
        }

        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.resolve_config()?;
    debug!(?config, "resolved configuration");

    if cli.dry_run {
        let sheet = build_worksheet(&config, rng_from_seed(config.seed))
            .context("generating worksheet")?;
        if let Some(title) = &sheet.title {
            println!("{title}\n");
        }
        print!("{}", sheet.grid.to_text(4));
        return Ok(());
    }

    let path = generate_sheet(&config)
        .with_context(|| format!("generating {}", config.output.display()))?;
    println!("Done: {}", path.display());
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::fs;

    const PRESET: &str = r#"{
        "operations": "-",
        "count": 12,
        "max_digits": 1,
        "exclude_zero": true,
        "title": "Preset title",
        "columns": 2,
        "fill": "across"
    }"#;

    fn preset_file() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preset.json");
        fs::write(&path, PRESET).unwrap();
        (dir, path)
    }

    fn resolve(args: &[&str]) -> WorksheetConfig {
        let cli = Cli::try_parse_from(std::iter::once("mathsheet_cli").chain(args.iter().copied()))
            .unwrap();
        cli.resolve_config().unwrap()
    }

    #[test]
    fn test_no_flags_gives_defaults() {
        assert_eq!(resolve(&[]), WorksheetConfig::default());
    }

    #[test]
    fn test_preset_overrides_defaults() {
        let (_dir, path) = preset_file();
        let config = resolve(&["--config", path.to_str().unwrap()]);

        assert_eq!(config.operations, "-");
        assert_eq!(config.count, 12);
        assert_eq!(config.max_digits, Some(1));
        assert!(config.exclude_zero);
        assert_eq!(config.title.as_deref(), Some("Preset title"));
        assert_eq!(config.columns, 2);
        assert_eq!(config.fill, FillMode::Across);
        // Not in the preset.
        assert_eq!(config.output, PathBuf::from("problems.xlsx"));
    }

    #[test]
    fn test_flags_override_preset() {
        let (_dir, path) = preset_file();
        let config = resolve(&[
            "--config",
            path.to_str().unwrap(),
            "--count",
            "30",
            "--title",
            "",
            "--fill",
            "DOWN",
            "--ops",
            "+x",
            "--out",
            "week2.xlsx",
        ]);

        assert_eq!(config.count, 30);
        assert_eq!(config.title.as_deref(), Some(""));
        assert_eq!(config.fill, FillMode::Down);
        assert_eq!(config.operations, "+x");
        assert_eq!(config.output, PathBuf::from("week2.xlsx"));
        // Untouched preset fields survive.
        assert_eq!(config.max_digits, Some(1));
        assert_eq!(config.columns, 2);
    }

    #[test]
    fn test_allow_zero_overrides_preset() {
        let (_dir, path) = preset_file();
        let config = resolve(&["--config", path.to_str().unwrap(), "--allow-zero"]);
        assert!(!config.exclude_zero);

        let config = resolve(&["--no-zero"]);
        assert!(config.exclude_zero);
    }

    #[test]
    fn test_zero_flags_conflict() {
        assert!(Cli::try_parse_from(["mathsheet_cli", "--no-zero", "--allow-zero"]).is_err());
    }

    #[test]
    fn test_unknown_fill_rejected() {
        assert!(Cli::try_parse_from(["mathsheet_cli", "--fill", "diagonal"]).is_err());
    }

    #[test]
    fn test_missing_preset_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");
        let cli =
            Cli::try_parse_from(["mathsheet_cli", "--config", missing.to_str().unwrap()]).unwrap();
        let err = cli.resolve_config().unwrap_err();
        assert!(format!("{err:#}").contains("loading preset"));
    }
}
