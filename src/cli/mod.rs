use std::path::PathBuf;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand, ValueEnum};

use heatgrid::parsers::{HeatmapDataParser, LevelMapParser, TallyParser};
use heatgrid::services::{
    DataSource, RawFileSource, StaticSource, StoreFileSource, WidgetService, DEFAULT_STORE_KEY,
};
use heatgrid::types::{HeatgridError, DATE_KEY_FORMAT};

/// Week-aligned activity heatmap renderer for home-screen widgets
#[derive(Parser)]
#[command(name = "heatgrid")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the widget image to a PNG file
    Render {
        #[command(flatten)]
        input: InputArgs,

        /// Device scale factor (pixels per layout unit)
        #[arg(long, default_value_t = 1.0)]
        scale: f32,

        /// Output PNG path
        #[arg(long, short)]
        out: PathBuf,
    },

    /// Print the date grid without rasterizing
    Inspect {
        #[command(flatten)]
        input: InputArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct InputArgs {
    /// JSON key/value store file holding the payload
    #[arg(long, conflicts_with = "data")]
    store: Option<PathBuf>,

    /// Store key the payload is written under
    #[arg(long, default_value = DEFAULT_STORE_KEY)]
    key: String,

    /// File whose whole content is the payload
    #[arg(long)]
    data: Option<PathBuf>,

    /// Payload format
    #[arg(long, value_enum, default_value_t = PayloadFormat::Levels)]
    format: PayloadFormat,

    /// Render as of this date (YYYY-MM-DD) instead of the local date
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PayloadFormat {
    /// {"YYYY-MM-DD": level}
    Levels,
    /// {"YYYY-MM-DD": {"completed": n, "total": m, "extra": bool}}
    Tallies,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, DATE_KEY_FORMAT)
        .map_err(|e| HeatgridError::Config(format!("invalid date '{s}': {e}")).to_string())
}

impl InputArgs {
    fn service(&self) -> WidgetService {
        let source: Box<dyn DataSource> = match (&self.store, &self.data) {
            (Some(store), _) => Box::new(StoreFileSource::with_key(store.clone(), self.key.clone())),
            (None, Some(data)) => Box::new(RawFileSource::new(data.clone())),
            (None, None) => Box::new(StaticSource(None)),
        };
        let parser: Box<dyn HeatmapDataParser> = match self.format {
            PayloadFormat::Levels => Box::new(LevelMapParser),
            PayloadFormat::Tallies => Box::new(TallyParser),
        };
        WidgetService::with_parser(source, parser)
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Render { input, scale, out } => {
                let frame = input
                    .service()
                    .render_for(input.today(), scale)
                    .context("failed to render heatmap")?;
                frame
                    .image
                    .save_png(&out)
                    .with_context(|| format!("failed to write {}", out.display()))?;
                if let Some(warning) = &frame.warning {
                    eprintln!("[heatgrid] Warning: {:?}", warning);
                }
                let tap = frame.tap_target;
                println!(
                    "{}x{} -> {} (tap target {},{} {}x{})",
                    frame.image.width(),
                    frame.image.height(),
                    out.display(),
                    tap.x,
                    tap.y,
                    tap.width,
                    tap.height
                );
                Ok(())
            }
            Commands::Inspect { input, json } => {
                let (grid, warning) = input.service().grid_for(input.today());
                if let Some(warning) = &warning {
                    eprintln!("[heatgrid] Warning: {:?}", warning);
                }
                if json {
                    println!("{}", serde_json::to_string_pretty(&grid)?);
                } else {
                    println!("{} .. {} (today {})", grid.start, grid.last_date(), grid.today);
                    for label in &grid.month_labels {
                        println!("month\t{}\t{}", label.col, label.text);
                    }
                    for line in grid.to_lines() {
                        println!("{line}");
                    }
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["heatgrid"]).is_err());
    }

    #[test]
    fn test_cli_parse_render() {
        let cli = Cli::try_parse_from([
            "heatgrid", "render", "--store", "prefs.json", "--scale", "2.5", "--today",
            "2024-03-10", "-o", "out.png",
        ])
        .unwrap();
        match cli.command {
            Commands::Render { input, scale, out } => {
                assert_eq!(scale, 2.5);
                assert_eq!(out, PathBuf::from("out.png"));
                assert_eq!(input.key, DEFAULT_STORE_KEY);
                assert_eq!(input.today, NaiveDate::from_ymd_opt(2024, 3, 10));
                assert_eq!(input.format, PayloadFormat::Levels);
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn test_cli_parse_inspect_json() {
        let cli =
            Cli::try_parse_from(["heatgrid", "inspect", "--data", "x.json", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::Inspect { json: true, .. }));
    }

    #[test]
    fn test_cli_parse_tallies_format() {
        let cli =
            Cli::try_parse_from(["heatgrid", "inspect", "--data", "x.json", "--format", "tallies"])
                .unwrap();
        match cli.command {
            Commands::Inspect { input, .. } => assert_eq!(input.format, PayloadFormat::Tallies),
            _ => panic!("expected inspect"),
        }
    }

    #[test]
    fn test_cli_rejects_store_and_data() {
        let result = Cli::try_parse_from([
            "heatgrid", "inspect", "--store", "a.json", "--data", "b.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_rejects_bad_date() {
        let result = Cli::try_parse_from(["heatgrid", "inspect", "--today", "2024-13-01"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_render_writes_png() {
        let dir = tempfile::TempDir::new().unwrap();
        let data = dir.path().join("levels.json");
        std::fs::write(&data, r#"{"2024-03-10": 5}"#).unwrap();
        let out = dir.path().join("widget.png");

        let cli = Cli::try_parse_from([
            "heatgrid",
            "render",
            "--data",
            data.to_str().unwrap(),
            "--today",
            "2024-03-10",
            "--out",
            out.to_str().unwrap(),
        ])
        .unwrap();
        cli.run().unwrap();
        assert!(out.exists());
    }
}
