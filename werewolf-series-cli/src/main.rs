mod reports;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};

use werewolf_series::{GameLog, SeriesConfig, SeriesEngine, SeriesReport};

#[derive(Debug, Parser)]
#[command(name = "werewolf-series-cli", version)]
#[command(about = "Longest and running series per player for a werewolf game log")]
struct Args {
    /// JSON game log (`{ "games": [...] }`), games in chronological order
    #[arg(long)]
    games: PathBuf,

    /// JSON configuration with role tables and elite thresholds
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Rows shown per list (0 shows every row)
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbose output (debug logging unless RUST_LOG says otherwise)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(args.config.as_deref())?;
    let engine = SeriesEngine::from_config(&config).context("invalid series configuration")?;
    let log = load_games(&args.games)?;
    log::info!("loaded {} games from {}", log.len(), args.games.display());

    let report = engine.compute(log.as_slice());
    write_reports(&args, report.as_ref())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn load_config(path: Option<&Path>) -> Result<SeriesConfig> {
    let Some(path) = path else {
        return Ok(SeriesConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    SeriesConfig::from_json(&text).with_context(|| format!("failed to parse {}", path.display()))
}

fn load_games(path: &Path) -> Result<GameLog> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    GameLog::from_json(&text).with_context(|| format!("failed to parse {}", path.display()))
}

fn write_reports(args: &Args, report: Option<&SeriesReport>) -> Result<()> {
    let mut output_target = OutputTarget::open(args.output.as_deref())?;

    match args.report.as_str() {
        "json" => {
            if let Some(report) = report {
                reports::generate_json_report(&mut output_target, report, args.top)?;
            } else {
                writeln!(&mut output_target, "null")?;
            }
        }
        "markdown" => {
            if let Some(report) = report {
                reports::generate_markdown_report(&mut output_target, report, args.top)?;
            } else {
                writeln!(
                    &mut output_target,
                    "# Werewolf Series Report\n\n_No data: the game log is empty._"
                )?;
            }
        }
        _ => {
            if let Some(report) = report {
                reports::generate_console_report(&mut output_target, report, args.top)?;
            } else {
                writeln!(&mut output_target, "No data: the game log is empty.")?;
            }
        }
    }

    output_target.flush()?;
    Ok(())
}

/// Buffered report sink: the `--output` file when given, stdout otherwise.
struct OutputTarget {
    sink: BufWriter<Box<dyn Write>>,
}

impl OutputTarget {
    fn open(path: Option<&Path>) -> Result<Self> {
        let sink: Box<dyn Write> = match path {
            Some(path) => Box::new(
                File::create(path)
                    .with_context(|| format!("failed to create {}", path.display()))?,
            ),
            None => Box::new(stdout()),
        };
        Ok(Self {
            sink: BufWriter::new(sink),
        })
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.sink.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.sink.flush()
    }
}
