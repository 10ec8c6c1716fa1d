//! string-le command-line interface.
//!
//! Thin host around the `string-le` library: reads a document from a file or
//! stdin, routes it through the extraction pipeline, and prints the resulting
//! strings one per line. Streaming CSV mode writes batches to stdout as rows
//! are parsed; Ctrl-C cancels cooperatively.
use anyhow::{Context, Result};
use clap::Parser;
use std::io::{IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use string_le::{
    BatchSink, CancellationToken, ExtractionOptions, Format, SortMode, StringLeConfig,
    StringLeError,
};

#[derive(Parser, Debug)]
#[command(
    name = "string-le",
    version,
    about = "Extract leaf string values from JSON, YAML, TOML, INI, dotenv, and CSV documents"
)]
struct Cli {
    /// Input file; reads stdin when omitted or "-"
    file: Option<PathBuf>,

    /// File type hint (json|yaml|yml|csv|toml|ini|env|fallback); inferred
    /// from the file name when omitted
    #[arg(short, long)]
    format: Option<String>,

    /// Load configuration from a TOML file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Drop duplicate values, keeping the first occurrence
    #[arg(long)]
    dedupe: bool,

    /// Sort the results (off|alpha-asc|alpha-desc|length-asc|length-desc)
    #[arg(long, value_name = "MODE", value_parser = parse_sort_mode)]
    sort: Option<SortMode>,

    /// Treat the first CSV row as a header and skip it
    #[arg(long)]
    csv_header: bool,

    /// Zero-based CSV column to select; repeat for multi-column fan-out
    #[arg(long = "csv-column", value_name = "INDEX")]
    csv_columns: Vec<usize>,

    /// Fan out over every CSV column
    #[arg(long)]
    all_columns: bool,

    /// Stream CSV output incrementally instead of materializing it
    #[arg(long)]
    stream: bool,

    /// Answer yes to safety prompts
    #[arg(short = 'y', long)]
    yes: bool,
}

fn parse_sort_mode(raw: &str) -> std::result::Result<SortMode, String> {
    raw.parse::<SortMode>().map_err(|e| e.to_string())
}

/// Line-oriented stdout sink for streaming delivery.
struct StdoutSink {
    out: std::io::Stdout,
}

#[async_trait::async_trait]
impl BatchSink for StdoutSink {
    async fn write_batch(&mut self, batch: Vec<String>) -> string_le::Result<()> {
        let mut lock = self.out.lock();
        for value in &batch {
            writeln!(lock, "{value}").map_err(StringLeError::from_sink_error)?;
        }
        lock.flush().map_err(StringLeError::from_sink_error)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let (text, format_hint) = read_input(&cli)?;

    if string_le::file_size_needs_warning(text.len() as u64, &config.safety) {
        eprintln!(
            "warning: large input ({} bytes); extraction may take longer",
            text.len()
        );
    }

    let format = Format::from_hint(&format_hint);
    let options = build_options(&cli);

    if format == Format::Csv {
        let targets = string_le::fan_out_targets(&text, &options);
        if !targets.is_empty() {
            return run_fan_out(&text, &options, &config, &targets, &cli).await;
        }
        if config.csv_streaming_enabled {
            return run_streaming(&text, &options, &config).await;
        }
    }

    run_bulk(&text, format, &options, &config, &cli)
}

fn load_config(cli: &Cli) -> Result<StringLeConfig> {
    let mut config = match &cli.config {
        Some(path) => StringLeConfig::from_toml_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => StringLeConfig::default(),
    };
    if cli.dedupe {
        config.dedupe_enabled = true;
    }
    if let Some(mode) = cli.sort {
        config.sort_enabled = true;
        config.sort_mode = mode;
    }
    if cli.stream {
        config.csv_streaming_enabled = true;
    }
    Ok(config)
}

fn read_input(cli: &Cli) -> Result<(String, String)> {
    match cli.file.as_deref() {
        Some(path) if path != Path::new("-") => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let hint = cli
                .format
                .clone()
                .or_else(|| detect_file_type(path))
                .unwrap_or_else(|| "fallback".to_string());
            Ok((text, hint))
        }
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            let hint = cli.format.clone().unwrap_or_else(|| {
                tracing::warn!("no --format given for stdin input, using fallback");
                "fallback".to_string()
            });
            Ok((text, hint))
        }
    }
}

/// Infer the file-type hint from a file name. Any `.env*` basename counts as
/// dotenv; otherwise the extension decides.
fn detect_file_type(path: &Path) -> Option<String> {
    let base_name = path.file_name()?.to_str()?;
    if base_name.starts_with(".env") {
        return Some("env".to_string());
    }
    path.extension()?.to_str().map(str::to_lowercase)
}

fn build_options(cli: &Cli) -> ExtractionOptions {
    let mut options = ExtractionOptions {
        csv_has_header: cli.csv_header,
        select_all_columns: cli.all_columns,
        ..ExtractionOptions::default()
    };
    match cli.csv_columns.len() {
        0 => {}
        1 => options.csv_column_index = Some(cli.csv_columns[0]),
        _ => options.csv_column_indexes = Some(cli.csv_columns.clone()),
    }
    options
}

fn run_bulk(
    text: &str,
    format: Format,
    options: &ExtractionOptions,
    config: &StringLeConfig,
    cli: &Cli,
) -> Result<()> {
    let strings = match string_le::try_extract(text, format, options) {
        Ok(strings) => strings,
        Err(err) => {
            if config.show_parse_errors {
                eprintln!("{err}");
            } else {
                tracing::warn!(error = %err, "extraction failed, returning empty result");
            }
            Vec::new()
        }
    };
    let finished = string_le::post_process(strings, config);

    if finished.is_empty() {
        eprintln!("No strings found");
        return Ok(());
    }

    let multiline = string_le::count_multiline(&finished);
    if multiline > 0 {
        eprintln!("warning: {multiline} value(s) span multiple lines");
    }

    if string_le::large_output_needs_prompt(finished.len(), &config.safety)
        && !cli.yes
        && !confirm(&format!(
            "About to print {} strings; continue?",
            finished.len()
        ))
    {
        eprintln!("Cancelled");
        return Ok(());
    }

    print_lines(&finished)
}

async fn run_streaming(
    text: &str,
    options: &ExtractionOptions,
    config: &StringLeConfig,
) -> Result<()> {
    let token = cancel_on_ctrl_c();
    let mut sink = StdoutSink {
        out: std::io::stdout(),
    };
    let delivered = string_le::drain_csv_to_sink(
        text,
        options,
        &(&config.batch).into(),
        config.dedupe_enabled,
        token,
        &mut sink,
    )
    .await?;
    tracing::debug!(delivered, "streaming extraction finished");
    Ok(())
}

async fn run_fan_out(
    text: &str,
    options: &ExtractionOptions,
    config: &StringLeConfig,
    targets: &[usize],
    cli: &Cli,
) -> Result<()> {
    let estimated =
        string_le::estimate_fan_out_lines(text, options.csv_has_header, targets.len());
    if string_le::fan_out_needs_prompt(targets.len(), estimated, &config.safety)
        && !cli.yes
        && !confirm(&format!(
            "About to produce {} outputs (~{estimated} total lines); continue?",
            targets.len()
        ))
    {
        eprintln!("Cancelled");
        return Ok(());
    }

    if config.csv_streaming_enabled {
        let token = cancel_on_ctrl_c();
        for &column in targets {
            if token.is_cancelled() {
                break;
            }
            println!("==> column {column} <==");
            let per_column = ExtractionOptions {
                csv_column_index: Some(column),
                csv_has_header: options.csv_has_header,
                ..ExtractionOptions::default()
            };
            let mut sink = StdoutSink {
                out: std::io::stdout(),
            };
            string_le::drain_csv_to_sink(
                text,
                &per_column,
                &(&config.batch).into(),
                config.dedupe_enabled,
                token.clone(),
                &mut sink,
            )
            .await?;
        }
        return Ok(());
    }

    for extraction in string_le::fan_out_columns(text, options, config) {
        if extraction.strings.is_empty() {
            continue;
        }
        println!("==> column {} <==", extraction.column);
        print_lines(&extraction.strings)?;
    }
    Ok(())
}

fn print_lines(strings: &[String]) -> Result<()> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    for value in strings {
        writeln!(lock, "{value}")?;
    }
    Ok(())
}

/// Ask for confirmation on the terminal. Non-interactive stdin (a pipe)
/// cannot answer, so it counts as a no.
fn confirm(message: &str) -> bool {
    if !std::io::stdin().is_terminal() {
        eprintln!("{message} (non-interactive input, pass --yes to proceed)");
        return false;
    }
    eprint!("{message} [y/N] ");
    let _ = std::io::stderr().flush();
    let mut answer = String::new();
    if std::io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim(), "y" | "Y" | "yes")
}

fn cancel_on_ctrl_c() -> CancellationToken {
    let token = CancellationToken::new();
    let for_signal = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            for_signal.cancel();
        }
    });
    token
}
