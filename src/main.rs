// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info, warn};
use std::io::Write;
use std::path::{Path, PathBuf};

use docproof::app_config::{self, Config};
use docproof::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for docproof
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// docproof - LLM-assisted article proofreading
///
/// Reads the first .docx article from the input directory, proofreads it chunk
/// by chunk, and writes titles, leads, tags, quotes and the corrected text to
/// a .docx report.
#[derive(Parser, Debug)]
#[command(name = "docproof")]
#[command(version = "0.1.0")]
#[command(about = "AI-assisted proofreading of .docx articles")]
#[command(long_about = "docproof proofreads a .docx article with an OpenAI-compatible completion model.

EXAMPLES:
    docproof                                  # article/ -> output/output.docx
    docproof --input-dir drafts --output report.docx
    docproof --headings --chunk-size 3000     # add a heading to every chunk
    docproof completions bash > docproof.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. If the file doesn't exist,
    a default one is created. The API key can come from the config file,
    --api-key or the OPENAI_API_KEY environment variable.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding the article; the first .docx file is processed
    #[arg(short, long)]
    input_dir: Option<PathBuf>,

    /// Report output path (overwritten without confirmation)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON config file, created with defaults if missing
    #[arg(short, long, default_value = "conf.json")]
    config_path: PathBuf,

    /// Maximum chunk size in characters
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Completion model identifier
    #[arg(short, long)]
    model: Option<String>,

    /// Sampling temperature
    #[arg(short, long)]
    temperature: Option<f32>,

    /// Generate a heading for every chunk before proofreading
    #[arg(long)]
    headings: bool,

    /// API key for the completion service
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// Colored stderr logger: `HH:MM:SS.mmm LEVEL [module] message`
struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl StderrLogger {
    fn install() -> Result<(), SetLoggerError> {
        log::set_logger(&LOGGER)?;
        log::set_max_level(LevelFilter::Info);
        Ok(())
    }

    fn color(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for StderrLogger {
    // Filtering is left to the global max level
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let target = record.target().trim_start_matches("docproof::");
        let _ = writeln!(
            std::io::stderr().lock(),
            "{} {}{:<5}\x1B[0m [{}] {}",
            chrono::Local::now().format("%H:%M:%S.%3f"),
            Self::color(record.level()),
            record.level(),
            target,
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Info until the config says otherwise
    StderrLogger::install()?;

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "docproof", &mut std::io::stdout());
        return Ok(());
    }

    run(cli).await
}

async fn run(options: CommandLineOptions) -> Result<()> {
    let mut config = load_config(&options.config_path)?;

    if let Some(input_dir) = options.input_dir {
        config.input_dir = input_dir;
    }
    if let Some(output) = options.output {
        config.output_path = output;
    }
    if let Some(chunk_size) = options.chunk_size {
        config.chunk_size = chunk_size;
    }
    if let Some(model) = options.model {
        config.completion.model = model;
    }
    if let Some(temperature) = options.temperature {
        config.completion.temperature = temperature;
    }
    if options.headings {
        config.editorial.generate_headings = true;
    }
    if let Some(api_key) = options.api_key {
        config.completion.api_key = api_key;
    }
    if let Some(log_level) = options.log_level {
        config.log_level = log_level.into();
    }

    log::set_max_level(level_filter(&config.log_level));

    let controller = Controller::with_config(config)?;
    let output_path = controller.run().await?;
    info!("Success: {:?}", output_path);

    Ok(())
}

/// Load the config, creating it with the defaults on first run
fn load_config(config_path: &Path) -> Result<Config> {
    if config_path.exists() {
        return Config::from_file(config_path);
    }

    warn!("No config at {:?}; writing defaults there", config_path);
    let config = Config::default();
    config.save(config_path)?;
    Ok(config)
}
