// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{error, info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use subgrep::app_config::{self, Config, ExportFormat};
use subgrep::app_controller::{Controller, ExtractionOutcome, ExtractionRequest, OutputTarget};
use subgrep::errors::AppError;

/// CLI Wrapper for ExportFormat to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliExportFormat {
    #[value(alias = "text")]
    Txt,
    #[value(alias = "excel")]
    Xlsx,
    #[value(alias = "word")]
    Docx,
}

impl From<CliExportFormat> for ExportFormat {
    fn from(cli_format: CliExportFormat) -> Self {
        match cli_format {
            CliExportFormat::Txt => ExportFormat::Txt,
            CliExportFormat::Xlsx => ExportFormat::Xlsx,
            CliExportFormat::Docx => ExportFormat::Docx,
        }
    }
}

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

#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract matching subtitle cues from a video (default command)
    Extract(ExtractArgs),

    /// Generate shell completions for subgrep
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
struct ExtractArgs {
    /// Video URL
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Comma separated keywords, a cue matches when it contains any of them
    #[arg(short, long)]
    keywords: Option<String>,

    /// Select cues holding a censored-bleep marker like [ __ ] instead of keywords
    #[arg(short, long)]
    marker: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<CliExportFormat>,

    /// Folder the output file is saved in
    #[arg(short, long, conflicts_with = "stdout")]
    output_dir: Option<PathBuf>,

    /// Write the document to stdout instead of saving it
    #[arg(long)]
    stdout: bool,

    /// Subtitle language code (e.g., 'en', 'ja')
    #[arg(long)]
    language: Option<String>,

    /// Path to the yt-dlp executable
    #[arg(long)]
    downloader: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// subgrep - find words in online video subtitles
///
/// Downloads the subtitle track of a video with yt-dlp, keeps the cues that
/// contain one of your keywords (or a censored-bleep marker) and exports them
/// as text, Excel or Word.
#[derive(Parser, Debug)]
#[command(name = "subgrep")]
#[command(version)]
#[command(about = "Extract keyword matches from video subtitles")]
#[command(args_conflicts_with_subcommands = true)]
#[command(long_about = "subgrep downloads a video's subtitles with yt-dlp and exports the cues matching your keywords.

EXAMPLES:
    subgrep URL -k hello,world                  # Save matches as TXT in the default folder
    subgrep URL -k hello -f xlsx -o ./out       # Save an Excel sheet into ./out
    subgrep URL --marker -f docx                # Collect censored [ __ ] cues into a Word file
    subgrep URL -k hello --stdout > hits.txt    # Stream the document to stdout
    subgrep completions bash > subgrep.bash     # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. If the file doesn't exist,
    a default one is created automatically. Command line options override it.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    extract: ExtractArgs,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Color escape and marker for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "❌"),
            Level::Warn => ("\x1B[1;33m", "🚧"),
            Level::Info => ("\x1B[1;32m", " "),
            Level::Debug => ("\x1B[1;36m", "🔍"),
            Level::Trace => ("\x1B[1;35m", "📋"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        // The global max level is adjusted after the config is loaded
        metadata.level() <= self.level.max(log::max_level())
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, marker) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", color, now, marker, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "subgrep", &mut std::io::stdout());
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Extract(args)) => run_extract(args).await,
        None => run_extract(cli.extract).await,
    }
}

/// Load the config file and apply command line overrides
fn load_config(options: &ExtractArgs) -> Result<Config> {
    if let Some(level) = &options.log_level {
        let level: app_config::LogLevel = level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let mut config = Config::load_or_create(&options.config_path)?;

    if let Some(language) = &options.language {
        config.subtitle_language = language.clone();
    }

    if let Some(downloader) = &options.downloader {
        config.downloader.path = downloader.clone();
    }

    if let Some(format) = &options.format {
        config.export.format = format.clone().into();
    }

    if let Some(output_dir) = &options.output_dir {
        config.export.output_dir = output_dir.clone();
    }

    if let Some(level) = &options.log_level {
        config.log_level = level.clone().into();
    }

    config.validate().context("Configuration validation failed")?;
    log::set_max_level(config.log_level.to_level_filter());

    Ok(config)
}

async fn run_extract(options: ExtractArgs) -> Result<ExitCode> {
    let config = load_config(&options)?;

    let output = if options.stdout {
        OutputTarget::Buffer
    } else {
        OutputTarget::Folder(config.export.output_dir.clone())
    };

    let request = ExtractionRequest {
        url: options.url.clone().unwrap_or_default(),
        keywords: options.keywords.clone(),
        marker: options.marker,
        format: config.export.format,
        output,
    };

    let controller = Controller::with_config(config);

    match controller.run(request).await {
        Ok(ExtractionOutcome::Saved { path, match_count, .. }) => {
            info!("✅ Saved: {} ({} matches)", path.display(), match_count);
            Ok(ExitCode::SUCCESS)
        }
        Ok(ExtractionOutcome::Buffered { document, match_count, .. }) => {
            if match_count == 0 {
                info!("No matching cues found");
            }
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&document.bytes).context("Failed to write document to stdout")?;
            stdout.flush()?;
            info!("✅ Wrote {} ({} matches)", document.file_name, match_count);
            Ok(ExitCode::SUCCESS)
        }
        Ok(ExtractionOutcome::NoSubtitles { .. }) => {
            warn!("⚠️ No subtitles found");
            Ok(ExitCode::FAILURE)
        }
        Err(AppError::Validation(e)) => {
            warn!("Missing input: {}", e);
            Ok(ExitCode::from(2))
        }
        Err(e) => {
            error!("Error: {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
