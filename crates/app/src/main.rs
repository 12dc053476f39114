use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    QuestionSource, QuizLoaderService, SheetQuestionSource, SourceConfig, StaticQuestionSource,
};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_LOG_FILTER: &str = "info,services=debug,ui=debug";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    Config(services::ConfigError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::Config(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<services::ConfigError> for ArgsError {
    fn from(err: services::ConfigError) -> Self {
        Self::Config(err)
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    quiz_loader: Arc<QuizLoaderService>,
    source_label: String,
}

impl UiApp for DesktopApp {
    fn quiz_loader(&self) -> Arc<QuizLoaderService> {
        Arc::clone(&self.quiz_loader)
    }

    fn source_label(&self) -> String {
        self.source_label.clone()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--source <url>] [--timeout <secs>] [--rows <path>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --source {}", services::DEFAULT_SOURCE_URL);
    eprintln!("  --timeout 0   (wait indefinitely)");
    eprintln!();
    eprintln!("  --rows reads questions from a local JSON file instead of --source.");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_SOURCE_URL, QUIZ_FETCH_TIMEOUT_SECS, RUST_LOG");
}

struct Args {
    source: SourceConfig,
    rows_path: Option<PathBuf>,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut source = SourceConfig::from_env()?;
        let mut rows_path = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--source" => {
                    let value = require_value(args, "--source")?;
                    source = source.with_url(&value)?;
                }
                "--timeout" => {
                    let value = require_value(args, "--timeout")?;
                    source = source.with_timeout_secs(&value)?;
                }
                "--rows" => {
                    let value = require_value(args, "--rows")?;
                    rows_path = Some(PathBuf::from(value));
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { source, rows_path })
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn build_source(args: Args) -> Result<Arc<dyn QuestionSource>, Box<dyn std::error::Error>> {
    if let Some(path) = args.rows_path {
        return Ok(Arc::new(StaticQuestionSource::from_path(&path)?));
    }
    Ok(Arc::new(SheetQuestionSource::new(args.source)?))
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut iter = std::env::args().skip(1);
    let parsed = Args::parse(&mut iter).inspect_err(|_| print_usage())?;

    let source = build_source(parsed)?;
    let source_label = source.describe();
    info!(source = %source_label, "starting quiz");

    let app = DesktopApp {
        quiz_loader: Arc::new(QuizLoaderService::new(source)),
        source_label,
    };
    let app: Arc<dyn UiApp> = Arc::new(app);
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn parse(args: &[&str]) -> Result<Args, ArgsError> {
        Args::parse(&mut args.iter().map(|arg| (*arg).to_string()))
    }

    #[test]
    fn flags_override_source_settings() {
        let Ok(args) = parse(&[
            "--source",
            "https://example.com/rows",
            "--timeout",
            "5",
            "--rows",
            "rows.json",
        ]) else {
            panic!("valid arguments rejected");
        };
        assert_eq!(args.source.url.as_str(), "https://example.com/rows");
        assert_eq!(args.source.timeout, Some(Duration::from_secs(5)));
        assert_eq!(args.rows_path, Some(PathBuf::from("rows.json")));
    }

    #[test]
    fn argument_errors_render_as_a_single_line() {
        let Err(err) = parse(&["--source"]) else {
            panic!("missing value accepted");
        };
        assert_eq!(err.to_string(), "--source requires a value");

        let Err(err) = parse(&["--verbose"]) else {
            panic!("unknown flag accepted");
        };
        assert_eq!(err.to_string(), "unknown argument: --verbose");

        let Err(err) = parse(&["--source", "ftp://example.com"]) else {
            panic!("unsupported scheme accepted");
        };
        assert!(matches!(err, ArgsError::Config(_)));
        assert!(!err.to_string().contains('\n'));
    }
}
