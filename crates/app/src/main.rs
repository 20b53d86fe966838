use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::{DEFAULT_TIME_LIMIT_SECS, ExamId, QuizSettings};
use storage::{Storage, StorageError};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt as log_fmt};
use ui::{App, UiApp, build_app_context};

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownExam { raw: String },
    InvalidTimeLimit { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownExam { raw } => write!(f, "unknown exam: {raw}"),
            ArgsError::InvalidTimeLimit { raw } => {
                write!(f, "invalid --time-limit value: {raw} (expected seconds > 0)")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    storage: Storage,
    settings: QuizSettings,
    initial_exam: Option<ExamId>,
}

impl UiApp for DesktopApp {
    fn storage(&self) -> Storage {
        self.storage.clone()
    }

    fn settings(&self) -> QuizSettings {
        self.settings
    }

    fn initial_exam(&self) -> Option<ExamId> {
        self.initial_exam.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    exam: Option<String>,
    settings: QuizSettings,
    log_filter: String,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui    [--exam <id>] [--time-limit <secs>] [--log <filter>]");
    eprintln!("  cargo run -p app -- exams [--log <filter>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --time-limit {DEFAULT_TIME_LIMIT_SECS}");
    eprintln!("  --log {DEFAULT_LOG_FILTER}  (RUST_LOG takes precedence)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_EXAM, QUIZ_TIME_LIMIT_SECS, QUIZ_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Exams,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "exams" => Some(Self::Exams),
            _ => None,
        }
    }
}

fn parse_time_limit(raw: String) -> Result<QuizSettings, ArgsError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .and_then(|secs| QuizSettings::new(secs).ok())
        .ok_or(ArgsError::InvalidTimeLimit { raw })
}

impl Args {
    /// Flags win over the environment; `env` is injected so parsing stays testable.
    fn parse_ui(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut exam = env("QUIZ_EXAM").filter(|value| !value.trim().is_empty());
        let mut settings = match env("QUIZ_TIME_LIMIT_SECS") {
            Some(raw) => parse_time_limit(raw)?,
            None => QuizSettings::default(),
        };
        let mut log_filter = env("QUIZ_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--exam" => {
                    let value = require_value(args, "--exam")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::UnknownExam { raw: value });
                    }
                    exam = Some(value);
                }
                "--time-limit" => {
                    settings = parse_time_limit(require_value(args, "--time-limit")?)?;
                }
                "--log" => {
                    log_filter = require_value(args, "--log")?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            exam,
            settings,
            log_filter,
        })
    }

    /// `exams` only prints the catalog, so the launch flags are rejected.
    fn parse_exams(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut log_filter = env("QUIZ_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--log" => {
                    log_filter = require_value(args, "--log")?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            exam: None,
            settings: QuizSettings::default(),
            log_filter,
        })
    }
}

fn init_tracing(default_filter: &str) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    log_fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|err| err.to_string().into())
}

/// Resolve `--exam` against the catalog so a typo fails at startup.
fn resolve_exam(storage: &Storage, raw: &str) -> Result<ExamId, Box<dyn std::error::Error>> {
    let unknown = || ArgsError::UnknownExam {
        raw: raw.to_string(),
    };
    let id: ExamId = raw.parse().map_err(|_| unknown())?;
    match storage.exams.get_exam(&id) {
        Ok(exam) => Ok(exam.id().clone()),
        Err(StorageError::NotFound) => Err(unknown().into()),
        Err(err) => Err(err.into()),
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let env = |key: &str| std::env::var(key).ok();
    let parsed = match cmd {
        Command::Ui => Args::parse_ui(&mut iter, env),
        Command::Exams => Args::parse_exams(&mut iter, env),
    }
    .map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing(&parsed.log_filter)?;

    let storage = Storage::bundled()?;
    debug!("bundled question sets loaded");

    match cmd {
        Command::Ui => {
            let initial_exam = parsed
                .exam
                .as_deref()
                .map(|raw| resolve_exam(&storage, raw))
                .transpose()?;
            info!(
                time_limit_secs = parsed.settings.time_limit_secs(),
                exam = initial_exam.as_ref().map(ExamId::as_str),
                "launching desktop ui"
            );

            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                storage,
                settings: parsed.settings,
                initial_exam,
            });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Exam Quiz")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Exams => {
            for exam in storage.exams.list_exams()? {
                println!("{}\t{}\t{}", exam.id(), exam.title(), exam.description());
            }
            Ok(())
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
