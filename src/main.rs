use clap::{Parser, Subcommand};
use hrms_nav::core::config::{self, CliOverrides, ConfigError, HrmsConfig, ResolvedConfig};
use hrms_nav::core::{NavigationParams, Navigator, ParamValue};
use log::{LevelFilter, error, info, warn};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "hrms-nav", about = "Keyboard-driven HRMS shell")]
struct Args {
    /// Module to open on top of the default one
    #[arg(short, long)]
    start: Option<String>,

    /// Parameter for --start, as key=value (repeatable)
    #[arg(short, long = "param", value_parser = parse_param)]
    params: Vec<(String, ParamValue)>,

    /// Module shown at startup
    #[arg(long)]
    default_module: Option<String>,

    /// Back-navigation depth
    #[arg(long)]
    history_limit: Option<usize>,

    /// Log level written to hrms-nav.log
    #[arg(long)]
    log_level: Option<String>,

    /// Config file (defaults to ~/.hrms-nav/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the resolved route table as JSON and exit
    Routes,
}

fn parse_param(raw: &str) -> Result<(String, ParamValue), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), ParamValue::parse(value)))
        }
        _ => Err(format!("expected key=value, got '{raw}'")),
    }
}

/// Install the file logger. The level can be narrowed later with
/// `log::set_max_level` once the config file has been read.
fn init_logging(path: &Path, level: LevelFilter) {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(path) {
        let _ = WriteLogger::init(LevelFilter::Trace, log_config, log_file);
        log::set_max_level(level);
    }
}

/// Level to log config loading at: CLI, then env, then the default.
fn early_log_level(cli: &CliOverrides) -> LevelFilter {
    cli.log_level
        .clone()
        .or_else(|| std::env::var("HRMS_LOG_LEVEL").ok())
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(config::DEFAULT_LOG_LEVEL)
}

/// Load and resolve config, falling back to defaults when the file is unusable.
fn load_resolved(
    path: Option<&Path>,
    cli: &CliOverrides,
) -> Result<(ResolvedConfig, Option<ConfigError>), ConfigError> {
    let loaded = config::load_config(path).and_then(|file| config::resolve(&file, cli));
    match loaded {
        Ok(resolved) => Ok((resolved, None)),
        Err(e) => Ok((config::resolve(&HrmsConfig::default(), cli)?, Some(e))),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let cli = CliOverrides {
        default_module: args.default_module.clone(),
        history_limit: args.history_limit,
        log_level: args.log_level.clone(),
    };

    // Logger goes first so config loading diagnostics are kept
    init_logging(Path::new("hrms-nav.log"), early_log_level(&cli));

    let (resolved, config_error) = match load_resolved(args.config.as_deref(), &cli) {
        Ok(loaded) => loaded,
        Err(e) => {
            error!("Cannot resolve configuration: {}", e);
            eprintln!("hrms-nav: {e}");
            return ExitCode::FAILURE;
        }
    };
    log::set_max_level(resolved.log_level);

    if let Some(Command::Routes) = args.command {
        let entries: Vec<_> = resolved.routes.entries().collect();
        return match serde_json::to_string_pretty(&entries) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Failed to serialize route table: {e}");
                ExitCode::FAILURE
            }
        };
    }

    info!(
        "HRMS navigator starting (default module '{}', {} routes)",
        resolved.default_module,
        resolved.routes.len()
    );
    if let Some(e) = config_error {
        warn!("Falling back to default configuration: {}", e);
        eprintln!("hrms-nav: {e}; using defaults");
    }

    let mut nav = match Navigator::initialize(resolved.routes.clone(), &resolved.default_module) {
        Ok(nav) => nav.with_history_limit(resolved.history_limit),
        Err(e) => {
            error!("Cannot start: {}", e);
            eprintln!("hrms-nav: {e}");
            return ExitCode::FAILURE;
        }
    };

    let params: NavigationParams = args.params.iter().cloned().collect();
    nav.open_start(args.start.as_deref(), params);

    match hrms_nav::tui::run(nav) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Terminal error: {}", e);
            eprintln!("hrms-nav: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("hrms-nav-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_parse_param_accepts_key_value() {
        assert_eq!(
            parse_param("taskId=T-42"),
            Ok(("taskId".to_string(), ParamValue::Text("T-42".into())))
        );
        assert_eq!(
            parse_param("employeeId=7"),
            Ok(("employeeId".to_string(), ParamValue::Int(7)))
        );
        assert_eq!(
            parse_param(" taskId = T-42 "),
            Ok(("taskId".to_string(), ParamValue::Text("T-42".into())))
        );
    }

    #[test]
    fn test_parse_param_rejects_missing_parts() {
        assert!(parse_param("=v").is_err());
        assert!(parse_param("novalue").is_err());
    }

    #[test]
    fn test_args_collect_start_params() {
        let args = Args::parse_from([
            "hrms-nav", "--start", "task-details", "--param", "taskId=T-42", "-p", "projectId=P-2",
        ]);
        assert_eq!(args.start.as_deref(), Some("task-details"));
        assert_eq!(args.params.len(), 2);
        assert!(args.command.is_none());
    }

    #[test]
    fn test_malformed_config_falls_back_to_defaults() {
        let path = temp_path("broken.toml");
        fs::write(&path, "[general\nhistory_limit = ").unwrap();
        let (resolved, error) = load_resolved(Some(&path), &CliOverrides::default()).unwrap();
        assert!(matches!(error, Some(ConfigError::Parse(_))));
        assert_eq!(resolved.default_module, config::DEFAULT_MODULE);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_config_warnings_reach_the_log_file() {
        let log_path = temp_path("startup.log");
        init_logging(&log_path, LevelFilter::Debug);

        let config_path = temp_path("noisy.toml");
        fs::write(&config_path, "[general]\nlog_level = \"loud\"\n").unwrap();
        let (resolved, error) = load_resolved(Some(&config_path), &CliOverrides::default()).unwrap();
        assert!(error.is_none());
        assert_eq!(resolved.log_level, config::DEFAULT_LOG_LEVEL);

        let log = fs::read_to_string(&log_path).unwrap();
        assert!(log.contains("Loaded config from"));
        assert!(log.contains("Ignoring invalid log_level"));
        let _ = fs::remove_file(&config_path);
        let _ = fs::remove_file(&log_path);
    }
}
