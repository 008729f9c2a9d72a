use std::fs;
use std::path::Path;
use std::time::Duration;

use clap::ValueEnum;
use leadhook_engine::SendSettings;
use leadhook_logging::{parse_level, LevelFilter};
use serde::Deserialize;

use super::cli::Args;
use super::logging::LogDestination;

pub const CONFIG_FILENAME: &str = "config.ron";

/// Optional settings from `config.ron`. Every field may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub request_timeout_secs: Option<u64>,
    pub connect_timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
    pub log: Option<String>,
    pub log_level: Option<String>,
}

/// Settings after merging the config file with command-line flags.
#[derive(Debug, Clone)]
pub struct Settings {
    pub log: LogDestination,
    pub log_level: LevelFilter,
    pub send: SendSettings,
}

/// Reads the config file. A missing file yields defaults; so does a broken one,
/// with the problem returned for logging once the logger is up.
pub fn load(path: &Path) -> (AppConfig, Option<String>) {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return (AppConfig::default(), None);
        }
        Err(err) => {
            return (
                AppConfig::default(),
                Some(format!("Failed to read config {:?}: {}", path, err)),
            );
        }
    };
    parse(&content, path)
}

fn parse(content: &str, path: &Path) -> (AppConfig, Option<String>) {
    match ron::from_str::<AppConfig>(content) {
        Ok(config) => (config, None),
        Err(err) => (
            AppConfig::default(),
            Some(format!("Ignoring config {:?}: {}", path, err)),
        ),
    }
}

/// Flags win over the file; unknown names fall back to the defaults.
pub fn resolve(config: &AppConfig, args: &Args) -> Settings {
    let log = args
        .log
        .or_else(|| {
            config
                .log
                .as_deref()
                .and_then(|name| LogDestination::from_str(name, true).ok())
        })
        .unwrap_or_default();

    let log_level = args
        .log_level
        .as_deref()
        .or(config.log_level.as_deref())
        .and_then(parse_level)
        .unwrap_or(LevelFilter::Info);

    let mut send = SendSettings {
        request_timeout: config.request_timeout_secs.map(Duration::from_secs),
        connect_timeout: config.connect_timeout_secs.map(Duration::from_secs),
        ..SendSettings::default()
    };
    if let Some(user_agent) = config.user_agent.as_ref().filter(|ua| !ua.trim().is_empty()) {
        send.user_agent = user_agent.clone();
    }

    Settings {
        log,
        log_level,
        send,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    fn args(flags: &[&str]) -> Args {
        let mut argv = vec!["leadhook"];
        argv.extend_from_slice(flags);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (config, problem) = load(&dir.path().join(CONFIG_FILENAME));
        assert_eq!(config, AppConfig::default());
        assert!(problem.is_none());
    }

    #[test]
    fn partial_file_is_accepted() {
        let (config, problem) = parse(
            "(request_timeout_secs: Some(30), log: Some(\"both\"))",
            &PathBuf::from(CONFIG_FILENAME),
        );
        assert!(problem.is_none());
        assert_eq!(config.request_timeout_secs, Some(30));
        assert_eq!(config.log.as_deref(), Some("both"));
        assert_eq!(config.user_agent, None);
    }

    #[test]
    fn broken_file_reports_and_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "(request_timeout_secs: \"soon\"").unwrap();

        let (config, problem) = load(&path);
        assert_eq!(config, AppConfig::default());
        assert!(problem.unwrap().contains("Ignoring config"));
    }

    #[test]
    fn flags_override_file() {
        let config = AppConfig {
            request_timeout_secs: Some(5),
            user_agent: Some("probe/1".to_string()),
            log: Some("terminal".to_string()),
            log_level: Some("warn".to_string()),
            ..AppConfig::default()
        };

        let settings = resolve(&config, &args(&["--log", "off", "--log-level", "debug"]));
        assert_eq!(settings.log, LogDestination::Off);
        assert_eq!(settings.log_level, LevelFilter::Debug);
        assert_eq!(settings.send.request_timeout, Some(Duration::from_secs(5)));
        assert_eq!(settings.send.connect_timeout, None);
        assert_eq!(settings.send.user_agent, "probe/1");

        let settings = resolve(&config, &args(&[]));
        assert_eq!(settings.log, LogDestination::Terminal);
        assert_eq!(settings.log_level, LevelFilter::Warn);
    }

    #[test]
    fn defaults_have_no_timeout_and_log_to_file() {
        let settings = resolve(&AppConfig::default(), &args(&[]));
        assert_eq!(settings.log, LogDestination::File);
        assert_eq!(settings.log_level, LevelFilter::Info);
        assert_eq!(settings.send.request_timeout, None);
        assert!(settings.send.user_agent.starts_with("leadhook/"));
    }
}
