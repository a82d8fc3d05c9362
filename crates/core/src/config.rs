use std::path::PathBuf;

/// Overrides [`LogConfig::directory`].
pub const LOG_DIR_ENV: &str = "REFLECTOR_LOG_DIR";

/// Overrides [`LogConfig::default_filter`]. `RUST_LOG` still wins when set.
pub const LOG_FILTER_ENV: &str = "REFLECTOR_LOG";

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// File prefix of the rolling log, e.g. `reflector.log.2024-01-21`.
    pub component: String,
    pub directory: PathBuf,
    pub default_filter: String,
    pub to_stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            component: "reflector".to_string(),
            directory: default_log_dir(),
            default_filter: "info".to_string(),
            to_stderr: false,
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(dir) = std::env::var(LOG_DIR_ENV) {
            config.directory = PathBuf::from(dir);
        }
        if let Ok(filter) = std::env::var(LOG_FILTER_ENV) {
            config.default_filter = filter;
        }
        config
    }

    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = component.into();
        self
    }

    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = directory.into();
        self
    }

    pub fn with_stderr(mut self, to_stderr: bool) -> Self {
        self.to_stderr = to_stderr;
        self
    }
}

fn default_log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".reflector")
        .join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LogConfig::default();
        assert_eq!(config.component, "reflector");
        assert_eq!(config.default_filter, "info");
        assert!(!config.to_stderr);
        assert!(config.directory.ends_with(".reflector/logs"));
    }

    #[test]
    fn test_overrides() {
        let config = LogConfig::default()
            .with_component("indexer")
            .with_directory("/tmp/reflector-logs")
            .with_stderr(true);
        assert_eq!(config.component, "indexer");
        assert_eq!(config.directory, PathBuf::from("/tmp/reflector-logs"));
        assert!(config.to_stderr);
    }
}
