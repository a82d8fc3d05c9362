use reflector_core::LogConfig;
use reflector_core::config::{LOG_DIR_ENV, LOG_FILTER_ENV};
use std::path::PathBuf;

// Kept in its own binary and in a single test: it mutates process environment.
#[test]
fn environment_overrides_directory_and_filter() {
    unsafe {
        std::env::remove_var(LOG_DIR_ENV);
        std::env::remove_var(LOG_FILTER_ENV);
    }
    let config = LogConfig::from_env();
    assert_eq!(config.default_filter, "info");
    assert!(config.directory.ends_with(".reflector/logs"));

    unsafe {
        std::env::set_var(LOG_DIR_ENV, "/tmp/reflector-env-logs");
        std::env::set_var(LOG_FILTER_ENV, "reflector_core=debug");
    }
    let config = LogConfig::from_env();
    unsafe {
        std::env::remove_var(LOG_DIR_ENV);
        std::env::remove_var(LOG_FILTER_ENV);
    }

    assert_eq!(config.directory, PathBuf::from("/tmp/reflector-env-logs"));
    assert_eq!(config.default_filter, "reflector_core=debug");
    assert_eq!(config.component, "reflector");
    assert!(!config.to_stderr);
}
