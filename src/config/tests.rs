use super::*;
use serial_test::serial;
use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_simcheck_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("SIMCHECK_PORT");
        env::remove_var("SIMCHECK_BIND_ADDR");
        env::remove_var("SIMCHECK_CORPUS_PATH");
        env::remove_var("SIMCHECK_CORPUS_EXTENSIONS");
        env::remove_var("SIMCHECK_USERS_PATH");
        env::remove_var("SIMCHECK_FLAG_THRESHOLD");
        env::remove_var("SIMCHECK_MAX_KEYWORDS");
        env::remove_var("SIMCHECK_GITHUB_TOKEN");
        env::remove_var("SIMCHECK_GITHUB_API_URL");
        env::remove_var("SIMCHECK_REMOTE_MAX_FILES");
        env::remove_var("SIMCHECK_REMOTE_TIMEOUT_SECS");
        env::remove_var("SIMCHECK_REMOTE_CACHE_TTL_SECS");
        env::remove_var("SIMCHECK_REMOTE_CACHE_CAPACITY");
    }
}

fn manifest_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// A config whose paths all exist: `src/` as corpus, `Cargo.toml` as users file.
fn valid_config() -> Config {
    Config {
        corpus_path: manifest_dir().join("src"),
        users_path: manifest_dir().join("Cargo.toml"),
        ..Default::default()
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.port, 8080);
    assert_eq!(
        config.bind_addr,
        IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1))
    );
    assert_eq!(config.corpus_path, PathBuf::from("./source_files"));
    assert_eq!(config.corpus_extensions, vec!["py", "txt"]);
    assert_eq!(config.flag_threshold, 0.80);
    assert_eq!(config.max_keywords, 5);
    assert!(config.github_token.is_none());
    assert!(!config.remote_enabled());
    assert_eq!(config.github_api_url, "https://api.github.com");
}

#[test]
fn test_socket_addr() {
    let config = Config::default();
    assert_eq!(config.socket_addr(), "127.0.0.1:8080");

    let config = Config {
        port: 3000,
        bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(0, 0, 0, 0)),
        ..Default::default()
    };
    assert_eq!(config.socket_addr(), "0.0.0.0:3000");
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_simcheck_env();

    let config = Config::from_env().expect("should parse with defaults");

    assert_eq!(config.port, 8080);
    assert_eq!(config.flag_threshold, 0.80);
    assert_eq!(config.remote_timeout, Duration::from_secs(10));
}

#[test]
#[serial]
fn test_from_env_custom_port() {
    clear_simcheck_env();

    with_env_vars(&[("SIMCHECK_PORT", "3000")], || {
        let config = Config::from_env().expect("should parse");
        assert_eq!(config.port, 3000);
    });
}

#[test]
#[serial]
fn test_from_env_threshold_is_percent() {
    clear_simcheck_env();

    with_env_vars(&[("SIMCHECK_FLAG_THRESHOLD", "65")], || {
        let config = Config::from_env().expect("should parse");
        assert!((config.flag_threshold - 0.65).abs() < 1e-12);
    });
}

#[test]
#[serial]
fn test_from_env_threshold_out_of_range() {
    clear_simcheck_env();

    for value in ["0", "-5", "100.5"] {
        with_env_vars(&[("SIMCHECK_FLAG_THRESHOLD", value)], || {
            let err = Config::from_env().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidThreshold { .. }));
        });
    }
}

#[test]
#[serial]
fn test_from_env_threshold_not_number() {
    clear_simcheck_env();

    with_env_vars(&[("SIMCHECK_FLAG_THRESHOLD", "high")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::ThresholdParseError { .. }));
        assert!(err.to_string().contains("failed to parse threshold"));
    });
}

#[test]
#[serial]
fn test_from_env_extensions() {
    clear_simcheck_env();

    with_env_vars(&[("SIMCHECK_CORPUS_EXTENSIONS", ".PY, md ,,txt")], || {
        let config = Config::from_env().expect("should parse");
        assert_eq!(config.corpus_extensions, vec!["py", "md", "txt"]);
    });

    with_env_vars(&[("SIMCHECK_CORPUS_EXTENSIONS", " , ")], || {
        let config = Config::from_env().expect("should parse");
        assert_eq!(config.corpus_extensions, vec!["py", "txt"]);
    });
}

#[test]
#[serial]
fn test_from_env_blank_token_disables_remote() {
    clear_simcheck_env();

    with_env_vars(&[("SIMCHECK_GITHUB_TOKEN", "   ")], || {
        let config = Config::from_env().expect("should parse");
        assert!(config.github_token.is_none());
    });

    with_env_vars(&[("SIMCHECK_GITHUB_TOKEN", " ghp_abc \n")], || {
        let config = Config::from_env().expect("should parse");
        assert_eq!(config.github_token.as_deref(), Some("ghp_abc"));
        assert!(config.remote_enabled());
    });
}

#[test]
#[serial]
fn test_invalid_port_zero() {
    clear_simcheck_env();

    with_env_vars(&[("SIMCHECK_PORT", "0")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
        assert!(err.to_string().contains("invalid port"));
    });
}

#[test]
#[serial]
fn test_invalid_port_not_number() {
    clear_simcheck_env();

    with_env_vars(&[("SIMCHECK_PORT", "not_a_port")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::PortParseError { .. }));
    });
}

#[test]
#[serial]
fn test_invalid_bind_addr() {
    clear_simcheck_env();

    with_env_vars(&[("SIMCHECK_BIND_ADDR", "not.an.ip.address")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr { .. }));
    });
}

#[test]
#[serial]
fn test_invalid_numeric_falls_back_to_default() {
    clear_simcheck_env();

    with_env_vars(
        &[
            ("SIMCHECK_MAX_KEYWORDS", "many"),
            ("SIMCHECK_REMOTE_CACHE_CAPACITY", "-1"),
        ],
        || {
            let config = Config::from_env().expect("should parse with fallback");
            assert_eq!(config.max_keywords, 5);
            assert_eq!(config.remote_cache_capacity, 1_000);
        },
    );
}

#[test]
#[serial]
fn test_full_config_parse() {
    clear_simcheck_env();

    with_env_vars(
        &[
            ("SIMCHECK_PORT", "9090"),
            ("SIMCHECK_BIND_ADDR", "0.0.0.0"),
            ("SIMCHECK_CORPUS_PATH", "/srv/corpus"),
            ("SIMCHECK_USERS_PATH", "/etc/simcheck/users.yml"),
            ("SIMCHECK_MAX_KEYWORDS", "8"),
            ("SIMCHECK_GITHUB_API_URL", "http://github.internal/api"),
            ("SIMCHECK_REMOTE_MAX_FILES", "3"),
            ("SIMCHECK_REMOTE_TIMEOUT_SECS", "2"),
            ("SIMCHECK_REMOTE_CACHE_TTL_SECS", "60"),
        ],
        || {
            let config = Config::from_env().expect("should parse full config");

            assert_eq!(config.socket_addr(), "0.0.0.0:9090");
            assert_eq!(config.corpus_path, PathBuf::from("/srv/corpus"));
            assert_eq!(config.users_path, PathBuf::from("/etc/simcheck/users.yml"));
            assert_eq!(config.max_keywords, 8);
            assert_eq!(config.github_api_url, "http://github.internal/api");
            assert_eq!(config.remote_max_files, 3);
            assert_eq!(config.remote_timeout, Duration::from_secs(2));
            assert_eq!(config.remote_cache_ttl, Duration::from_secs(60));
        },
    );
}

#[test]
fn test_validate_success_with_valid_paths() {
    assert!(valid_config().validate().is_ok());
}

#[test]
fn test_validate_missing_corpus_dir_is_fine() {
    let config = Config {
        corpus_path: PathBuf::from("/nonexistent/corpus"),
        ..valid_config()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_corpus_path_is_file() {
    let config = Config {
        corpus_path: manifest_dir().join("Cargo.toml"),
        ..valid_config()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::NotADirectory { .. }));
}

#[test]
fn test_validate_users_path_missing() {
    let config = Config {
        users_path: PathBuf::from("/nonexistent/users.yml"),
        ..valid_config()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::PathNotFound { .. }));
}

#[test]
fn test_validate_users_path_is_directory() {
    let config = Config {
        users_path: manifest_dir().join("src"),
        ..valid_config()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::NotAFile { .. }));
}

#[test]
fn test_validate_rejects_zero_keywords_and_timeout() {
    let config = Config {
        max_keywords: 0,
        ..valid_config()
    };
    assert!(matches!(
        config.validate().unwrap_err(),
        ConfigError::InvalidValue { .. }
    ));

    let config = Config {
        remote_timeout: Duration::ZERO,
        ..valid_config()
    };
    assert!(matches!(
        config.validate().unwrap_err(),
        ConfigError::InvalidValue { .. }
    ));
}

#[test]
fn test_error_messages_are_descriptive() {
    let err = ConfigError::InvalidPort {
        value: "0".to_string(),
    };
    assert!(err.to_string().contains("1 and 65535"));

    let err = ConfigError::InvalidThreshold {
        value: "150".to_string(),
    };
    assert!(err.to_string().contains("150"));

    let err = ConfigError::PathNotFound {
        path: PathBuf::from("/some/path"),
    };
    assert!(err.to_string().contains("/some/path"));
}
