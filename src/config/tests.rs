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

fn clear_eureka_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("EUREKA_PORT");
        env::remove_var("EUREKA_BIND_ADDR");
        env::remove_var("EUREKA_DB_PATH");
        env::remove_var("EUREKA_JUDGE_MODEL");
        env::remove_var("EUREKA_FETCH_TIMEOUT_SECS");
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
    assert_eq!(config.db_path, PathBuf::from("./eureka.db"));
    assert_eq!(config.judge_model, "gpt-4o-mini");
    assert_eq!(config.fetch_timeout_secs, 30);
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
    clear_eureka_env();

    let config = Config::from_env().expect("should parse with defaults");

    assert_eq!(config.port, 8080);
    assert_eq!(
        config.bind_addr,
        IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1))
    );
}

#[test]
#[serial]
fn test_from_env_custom_port() {
    clear_eureka_env();

    with_env_vars(&[("EUREKA_PORT", "3000")], || {
        let config = Config::from_env().expect("should parse");
        assert_eq!(config.port, 3000);
    });
}

#[test]
#[serial]
fn test_from_env_custom_bind_addr() {
    clear_eureka_env();

    with_env_vars(&[("EUREKA_BIND_ADDR", "0.0.0.0")], || {
        let config = Config::from_env().expect("should parse");
        assert_eq!(
            config.bind_addr,
            IpAddr::V4(std::net::Ipv4Addr::new(0, 0, 0, 0))
        );
    });
}

#[test]
#[serial]
fn test_from_env_ipv6_bind_addr() {
    clear_eureka_env();

    with_env_vars(&[("EUREKA_BIND_ADDR", "::1")], || {
        let config = Config::from_env().expect("should parse");
        assert_eq!(
            config.bind_addr,
            IpAddr::V6(std::net::Ipv6Addr::new(0, 0, 0, 0, 0, 0, 0, 1))
        );
    });
}

#[test]
#[serial]
fn test_invalid_port_zero() {
    clear_eureka_env();

    with_env_vars(&[("EUREKA_PORT", "0")], || {
        let result = Config::from_env();
        assert!(result.is_err());

        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
        assert!(err.to_string().contains("invalid port"));
    });
}

#[test]
#[serial]
fn test_invalid_port_not_number() {
    clear_eureka_env();

    with_env_vars(&[("EUREKA_PORT", "not_a_port")], || {
        let result = Config::from_env();
        assert!(result.is_err());

        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::PortParseError { .. }));
        assert!(err.to_string().contains("failed to parse port"));
    });
}

#[test]
#[serial]
fn test_invalid_port_too_large() {
    clear_eureka_env();

    with_env_vars(&[("EUREKA_PORT", "99999")], || {
        let result = Config::from_env();
        assert!(result.is_err());

        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::PortParseError { .. }));
    });
}

#[test]
#[serial]
fn test_invalid_bind_addr() {
    clear_eureka_env();

    with_env_vars(&[("EUREKA_BIND_ADDR", "not.an.ip.address")], || {
        let result = Config::from_env();
        assert!(result.is_err());

        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr { .. }));
        assert!(err.to_string().contains("failed to parse bind address"));
    });
}

#[test]
#[serial]
fn test_full_config_parse() {
    clear_eureka_env();

    with_env_vars(
        &[
            ("EUREKA_PORT", "8080"),
            ("EUREKA_BIND_ADDR", "0.0.0.0"),
            ("EUREKA_DB_PATH", "/var/lib/eureka/eureka.db"),
            ("EUREKA_JUDGE_MODEL", "gpt-4o"),
            ("EUREKA_FETCH_TIMEOUT_SECS", "60"),
        ],
        || {
            let config = Config::from_env().expect("should parse full config");

            assert_eq!(config.port, 8080);
            assert_eq!(
                config.bind_addr,
                IpAddr::V4(std::net::Ipv4Addr::new(0, 0, 0, 0))
            );
            assert_eq!(config.db_path, PathBuf::from("/var/lib/eureka/eureka.db"));
            assert_eq!(config.judge_model, "gpt-4o");
            assert_eq!(config.fetch_timeout_secs, 60);
            assert_eq!(config.socket_addr(), "0.0.0.0:8080");
        },
    );
}

#[test]
#[serial]
fn test_blank_judge_model_uses_default() {
    clear_eureka_env();

    with_env_vars(&[("EUREKA_JUDGE_MODEL", "  ")], || {
        let config = Config::from_env().expect("should parse");
        assert_eq!(config.judge_model, "gpt-4o-mini");
    });
}

#[test]
#[serial]
fn test_invalid_fetch_timeout_uses_default() {
    clear_eureka_env();

    with_env_vars(&[("EUREKA_FETCH_TIMEOUT_SECS", "soon")], || {
        let config = Config::from_env().expect("should parse with fallback");
        assert_eq!(config.fetch_timeout_secs, 30);
    });
}
