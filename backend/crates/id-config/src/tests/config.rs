use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err};
use serial_test::serial;

#[test]
#[serial]
fn given_empty_config_dir_when_load_then_defaults_apply() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _secret = EnvGuard::remove("ID_AUTH_JWT_SECRET");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.host, eq("127.0.0.1"));
    assert_that!(config.server.port, eq(8000));
    assert_that!(config.database.path, eq("data.db"));
    assert_that!(config.auth.jwt_secret.is_none(), eq(true));
    assert_that!(config.auth.bcrypt_cost, eq(8));
}

#[test]
#[serial]
fn given_config_toml_when_load_then_values_are_read() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let _secret = EnvGuard::remove("ID_AUTH_JWT_SECRET");
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [server]
            port = 9100

            [auth]
            jwt_secret = "file-secret-that-is-long-enough-to-pass"
            token_ttl_secs = 3600
        "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(9100));
    assert_that!(
        config.auth.jwt_secret.as_deref(),
        eq(Some("file-secret-that-is-long-enough-to-pass"))
    );
    assert_that!(config.auth.token_ttl_secs, eq(3600));
}

#[test]
#[serial]
fn given_env_override_when_load_then_env_wins_over_file() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[server]\nport = 9100\n").unwrap();
    let _port = EnvGuard::set("ID_SERVER_PORT", "9200");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(9200));
}

#[test]
#[serial]
fn given_unknown_log_level_when_load_then_falls_back_to_info() {
    // Given: a level name the logger does not know
    let (_temp, _guard) = setup_config_dir();
    let _level = EnvGuard::set("ID_LOG_LEVEL", "verbose");

    // When
    let config = Config::load().unwrap();

    // Then: startup proceeds at the default level
    assert_that!(*config.logging.level, eq(log::LevelFilter::Info));
}

#[test]
#[serial]
fn given_absolute_database_path_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _secret = EnvGuard::set("ID_AUTH_JWT_SECRET", "12345678901234567890123456789012");
    let _path = EnvGuard::set("ID_DATABASE_PATH", "/etc/users.db");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("database.path"));
}
