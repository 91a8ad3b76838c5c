use std::io::Write;

use vda5050_dashboard::{
    config::{Config, MQTT_HOST_ENV, MQTT_PASSWORD_ENV, MQTT_PORT_ENV, MQTT_USERNAME_ENV},
    error::ConfigError,
};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

const MINIMAL: &str = r#"
[mqtt_broker]
host = "broker.local"
port = 8883

[vehicle]
manufacturer = "AGVSimulator"
serial_number = "AGV001"
vda_full_version = "2.0.0"
"#;

#[test]
fn test_load_applies_defaults() {
    let file = write_config(MINIMAL);
    let config = Config::load(file.path().to_str().unwrap()).unwrap();

    assert_eq!(config.mqtt_broker.host, "broker.local");
    assert_eq!(config.mqtt_broker.port, 8883);
    assert_eq!(config.mqtt_broker.vda_interface, "vda5050");
    assert_eq!(config.mqtt_broker.username, None);
    assert_eq!(config.mqtt_broker.password, None);
    assert!(!config.mqtt_broker.use_tls);
    assert_eq!(config.mqtt_broker.keep_alive_secs, 30);
    assert_eq!(config.mqtt_broker.inbound_buffer, 25);
    assert_eq!(config.mqtt_broker.server_uri(), "tcp://broker.local:8883");
    assert_eq!(config.vehicle.serial_number, "AGV001");
}

#[test]
fn test_env_overrides_broker_settings() {
    let file = write_config(MINIMAL);
    let mut config = Config::load(file.path().to_str().unwrap()).unwrap();

    config
        .apply_env_overrides(|name| match name {
            MQTT_HOST_ENV => Some("mqtt.example.com".to_string()),
            MQTT_PORT_ENV => Some("1884".to_string()),
            MQTT_USERNAME_ENV => Some("operator".to_string()),
            MQTT_PASSWORD_ENV => Some("hunter2".to_string()),
            _ => None,
        })
        .unwrap();

    assert_eq!(config.mqtt_broker.host, "mqtt.example.com");
    assert_eq!(config.mqtt_broker.port, 1884);
    assert_eq!(config.mqtt_broker.username.as_deref(), Some("operator"));
    assert_eq!(config.mqtt_broker.password.as_deref(), Some("hunter2"));
}

#[test]
fn test_missing_env_keeps_file_values() {
    let file = write_config(MINIMAL);
    let mut config = Config::load(file.path().to_str().unwrap()).unwrap();

    config.apply_env_overrides(|_| None).unwrap();
    assert_eq!(config.mqtt_broker.host, "broker.local");
    assert_eq!(config.mqtt_broker.port, 8883);
}

#[test]
fn test_invalid_port_is_rejected() {
    let file = write_config(MINIMAL);
    let mut config = Config::load(file.path().to_str().unwrap()).unwrap();

    let err = config
        .apply_env_overrides(|name| (name == MQTT_PORT_ENV).then(|| "not-a-port".to_string()))
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnv { name: MQTT_PORT_ENV, .. }));
}

#[test]
fn test_missing_file_is_an_error() {
    let err = Config::load("/nonexistent/dashboard.toml").err().unwrap();
    assert!(matches!(err, ConfigError::File { .. }));
}
