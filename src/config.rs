use config_file::FromConfigFile;
use serde::Deserialize;

use crate::error::ConfigError;

/// Environment variable naming an alternative configuration file.
pub const CONFIG_PATH_ENV: &str = "VDA_DASHBOARD_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

pub const MQTT_HOST_ENV: &str = "MQTT_HOST";
pub const MQTT_PORT_ENV: &str = "MQTT_PORT";
pub const MQTT_USERNAME_ENV: &str = "MQTT_USERNAME";
pub const MQTT_PASSWORD_ENV: &str = "MQTT_PASSWORD";

/// Loads the configuration file and applies `MQTT_*` environment overrides.
pub fn get_config() -> Result<Config, ConfigError> {
    let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let mut config = Config::load(&path)?;
    config.apply_env_overrides(|name| std::env::var(name).ok())?;
    Ok(config)
}

#[derive(Deserialize, Clone)]
pub struct MqttBrokerConfig {
    pub host: String,
    pub port: u16,
    /// Prefix of every topic, e.g. `vda5050` for `vda5050/state`.
    #[serde(default = "default_vda_interface")]
    pub vda_interface: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    /// Requires the `tls` feature; ignored otherwise.
    #[serde(default)]
    pub use_tls: bool,
    #[serde(default = "default_keep_alive_secs")]
    pub keep_alive_secs: u64,
    /// Capacity of the inbound message stream.
    #[serde(default = "default_inbound_buffer")]
    pub inbound_buffer: usize,
}

impl MqttBrokerConfig {
    pub fn server_uri(&self) -> String {
        let scheme = if self.use_tls && cfg!(feature = "tls") {
            "ssl"
        } else {
            "tcp"
        };
        format!("{}://{}:{}", scheme, self.host, self.port)
    }
}

fn default_vda_interface() -> String {
    "vda5050".to_string()
}

fn default_keep_alive_secs() -> u64 {
    30
}

fn default_inbound_buffer() -> usize {
    25
}

/// Envelope identity stamped on every outbound message.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct VehicleConfig {
    pub manufacturer: String,
    pub serial_number: String,
    pub vda_full_version: String,
}

#[derive(Deserialize, Clone)]
pub struct Config {
    pub mqtt_broker: MqttBrokerConfig,
    pub vehicle: VehicleConfig,
}

impl Config {
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        Config::from_config_file(path).map_err(|source| ConfigError::File {
            path: path.to_string(),
            source,
        })
    }

    /// Overrides broker host, port and credentials from `lookup`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(MQTT_HOST_ENV) {
            self.mqtt_broker.host = host;
        }
        if let Some(port) = lookup(MQTT_PORT_ENV) {
            self.mqtt_broker.port = port.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                name: MQTT_PORT_ENV,
                value: port.clone(),
            })?;
        }
        if let Some(username) = lookup(MQTT_USERNAME_ENV) {
            self.mqtt_broker.username = Some(username);
        }
        if let Some(password) = lookup(MQTT_PASSWORD_ENV) {
            self.mqtt_broker.password = Some(password);
        }
        Ok(())
    }
}
