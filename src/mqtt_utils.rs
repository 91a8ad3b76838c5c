use paho_mqtt as mqtt;
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

use crate::config::MqttBrokerConfig;

pub fn mqtt_create_opts(broker: &MqttBrokerConfig) -> mqtt::CreateOptions {
    let server_uri = broker.server_uri();
    let client_id = Uuid::new_v4().to_string();

    info!(%server_uri, %client_id, "creating MQTT client");
    mqtt::CreateOptionsBuilder::new()
        .server_uri(&server_uri)
        .client_id(&client_id)
        .persistence(mqtt::PersistenceType::None)
        .finalize()
}

pub fn mqtt_connect_opts(broker: &MqttBrokerConfig) -> mqtt::ConnectOptions {
    let mut builder = mqtt::ConnectOptionsBuilder::with_mqtt_version(mqtt::MQTT_VERSION_5);
    builder
        .clean_start(true)
        .keep_alive_interval(Duration::from_secs(broker.keep_alive_secs));

    if let Some(username) = &broker.username {
        builder.user_name(username.as_str());
    }
    if let Some(password) = &broker.password {
        builder.password(password.as_str());
    }
    apply_tls(&mut builder, broker);

    builder.finalize()
}

#[cfg(feature = "tls")]
fn apply_tls(builder: &mut mqtt::ConnectOptionsBuilder, broker: &MqttBrokerConfig) {
    if broker.use_tls {
        builder.ssl_options(mqtt::SslOptionsBuilder::new().finalize());
    }
}

#[cfg(not(feature = "tls"))]
fn apply_tls(_builder: &mut mqtt::ConnectOptionsBuilder, broker: &MqttBrokerConfig) {
    if broker.use_tls {
        tracing::warn!("use_tls is set but the crate was built without the `tls` feature; connecting over plain TCP");
    }
}

pub fn mqtt_message(topic: &str, payload: Vec<u8>, qos: i32) -> mqtt::Message {
    mqtt::Message::new(topic, payload, qos)
}

pub fn generate_vda_mqtt_topic(vda_interface: &str, name: &str) -> String {
    format!("{}/{}", vda_interface, name)
}
