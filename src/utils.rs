use crate::config::VehicleConfig;
use crate::protocol::vda5050_common::{Header, HeaderId};

pub fn get_timestamp() -> String {
    //YYYY-MM-DDTHH:mm:ss.ssZ
    let now = chrono::Utc::now();
    now.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

pub fn unix_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

pub fn generate_order_id() -> String {
    format!("ORDER-{}", unix_millis())
}

pub fn generate_action_id() -> String {
    format!("ACTION-{}", unix_millis())
}

pub fn generate_request_id() -> i64 {
    unix_millis()
}

/// Header for an outbound message, stamped with the configured identity.
pub fn create_header(vehicle: &VehicleConfig, header_id: HeaderId) -> Header {
    Header {
        header_id,
        timestamp: get_timestamp(),
        version: String::from(&vehicle.vda_full_version),
        manufacturer: String::from(&vehicle.manufacturer),
        serial_number: String::from(&vehicle.serial_number),
    }
}
