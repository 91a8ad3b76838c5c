mod common;

use common::{create_test_config, RecordingPublisher};
use vda5050_dashboard::{
    error::{DispatchError, ValidationError},
    order_dispatcher::{parse_coordinates, OrderDispatcher, DESTINATION_NODE_ID},
};

#[test]
fn test_parse_coordinates_accepts_two_numbers() {
    assert_eq!(parse_coordinates("5, 5"), Ok((5.0, 5.0)));
    assert_eq!(parse_coordinates("-1.5,2e1"), Ok((-1.5, 20.0)));
    assert_eq!(parse_coordinates("  0 ,  -0.25 "), Ok((0.0, -0.25)));
}

#[test]
fn test_parse_coordinates_rejects_wrong_token_count() {
    assert_eq!(parse_coordinates(""), Err(ValidationError::TokenCount(1)));
    assert_eq!(parse_coordinates("5"), Err(ValidationError::TokenCount(1)));
    assert_eq!(parse_coordinates("abc"), Err(ValidationError::TokenCount(1)));
    assert_eq!(parse_coordinates("1, 2, 3"), Err(ValidationError::TokenCount(3)));
}

#[test]
fn test_parse_coordinates_rejects_non_numbers() {
    assert_eq!(parse_coordinates("5, "), Err(ValidationError::NotANumber(String::new())));
    assert_eq!(parse_coordinates("x, 1"), Err(ValidationError::NotANumber("x".to_string())));
    assert_eq!(parse_coordinates("NaN, 1"), Err(ValidationError::NotFinite("NaN".to_string())));
    assert_eq!(parse_coordinates("1, inf"), Err(ValidationError::NotFinite("inf".to_string())));
}

#[test]
fn test_submit_publishes_single_node_order() {
    let config = create_test_config();
    let mut dispatcher = OrderDispatcher::new("vda5050/order", config.vehicle.clone());
    let publisher = RecordingPublisher::new();

    let order = dispatcher.submit(&publisher, "12.5, -3").unwrap();

    assert_eq!(order.nodes.len(), 1);
    assert_eq!(order.nodes[0].node_id, DESTINATION_NODE_ID);
    assert_eq!(order.nodes[0].x, 12.5);
    assert_eq!(order.nodes[0].y, -3.0);

    let published = publisher.published.borrow();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].topic, "vda5050/order");
    assert_eq!(published[0].qos, 0);
    assert_eq!(published[0].json()["orderId"], order.order_id.as_str());
}

#[test]
fn test_submit_rejects_before_publishing() {
    let config = create_test_config();
    let mut dispatcher = OrderDispatcher::new("vda5050/order", config.vehicle.clone());
    let publisher = RecordingPublisher::new();

    let result = dispatcher.submit(&publisher, "abc");
    assert!(matches!(result, Err(DispatchError::Validation(ValidationError::TokenCount(1)))));
    assert_eq!(publisher.count(), 0);

    // A rejected submission does not consume a header id.
    let order = dispatcher.submit(&publisher, "1, 1").unwrap();
    assert_eq!(order.header.header_id, 1);
}
