use vda5050_dashboard::{
    codec::{self, InboundMessage},
    protocol::vda_2_0_0::{
        vda5050_2_0_0_ack::AckRequest,
        vda5050_2_0_0_error::{ErrorLevel, ErrorType},
        vda5050_2_0_0_factsheet::FactsheetMessage,
        vda5050_2_0_0_state::OperatingMode,
    },
    router::{Route, TopicTable},
};

#[test]
fn test_route_is_exact_match() {
    let topics = TopicTable::new("vda5050");

    assert_eq!(topics.route("vda5050/state"), Some(Route::State));
    assert_eq!(topics.route("vda5050/visualization"), Some(Route::Visualization));
    assert_eq!(topics.route("vda5050/factsheet"), Some(Route::Factsheet));
    assert_eq!(topics.route("vda5050/error"), Some(Route::Error));

    // Outbound-only topics are not routed.
    assert_eq!(topics.route("vda5050/order"), None);
    assert_eq!(topics.route("vda5050/ack"), None);
    assert_eq!(topics.route("vda5050/instantActions"), None);

    assert_eq!(topics.route("vda5050/+"), None);
    assert_eq!(topics.route("vda5050/#"), None);
    assert_eq!(topics.route("VDA5050/state"), None);
    assert_eq!(topics.route("state"), None);
}

#[test]
fn test_subscription_order() {
    let topics = TopicTable::new("uagv");
    assert_eq!(
        topics.subscriptions(),
        vec!["uagv/visualization", "uagv/error", "uagv/factsheet", "uagv/state"]
    );
    assert_eq!(topics.order, "uagv/order");
    assert_eq!(topics.instant_actions, "uagv/instantActions");
    assert_eq!(topics.ack, "uagv/ack");
}

#[test]
fn test_envelope_is_not_validated() {
    let payload = br#"{"headerId": 0, "version": "99.0.0", "operatingMode": "MANUAL"}"#;
    let decoded = codec::decode(Route::State, "vda5050/state", payload).unwrap();

    match decoded {
        InboundMessage::State(state) => {
            assert_eq!(state.header.header_id, 0);
            assert_eq!(state.header.version, "99.0.0");
            assert_eq!(state.operating_mode, OperatingMode::Manual);
        }
        other => panic!("expected state, got {:?}", other),
    }
}

#[test]
fn test_action_states_round_trip_untouched() {
    let payload = br#"{"headerId":1,"operatingMode":"AUTOMATIC","actionStates":[{"zId":"b","actionStatus":"RUNNING","extra":[1,2,{"k":null}]}]}"#;
    let InboundMessage::State(state) = codec::decode(Route::State, "vda5050/state", payload).unwrap() else {
        panic!("expected state");
    };

    let encoded: serde_json::Value = serde_json::from_slice(&codec::encode(&state).unwrap()).unwrap();
    let original: serde_json::Value = serde_json::from_slice(payload).unwrap();
    assert_eq!(encoded["actionStates"], original["actionStates"]);
    assert!(encoded.get("paused").is_none());
}

#[test]
fn test_decode_error_keeps_topic_and_payload() {
    let err = codec::decode(Route::Error, "vda5050/error", b"{oops").unwrap_err();
    assert_eq!(err.topic, "vda5050/error");
    assert_eq!(err.payload, "{oops");
    assert!(err.to_string().starts_with("failed to parse message on vda5050/error"));
}

#[test]
fn test_non_object_payloads_are_rejected() {
    assert!(codec::decode(Route::State, "vda5050/state", b"42").is_err());
    assert!(codec::decode(Route::State, "vda5050/state", b"[1, 2]").is_err());
    assert!(codec::decode(Route::Visualization, "vda5050/visualization", b"\"text\"").is_err());
}

#[test]
fn test_nonstandard_operating_mode_is_kept_verbatim() {
    let payload = br#"{"headerId": 1, "operatingMode": "MOVING", "driving": true}"#;
    let InboundMessage::State(state) = codec::decode(Route::State, "vda5050/state", payload).unwrap() else {
        panic!("expected state");
    };
    assert_eq!(state.operating_mode, OperatingMode::Other("MOVING".to_string()));
    assert!(state.driving);

    let encoded: serde_json::Value = serde_json::from_slice(&codec::encode(&state).unwrap()).unwrap();
    assert_eq!(encoded["operatingMode"], "MOVING");
}

#[test]
fn test_null_and_mistyped_fields_take_defaults() {
    let payload = br#"{
        "headerId": 2,
        "timestamp": null,
        "orderId": null,
        "orderUpdateId": "one",
        "driving": "yes",
        "position": {"x": 3.5, "y": null},
        "batteryState": null,
        "operatingMode": 7,
        "actionStates": {}
    }"#;
    let InboundMessage::State(state) = codec::decode(Route::State, "vda5050/state", payload).unwrap() else {
        panic!("expected state");
    };

    assert_eq!(state.header.header_id, 2);
    assert_eq!(state.header.timestamp, "");
    assert_eq!(state.order_id, "");
    assert_eq!(state.order_update_id, 0);
    assert!(!state.driving);
    assert_eq!(state.position.x, 3.5);
    assert_eq!(state.position.y, 0.0);
    assert_eq!(state.battery_state.battery_charge, 0.0);
    assert_eq!(state.operating_mode, OperatingMode::Automatic);
    assert!(state.action_states.is_empty());
}

#[test]
fn test_nonstandard_error_level_is_kept() {
    let payload = br#"{"errorType": "NETWORK", "errorLevel": "CRITICAL", "errorDescription": null, "errorCode": 9}"#;
    let InboundMessage::Error(error) = codec::decode(Route::Error, "vda5050/error", payload).unwrap() else {
        panic!("expected error");
    };
    assert_eq!(error.error_type, ErrorType::Other("NETWORK".to_string()));
    assert_eq!(error.error_level, ErrorLevel::Other("CRITICAL".to_string()));
    assert_eq!(error.error_level.to_string(), "CRITICAL");
    assert_eq!(error.error_description, "");
    assert_eq!(error.error_code, 9);
}

#[test]
fn test_factsheet_topic_distinguishes_requests() {
    let request = br#"{"requestId": 1714557600000, "timestamp": "2024-05-01T10:00:00.000Z"}"#;
    let reply = br#"{"model": "Tugger-X", "capabilities": ["movement"]}"#;

    match codec::decode(Route::Factsheet, "vda5050/factsheet", request).unwrap() {
        InboundMessage::Factsheet(FactsheetMessage::Request(request)) => {
            assert_eq!(request.request_id, 1714557600000)
        }
        other => panic!("expected request, got {:?}", other),
    }
    match codec::decode(Route::Factsheet, "vda5050/factsheet", reply).unwrap() {
        InboundMessage::Factsheet(FactsheetMessage::Reply(factsheet)) => {
            assert_eq!(factsheet.model, "Tugger-X");
            assert_eq!(factsheet.max_speed, 0.0);
        }
        other => panic!("expected reply, got {:?}", other),
    }
}

#[test]
fn test_factsheet_reply_echoing_request_id_is_a_reply() {
    let reply = br#"{
        "requestId": 1714557600000,
        "timestamp": "2024-05-01T10:00:00.500Z",
        "model": "Tugger-X",
        "protocol": "VDA5050 2.0",
        "maxSpeed": 1.5
    }"#;

    match codec::decode(Route::Factsheet, "vda5050/factsheet", reply).unwrap() {
        InboundMessage::Factsheet(FactsheetMessage::Reply(factsheet)) => {
            assert_eq!(factsheet.model, "Tugger-X");
            assert_eq!(factsheet.max_speed, 1.5);
            assert_eq!(factsheet.header.timestamp, "2024-05-01T10:00:00.500Z");
        }
        other => panic!("expected reply, got {:?}", other),
    }
}

#[test]
fn test_ack_wire_format() {
    let ack = AckRequest {
        state_id: 12,
        timestamp: "2024-05-01T10:00:00.000Z".to_string(),
    };
    let encoded = String::from_utf8(codec::encode(&ack).unwrap()).unwrap();
    assert_eq!(encoded, r#"{"stateId":12,"timestamp":"2024-05-01T10:00:00.000Z"}"#);
}
