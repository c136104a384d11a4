//! Logging facility tests
//!
//! Uses the test capture layer to assert the canonical op macros emit
//! start/end/error events with the expected fields. The capture is shared
//! across the test binary, so every assertion is scoped by op name.

use portal_core::logging_facility::init_test_capture;
use portal_core::{log_op_end, log_op_error, log_op_start, PortalError};
use portal_core_types::schema;

#[test]
fn test_op_macros_emit_canonical_events() {
    let capture = init_test_capture();

    log_op_start!("create_client");
    log_op_end!("create_client", duration_ms = 3);

    capture.require("create_client", schema::EVENT_START);
    let end = capture.require("create_client", schema::EVENT_END);
    assert_eq!(end.field("duration_ms"), Some("3"));

    assert_eq!(capture.count("create_client", schema::EVENT_START), 1);
}

#[test]
fn test_op_error_macro_carries_code_and_kind() {
    let capture = init_test_capture();

    let err = PortalError::ClientNotFound {
        client_id: "client-1".to_string(),
    };
    log_op_error!("read_client", err, duration_ms = 1);

    let event = capture.require("read_client", schema::EVENT_END_ERROR);
    assert_eq!(event.field("err_code"), Some("ERR_NOT_FOUND"));
    assert!(event.field("err_kind").is_some());
}

#[test]
fn test_extra_fields_pass_through() {
    let capture = init_test_capture();

    log_op_start!("provision_project", client_id = "client-9");

    let event = capture.require("provision_project", schema::EVENT_START);
    assert_eq!(event.field(schema::FIELD_CLIENT_ID), Some("client-9"));
}
