//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";
pub const FIELD_TRACE_ID: &str = "trace_id";

// Entity identifiers
pub const FIELD_CLIENT_ID: &str = "client_id";
pub const FIELD_PROJECT_ID: &str = "project_id";
pub const FIELD_TASK_ID: &str = "task_id";
pub const FIELD_INVOICE_ID: &str = "invoice_id";
pub const FIELD_MEMBER_ID: &str = "member_id";
pub const FIELD_COLLECTION: &str = "collection";

// Collection sizes
pub const FIELD_COUNT: &str = "count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
