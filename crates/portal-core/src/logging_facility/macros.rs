//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use portal_core::log_op_start;
/// log_op_start!("create_client");
/// log_op_start!("create_client", client_id = "c123");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = portal_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = portal_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use portal_core::log_op_end;
/// log_op_end!("create_client", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = portal_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = portal_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// # Example
///
/// ```ignore
/// # use portal_core::{log_op_error, errors::PortalError};
/// let err = PortalError::ClientNotFound { client_id: "c1".to_string() };
/// log_op_error!("read_client", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::OpError;
        let op_err: OpError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = portal_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?op_err.kind(),
            err_code = op_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::OpError;
        let op_err: OpError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = portal_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?op_err.kind(),
            err_code = op_err.code(),
            $($field)*
        );
    }};
}
