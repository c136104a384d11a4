//! Request correlation identifiers
//!
//! The REST layer mints a `RequestId` per inbound call and threads it into
//! the kernel through `OpError`, so one portal request can be followed from
//! the axum handler down to the operation that failed. `TraceId` carries an
//! upstream identifier when the IdP proxy forwards one.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! correlation_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Mint a fresh identifier (UUID v7, so values sort by time)
            pub fn new() -> Self {
                Self(Uuid::now_v7().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Wrap an identifier received from outside, e.g. a header value
            pub fn from_string(s: String) -> Self {
                Self(s)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

correlation_id!(
    /// Identifier for one inbound portal request
    RequestId
);

correlation_id!(
    /// Identifier propagated across service boundaries
    TraceId
);

/// Correlation pair carried through operation boundaries
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: RequestId,
    pub trace_id: Option<TraceId>,
}

impl RequestContext {
    /// A context with a fresh RequestId and no upstream trace
    pub fn new() -> Self {
        Self {
            request_id: RequestId::new(),
            trace_id: None,
        }
    }

    /// A context around an already-minted RequestId
    pub fn with_request_id(request_id: RequestId) -> Self {
        Self {
            request_id,
            trace_id: None,
        }
    }

    /// Attach an upstream TraceId
    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minted_ids_are_distinct() {
        assert_ne!(RequestId::new(), RequestId::new());
        assert_ne!(TraceId::new(), TraceId::new());
    }

    #[test]
    fn test_forwarded_header_value_round_trips() {
        let id = RequestId::from_string("req-from-proxy-42".to_string());
        assert_eq!(id.as_str(), "req-from-proxy-42");
        assert_eq!(format!("{}", id), "req-from-proxy-42");

        let json = serde_json::to_string(&id).unwrap();
        let back: RequestId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_context_builder() {
        let ctx = RequestContext::new();
        assert!(ctx.trace_id.is_none());

        let trace_id = TraceId::new();
        let ctx = ctx.with_trace_id(trace_id.clone());
        assert_eq!(ctx.trace_id, Some(trace_id));
    }
}
