//! Header-based identity extraction
//!
//! Token verification is delegated to the external IdP proxy, which sets
//! `x-user-id` and `x-user-role` on every forwarded request. This layer
//! trusts those headers and enforces role gates only.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use portal_core::model::Role;

use crate::error::ApiError;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";

/// The calling member, as asserted by the IdP proxy
#[derive(Debug, Clone)]
pub struct Identity {
    pub member_id: String,
    pub role: Role,
}

impl Identity {
    /// Gate for admin-or-teamlead surfaces
    pub fn require_manage(&self, action: &str) -> Result<(), ApiError> {
        if self.role.can_manage() {
            Ok(())
        } else {
            Err(ApiError::forbidden(&format!(
                "role '{}' cannot perform {}",
                self.role, action
            )))
        }
    }

    /// Gate for admin-only surfaces
    pub fn require_admin(&self, action: &str) -> Result<(), ApiError> {
        if self.role == Role::Admin {
            Ok(())
        } else {
            Err(ApiError::forbidden(&format!(
                "role '{}' cannot perform {}",
                self.role, action
            )))
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let member_id = header_value(parts, USER_ID_HEADER)?;
        let role_str = header_value(parts, USER_ROLE_HEADER)?;

        let role: Role = role_str
            .parse()
            .map_err(|_| ApiError::unauthorised(&format!("unknown role: {}", role_str)))?;

        Ok(Identity { member_id, role })
    }
}

fn header_value(parts: &Parts, name: &str) -> Result<String, ApiError> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ApiError::unauthorised(&format!("missing {} header", name)))
}
