//! Caller identity, set by the upstream authentication layer as headers.

use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::error::ApiError;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const COMPANY_ID_HEADER: &str = "x-company-id";

/// Authenticated caller, scoped to a tenant. Extraction fails closed with
/// 401 when either header is missing or malformed.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: Uuid,
    pub company_id: Uuid,
}

fn header_uuid(parts: &Parts, name: &str) -> Result<Uuid, ApiError> {
    parts
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| Uuid::parse_str(value).ok())
        .ok_or(ApiError::AuthenticationRequired)
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = header_uuid(parts, USER_ID_HEADER)?;
        let company_id = header_uuid(parts, COMPANY_ID_HEADER)?;
        Ok(Self {
            user_id,
            company_id,
        })
    }
}
