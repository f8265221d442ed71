//! Caller identity.
//!
//! Identity is taken from the `X-User-Id` request header with no verification:
//! any client can claim any user. This is a trust model, not a security
//! boundary. Resolution sits behind [`IdentityResolver`] so a real
//! authentication layer can replace it without touching the handlers.

use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;

use budget_buddy_core::{Scope, UserId};

use crate::config::IdentityMode;
use crate::error::ApiError;
use crate::state::AppState;

/// Header carrying the caller's user ID.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The identity a request acts as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    /// Owner recorded on anything the caller creates.
    pub user_id: UserId,
    /// Records the caller may read or delete.
    pub scope: Scope,
}

impl Caller {
    /// Key of the settings record this caller reads and writes.
    ///
    /// Unscoped callers share the anonymous owner's record.
    #[must_use]
    pub fn settings_owner(&self) -> UserId {
        match &self.scope {
            Scope::User(user_id) => user_id.clone(),
            Scope::Global => UserId::anonymous(),
        }
    }
}

/// Derives a [`Caller`] from request headers.
pub trait IdentityResolver: Send + Sync {
    /// Resolve the caller for a request.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::MissingIdentity` if the request carries no usable
    /// identity and the resolver requires one.
    fn resolve(&self, headers: &HeaderMap) -> Result<Caller, ApiError>;
}

/// Requires `X-User-Id` and scopes every query to that user.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictIdentity;

impl IdentityResolver for StrictIdentity {
    fn resolve(&self, headers: &HeaderMap) -> Result<Caller, ApiError> {
        let user_id = header_user_id(headers).ok_or_else(|| {
            tracing::warn!("Rejected request without X-User-Id");
            ApiError::MissingIdentity
        })?;

        Ok(Caller {
            scope: Scope::User(user_id.clone()),
            user_id,
        })
    }
}

/// Accepts requests with or without `X-User-Id`; every query is global.
///
/// Deprecated: kept for deployments that predate per-user scoping.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyIdentity;

impl IdentityResolver for LegacyIdentity {
    fn resolve(&self, headers: &HeaderMap) -> Result<Caller, ApiError> {
        Ok(Caller {
            user_id: header_user_id(headers).unwrap_or_else(UserId::anonymous),
            scope: Scope::Global,
        })
    }
}

/// Build the resolver for a configured identity mode.
#[must_use]
pub fn resolver_for(mode: IdentityMode) -> Arc<dyn IdentityResolver> {
    match mode {
        IdentityMode::Strict => Arc::new(StrictIdentity),
        IdentityMode::Legacy => {
            tracing::warn!(
                "Legacy identity mode enabled - X-User-Id is optional and all data is shared"
            );
            Arc::new(LegacyIdentity)
        }
    }
}

/// Read a non-empty user ID from the request headers.
///
/// Header bytes are decoded as ISO-8859-1, so non-ASCII identities are kept
/// rather than rejected.
fn header_user_id(headers: &HeaderMap) -> Option<UserId> {
    let value = headers.get(USER_ID_HEADER)?;
    let decoded: String = value.as_bytes().iter().copied().map(char::from).collect();
    decoded.parse().ok()
}

#[async_trait]
impl FromRequestParts<Arc<AppState>> for Caller {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        state.identity.resolve(&parts.headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(user_id: Option<&'static str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(id) = user_id {
            headers.insert(USER_ID_HEADER, HeaderValue::from_static(id));
        }
        headers
    }

    #[test]
    fn strict_scopes_to_header_user() {
        let caller = StrictIdentity.resolve(&headers(Some("u1"))).unwrap();
        let u1: UserId = "u1".parse().unwrap();
        assert_eq!(caller.user_id, u1);
        assert_eq!(caller.scope, Scope::User(u1));
    }

    #[test]
    fn strict_rejects_missing_or_empty_header() {
        assert!(matches!(
            StrictIdentity.resolve(&headers(None)),
            Err(ApiError::MissingIdentity)
        ));
        assert!(matches!(
            StrictIdentity.resolve(&headers(Some(""))),
            Err(ApiError::MissingIdentity)
        ));
    }

    #[test]
    fn strict_accepts_latin1_header() {
        let mut map = HeaderMap::new();
        map.insert(
            USER_ID_HEADER,
            HeaderValue::from_bytes(b"jos\xe9").unwrap(),
        );
        let caller = StrictIdentity.resolve(&map).unwrap();
        assert_eq!(caller.user_id.as_str(), "jos\u{e9}");
    }

    #[test]
    fn legacy_is_always_global() {
        let anonymous = LegacyIdentity.resolve(&headers(None)).unwrap();
        assert!(anonymous.user_id.is_anonymous());
        assert_eq!(anonymous.scope, Scope::Global);

        let named = LegacyIdentity.resolve(&headers(Some("u1"))).unwrap();
        assert_eq!(named.user_id.as_str(), "u1");
        assert_eq!(named.scope, Scope::Global);
    }
}
