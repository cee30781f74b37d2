//! Axum integration helpers
//!
//! This module provides a `FromRequestParts` extractor for the request's
//! [`Principal`], so handlers can take the current identity as an argument
//! instead of digging through the request extensions.
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::{routing::get, Router};
//! use permex::CurrentPrincipal;
//!
//! async fn whoami(principal: CurrentPrincipal) -> String {
//!     principal.permissions().join(", ")
//! }
//!
//! let app = Router::new().route("/whoami", get(whoami));
//! ```

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use std::ops::Deref;

use crate::types::Principal;

/// Axum extractor for the request's [`Principal`].
///
/// The principal must be inserted into the request extensions by the host's
/// authentication middleware before this extractor runs; the rejection is a
/// bare 401 when none is present.
#[derive(Debug, Clone)]
pub struct CurrentPrincipal(pub Principal);

impl Deref for CurrentPrincipal {
    type Target = Principal;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Principal> for CurrentPrincipal {
    fn from(principal: Principal) -> Self {
        Self(principal)
    }
}

impl CurrentPrincipal {
    /// Get the inner Principal
    pub fn into_inner(self) -> Principal {
        self.0
    }
}

impl<S> FromRequestParts<S> for CurrentPrincipal
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .cloned()
            .map(CurrentPrincipal)
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}
