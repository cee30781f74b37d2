//! # permex - claims-based permission extensions for axum
//!
//! A thin authorization layer over claims: permissions are plain string
//! identifiers carried inside a principal's claims as a comma-separated
//! list, and this crate supplies the pieces to encode them, query them, and
//! gate requests on them.
//!
//! ## Features
//!
//! - [`encode_permissions`]/[`decode_permissions`]: the claim value codec
//! - [`claim_types`]: the fixed claim type identifiers
//! - [`Principal::has_permission`] and friends: permission queries
//! - [`ClaimsExt::add_permissions`]: claim building at identity issuance
//! - [`HttpMethodGate`]: middleware gating requests by HTTP-method permissions
//! - [`RequirePermission`]: per-route layer requiring a named permission
//! - [`AuthorizationOptions::add_required_permission_policies`]: generated
//!   named policies, one per permission
//!
//! The host application authenticates the caller, builds a [`Principal`],
//! and inserts it into the request extensions; everything here reads from
//! that point on.

pub mod auth;
pub mod axum_integration;
pub mod claim_types;
pub mod codec;
pub mod error;
pub mod policy;
pub mod types;

pub use error::{ExtenderError, Result};

pub use crate::auth::{
    AllowAnonymous, AuthorizationError, ClaimsExt, HttpMethodGate, RequirePermission,
};
pub use crate::axum_integration::CurrentPrincipal;
pub use crate::codec::{decode_permissions, encode_permissions, PERMISSION_SEPARATOR};
pub use crate::policy::{
    AuthorizationOptions, Policy, DEFAULT_POLICY_NAME_TEMPLATE, PERMISSION_NAME_PLACEHOLDER,
};
pub use crate::types::{Claim, Principal};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_claim_roundtrip_through_principal() {
        let mut claims = Vec::new();
        claims.add_permissions(["read", "write"]);
        let principal = Principal::authenticated(claims);

        assert!(principal.has_permission("write"));
        assert_eq!(principal.permissions(), vec!["read", "write"]);
    }

    #[test]
    fn test_generated_policy_matches_query_helpers() {
        let mut options = AuthorizationOptions::new();
        options
            .add_required_permission_policies(["read"])
            .unwrap();

        let mut claims = Vec::new();
        claims.add_permissions(["read"]);
        let principal = Principal::authenticated(claims);

        let policy = options.get_policy("RequirePermission:read").unwrap();
        assert!(policy.allows(&principal));
    }
}
