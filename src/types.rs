//! Core claim and principal types shared by the gates and policy registry.

use serde::{Deserialize, Serialize};

/// A single (type, value) pair attached to a principal.
///
/// The claim types this crate reads are listed in
/// [`claim_types`](crate::claim_types); any other claims on a principal are
/// carried but ignored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Identifier naming what this claim asserts.
    pub claim_type: String,
    /// Claim payload. Empty for marker claims.
    pub value: String,
}

impl Claim {
    pub fn new(claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            claim_type: claim_type.into(),
            value: value.into(),
        }
    }
}

/// An authenticated-or-not identity carrying zero or more claims.
///
/// Authentication middleware builds a `Principal` while validating the
/// caller's credentials and inserts it into the request extensions; the
/// gates in this crate read it from there and never mutate it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Principal {
    authenticated: bool,
    claims: Vec<Claim>,
}

impl Principal {
    /// An unauthenticated principal with no claims.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// An authenticated principal carrying the given claims.
    pub fn authenticated(claims: Vec<Claim>) -> Self {
        Self {
            authenticated: true,
            claims,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    /// First claim of the given type, if any.
    pub fn find_first(&self, claim_type: &str) -> Option<&Claim> {
        self.claims
            .iter()
            .find(|claim| claim.claim_type == claim_type)
    }

    pub fn has_claim(&self, claim_type: &str) -> bool {
        self.find_first(claim_type).is_some()
    }
}
