use std::fmt::Display;

use crate::claim_types;
use crate::codec::{decode_permissions, encode_permissions};
use crate::types::{Claim, Principal};

/// Permission queries over a principal's claims
impl Principal {
    /// Check whether this principal holds a specific permission.
    ///
    /// A principal carrying the [`claim_types::ALL_PERMISSIONS`] marker
    /// passes every check. Permission names are compared by exact string
    /// equality; no trimming or case folding.
    pub fn has_permission(&self, permission: impl Display) -> bool {
        self.has_permission_checked(permission, true)
    }

    /// Like [`has_permission`](Self::has_permission), with the
    /// all-permissions shortcut made explicit so callers can ignore the
    /// marker claim.
    pub fn has_permission_checked(
        &self,
        permission: impl Display,
        check_all_permissions: bool,
    ) -> bool {
        if check_all_permissions && self.has_claim(claim_types::ALL_PERMISSIONS) {
            return true;
        }
        let Some(claim) = self.find_first(claim_types::ENDPOINT_PERMISSIONS) else {
            return false;
        };
        let permissions = decode_permissions(&claim.value);
        if permissions.is_empty() {
            return false;
        }
        let permission = permission.to_string();
        permissions.iter().any(|held| *held == permission)
    }

    /// All endpoint permissions this principal carries (empty if the claim
    /// is absent).
    pub fn permissions(&self) -> Vec<String> {
        match self.find_first(claim_types::ENDPOINT_PERMISSIONS) {
            Some(claim) => decode_permissions(&claim.value),
            None => Vec::new(),
        }
    }
}

/// Claim-building helper for identity construction time.
pub trait ClaimsExt {
    /// Encode `permissions` and append one endpoint-permissions claim.
    ///
    /// Always appends: existing claims of the same type are left in place,
    /// so repeated calls produce duplicate claim types. Only the first is
    /// consulted by the permission queries.
    fn add_permissions<I, P>(&mut self, permissions: I)
    where
        I: IntoIterator<Item = P>,
        P: Display;
}

impl ClaimsExt for Vec<Claim> {
    fn add_permissions<I, P>(&mut self, permissions: I)
    where
        I: IntoIterator<Item = P>,
        P: Display,
    {
        let value = encode_permissions(permissions);
        self.push(Claim::new(claim_types::ENDPOINT_PERMISSIONS, value));
    }
}
