//! Startup-time generation of named permission policies.
//!
//! A host application builds one [`AuthorizationOptions`] during startup,
//! registers a policy per permission, and treats the registry as read-only
//! afterwards (wrap it in an `Arc` to share it with handlers).

use std::collections::HashMap;
use std::fmt::Display;

use crate::error::ExtenderError;
use crate::types::Principal;

/// Placeholder a policy name template must contain.
pub const PERMISSION_NAME_PLACEHOLDER: &str = "{PermissionName}";

/// Template used when none is given: `RequirePermission:{PermissionName}`.
pub const DEFAULT_POLICY_NAME_TEMPLATE: &str = "RequirePermission:{PermissionName}";

/// A named authorization rule built once at startup.
///
/// A policy passes for authenticated principals whose endpoint-permissions
/// claim contains the required permission. The all-permissions marker claim
/// is not consulted; policies name one concrete permission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    required_permission: String,
}

impl Policy {
    /// A policy requiring the given endpoint permission.
    pub fn requiring(permission: impl Display) -> Self {
        Self {
            required_permission: permission.to_string(),
        }
    }

    pub fn required_permission(&self) -> &str {
        &self.required_permission
    }

    /// Evaluate this policy against a principal.
    pub fn allows(&self, principal: &Principal) -> bool {
        principal.is_authenticated()
            && principal.has_permission_checked(&self.required_permission, false)
    }
}

/// Registry of named policies, built during startup and read-only after.
#[derive(Debug, Default)]
pub struct AuthorizationOptions {
    policies: HashMap<String, Policy>,
}

impl AuthorizationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a policy by name.
    pub fn get_policy(&self, name: &str) -> Option<&Policy> {
        self.policies.get(name)
    }

    /// Names of all registered policies, in no particular order.
    pub fn policy_names(&self) -> impl Iterator<Item = &str> {
        self.policies.keys().map(String::as_str)
    }

    /// Register a single named policy.
    ///
    /// Fails with [`ExtenderError::DuplicatePolicy`] if the name is already
    /// taken; duplicate policy names are a configuration mistake, not a
    /// request-time condition.
    pub fn add_policy(&mut self, name: impl Into<String>, policy: Policy) -> Result<(), ExtenderError> {
        let name = name.into();
        if self.policies.contains_key(&name) {
            return Err(ExtenderError::DuplicatePolicy(name));
        }
        self.policies.insert(name, policy);
        Ok(())
    }

    /// Register one policy per permission using
    /// [`DEFAULT_POLICY_NAME_TEMPLATE`].
    pub fn add_required_permission_policies<I, P>(
        &mut self,
        permissions: I,
    ) -> Result<(), ExtenderError>
    where
        I: IntoIterator<Item = P>,
        P: Display,
    {
        self.add_required_permission_policies_with_template(
            permissions,
            DEFAULT_POLICY_NAME_TEMPLATE,
        )
    }

    /// Register one policy per permission, naming each by substituting the
    /// permission into `template`.
    ///
    /// The template must contain the literal `{PermissionName}` placeholder.
    pub fn add_required_permission_policies_with_template<I, P>(
        &mut self,
        permissions: I,
        template: &str,
    ) -> Result<(), ExtenderError>
    where
        I: IntoIterator<Item = P>,
        P: Display,
    {
        if !template.contains(PERMISSION_NAME_PLACEHOLDER) {
            return Err(ExtenderError::MissingPlaceholder(template.to_string()));
        }
        for permission in permissions {
            let permission = permission.to_string();
            let name = template.replace(PERMISSION_NAME_PLACEHOLDER, &permission);
            self.add_policy(name, Policy::requiring(&permission))?;
        }
        Ok(())
    }

    /// Register policies from explicit (policy name, permission) pairs,
    /// bypassing template substitution.
    pub fn add_named_permission_policies<I, N, P>(
        &mut self,
        entries: I,
    ) -> Result<(), ExtenderError>
    where
        I: IntoIterator<Item = (N, P)>,
        N: Display,
        P: Display,
    {
        for (name, permission) in entries {
            self.add_policy(name.to_string(), Policy::requiring(permission))?;
        }
        Ok(())
    }
}
