//! Configuration-time error types.

/// Errors raised while wiring gates and policies at startup.
///
/// These are configuration mistakes surfaced before any request is served;
/// request-time denials are handled by
/// [`AuthorizationError`](crate::auth::AuthorizationError) instead and never
/// appear here.
#[derive(Debug, thiserror::Error)]
pub enum ExtenderError {
    /// Policy name template is missing the `{PermissionName}` placeholder.
    #[error("policy name template {0:?} does not contain the {{PermissionName}} placeholder")]
    MissingPlaceholder(String),

    /// A policy with this name has already been registered.
    #[error("a policy named {0:?} is already registered")]
    DuplicatePolicy(String),

    /// The required permission name rendered to an empty string.
    #[error("permission name must not be empty")]
    EmptyPermissionName,
}

pub type Result<T> = std::result::Result<T, ExtenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_placeholder_message_names_template() {
        let err = ExtenderError::MissingPlaceholder("Policy:read".to_string());
        assert!(err.to_string().contains("Policy:read"));
        assert!(err.to_string().contains("{PermissionName}"));
    }

    #[test]
    fn test_duplicate_policy_message_names_policy() {
        let err = ExtenderError::DuplicatePolicy("RequirePermission:read".to_string());
        assert!(err.to_string().contains("RequirePermission:read"));
    }
}
