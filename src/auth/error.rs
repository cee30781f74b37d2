use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Request-time authorization outcomes.
///
/// These resolve to plain status responses via [`IntoResponse`]; they are
/// never propagated as service errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthorizationError {
    /// The request carries no authenticated principal.
    #[error("Authentication required")]
    Unauthenticated,

    /// The principal lacks the named endpoint permission.
    #[error("Missing permission: {0}")]
    MissingPermission(String),

    /// The principal may not use the request's HTTP method.
    #[error("HTTP method not permitted: {0}")]
    MethodNotPermitted(String),
}

impl IntoResponse for AuthorizationError {
    fn into_response(self) -> Response {
        match self {
            AuthorizationError::Unauthenticated => {
                (StatusCode::UNAUTHORIZED, self.to_string()).into_response()
            }
            AuthorizationError::MissingPermission(_)
            | AuthorizationError::MethodNotPermitted(_) => {
                (StatusCode::FORBIDDEN, self.to_string()).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthenticated_error() {
        let err = AuthorizationError::Unauthenticated;
        assert_eq!(err.to_string(), "Authentication required");
    }

    #[test]
    fn test_missing_permission_error() {
        let err = AuthorizationError::MissingPermission("inventory.read".to_string());
        assert!(err.to_string().contains("inventory.read"));
    }

    #[test]
    fn test_method_not_permitted_error() {
        let err = AuthorizationError::MethodNotPermitted("DELETE".to_string());
        assert!(err.to_string().contains("DELETE"));
    }

    #[test]
    fn test_unauthorized_status() {
        let response = AuthorizationError::Unauthenticated.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_forbidden_status_permission() {
        let response =
            AuthorizationError::MissingPermission("read".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_forbidden_status_method() {
        let response =
            AuthorizationError::MethodNotPermitted("DELETE".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
