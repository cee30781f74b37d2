use axum::extract::Request;
use axum::response::{IntoResponse, Response};
use std::fmt::Display;
use std::sync::Arc;
use tower::Layer;
use tower::Service;

use super::error::AuthorizationError;
use crate::claim_types;
use crate::codec::decode_permissions;
use crate::error::ExtenderError;
use crate::types::Principal;

/// Route marker that lets a request bypass [`RequirePermission`].
///
/// Insert it into the request extensions of the routes that should stay
/// open, e.g. with `axum::Extension(AllowAnonymous)` layered outside the
/// gate so the extension is present by the time the gate runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAnonymous;

/// Middleware layer gating requests by HTTP-method permissions.
///
/// Reads the [`Principal`] from the request extensions. Requests without an
/// authenticated principal pass through untouched; authorization for those
/// is someone else's job. Authenticated principals must either carry the
/// [`claim_types::ALL_PERMISSIONS`] marker or list the request's method in
/// their [`claim_types::HTTP_METHOD_PERMISSIONS`] claim, or the request is
/// answered with 403 without reaching the inner service.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpMethodGate;

impl HttpMethodGate {
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for HttpMethodGate {
    type Service = HttpMethodGateMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        HttpMethodGateMiddleware { inner }
    }
}

#[derive(Clone)]
pub struct HttpMethodGateMiddleware<S> {
    inner: S,
}

fn check_method(principal: &Principal, method: &str) -> Result<(), AuthorizationError> {
    if principal.has_claim(claim_types::ALL_PERMISSIONS) {
        return Ok(());
    }
    let allowed = principal
        .find_first(claim_types::HTTP_METHOD_PERMISSIONS)
        .map(|claim| decode_permissions(&claim.value))
        .unwrap_or_default();
    if allowed.iter().any(|permitted| permitted == method) {
        Ok(())
    } else {
        Err(AuthorizationError::MethodNotPermitted(method.to_string()))
    }
}

impl<S> Service<Request> for HttpMethodGateMiddleware<S>
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request) -> Self::Future {
        let mut inner = self.inner.clone();

        Box::pin(async move {
            let denied = match request.extensions().get::<Principal>() {
                Some(principal) if principal.is_authenticated() => {
                    check_method(principal, request.method().as_str()).err()
                }
                // No principal or unauthenticated: pass through unchanged.
                _ => None,
            };

            if let Some(error) = denied {
                tracing::debug!(method = %request.method(), "request denied by http method gate");
                return Ok(error.into_response());
            }

            inner.call(request).await
        })
    }
}

/// Per-route middleware layer requiring a named endpoint permission.
///
/// The required permission is fixed when the layer is built, so each route
/// carries its requirement declaratively:
///
/// ```ignore
/// use axum::{routing::get, Router};
/// use permex::RequirePermission;
///
/// let app: Router = Router::new()
///     .route("/inventory", get(list_inventory))
///     .route_layer(RequirePermission::new("inventory.read"));
/// ```
///
/// Unauthenticated requests are answered with 401, authenticated requests
/// without the permission with 403. Routes carrying the [`AllowAnonymous`]
/// extension bypass the gate entirely.
#[derive(Clone)]
pub struct RequirePermission {
    permission: Arc<String>,
}

impl RequirePermission {
    /// Build a layer requiring `permission`.
    ///
    /// # Panics
    ///
    /// Panics if `permission` renders to an empty string. That is a startup
    /// configuration mistake; use [`try_new`](Self::try_new) to handle it as
    /// a `Result` instead.
    pub fn new(permission: impl Display) -> Self {
        match Self::try_new(permission) {
            Ok(layer) => layer,
            Err(error) => panic!("invalid RequirePermission layer: {error}"),
        }
    }

    /// Fallible form of [`new`](Self::new).
    pub fn try_new(permission: impl Display) -> Result<Self, ExtenderError> {
        let name = permission.to_string();
        if name.is_empty() {
            return Err(ExtenderError::EmptyPermissionName);
        }
        Ok(Self {
            permission: Arc::new(name),
        })
    }

    /// The permission this layer requires.
    pub fn permission(&self) -> &str {
        &self.permission
    }
}

impl<S> Layer<S> for RequirePermission {
    type Service = RequirePermissionMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequirePermissionMiddleware {
            inner,
            permission: self.permission.clone(),
        }
    }
}

#[derive(Clone)]
pub struct RequirePermissionMiddleware<S> {
    inner: S,
    permission: Arc<String>,
}

impl<S> Service<Request> for RequirePermissionMiddleware<S>
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request) -> Self::Future {
        let mut inner = self.inner.clone();
        let permission = self.permission.clone();

        Box::pin(async move {
            if request.extensions().get::<AllowAnonymous>().is_some() {
                return inner.call(request).await;
            }

            let denied = match request.extensions().get::<Principal>() {
                Some(principal) if principal.is_authenticated() => {
                    if principal.has_permission(permission.as_str()) {
                        None
                    } else {
                        Some(AuthorizationError::MissingPermission(
                            permission.to_string(),
                        ))
                    }
                }
                _ => Some(AuthorizationError::Unauthenticated),
            };

            if let Some(error) = denied {
                tracing::debug!(
                    permission = permission.as_str(),
                    "request denied by permission gate"
                );
                return Ok(error.into_response());
            }

            inner.call(request).await
        })
    }
}
