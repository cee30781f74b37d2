//! Claim type identifiers used by every gate in this crate.
//!
//! The values are literal namespaced constants so tokens issued by one
//! process revision keep working across restarts and deployments.

/// Marker claim granting every permission.
///
/// Once a principal carries this claim, both gates and the permission query
/// helpers allow everything. The claim value is ignored and may be empty.
pub const ALL_PERMISSIONS: &str = "permex::all-permissions";

/// Claim carrying the principal's endpoint permissions.
///
/// The value is a permission list encoded with
/// [`encode_permissions`](crate::codec::encode_permissions): permission
/// identifiers separated by `,`.
pub const ENDPOINT_PERMISSIONS: &str = "permex::endpoint-permissions";

/// Claim carrying the HTTP methods the principal may use.
///
/// The value is a `,`-separated list of method strings (`GET`, `POST`, ...)
/// consumed by [`HttpMethodGate`](crate::auth::HttpMethodGate).
pub const HTTP_METHOD_PERMISSIONS: &str = "permex::http-method-permissions";
