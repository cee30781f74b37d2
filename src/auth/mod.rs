//! Request gating by claims-based permissions
//!
//! This module provides the two tower layers that enforce permissions in an
//! Axum application, plus the permission query and claim-building helpers
//! they are built on.
//!
//! # Features
//!
//! - [`Principal`] permission queries (`has_permission`, `permissions`)
//! - [`ClaimsExt`] helper for attaching encoded permission claims
//! - [`HttpMethodGate`] middleware layer gating by HTTP-method permissions
//! - [`RequirePermission`] per-route layer gating by a named permission
//!
//! # Example
//!
//! ```ignore
//! use axum::{routing::get, Router};
//! use permex::{HttpMethodGate, RequirePermission};
//!
//! let app: Router = Router::new()
//!     .route("/inventory", get(list_inventory))
//!     .route_layer(RequirePermission::new("inventory.read"))
//!     .layer(HttpMethodGate::new());
//! ```

pub mod claims;
pub mod error;
pub mod middleware;

pub use claims::ClaimsExt;
pub use error::AuthorizationError;
pub use middleware::{AllowAnonymous, HttpMethodGate, RequirePermission};

pub use crate::types::Principal;
