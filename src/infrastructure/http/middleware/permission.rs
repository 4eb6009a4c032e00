use crate::domain::entities::Permission;
use crate::infrastructure::http::middleware::auth::AuthenticatedAdmin;
use crate::infrastructure::http::middleware::error::ApiError;
use axum::{extract::Request, middleware::Next, response::Response};
use std::future::Future;
use std::pin::Pin;

type PermissionFuture = Pin<Box<dyn Future<Output = Result<Response, ApiError>> + Send>>;

/// Route layer rejecting admins whose token lacks `permission`. Must sit
/// inside [`require_auth`](super::auth::require_auth).
pub fn require_permission(
    permission: Permission,
) -> impl Fn(Request, Next) -> PermissionFuture + Clone + Send + Sync + 'static {
    move |request: Request, next: Next| {
        Box::pin(async move {
            let admin = request
                .extensions()
                .get::<AuthenticatedAdmin>()
                .cloned()
                .ok_or_else(|| ApiError::Unauthorized("Access token required".to_string()))?;

            if !admin.has_permission(permission) {
                tracing::warn!(
                    "Permission denied: admin {} lacks '{}'",
                    admin.username(),
                    permission.as_str()
                );
                return Err(ApiError::Forbidden(format!(
                    "Requires '{}' permission",
                    permission.as_str()
                )));
            }

            Ok(next.run(request).await)
        })
    }
}
