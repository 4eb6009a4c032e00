pub mod auth;
pub mod error;
pub mod extract;
pub mod permission;

pub use auth::{require_auth, AppState, AuthenticatedAdmin};
pub use error::{ApiError, ApiResult};
pub use extract::{ApiJson, ApiPath, ApiQuery};
pub use permission::require_permission;
