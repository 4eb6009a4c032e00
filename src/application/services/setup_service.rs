use crate::application::services::auth::{hash_password, validate_password};
use crate::domain::entities::{AdminProfile, AdminRole, NewAdmin, Permissions, SetupRequest};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::admin_repository::AdminRepository;
use crate::domain::ports::time_service::TimeService;
use crate::infrastructure::http::middleware::error::ApiResult;
use crate::shared::utils::email_validator::validate_and_normalize_email;
use std::sync::Arc;

/// Username rules: 3-32 characters from `[A-Za-z0-9_.-]`.
pub fn validate_username(username: &str) -> DomainResult<String> {
    let trimmed = username.trim();
    let len = trimmed.chars().count();
    if !(3..=32).contains(&len) {
        return Err(DomainError::ValidationError(
            "Username must be 3-32 characters long".to_string(),
        ));
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        return Err(DomainError::ValidationError(
            "Username may only contain letters, digits, '_', '.' and '-'".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Validates identity fields and hashes the secret. This is the only path
/// from plaintext credentials to a storable admin.
pub fn prepare_admin(
    username: &str,
    email: &str,
    password: &str,
    full_name: &str,
    role: AdminRole,
    permissions: Permissions,
) -> ApiResult<NewAdmin> {
    let username = validate_username(username)?;
    let email = validate_and_normalize_email(email)?;
    validate_password(password)?;

    let full_name = full_name.trim();
    if full_name.is_empty() {
        return Err(DomainError::ValidationError("Full name is required".to_string()).into());
    }

    Ok(NewAdmin {
        username,
        email,
        full_name: full_name.to_string(),
        role,
        permissions,
        password_hash: hash_password(password)?,
    })
}

fn missing_fields(request: &SetupRequest) -> Vec<&'static str> {
    let fields = [
        ("username", &request.username),
        ("email", &request.email),
        ("password", &request.password),
        ("full_name", &request.full_name),
    ];

    fields
        .into_iter()
        .filter(|(_, value)| value.as_deref().map_or(true, |v| v.trim().is_empty()))
        .map(|(name, _)| name)
        .collect()
}

#[derive(Clone)]
pub struct SetupService {
    admin_repo: Arc<dyn AdminRepository>,
    clock: Arc<dyn TimeService>,
}

impl SetupService {
    pub fn new(admin_repo: Arc<dyn AdminRepository>, clock: Arc<dyn TimeService>) -> Self {
        Self { admin_repo, clock }
    }

    /// Creates the first administrator with full permissions. Rejected once
    /// any admin exists, whatever the input.
    pub async fn setup(&self, request: SetupRequest) -> ApiResult<AdminProfile> {
        if self.admin_repo.count_admins().await? > 0 {
            return Err(DomainError::AlreadyInitialized.into());
        }

        let missing = missing_fields(&request);
        if !missing.is_empty() {
            return Err(DomainError::ValidationError(format!(
                "Missing required fields: {}",
                missing.join(", ")
            ))
            .into());
        }

        let new_admin = prepare_admin(
            request.username.as_deref().unwrap_or_default(),
            request.email.as_deref().unwrap_or_default(),
            request.password.as_deref().unwrap_or_default(),
            request.full_name.as_deref().unwrap_or_default(),
            AdminRole::SuperAdmin,
            Permissions::full(),
        )?;

        let admin = new_admin.into_admin(self.clock.now());
        // Another setup may have won the race since the count above.
        if !self.admin_repo.create_first_admin(&admin).await? {
            return Err(DomainError::AlreadyInitialized.into());
        }

        tracing::info!("Initial admin created: {}", admin.username);
        Ok(AdminProfile::from(&admin))
    }

    /// Seeds the configured default admin when the collection is empty.
    /// Returns whether an admin was created.
    pub async fn ensure_default_admin(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> ApiResult<bool> {
        if self.admin_repo.count_admins().await? > 0 {
            return Ok(false);
        }

        let new_admin = prepare_admin(
            username,
            email,
            password,
            "System Administrator",
            AdminRole::SuperAdmin,
            Permissions::full(),
        )?;

        let created = self
            .admin_repo
            .create_first_admin(&new_admin.into_admin(self.clock.now()))
            .await?;
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_are_all_listed() {
        let request = SetupRequest {
            username: Some("alice".to_string()),
            email: None,
            password: Some("  ".to_string()),
            full_name: None,
        };

        assert_eq!(missing_fields(&request), vec!["email", "password", "full_name"]);
    }

    #[test]
    fn test_username_rules() {
        assert_eq!(validate_username("  alice_01 ").unwrap(), "alice_01");
        assert!(validate_username("al").is_err());
        assert!(validate_username("alice smith").is_err());
        assert!(validate_username(&"a".repeat(33)).is_err());
    }

    #[test]
    fn test_prepare_admin_hashes_secret() {
        let admin = prepare_admin(
            "alice",
            "Alice@Example.com",
            "secret123",
            "Alice Liddell",
            AdminRole::SuperAdmin,
            Permissions::full(),
        )
        .unwrap();

        assert_eq!(admin.email, "alice@example.com");
        assert_ne!(admin.password_hash, "secret123");
        assert!(admin.password_hash.starts_with("$argon2id$"));
    }
}
