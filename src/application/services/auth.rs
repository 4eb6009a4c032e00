use crate::application::services::lockout::{self, LockoutPolicy};
use crate::application::services::token::TokenService;
use crate::domain::entities::{Admin, AdminProfile, LoginResponse};
use crate::domain::errors::{AuthError, DomainError, DomainResult};
use crate::domain::ports::admin_repository::AdminRepository;
use crate::domain::ports::time_service::TimeService;
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2, ParamsBuilder,
};
use std::sync::Arc;

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MAX_PASSWORD_LENGTH: usize = 128;

pub fn validate_password(password: &str) -> DomainResult<()> {
    let len = password.chars().count();
    if len < MIN_PASSWORD_LENGTH || len > MAX_PASSWORD_LENGTH {
        return Err(DomainError::ValidationError(format!(
            "Password must be {}-{} characters long",
            MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH
        )));
    }
    Ok(())
}

/// Hash password using Argon2id with parameters:
/// - m_cost = 19456 KiB (19 MiB)
/// - t_cost = 2 iterations
/// - p_cost = 1 thread
pub fn hash_password(password: &str) -> ApiResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    let params = ParamsBuilder::new()
        .m_cost(19456)
        .t_cost(2)
        .p_cost(1)
        .build()
        .map_err(|_| ApiError::Internal("Failed to build Argon2 params".to_string()))?;

    let argon2 = Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params);

    let hash = argon2.hash_password(password.as_bytes(), &salt)?;

    Ok(hash.to_string())
}

/// Verify password against an Argon2 PHC hash. The comparison is constant
/// time.
pub fn verify_password(password: &str, hash: &str) -> ApiResult<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|_| ApiError::Internal("Invalid password hash format".to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[derive(Clone)]
pub struct AuthService {
    admin_repo: Arc<dyn AdminRepository>,
    tokens: TokenService,
    clock: Arc<dyn TimeService>,
    policy: LockoutPolicy,
}

impl AuthService {
    pub fn new(
        admin_repo: Arc<dyn AdminRepository>,
        tokens: TokenService,
        clock: Arc<dyn TimeService>,
        policy: LockoutPolicy,
    ) -> Self {
        Self {
            admin_repo,
            tokens,
            clock,
            policy,
        }
    }

    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }

    /// Runs the credential check and lockout bookkeeping.
    ///
    /// The outer result carries store failures; the inner one is the
    /// verdict on the attempt. On success the returned admin reflects the
    /// cleared lockout state.
    pub async fn authenticate(
        &self,
        identifier: &str,
        password: &str,
    ) -> ApiResult<Result<Admin, AuthError>> {
        let Some(mut admin) = self.admin_repo.find_by_identifier(identifier.trim()).await? else {
            return Ok(Err(AuthError::NotFound));
        };

        let now = self.clock.now();

        if let Some(until) = lockout::active_lock(&admin.login, now) {
            return Ok(Err(AuthError::Locked { until }));
        }

        if !verify_password(password, &admin.password_hash)? {
            let next = lockout::register_failure(&admin.login, now, &self.policy);
            self.admin_repo.update_login_state(&admin.id, &next, now).await?;

            return Ok(Err(match next.locked_until {
                Some(until) => {
                    tracing::warn!(
                        "Admin {} locked until {} after {} failed attempts",
                        admin.username,
                        until,
                        next.failed_attempts
                    );
                    metrics::counter!("gamecafe_account_lockouts_total").increment(1);
                    AuthError::Locked { until }
                }
                None => AuthError::InvalidCredentials,
            }));
        }

        if !admin.is_active {
            return Ok(Err(AuthError::Deactivated));
        }

        let next = lockout::register_success(&admin.login, now);
        self.admin_repo.update_login_state(&admin.id, &next, now).await?;
        admin.login = next;
        admin.updated_at = now;

        Ok(Ok(admin))
    }

    pub async fn login(&self, identifier: &str, password: &str) -> ApiResult<LoginResponse> {
        if identifier.trim().is_empty() || password.is_empty() {
            return Err(ApiError::BadRequest(
                "Username/email and password are required".to_string(),
            ));
        }

        let admin = match self.authenticate(identifier, password).await? {
            Ok(admin) => admin,
            Err(rejection) => {
                tracing::warn!("Login rejected for '{}': {}", identifier.trim(), rejection);
                metrics::counter!("gamecafe_login_attempts_total", "outcome" => "rejected")
                    .increment(1);
                return Err(rejection.into());
            }
        };

        let issued = self.tokens.issue(&admin, self.clock.now())?;
        tracing::info!("Admin {} logged in", admin.username);
        metrics::counter!("gamecafe_login_attempts_total", "outcome" => "success").increment(1);

        Ok(LoginResponse {
            success: true,
            token: issued.token,
            expires_at: issued.expires_at,
            admin: AdminProfile::from(&admin),
        })
    }

    pub async fn profile(&self, admin_id: &str) -> ApiResult<AdminProfile> {
        let admin = self
            .admin_repo
            .get_admin_by_id(admin_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Admin not found".to_string()))?;
        Ok(AdminProfile::from(&admin))
    }
}
