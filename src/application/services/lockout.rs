//! Login lockout transitions.
//!
//! Every function here is pure: it takes the current [`LoginState`] and the
//! wall-clock instant and returns the next state. Persisting the result is
//! the caller's job.

use crate::domain::entities::LoginState;
use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockoutPolicy {
    pub max_attempts: u32,
    pub lock_duration: Duration,
}

impl Default for LockoutPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            lock_duration: Duration::hours(2),
        }
    }
}

/// Returns the instant the lock lifts if the account is locked at `now`.
pub fn active_lock(state: &LoginState, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    state.locked_until.filter(|until| now < *until)
}

/// Applies one failed attempt. A lock that has already elapsed starts a
/// fresh window with a count of one.
///
/// Must not be called while [`active_lock`] reports a lock.
pub fn register_failure(
    state: &LoginState,
    now: DateTime<Utc>,
    policy: &LockoutPolicy,
) -> LoginState {
    let lock_elapsed = matches!(state.locked_until, Some(until) if now >= until);
    let failed_attempts = if lock_elapsed {
        1
    } else {
        state.failed_attempts.saturating_add(1)
    };

    let locked_until = if failed_attempts >= policy.max_attempts {
        Some(now + policy.lock_duration)
    } else {
        None
    };

    LoginState {
        failed_attempts,
        last_failed_at: Some(now),
        locked_until,
        last_login_at: state.last_login_at,
    }
}

pub fn register_success(state: &LoginState, now: DateTime<Utc>) -> LoginState {
    LoginState {
        failed_attempts: 0,
        last_failed_at: state.last_failed_at,
        locked_until: None,
        last_login_at: Some(now),
    }
}
