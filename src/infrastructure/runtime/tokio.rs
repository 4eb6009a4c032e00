use crate::domain::ports::time_service::TimeService;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Wall clock backed by the system time and tokio timers.
#[derive(Clone, Default)]
pub struct TokioTimeService;

impl TokioTimeService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TimeService for TokioTimeService {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
