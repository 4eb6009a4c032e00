use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use gamecafe::domain::ports::time_service::TimeService;
use std::sync::Mutex;
use std::time::Duration;

type SleepHook = Box<dyn FnOnce() + Send>;

/// Clock that only moves when told to. `sleep` advances it instantly and
/// records the requested duration.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
    sleeps: Mutex<Vec<Duration>>,
    on_sleep: Mutex<Option<SleepHook>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
            sleeps: Mutex::new(Vec::new()),
            on_sleep: Mutex::new(None),
        }
    }

    /// Starts at the current wall time, truncated to the millisecond
    /// precision the store keeps. Issued tokens are checked against the
    /// real clock, so tests that verify tokens must start here.
    pub fn starting_now() -> Self {
        Self::new(Utc::now().trunc_subsecs(3))
    }

    pub fn advance(&self, by: chrono::Duration) {
        let mut now = self.now.lock().unwrap();
        *now = *now + by;
    }

    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }

    /// Runs `hook` during the next `sleep` call.
    pub fn on_next_sleep(&self, hook: impl FnOnce() + Send + 'static) {
        *self.on_sleep.lock().unwrap() = Some(Box::new(hook));
    }
}

#[async_trait]
impl TimeService for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }

    async fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
        self.advance(chrono::Duration::from_std(duration).unwrap());
        let hook = self.on_sleep.lock().unwrap().take();
        if let Some(hook) = hook {
            hook();
        }
    }
}
