use crate::domain::entities::{AnalyticsQuery, AnalyticsSummary, DateRange};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::customer_repository::CustomerRepository;
use crate::domain::ports::gaming_session_repository::GamingSessionRepository;
use crate::domain::ports::order_repository::OrderRepository;
use crate::domain::ports::time_service::TimeService;
use crate::infrastructure::http::middleware::error::ApiResult;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use std::sync::Arc;

pub const DEFAULT_RANGE_DAYS: i64 = 30;

fn parse_date(field: &str, raw: &str) -> DomainResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        DomainError::ValidationError(format!("{} must be a date in YYYY-MM-DD format", field))
    })
}

/// Resolves the requested range. Missing bounds default to the
/// [`DEFAULT_RANGE_DAYS`] days ending `today`.
pub fn resolve_range(query: &AnalyticsQuery, today: NaiveDate) -> DomainResult<DateRange> {
    let end = match query.end_date.as_deref().filter(|s| !s.trim().is_empty()) {
        Some(raw) => parse_date("end_date", raw)?,
        None => today,
    };
    let start = match query.start_date.as_deref().filter(|s| !s.trim().is_empty()) {
        Some(raw) => parse_date("start_date", raw)?,
        None => end - Duration::days(DEFAULT_RANGE_DAYS - 1),
    };

    if start > end {
        return Err(DomainError::ValidationError(
            "start_date must not be after end_date".to_string(),
        ));
    }
    Ok(DateRange { start, end })
}

/// Half-open instant bounds covering every moment of the inclusive range.
pub fn range_bounds(range: &DateRange) -> (DateTime<Utc>, DateTime<Utc>) {
    let midnight = NaiveTime::default();
    let start = Utc.from_utc_datetime(&range.start.and_time(midnight));
    let end = Utc.from_utc_datetime(&(range.end + Duration::days(1)).and_time(midnight));
    (start, end)
}

#[derive(Clone)]
pub struct AnalyticsService {
    order_repo: Arc<dyn OrderRepository>,
    session_repo: Arc<dyn GamingSessionRepository>,
    customer_repo: Arc<dyn CustomerRepository>,
    clock: Arc<dyn TimeService>,
}

impl AnalyticsService {
    pub fn new(
        order_repo: Arc<dyn OrderRepository>,
        session_repo: Arc<dyn GamingSessionRepository>,
        customer_repo: Arc<dyn CustomerRepository>,
        clock: Arc<dyn TimeService>,
    ) -> Self {
        Self {
            order_repo,
            session_repo,
            customer_repo,
            clock,
        }
    }

    pub async fn summary(&self, query: &AnalyticsQuery) -> ApiResult<AnalyticsSummary> {
        let range = resolve_range(query, self.clock.now().date_naive())?;
        let (start, end) = range_bounds(&range);

        let totals = self.order_repo.order_totals_between(start, end).await?;
        let daily = self.order_repo.daily_order_breakdown(start, end).await?;
        let finished_sessions = self
            .session_repo
            .count_finished_sessions_between(start, end)
            .await?;
        let new_customers = self
            .customer_repo
            .count_customers_created_between(start, end)
            .await?;

        let average_order_value = if totals.delivered_orders > 0 {
            totals.revenue / totals.delivered_orders as f64
        } else {
            0.0
        };

        Ok(AnalyticsSummary {
            range,
            total_orders: totals.orders,
            revenue: totals.revenue,
            average_order_value,
            finished_sessions,
            new_customers,
            daily,
        })
    }
}
