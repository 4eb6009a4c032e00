mod helpers;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use gamecafe::domain::entities::*;
use gamecafe::infrastructure::http::middleware::ApiError;
use helpers::*;
use std::sync::Arc;

fn at(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw).unwrap().with_timezone(&Utc)
}

fn query(start: &str, end: &str) -> AnalyticsQuery {
    AnalyticsQuery {
        start_date: Some(start.to_string()),
        end_date: Some(end.to_string()),
    }
}

#[tokio::test]
async fn test_summary_aggregates_only_range() {
    let test_db = setup_test_db().await;
    let clock = Arc::new(ManualClock::starting_now());
    let state = test_state(&test_db.db, clock);

    // Outside the range on both sides.
    create_test_order(&test_db.db, 50.0, OrderStatus::Delivered, at("2024-01-31T23:59:59Z")).await;
    create_test_order(&test_db.db, 70.0, OrderStatus::Delivered, at("2024-02-04T00:00:00Z")).await;

    create_test_order(&test_db.db, 10.0, OrderStatus::Delivered, at("2024-02-03T18:00:00Z")).await;
    create_test_order(&test_db.db, 20.0, OrderStatus::Delivered, at("2024-02-01T00:00:00Z")).await;
    create_test_order(&test_db.db, 4.0, OrderStatus::Cancelled, at("2024-02-01T09:30:00Z")).await;

    let summary = state
        .analytics_service
        .summary(&query("2024-02-01", "2024-02-03"))
        .await
        .unwrap();

    assert_eq!(summary.total_orders, 3);
    assert!((summary.revenue - 30.0).abs() < 1e-9);
    assert!((summary.average_order_value - 15.0).abs() < 1e-9);

    let days: Vec<NaiveDate> = summary.daily.iter().map(|d| d.date).collect();
    assert_eq!(
        days,
        vec![
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 3).unwrap(),
        ]
    );
    assert_eq!(summary.daily[0].orders, 2);
    assert!((summary.daily[0].revenue - 20.0).abs() < 1e-9);

    teardown_test_db(test_db).await;
}

#[tokio::test]
async fn test_summary_counts_sessions_and_new_customers() {
    let test_db = setup_test_db().await;
    let clock = Arc::new(ManualClock::starting_now());
    let state = test_state(&test_db.db, clock);
    let day = at("2024-05-10T12:00:00Z");

    let station = create_test_station(&test_db.db, "PC-01", StationType::Pc, StationStatus::Available, day).await;
    let newcomer = create_test_customer(&test_db.db, "fresh", Membership::Basic, day).await;
    let veteran = create_test_customer(&test_db.db, "old", Membership::Vip, day - Duration::days(60)).await;

    create_test_session(&test_db.db, &newcomer.id, &station.id, SessionStatus::Completed, day).await;
    create_test_session(&test_db.db, &veteran.id, &station.id, SessionStatus::Terminated, day).await;
    create_test_session(&test_db.db, &veteran.id, &station.id, SessionStatus::Active, day).await;
    create_test_session(&test_db.db, &veteran.id, &station.id, SessionStatus::Completed, day - Duration::days(30)).await;

    let summary = state
        .analytics_service
        .summary(&query("2024-05-01", "2024-05-31"))
        .await
        .unwrap();

    assert_eq!(summary.finished_sessions, 2);
    assert_eq!(summary.new_customers, 1);
    assert_eq!(summary.total_orders, 0);
    assert_eq!(summary.average_order_value, 0.0);
    assert!(summary.daily.is_empty());

    teardown_test_db(test_db).await;
}

#[tokio::test]
async fn test_inverted_range_is_bad_request() {
    let test_db = setup_test_db().await;
    let clock = Arc::new(ManualClock::starting_now());
    let state = test_state(&test_db.db, clock);

    let err = state
        .analytics_service
        .summary(&query("2024-03-01", "2024-02-01"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));

    teardown_test_db(test_db).await;
}
