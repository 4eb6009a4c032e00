mod helpers;

use chrono::Duration;
use gamecafe::domain::entities::*;
use gamecafe::domain::ports::gaming_session_repository::GamingSessionRepository;
use gamecafe::domain::ports::time_service::TimeService;
use gamecafe::infrastructure::http::middleware::ApiError;
use helpers::*;
use std::sync::Arc;

#[tokio::test]
async fn test_deactivation_terminates_only_active_sessions() {
    let test_db = setup_test_db().await;
    let clock = Arc::new(ManualClock::starting_now());
    let state = test_state(&test_db.db, clock.clone());
    let t0 = clock.now();

    let player = create_test_customer(&test_db.db, "p1", Membership::Premium, t0).await;
    let other = create_test_customer(&test_db.db, "p2", Membership::Basic, t0).await;
    let station = create_test_station(&test_db.db, "PC-01", StationType::Pc, StationStatus::Occupied, t0).await;

    let active_a = create_test_session(&test_db.db, &player.id, &station.id, SessionStatus::Active, t0 - Duration::minutes(30)).await;
    let active_b = create_test_session(&test_db.db, &player.id, &station.id, SessionStatus::Active, t0 - Duration::minutes(10)).await;
    let completed = create_test_session(&test_db.db, &player.id, &station.id, SessionStatus::Completed, t0 - Duration::days(1)).await;
    let unrelated = create_test_session(&test_db.db, &other.id, &station.id, SessionStatus::Active, t0).await;

    clock.advance(Duration::minutes(5));
    let change = state.customer_service.set_active(&player.id, false).await.unwrap();

    assert!(!change.customer.is_active);
    assert_eq!(change.terminated_sessions, 2);

    for id in [&active_a.id, &active_b.id] {
        let session = test_db.db.get_session_by_id(id).await.unwrap().unwrap();
        assert_eq!(session.status, SessionStatus::Terminated);
        assert_eq!(session.ended_at, Some(clock.now()));
    }

    let completed_after = test_db.db.get_session_by_id(&completed.id).await.unwrap().unwrap();
    assert_eq!(completed_after.status, SessionStatus::Completed);
    assert_eq!(completed_after.ended_at, completed.ended_at);

    let unrelated_after = test_db.db.get_session_by_id(&unrelated.id).await.unwrap().unwrap();
    assert_eq!(unrelated_after.status, SessionStatus::Active);

    teardown_test_db(test_db).await;
}

#[tokio::test]
async fn test_reactivation_leaves_sessions_alone() {
    let test_db = setup_test_db().await;
    let clock = Arc::new(ManualClock::starting_now());
    let state = test_state(&test_db.db, clock.clone());
    let t0 = clock.now();

    let player = create_test_customer(&test_db.db, "p1", Membership::Basic, t0).await;
    let station = create_test_station(&test_db.db, "PC-01", StationType::Pc, StationStatus::Occupied, t0).await;
    let session = create_test_session(&test_db.db, &player.id, &station.id, SessionStatus::Active, t0).await;

    let change = state.customer_service.set_active(&player.id, true).await.unwrap();
    assert!(change.customer.is_active);
    assert_eq!(change.terminated_sessions, 0);

    let after = test_db.db.get_session_by_id(&session.id).await.unwrap().unwrap();
    assert_eq!(after.status, SessionStatus::Active);

    teardown_test_db(test_db).await;
}

#[tokio::test]
async fn test_deactivating_unknown_user_is_not_found() {
    let test_db = setup_test_db().await;
    let clock = Arc::new(ManualClock::starting_now());
    let state = test_state(&test_db.db, clock);

    let err = state
        .customer_service
        .set_active("does-not-exist", false)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));

    teardown_test_db(test_db).await;
}
