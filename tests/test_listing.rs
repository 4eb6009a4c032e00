mod helpers;

use chrono::Duration;
use gamecafe::domain::entities::*;
use gamecafe::domain::ports::time_service::TimeService;
use helpers::*;
use std::sync::Arc;

#[tokio::test]
async fn test_all_filter_equals_omitted_filter() {
    let test_db = setup_test_db().await;
    let clock = Arc::new(ManualClock::starting_now());
    let state = test_state(&test_db.db, clock.clone());
    let t0 = clock.now();

    create_test_report(&test_db.db, "Broken headset", ReportStatus::Pending, ReportCategory::Technical, ReportPriority::High, t0).await;
    create_test_report(&test_db.db, "Double charge", ReportStatus::Resolved, ReportCategory::Billing, ReportPriority::Urgent, t0 + Duration::minutes(1)).await;
    create_test_report(&test_db.db, "Rude staff", ReportStatus::InProgress, ReportCategory::Service, ReportPriority::Low, t0 + Duration::minutes(2)).await;

    let omitted = state
        .report_service
        .list(&ReportFilter::default())
        .await
        .unwrap();

    let all = ReportFilter {
        status: gamecafe::shared::parse_filter("status", Some("all")).unwrap(),
        category: gamecafe::shared::parse_filter("category", Some("all")).unwrap(),
        priority: gamecafe::shared::parse_filter("priority", Some("ALL")).unwrap(),
        limit: None,
    };
    let with_all = state.report_service.list(&all).await.unwrap();

    let ids = |reports: &[Report]| reports.iter().map(|r| r.id.clone()).collect::<Vec<_>>();
    assert_eq!(ids(&omitted.data), ids(&with_all.data));
    assert_eq!(omitted.count, 3);
    assert_eq!(omitted.stats, with_all.stats);

    // Newest first.
    assert_eq!(omitted.data[0].subject, "Rude staff");
    assert_eq!(omitted.data[2].subject, "Broken headset");

    teardown_test_db(test_db).await;
}

#[tokio::test]
async fn test_limit_caps_page_but_not_stats() {
    let test_db = setup_test_db().await;
    let clock = Arc::new(ManualClock::starting_now());
    let state = test_state(&test_db.db, clock.clone());
    let t0 = clock.now();

    create_test_report(&test_db.db, "A", ReportStatus::Pending, ReportCategory::Technical, ReportPriority::Low, t0).await;
    create_test_report(&test_db.db, "B", ReportStatus::Pending, ReportCategory::Technical, ReportPriority::Low, t0 + Duration::seconds(1)).await;
    create_test_report(&test_db.db, "C", ReportStatus::Closed, ReportCategory::Other, ReportPriority::Medium, t0 + Duration::seconds(2)).await;

    let listing = state
        .report_service
        .list(&ReportFilter {
            limit: Some(1),
            ..ReportFilter::default()
        })
        .await
        .unwrap();

    assert_eq!(listing.count, 1);
    assert_eq!(listing.data.len(), 1);
    assert_eq!(listing.data[0].subject, "C");
    assert_eq!(
        listing.stats,
        ReportStats {
            total: 3,
            pending: 2,
            in_progress: 0,
            resolved: 0,
            closed: 1,
        }
    );

    teardown_test_db(test_db).await;
}

#[tokio::test]
async fn test_report_filters_combine() {
    let test_db = setup_test_db().await;
    let clock = Arc::new(ManualClock::starting_now());
    let state = test_state(&test_db.db, clock.clone());
    let t0 = clock.now();

    create_test_report(&test_db.db, "A", ReportStatus::Pending, ReportCategory::Technical, ReportPriority::High, t0).await;
    create_test_report(&test_db.db, "B", ReportStatus::Pending, ReportCategory::Billing, ReportPriority::High, t0).await;
    create_test_report(&test_db.db, "C", ReportStatus::Resolved, ReportCategory::Technical, ReportPriority::High, t0).await;

    let listing = state
        .report_service
        .list(&ReportFilter {
            status: Some(ReportStatus::Pending),
            category: Some(ReportCategory::Technical),
            ..ReportFilter::default()
        })
        .await
        .unwrap();

    assert_eq!(listing.count, 1);
    assert_eq!(listing.data[0].subject, "A");
    assert_eq!(listing.stats.total, 3);

    teardown_test_db(test_db).await;
}

#[tokio::test]
async fn test_user_listing_filters_and_stats() {
    let test_db = setup_test_db().await;
    let clock = Arc::new(ManualClock::starting_now());
    let state = test_state(&test_db.db, clock.clone());
    let t0 = clock.now();

    create_test_customer(&test_db.db, "p1", Membership::Basic, t0).await;
    create_test_customer(&test_db.db, "p2", Membership::Premium, t0).await;
    let vip = create_test_customer(&test_db.db, "p3", Membership::Vip, t0).await;
    state.customer_service.set_active(&vip.id, false).await.unwrap();

    let inactive = state
        .customer_service
        .list(&CustomerFilter {
            status: Some(AccountStatus::Inactive),
            ..CustomerFilter::default()
        })
        .await
        .unwrap();

    assert_eq!(inactive.count, 1);
    assert_eq!(inactive.data[0].id, vip.id);
    assert_eq!(
        inactive.stats,
        CustomerStats {
            total: 3,
            active: 2,
            inactive: 1,
            premium: 1,
            vip: 1,
        }
    );

    teardown_test_db(test_db).await;
}

#[tokio::test]
async fn test_menu_listing_by_stock_status() {
    let test_db = setup_test_db().await;
    let clock = Arc::new(ManualClock::starting_now());
    let state = test_state(&test_db.db, clock.clone());
    let t0 = clock.now();

    create_test_menu_item(&test_db.db, "Cola", MenuCategory::Beverage, 50, t0).await;
    create_test_menu_item(&test_db.db, "Nachos", MenuCategory::Snack, 4, t0).await;
    create_test_menu_item(&test_db.db, "Brownie", MenuCategory::Dessert, 0, t0).await;
    create_test_menu_item(&test_db.db, "Iced Tea", MenuCategory::Beverage, 10, t0).await;

    let low = state
        .menu_service
        .list(&MenuItemFilter {
            stock_status: Some(StockStatus::LowStock),
            ..MenuItemFilter::default()
        })
        .await
        .unwrap();

    let mut names: Vec<_> = low.data.iter().map(|i| i.name.as_str()).collect();
    names.sort();
    assert_eq!(names, vec!["Iced Tea", "Nachos"]);

    assert_eq!(low.stats.total, 4);
    assert_eq!(low.stats.low_stock, 2);
    assert_eq!(low.stats.out_of_stock, 1);
    assert_eq!(low.stats.by_category.get("beverage"), Some(&2));
    assert_eq!(low.stats.by_category.get("food"), None);

    let beverages = state
        .menu_service
        .list(&MenuItemFilter {
            category: Some(MenuCategory::Beverage),
            stock_status: Some(StockStatus::InStock),
            limit: None,
        })
        .await
        .unwrap();
    assert_eq!(beverages.count, 1);
    assert_eq!(beverages.data[0].name, "Cola");

    teardown_test_db(test_db).await;
}

#[tokio::test]
async fn test_station_and_session_listings() {
    let test_db = setup_test_db().await;
    let clock = Arc::new(ManualClock::starting_now());
    let state = test_state(&test_db.db, clock.clone());
    let t0 = clock.now();

    let pc = create_test_station(&test_db.db, "PC-01", StationType::Pc, StationStatus::Occupied, t0).await;
    create_test_station(&test_db.db, "PS5-01", StationType::Console, StationStatus::Available, t0).await;
    create_test_station(&test_db.db, "VR-01", StationType::Vr, StationStatus::Maintenance, t0).await;

    let consoles = state
        .station_service
        .list(&StationFilter {
            station_type: Some(StationType::Console),
            ..StationFilter::default()
        })
        .await
        .unwrap();
    assert_eq!(consoles.count, 1);
    assert_eq!(
        consoles.stats,
        StationStats {
            total: 3,
            available: 1,
            occupied: 1,
            maintenance: 1,
        }
    );

    let player = create_test_customer(&test_db.db, "p1", Membership::Basic, t0).await;
    create_test_session(&test_db.db, &player.id, &pc.id, SessionStatus::Completed, t0 - Duration::hours(3)).await;
    create_test_session(&test_db.db, &player.id, &pc.id, SessionStatus::Active, t0).await;

    let active = state
        .gaming_session_service
        .list(&SessionFilter {
            status: Some(SessionStatus::Active),
            limit: None,
        })
        .await
        .unwrap();
    assert_eq!(active.count, 1);
    assert_eq!(active.stats.total, 2);
    assert_eq!(active.stats.completed, 1);

    teardown_test_db(test_db).await;
}
