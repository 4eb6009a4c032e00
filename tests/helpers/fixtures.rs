use chrono::{DateTime, Duration, Utc};
use gamecafe::application::services::auth::hash_password;
use gamecafe::domain::entities::*;
use gamecafe::domain::ports::admin_repository::AdminRepository;
use gamecafe::domain::ports::customer_repository::CustomerRepository;
use gamecafe::domain::ports::gaming_session_repository::GamingSessionRepository;
use gamecafe::domain::ports::menu_item_repository::MenuItemRepository;
use gamecafe::domain::ports::order_repository::OrderRepository;
use gamecafe::domain::ports::report_repository::ReportRepository;
use gamecafe::domain::ports::station_repository::StationRepository;
use gamecafe::infrastructure::persistence::Database;
use uuid::Uuid;

pub async fn create_test_admin(
    db: &Database,
    username: &str,
    password: &str,
    role: AdminRole,
    now: DateTime<Utc>,
) -> Admin {
    let admin = NewAdmin {
        username: username.to_string(),
        email: format!("{}@gamecafe.test", username),
        full_name: format!("{} Admin", username),
        role,
        permissions: Permissions::for_role(role),
        password_hash: hash_password(password).unwrap(),
    }
    .into_admin(now);

    db.create_admin(&admin).await.unwrap();
    admin
}

pub async fn create_test_customer(
    db: &Database,
    username: &str,
    membership: Membership,
    created_at: DateTime<Utc>,
) -> Customer {
    let customer = Customer {
        id: Uuid::new_v4().to_string(),
        username: username.to_string(),
        email: format!("{}@players.test", username),
        full_name: format!("{} Player", username),
        phone: None,
        membership,
        is_active: true,
        balance: 20.0,
        created_at,
        updated_at: created_at,
    };
    db.create_customer(&customer).await.unwrap();
    customer
}

pub async fn create_test_station(
    db: &Database,
    name: &str,
    station_type: StationType,
    status: StationStatus,
    created_at: DateTime<Utc>,
) -> Station {
    let station = Station {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        station_type,
        status,
        hourly_rate: 4.5,
        created_at,
        updated_at: created_at,
    };
    db.create_station(&station).await.unwrap();
    station
}

pub async fn create_test_session(
    db: &Database,
    user_id: &str,
    station_id: &str,
    status: SessionStatus,
    started_at: DateTime<Utc>,
) -> GamingSession {
    let ended_at = match status {
        SessionStatus::Completed | SessionStatus::Terminated => {
            Some(started_at + Duration::hours(1))
        }
        _ => None,
    };
    let session = GamingSession {
        id: Uuid::new_v4().to_string(),
        user_id: user_id.to_string(),
        station_id: station_id.to_string(),
        status,
        started_at,
        ended_at,
        amount: ended_at.map(|_| 4.5),
        created_at: started_at,
        updated_at: started_at,
    };
    db.create_session(&session).await.unwrap();
    session
}

pub async fn create_test_order(
    db: &Database,
    total: f64,
    status: OrderStatus,
    created_at: DateTime<Utc>,
) -> Order {
    let order = Order {
        id: Uuid::new_v4().to_string(),
        user_id: None,
        customer_name: "Walk-in".to_string(),
        items: vec![OrderItem {
            menu_item_id: None,
            name: "Cola".to_string(),
            quantity: 1,
            unit_price: total,
        }],
        total,
        status,
        station_id: None,
        notes: None,
        completed_at: None,
        created_at,
        updated_at: created_at,
    };
    db.create_order(&order).await.unwrap();
    order
}

pub async fn create_test_report(
    db: &Database,
    subject: &str,
    status: ReportStatus,
    category: ReportCategory,
    priority: ReportPriority,
    created_at: DateTime<Utc>,
) -> Report {
    let report = Report {
        id: Uuid::new_v4().to_string(),
        user_id: None,
        subject: subject.to_string(),
        description: format!("{} details", subject),
        category,
        priority,
        status,
        admin_response: None,
        responded_by: None,
        responded_at: None,
        created_at,
        updated_at: created_at,
    };
    db.create_report(&report).await.unwrap();
    report
}

pub async fn create_test_menu_item(
    db: &Database,
    name: &str,
    category: MenuCategory,
    stock: i64,
    created_at: DateTime<Utc>,
) -> MenuItem {
    let item = MenuItem {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        description: None,
        category,
        price: 2.5,
        stock,
        low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        is_available: true,
        created_at,
        updated_at: created_at,
    };
    db.create_menu_item(&item).await.unwrap();
    item
}
