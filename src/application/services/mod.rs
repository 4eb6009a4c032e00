pub mod analytics_service;
pub mod auth;
pub mod customer_service;
pub mod gaming_session_service;
pub mod lockout;
pub mod menu_service;
pub mod order_service;
pub mod report_service;
pub mod setup_service;
pub mod station_service;
pub mod token;

pub use analytics_service::AnalyticsService;
pub use auth::AuthService;
pub use customer_service::CustomerService;
pub use gaming_session_service::GamingSessionService;
pub use lockout::LockoutPolicy;
pub use menu_service::MenuService;
pub use order_service::OrderService;
pub use report_service::ReportService;
pub use setup_service::SetupService;
pub use station_service::StationService;
pub use token::{Claims, TokenService};
