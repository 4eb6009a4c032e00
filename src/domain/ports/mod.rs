pub mod admin_repository;
pub mod customer_repository;
pub mod gaming_session_repository;
pub mod menu_item_repository;
pub mod order_repository;
pub mod report_repository;
pub mod station_repository;
pub mod time_service;
