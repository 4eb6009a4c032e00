use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

text_enum! {
    pub enum AdminRole ("admin role") {
        SuperAdmin => "super_admin",
        Admin => "admin",
        Manager => "manager",
    }
}

/// One capability an admin may hold; each maps to a flag in [`Permissions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    ManageUsers,
    ManageOrders,
    ManageMenu,
    ManageSessions,
    ManageStations,
    ManageReports,
    ViewAnalytics,
    ManageAdmins,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ManageUsers => "manage_users",
            Permission::ManageOrders => "manage_orders",
            Permission::ManageMenu => "manage_menu",
            Permission::ManageSessions => "manage_sessions",
            Permission::ManageStations => "manage_stations",
            Permission::ManageReports => "manage_reports",
            Permission::ViewAnalytics => "view_analytics",
            Permission::ManageAdmins => "manage_admins",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Permissions {
    pub manage_users: bool,
    pub manage_orders: bool,
    pub manage_menu: bool,
    pub manage_sessions: bool,
    pub manage_stations: bool,
    pub manage_reports: bool,
    pub view_analytics: bool,
    pub manage_admins: bool,
}

impl Permissions {
    pub fn full() -> Self {
        Self {
            manage_users: true,
            manage_orders: true,
            manage_menu: true,
            manage_sessions: true,
            manage_stations: true,
            manage_reports: true,
            view_analytics: true,
            manage_admins: true,
        }
    }

    pub fn for_role(role: AdminRole) -> Self {
        match role {
            AdminRole::SuperAdmin => Self::full(),
            AdminRole::Admin => Self {
                manage_admins: false,
                ..Self::full()
            },
            AdminRole::Manager => Self {
                manage_orders: true,
                manage_menu: true,
                manage_sessions: true,
                manage_stations: true,
                ..Self::default()
            },
        }
    }

    pub fn allows(&self, permission: Permission) -> bool {
        match permission {
            Permission::ManageUsers => self.manage_users,
            Permission::ManageOrders => self.manage_orders,
            Permission::ManageMenu => self.manage_menu,
            Permission::ManageSessions => self.manage_sessions,
            Permission::ManageStations => self.manage_stations,
            Permission::ManageReports => self.manage_reports,
            Permission::ViewAnalytics => self.view_analytics,
            Permission::ManageAdmins => self.manage_admins,
        }
    }
}

/// Failed-login bookkeeping carried by every admin account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginState {
    pub failed_attempts: u32,
    pub last_failed_at: Option<DateTime<Utc>>,
    pub locked_until: Option<DateTime<Utc>>,
    pub last_login_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct Admin {
    pub id: String,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub role: AdminRole,
    pub permissions: Permissions,
    pub password_hash: String,
    pub is_active: bool,
    pub login: LoginState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A validated admin ready to be stored. The hash must come from
/// `application::services::auth::hash_password`.
#[derive(Debug, Clone)]
pub struct NewAdmin {
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub role: AdminRole,
    pub permissions: Permissions,
    pub password_hash: String,
}

impl NewAdmin {
    pub fn into_admin(self, now: DateTime<Utc>) -> Admin {
        Admin {
            id: Uuid::new_v4().to_string(),
            username: self.username,
            email: self.email,
            full_name: self.full_name,
            role: self.role,
            permissions: self.permissions,
            password_hash: self.password_hash,
            is_active: true,
            login: LoginState::default(),
            created_at: now,
            updated_at: now,
        }
    }
}

// DTOs for API requests/responses

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default, alias = "username", alias = "email")]
    pub identifier: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SetupRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminProfile {
    pub id: String,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub role: AdminRole,
    pub permissions: Permissions,
    pub is_active: bool,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<&Admin> for AdminProfile {
    fn from(admin: &Admin) -> Self {
        Self {
            id: admin.id.clone(),
            username: admin.username.clone(),
            email: admin.email.clone(),
            full_name: admin.full_name.clone(),
            role: admin.role,
            permissions: admin.permissions,
            is_active: admin.is_active,
            last_login_at: admin.login.last_login_at,
            created_at: admin.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub admin: AdminProfile,
}
