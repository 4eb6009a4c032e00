use crate::domain::entities::{
    CreateMenuItemRequest, MenuCategory, MenuItem, MenuItemFilter, MenuItemStats, NewMenuItem,
    DEFAULT_LOW_STOCK_THRESHOLD,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::menu_item_repository::MenuItemRepository;
use crate::domain::ports::time_service::TimeService;
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use crate::shared::listing::Listing;
use std::sync::Arc;
use uuid::Uuid;

/// Catalog inserted on first start when the menu is empty.
pub fn default_catalog() -> Vec<NewMenuItem> {
    let item = |name: &str, description: &str, category, price, stock| NewMenuItem {
        name: name.to_string(),
        description: Some(description.to_string()),
        category,
        price,
        stock,
        low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        is_available: true,
    };

    vec![
        item("Classic Burger", "Beef patty, cheddar, lettuce, tomato", MenuCategory::Food, 8.99, 40),
        item("Chicken Wrap", "Grilled chicken with garlic sauce", MenuCategory::Food, 7.49, 35),
        item("Pepperoni Pizza Slice", "Thin crust, extra cheese", MenuCategory::Food, 3.99, 50),
        item("Loaded Nachos", "Cheese, jalapenos, salsa", MenuCategory::Snack, 5.99, 30),
        item("French Fries", "Crispy salted fries", MenuCategory::Snack, 2.99, 60),
        item("Energy Drink", "250ml can", MenuCategory::Beverage, 2.49, 100),
        item("Iced Coffee", "Cold brew with milk", MenuCategory::Beverage, 3.49, 45),
        item("Cola", "330ml can", MenuCategory::Beverage, 1.79, 120),
        item("Chocolate Brownie", "Warm fudge brownie", MenuCategory::Dessert, 3.29, 25),
    ]
}

pub fn validate_new_item(request: CreateMenuItemRequest) -> DomainResult<NewMenuItem> {
    let name = request.name.trim().to_string();
    if name.is_empty() {
        return Err(DomainError::ValidationError("Name is required".to_string()));
    }

    let category: MenuCategory = request
        .category
        .parse()
        .map_err(DomainError::ValidationError)?;

    let price = request
        .price
        .ok_or_else(|| DomainError::ValidationError("Price is required".to_string()))?;
    if !price.is_finite() || price < 0.0 {
        return Err(DomainError::ValidationError(
            "Price must be a non-negative number".to_string(),
        ));
    }

    let stock = request.stock.unwrap_or(0);
    validate_stock(stock)?;

    let low_stock_threshold = request
        .low_stock_threshold
        .unwrap_or(DEFAULT_LOW_STOCK_THRESHOLD);
    if low_stock_threshold < 0 {
        return Err(DomainError::ValidationError(
            "Low stock threshold cannot be negative".to_string(),
        ));
    }

    Ok(NewMenuItem {
        name,
        description: request
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty()),
        category,
        price,
        stock,
        low_stock_threshold,
        is_available: request.is_available.unwrap_or(true),
    })
}

fn validate_stock(stock: i64) -> DomainResult<()> {
    if stock < 0 {
        return Err(DomainError::ValidationError(
            "Stock cannot be negative".to_string(),
        ));
    }
    Ok(())
}

#[derive(Clone)]
pub struct MenuService {
    menu_repo: Arc<dyn MenuItemRepository>,
    clock: Arc<dyn TimeService>,
}

impl MenuService {
    pub fn new(menu_repo: Arc<dyn MenuItemRepository>, clock: Arc<dyn TimeService>) -> Self {
        Self { menu_repo, clock }
    }

    pub async fn list(
        &self,
        filter: &MenuItemFilter,
    ) -> ApiResult<Listing<MenuItem, MenuItemStats>> {
        let items = self.menu_repo.list_menu_items(filter).await?;
        let stats = self.menu_repo.menu_item_stats().await?;
        Ok(Listing::new(items, stats))
    }

    pub async fn create(&self, new_item: NewMenuItem) -> ApiResult<MenuItem> {
        let now = self.clock.now();
        let item = MenuItem {
            id: Uuid::new_v4().to_string(),
            name: new_item.name,
            description: new_item.description,
            category: new_item.category,
            price: new_item.price,
            stock: new_item.stock,
            low_stock_threshold: new_item.low_stock_threshold,
            is_available: new_item.is_available,
            created_at: now,
            updated_at: now,
        };
        self.menu_repo.create_menu_item(&item).await?;
        tracing::info!("Menu item created: {}", item.name);
        Ok(item)
    }

    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        if !self.menu_repo.delete_menu_item(id).await? {
            return Err(menu_item_not_found());
        }
        tracing::info!("Menu item deleted: {}", id);
        Ok(())
    }

    pub async fn update_stock(&self, id: &str, stock: i64) -> ApiResult<MenuItem> {
        validate_stock(stock)?;
        if !self
            .menu_repo
            .update_menu_item_stock(id, stock, self.clock.now())
            .await?
        {
            return Err(menu_item_not_found());
        }

        let item = self
            .menu_repo
            .get_menu_item_by_id(id)
            .await?
            .ok_or_else(menu_item_not_found)?;
        if item.stock <= item.low_stock_threshold {
            tracing::warn!(
                "Menu item {} is at {} ({} left)",
                item.name,
                item.stock_status(),
                item.stock
            );
        }
        Ok(item)
    }

    /// Inserts the default catalog when no menu items exist. Returns the
    /// number of items written.
    pub async fn seed_default_catalog(&self) -> ApiResult<usize> {
        if self.menu_repo.count_menu_items().await? > 0 {
            return Ok(0);
        }

        let catalog = default_catalog();
        let count = catalog.len();
        for item in catalog {
            self.create(item).await?;
        }
        Ok(count)
    }
}

fn menu_item_not_found() -> ApiError {
    ApiError::NotFound("Menu item not found".to_string())
}
