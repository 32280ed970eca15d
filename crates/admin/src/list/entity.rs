//! How each store entity appears in a list view.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use store_admin_core::{
    CustomerDetails, Product, ProductCategory, ProductOrder, Reference, ShoppingCart,
};

use crate::components::data_table::{
    DataTableConfig, customer_details_table_config, product_categories_table_config,
    product_orders_table_config, products_table_config, shopping_carts_table_config,
};

/// Date-time format of list cells.
const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Where an entity type lives, in the admin and in the REST service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityRoute {
    /// Admin path segment, e.g. `shopping-cart` (list at `/shopping-cart`).
    pub slug: &'static str,
    /// REST collection, e.g. `shopping-carts` (`/api/shopping-carts`).
    pub resource: &'static str,
}

impl EntityRoute {
    /// Path of the list view.
    #[must_use]
    pub fn list_path(&self) -> String {
        format!("/{}", self.slug)
    }

    /// Path of the create view.
    #[must_use]
    pub fn new_path(&self) -> String {
        format!("/{}/new", self.slug)
    }

    /// Path of the detail view of record `id`.
    #[must_use]
    pub fn view_path(&self, id: impl std::fmt::Display) -> String {
        format!("/{}/{id}", self.slug)
    }

    /// Path of the edit view of record `id`.
    #[must_use]
    pub fn edit_path(&self, id: impl std::fmt::Display) -> String {
        format!("/{}/{id}/edit", self.slug)
    }

    /// Path of the delete confirmation of record `id`.
    #[must_use]
    pub fn delete_path(&self, id: impl std::fmt::Display) -> String {
        format!("/{}/{id}/delete", self.slug)
    }
}

pub const SHOPPING_CART: EntityRoute = EntityRoute {
    slug: "shopping-cart",
    resource: "shopping-carts",
};
pub const CUSTOMER_DETAILS: EntityRoute = EntityRoute {
    slug: "customer-details",
    resource: "customer-details",
};
pub const PRODUCT: EntityRoute = EntityRoute {
    slug: "product",
    resource: "products",
};
pub const PRODUCT_CATEGORY: EntityRoute = EntityRoute {
    slug: "product-category",
    resource: "product-categories",
};
pub const PRODUCT_ORDER: EntityRoute = EntityRoute {
    slug: "product-order",
    resource: "product-orders",
};

/// One table cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellView {
    /// Text content.
    pub text: String,
    /// Link target when the cell references another record.
    pub href: Option<String>,
    /// Image source when the cell shows a thumbnail.
    pub image_src: Option<String>,
}

impl CellView {
    /// Plain text cell.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Text cell, empty when `value` is `None`.
    #[must_use]
    pub fn optional(value: Option<impl Into<String>>) -> Self {
        value.map_or_else(Self::empty, Self::text)
    }

    /// Link cell.
    #[must_use]
    pub fn link(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: Some(href.into()),
            image_src: None,
        }
    }

    /// Empty cell.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Thumbnail cell with a text caption.
    #[must_use]
    pub fn image(src: String, caption: impl Into<String>) -> Self {
        Self {
            text: caption.into(),
            href: None,
            image_src: Some(src),
        }
    }

    /// Link to `target`'s view when the reference is present, empty otherwise.
    #[must_use]
    pub fn reference<I: std::fmt::Display>(
        target: EntityRoute,
        reference: Option<&Reference<I>>,
    ) -> Self {
        reference.map_or_else(Self::empty, |r| {
            Self::link(r.id.to_string(), target.view_path(&r.id))
        })
    }

    /// Whether the cell has neither text, link nor image.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.href.is_none() && self.image_src.is_none()
    }
}

fn format_date_time(value: Option<&DateTime<Utc>>) -> CellView {
    CellView::optional(value.map(|d| d.format(DATE_TIME_FORMAT).to_string()))
}

/// An entity that has a list view.
pub trait ListEntity: DeserializeOwned + Clone + Send + Sync + 'static {
    /// Admin and REST location of the entity.
    const ROUTE: EntityRoute;

    /// Field the list sorts by when the URL does not say.
    const DEFAULT_SORT_FIELD: &'static str = "id";

    /// Table layout.
    fn table_config() -> DataTableConfig;

    /// Record id, as shown and used in links.
    fn id(&self) -> String;

    /// Cells in the order of [`Self::table_config`]'s columns.
    fn cells(&self) -> Vec<CellView>;
}

impl ListEntity for ShoppingCart {
    const ROUTE: EntityRoute = SHOPPING_CART;

    fn table_config() -> DataTableConfig {
        shopping_carts_table_config()
    }

    fn id(&self) -> String {
        self.id.to_string()
    }

    fn cells(&self) -> Vec<CellView> {
        vec![
            CellView::link(self.id(), Self::ROUTE.view_path(self.id)),
            format_date_time(self.placed_date.as_ref()),
            CellView::text(self.status.as_str()),
            CellView::text(self.total_price.to_string()),
            CellView::text(self.payment_method.as_str()),
            CellView::optional(self.payment_reference.clone()),
            CellView::reference(CUSTOMER_DETAILS, self.customer_details.as_ref()),
        ]
    }
}

impl ListEntity for CustomerDetails {
    const ROUTE: EntityRoute = CUSTOMER_DETAILS;

    fn table_config() -> DataTableConfig {
        customer_details_table_config()
    }

    fn id(&self) -> String {
        self.id.to_string()
    }

    fn cells(&self) -> Vec<CellView> {
        vec![
            CellView::link(self.id(), Self::ROUTE.view_path(self.id)),
            CellView::text(self.gender.as_str()),
            CellView::text(&self.phone),
            CellView::text(&self.address_line1),
            CellView::optional(self.address_line2.clone()),
            CellView::text(&self.city),
            CellView::text(&self.country),
            // Accounts are managed outside the entity views, so no link.
            CellView::optional(
                self.user
                    .as_ref()
                    .map(|u| u.login.clone().unwrap_or_else(|| u.id.to_string())),
            ),
        ]
    }
}

impl ListEntity for Product {
    const ROUTE: EntityRoute = PRODUCT;

    fn table_config() -> DataTableConfig {
        products_table_config()
    }

    fn id(&self) -> String {
        self.id.to_string()
    }

    fn cells(&self) -> Vec<CellView> {
        let image = match (self.image_data_uri(), &self.image_content_type) {
            (Some(src), Some(content_type)) => CellView::image(src, content_type.clone()),
            _ => CellView::empty(),
        };

        vec![
            CellView::link(self.id(), Self::ROUTE.view_path(self.id)),
            CellView::text(&self.name),
            CellView::optional(self.description.clone()),
            CellView::text(self.price.to_string()),
            CellView::text(self.product_size.as_str()),
            image,
            CellView::reference(PRODUCT_CATEGORY, self.product_category.as_ref()),
        ]
    }
}

impl ListEntity for ProductCategory {
    const ROUTE: EntityRoute = PRODUCT_CATEGORY;

    fn table_config() -> DataTableConfig {
        product_categories_table_config()
    }

    fn id(&self) -> String {
        self.id.to_string()
    }

    fn cells(&self) -> Vec<CellView> {
        vec![
            CellView::link(self.id(), Self::ROUTE.view_path(self.id)),
            CellView::text(&self.name),
            CellView::optional(self.description.clone()),
        ]
    }
}

impl ListEntity for ProductOrder {
    const ROUTE: EntityRoute = PRODUCT_ORDER;

    fn table_config() -> DataTableConfig {
        product_orders_table_config()
    }

    fn id(&self) -> String {
        self.id.to_string()
    }

    fn cells(&self) -> Vec<CellView> {
        vec![
            CellView::link(self.id(), Self::ROUTE.view_path(self.id)),
            CellView::text(self.quantity.to_string()),
            CellView::text(self.total_price.to_string()),
            CellView::reference(PRODUCT, self.product.as_ref()),
            CellView::reference(SHOPPING_CART, self.cart.as_ref()),
        ]
    }
}
