//! Data table component types.
//!
//! These types define the column layout and empty state of the entity list
//! tables in the admin panel.

/// Column definition for a data table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumn {
    /// Entity field the column shows; also the `sort` field when sortable.
    pub key: String,
    /// Display label for the column header.
    pub label: String,
    /// Whether clicking the header re-sorts the list.
    pub sortable: bool,
}

impl TableColumn {
    /// Create a new sortable column.
    #[must_use]
    pub fn sortable(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            sortable: true,
        }
    }

    /// Create a new non-sortable column.
    #[must_use]
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            sortable: false,
        }
    }
}

/// Configuration for a data table.
#[derive(Debug, Clone)]
pub struct DataTableConfig {
    /// Unique table identifier (also the DOM id prefix).
    pub table_id: String,
    /// Page heading.
    pub title: String,
    /// Column definitions, in display order.
    pub columns: Vec<TableColumn>,
    /// Label of the "create" button.
    pub create_label: String,
    /// Icon for empty state.
    pub empty_icon: String,
    /// Title for empty state.
    pub empty_title: String,
}

impl DataTableConfig {
    /// Create a new data table configuration.
    #[must_use]
    pub fn new(table_id: &str, title: &str) -> Self {
        Self {
            table_id: table_id.to_string(),
            title: title.to_string(),
            columns: vec![],
            create_label: "Create new".to_string(),
            empty_icon: "ph-list".to_string(),
            empty_title: "No items found".to_string(),
        }
    }

    /// Add a column.
    #[must_use]
    pub fn column(mut self, column: TableColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// Set the create button label.
    #[must_use]
    pub fn create_label(mut self, label: &str) -> Self {
        self.create_label = label.to_string();
        self
    }

    /// Set empty state configuration.
    #[must_use]
    pub fn empty_state(mut self, icon: &str, title: &str) -> Self {
        self.empty_icon = icon.to_string();
        self.empty_title = title.to_string();
        self
    }

    /// Whether `field` is the key of a sortable column.
    #[must_use]
    pub fn is_sortable(&self, field: &str) -> bool {
        self.columns.iter().any(|c| c.sortable && c.key == field)
    }
}

/// Build the shopping carts table configuration.
#[must_use]
pub fn shopping_carts_table_config() -> DataTableConfig {
    DataTableConfig::new("shopping-cart", "Shopping Carts")
        .column(TableColumn::sortable("id", "ID"))
        .column(TableColumn::sortable("placedDate", "Placed Date"))
        .column(TableColumn::sortable("status", "Status"))
        .column(TableColumn::sortable("totalPrice", "Total Price"))
        .column(TableColumn::sortable("paymentMethod", "Payment Method"))
        .column(TableColumn::sortable("paymentReference", "Payment Reference"))
        .column(TableColumn::new("customerDetails", "Customer Details"))
        .create_label("Create new Shopping Cart")
        .empty_state("ph-shopping-cart", "No Shopping Carts found")
}

/// Build the customer details table configuration.
#[must_use]
pub fn customer_details_table_config() -> DataTableConfig {
    DataTableConfig::new("customer-details", "Customer Details")
        .column(TableColumn::sortable("id", "ID"))
        .column(TableColumn::sortable("gender", "Gender"))
        .column(TableColumn::sortable("phone", "Phone"))
        .column(TableColumn::sortable("addressLine1", "Address Line 1"))
        .column(TableColumn::sortable("addressLine2", "Address Line 2"))
        .column(TableColumn::sortable("city", "City"))
        .column(TableColumn::sortable("country", "Country"))
        .column(TableColumn::new("user", "User"))
        .create_label("Create new Customer Details")
        .empty_state("ph-address-book", "No Customer Details found")
}

/// Build the products table configuration.
#[must_use]
pub fn products_table_config() -> DataTableConfig {
    DataTableConfig::new("product", "Products")
        .column(TableColumn::sortable("id", "ID"))
        .column(TableColumn::sortable("name", "Name"))
        .column(TableColumn::sortable("description", "Description"))
        .column(TableColumn::sortable("price", "Price"))
        .column(TableColumn::sortable("productSize", "Product Size"))
        .column(TableColumn::sortable("image", "Image"))
        .column(TableColumn::new("productCategory", "Product Category"))
        .create_label("Create new Product")
        .empty_state("ph-t-shirt", "No Products found")
}

/// Build the product categories table configuration.
#[must_use]
pub fn product_categories_table_config() -> DataTableConfig {
    DataTableConfig::new("product-category", "Product Categories")
        .column(TableColumn::sortable("id", "ID"))
        .column(TableColumn::sortable("name", "Name"))
        .column(TableColumn::sortable("description", "Description"))
        .create_label("Create new Product Category")
        .empty_state("ph-folders", "No Product Categories found")
}

/// Build the product orders table configuration.
#[must_use]
pub fn product_orders_table_config() -> DataTableConfig {
    DataTableConfig::new("product-order", "Product Orders")
        .column(TableColumn::sortable("id", "ID"))
        .column(TableColumn::sortable("quantity", "Quantity"))
        .column(TableColumn::sortable("totalPrice", "Total Price"))
        .column(TableColumn::new("product", "Product"))
        .column(TableColumn::new("cart", "Cart"))
        .create_label("Create new Product Order")
        .empty_state("ph-receipt", "No Product Orders found")
}
