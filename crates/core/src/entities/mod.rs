//! Entity records served by the remote CRUD service.
//!
//! Records are plain data: the admin only reads pages of them and links to
//! the views that create, edit and delete them. Field names follow the
//! service's camelCase JSON.

mod customer_details;
mod product;
mod product_category;
mod product_order;
mod shopping_cart;

pub use customer_details::{AccountRef, CustomerDetails};
pub use product::Product;
pub use product_category::ProductCategory;
pub use product_order::ProductOrder;
pub use shopping_cart::ShoppingCart;
