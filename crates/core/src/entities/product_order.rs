use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{ProductId, ProductOrderId, Reference, ShoppingCartId};

/// A line of a shopping cart: a quantity of one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductOrder {
    pub id: ProductOrderId,
    pub quantity: i32,
    pub total_price: Decimal,
    #[serde(default)]
    pub product: Option<Reference<ProductId>>,
    #[serde(default)]
    pub cart: Option<Reference<ShoppingCartId>>,
}
