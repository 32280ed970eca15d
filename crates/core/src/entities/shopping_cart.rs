use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{CustomerDetailsId, OrderStatus, PaymentMethod, Reference, ShoppingCartId};

/// A customer's shopping cart (an order once placed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingCart {
    pub id: ShoppingCartId,
    #[serde(default)]
    pub placed_date: Option<DateTime<Utc>>,
    pub status: OrderStatus,
    pub total_price: Decimal,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub payment_reference: Option<String>,
    /// Owning customer, if the cart has been assigned one.
    #[serde(default)]
    pub customer_details: Option<Reference<CustomerDetailsId>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_cart() {
        let json = r#"{
            "id": 1,
            "placedDate": "1970-01-01T00:00:00Z",
            "status": "COMPLETED",
            "totalPrice": 0,
            "paymentMethod": "CREDIT_CARD",
            "paymentReference": "AAAAAAAAAA",
            "customerDetails": {"id": 7, "phone": "555-0100"}
        }"#;
        let cart: ShoppingCart = serde_json::from_str(json).unwrap();
        assert_eq!(cart.id, ShoppingCartId::new(1));
        assert_eq!(cart.status, OrderStatus::Completed);
        assert_eq!(cart.total_price, Decimal::ZERO);
        assert_eq!(cart.payment_reference.as_deref(), Some("AAAAAAAAAA"));
        assert_eq!(
            cart.customer_details,
            Some(Reference::new(CustomerDetailsId::new(7)))
        );
        assert!(cart.placed_date.is_some());
    }

    #[test]
    fn test_deserialize_cart_without_optional_fields() {
        let json = r#"{"id": 2, "status": "PAID", "totalPrice": "12.50", "paymentMethod": "IDEAL", "customerDetails": null}"#;
        let cart: ShoppingCart = serde_json::from_str(json).unwrap();
        assert_eq!(cart.placed_date, None);
        assert_eq!(cart.payment_reference, None);
        assert_eq!(cart.customer_details, None);
        assert_eq!(cart.total_price, Decimal::new(1250, 2));
    }
}
