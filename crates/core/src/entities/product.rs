use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{ProductCategoryId, ProductId, Reference, Size};

/// A sellable product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
    pub product_size: Size,
    /// MIME type of `image`, present whenever `image` is.
    #[serde(default)]
    pub image_content_type: Option<String>,
    /// Base64 image payload.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub product_category: Option<Reference<ProductCategoryId>>,
}

impl Product {
    /// `data:` URI for the product image, if one is attached.
    #[must_use]
    pub fn image_data_uri(&self) -> Option<String> {
        match (&self.image_content_type, &self.image) {
            (Some(content_type), Some(payload)) if !payload.is_empty() => {
                Some(format!("data:{content_type};base64,{payload}"))
            }
            _ => None,
        }
    }
}
