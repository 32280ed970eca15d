use serde::{Deserialize, Serialize};

use crate::types::ProductCategoryId;

/// Grouping of products shown in the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCategory {
    pub id: ProductCategoryId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
