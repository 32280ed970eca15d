use serde::{Deserialize, Serialize};

use crate::types::{CustomerDetailsId, Gender, UserId};

/// Account record a customer profile belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRef {
    pub id: UserId,
    #[serde(default)]
    pub login: Option<String>,
}

/// Postal and contact details of a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    pub id: CustomerDetailsId,
    pub gender: Gender,
    pub phone: String,
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: Option<String>,
    pub city: String,
    pub country: String,
    #[serde(default)]
    pub user: Option<AccountRef>,
}
