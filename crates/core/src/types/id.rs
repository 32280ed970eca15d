//! Record ids.
//!
//! Every record the REST service returns carries a server-assigned integer
//! id. Each record type gets its own id type so a cart id cannot be passed
//! where a product id is expected.

use serde::{Deserialize, Serialize};

/// Declare one id newtype per record.
///
/// ```rust
/// # use store_admin_core::record_ids;
/// record_ids! {
///     /// Id of a warehouse.
///     WarehouseId,
///     /// Id of a shelf.
///     ShelfId,
/// }
///
/// assert_eq!(WarehouseId::new(3).get(), ShelfId::new(3).get());
/// assert_eq!(WarehouseId::from(3).to_string(), "3");
/// ```
#[macro_export]
macro_rules! record_ids {
    ($($(#[$doc:meta])* $name:ident),+ $(,)?) => {$(
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            #[must_use]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }
    )+};
}

record_ids! {
    /// Id of a [`crate::ShoppingCart`].
    ShoppingCartId,
    /// Id of a [`crate::CustomerDetails`] record.
    CustomerDetailsId,
    /// Id of a [`crate::Product`].
    ProductId,
    /// Id of a [`crate::ProductCategory`].
    ProductCategoryId,
    /// Id of a [`crate::ProductOrder`].
    ProductOrderId,
    /// Id of the login account behind a customer.
    UserId,
}

/// Reference from one record to another by id.
///
/// The remote service embeds the referenced record; only its id is needed to
/// link to it, so every other field is ignored on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference<I> {
    /// Id of the referenced record.
    pub id: I,
}

impl<I> Reference<I> {
    /// Create a reference to the record with the given id.
    #[must_use]
    pub const fn new(id: I) -> Self {
        Self { id }
    }
}
