//! Domain models shared between the storefront core and the HTTP client

pub mod category;
pub mod order;
pub mod product;
pub mod profile;

pub use category::{Category, Subcategory};
pub use order::{
    CustomOrderFinalize, CustomReference, LineItem, PaymentMethod, PaymentStatus, PendingOrder,
    StockLine, StockOrderRequest,
};
pub use product::{Product, SubcategoryRef};
pub use profile::DeliveryProfile;
