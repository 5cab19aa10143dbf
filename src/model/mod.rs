//! Pure data structures implementing the [`StoreEntity`](store_framework::StoreEntity) trait.

pub mod product;
pub mod user;

pub use product::*;
pub use user::*;
