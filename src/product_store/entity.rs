//! StoreEntity trait implementation for the Product model.
//!
//! The demo catalogue API echoes a constant id and may reformat fields on create,
//! so the stored record takes every visible field from the caller's payload and
//! only keeps what the payload cannot supply (the rating) from the echo.

use super::ProductError;
use crate::model::{NewProduct, Product, ProductId};
use store_framework::StoreEntity;

impl NewProduct {
    /// Checks the payload before it is sent anywhere.
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.title.trim().is_empty() {
            return Err(ProductError::MissingTitle);
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ProductError::InvalidPrice(self.price));
        }
        Ok(())
    }
}

impl StoreEntity for Product {
    type Id = ProductId;
    type Create = NewProduct;

    fn id(&self) -> &ProductId {
        &self.id
    }

    fn validate(input: &NewProduct) -> Result<(), String> {
        input.validate().map_err(|e| e.to_string())
    }

    /// Overlays the payload onto the echo under the locally issued id.
    fn from_created(echo: Self, input: NewProduct, id: ProductId) -> Self {
        Self {
            id,
            title: input.title,
            price: input.price,
            description: input.description,
            image: input.image,
            category: input.category,
            rating: echo.rating,
        }
    }
}
