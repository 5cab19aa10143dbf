//! StoreEntity trait implementation for the User model.
//!
//! Users are read-only, so the create payload is [`ReadOnly`] and
//! `from_created` can never be reached.

use crate::model::{User, UserId};
use store_framework::{ReadOnly, StoreEntity};

impl StoreEntity for User {
    type Id = UserId;
    type Create = ReadOnly;

    fn id(&self) -> &UserId {
        &self.id
    }

    fn from_created(_echo: Self, input: ReadOnly, _id: UserId) -> Self {
        match input {}
    }
}
