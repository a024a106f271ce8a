//! SeaORM entities and their conversions to domain types.

pub mod category;
pub mod comment;
pub mod post;
pub mod post_reaction;
pub mod reaction_type;
pub mod user_profile;

use sea_orm::ActiveValue::{self, NotSet, Set};
use tabloid_core::domain::UNSAVED_ID;

/// Primary key value for an active model: unsaved entities leave it to the
/// database sequence.
pub(crate) fn primary_key(id: i32) -> ActiveValue<i32> {
    if id == UNSAVED_ID { NotSet } else { Set(id) }
}
