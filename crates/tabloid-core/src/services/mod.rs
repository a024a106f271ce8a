//! Application services.
//!
//! Each service receives the requesting [`Viewer`](crate::Viewer) explicitly,
//! applies the rules from [`policy`](crate::policy) and delegates storage to
//! the repository ports.

mod category;
mod comment;
mod post;
mod reaction;
mod user_profile;

pub use category::CategoryService;
pub use comment::CommentService;
pub use post::PostService;
pub use reaction::ReactionService;
pub use user_profile::UserProfileService;
