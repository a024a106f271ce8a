//! Table storage behind the in-memory repositories.
//!
//! All tables live behind one async `RwLock`, so a write sees a consistent
//! view of every table it checks references against.

use std::collections::BTreeMap;

use tokio::sync::RwLock;

use tabloid_core::domain::{
    Category, Comment, DEFAULT_REACTION_TYPES, Post, PostReaction, ReactionType, UNSAVED_ID,
    UserProfile,
};
use tabloid_core::error::RepoError;

/// Rows of one entity type keyed by id.
pub struct Table<T> {
    pub(crate) rows: BTreeMap<i32, T>,
    last_id: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<T: Record> Table<T> {
    /// Insert a row under the next free id.
    pub(crate) fn insert(&mut self, mut row: T) -> T {
        self.last_id += 1;
        row.set_id(self.last_id);
        self.rows.insert(self.last_id, row.clone());
        row
    }

    pub(crate) fn contains(&self, id: i32) -> bool {
        self.rows.contains_key(&id)
    }
}

#[derive(Default)]
pub struct Tables {
    pub(crate) users: Table<UserProfile>,
    pub(crate) posts: Table<Post>,
    pub(crate) categories: Table<Category>,
    pub(crate) comments: Table<Comment>,
    pub(crate) reaction_types: Table<ReactionType>,
    pub(crate) reactions: Table<PostReaction>,
}

/// Shared store for all in-memory repositories.
pub struct MemoryStore {
    pub(crate) tables: RwLock<Tables>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
        }
    }

    /// A store holding the default reaction types.
    pub fn seeded() -> Self {
        let mut tables = Tables::default();
        for (name, image_location) in DEFAULT_REACTION_TYPES {
            tables.reaction_types.insert(ReactionType {
                id: UNSAVED_ID,
                name: name.to_string(),
                image_location: image_location.to_string(),
            });
        }
        Self {
            tables: RwLock::new(tables),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

/// An entity the in-memory store knows how to keep.
///
/// The hooks mirror the constraints of the relational schema: unique columns,
/// foreign keys and `ON DELETE CASCADE`.
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> i32;
    fn set_id(&mut self, id: i32);
    fn table(tables: &Tables) -> &Table<Self>;
    fn table_mut(tables: &mut Tables) -> &mut Table<Self>;

    /// Value that must be unique across the table.
    fn unique_key(&self) -> Option<&str> {
        None
    }

    /// Check that referenced rows exist.
    fn check_references(&self, _tables: &Tables) -> Result<(), RepoError> {
        Ok(())
    }

    /// Remove rows that depend on the deleted row.
    fn cascade_delete(_id: i32, _tables: &mut Tables) {}
}

fn require(exists: bool, what: &str) -> Result<(), RepoError> {
    if exists {
        Ok(())
    } else {
        Err(RepoError::Constraint(format!("foreign key violation: {what}")))
    }
}

impl Record for UserProfile {
    fn id(&self) -> i32 {
        self.id
    }
    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
    fn table(tables: &Tables) -> &Table<Self> {
        &tables.users
    }
    fn table_mut(tables: &mut Tables) -> &mut Table<Self> {
        &mut tables.users
    }
    fn unique_key(&self) -> Option<&str> {
        Some(&self.external_identity_id)
    }
}

impl Record for Category {
    fn id(&self) -> i32 {
        self.id
    }
    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
    fn table(tables: &Tables) -> &Table<Self> {
        &tables.categories
    }
    fn table_mut(tables: &mut Tables) -> &mut Table<Self> {
        &mut tables.categories
    }
    fn unique_key(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl Record for Post {
    fn id(&self) -> i32 {
        self.id
    }
    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
    fn table(tables: &Tables) -> &Table<Self> {
        &tables.posts
    }
    fn table_mut(tables: &mut Tables) -> &mut Table<Self> {
        &mut tables.posts
    }
    fn check_references(&self, tables: &Tables) -> Result<(), RepoError> {
        require(tables.users.contains(self.user_profile_id), "post.user_profile_id")?;
        require(tables.categories.contains(self.category_id), "post.category_id")
    }
    fn cascade_delete(id: i32, tables: &mut Tables) {
        tables.comments.rows.retain(|_, c| c.post_id != id);
        tables.reactions.rows.retain(|_, r| r.post_id != id);
    }
}

impl Record for Comment {
    fn id(&self) -> i32 {
        self.id
    }
    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
    fn table(tables: &Tables) -> &Table<Self> {
        &tables.comments
    }
    fn table_mut(tables: &mut Tables) -> &mut Table<Self> {
        &mut tables.comments
    }
    fn check_references(&self, tables: &Tables) -> Result<(), RepoError> {
        require(tables.posts.contains(self.post_id), "comment.post_id")?;
        require(tables.users.contains(self.user_profile_id), "comment.user_profile_id")
    }
}

impl Record for ReactionType {
    fn id(&self) -> i32 {
        self.id
    }
    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
    fn table(tables: &Tables) -> &Table<Self> {
        &tables.reaction_types
    }
    fn table_mut(tables: &mut Tables) -> &mut Table<Self> {
        &mut tables.reaction_types
    }
}

impl Record for PostReaction {
    fn id(&self) -> i32 {
        self.id
    }
    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
    fn table(tables: &Tables) -> &Table<Self> {
        &tables.reactions
    }
    fn table_mut(tables: &mut Tables) -> &mut Table<Self> {
        &mut tables.reactions
    }
    fn check_references(&self, tables: &Tables) -> Result<(), RepoError> {
        require(tables.posts.contains(self.post_id), "post_reaction.post_id")?;
        require(
            tables.users.contains(self.user_profile_id),
            "post_reaction.user_profile_id",
        )?;
        require(
            tables.reaction_types.contains(self.reaction_type_id),
            "post_reaction.reaction_type_id",
        )
    }
}
