use serde::{Deserialize, Serialize};

/// Kind of reaction a user can attach to a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionType {
    pub id: i32,
    pub name: String,
    pub image_location: String,
}

/// Reaction types seeded into a fresh store, as `(name, image)` pairs.
/// Ids are assigned in order starting at 1.
pub const DEFAULT_REACTION_TYPES: &[(&str, &str)] = &[
    ("like", "/reactions/like.png"),
    ("love", "/reactions/love.png"),
    ("laugh", "/reactions/laugh.png"),
    ("wow", "/reactions/wow.png"),
    ("sad", "/reactions/sad.png"),
    ("angry", "/reactions/angry.png"),
];

/// One reaction event: a user reacted to a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostReaction {
    pub id: i32,
    pub post_id: i32,
    pub user_profile_id: i32,
    pub reaction_type_id: i32,
}

/// Number of reactions of one type on a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionCount {
    pub reaction_type: ReactionType,
    pub count: i64,
}
