//! Request bodies accepted by the API. Field names are camelCase on the wire.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, de::Error as DeserializerError};

/// Body of `POST /api/post` and `PUT /api/post/{id}`.
///
/// `userProfileId` is accepted for compatibility with older clients but the
/// server always uses the authenticated viewer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRequest {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub user_profile_id: Option<i32>,
    pub category_id: i32,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub image_location: Option<String>,
    #[serde(deserialize_with = "deserialize_publish_date")]
    pub publish_date_time: DateTime<Utc>,
    #[serde(default)]
    pub is_approved: bool,
}

// Clients send RFC 3339, a local date-time without offset, or a bare date.
// Values without an offset are taken as UTC.
fn deserialize_publish_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_publish_date(value.trim()).ok_or_else(|| {
        DeserializerError::custom(format!("invalid publish date `{value}`"))
    })
}

fn parse_publish_date(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(date_time) = DateTime::parse_from_rfc3339(value) {
        return Some(date_time.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Body of `POST /api/post/addreaction`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionRequest {
    pub post_id: i32,
    pub reaction_type_id: i32,
    /// Ignored; the reaction is recorded under the viewer.
    #[serde(default)]
    pub user_profile_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRequest {
    pub name: String,
}

/// Body of `PUT /api/category`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdateRequest {
    pub id: i32,
    pub name: String,
}

/// Body of `POST /api/userprofile`. The external identity id comes from the
/// bearer token, never from the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileRequest {
    pub display_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub image_location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequest {
    pub post_id: i32,
    pub subject: String,
    pub content: String,
}

/// Body of `PUT /api/comment/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentUpdateRequest {
    pub subject: String,
    pub content: String,
}
