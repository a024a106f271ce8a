use serde::{Deserialize, Serialize};

use super::UNSAVED_ID;
use crate::error::DomainError;

/// Category entity. Soft-deleted through `is_active`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub is_active: bool,
}

impl Category {
    pub const NAME_MAX_LEN: usize = 50;

    /// Create a new active category. The name is validated first.
    pub fn new(name: &str) -> Result<Self, DomainError> {
        Ok(Self {
            id: UNSAVED_ID,
            name: Self::normalize_name(name)?,
            is_active: true,
        })
    }

    /// Trim a category name and check its length.
    pub fn normalize_name(name: &str) -> Result<String, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::Validation(
                "Category name must not be empty".to_string(),
            ));
        }
        if name.chars().count() > Self::NAME_MAX_LEN {
            return Err(DomainError::Validation(format!(
                "Category name must be at most {} characters",
                Self::NAME_MAX_LEN
            )));
        }
        Ok(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed() {
        let category = Category::new("  News ").unwrap();
        assert_eq!(category.name, "News");
        assert!(category.is_active);
    }

    #[test]
    fn name_length_is_bounded() {
        assert!(Category::new(&"a".repeat(50)).is_ok());
        assert!(matches!(
            Category::new(&"a".repeat(51)),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            Category::new("   "),
            Err(DomainError::Validation(_))
        ));
    }
}
