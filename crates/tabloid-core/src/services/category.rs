use std::sync::Arc;

use crate::domain::Category;
use crate::error::{DomainError, RepoError};
use crate::policy::{self, Viewer};
use crate::ports::CategoryRepository;

/// Admin-only category management.
pub struct CategoryService {
    categories: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }

    pub async fn list(&self, viewer: &Viewer) -> Result<Vec<Category>, DomainError> {
        policy::require_admin(viewer)?;
        let mut categories = self.categories.find_all().await?;
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    pub async fn create(&self, viewer: &Viewer, name: &str) -> Result<Category, DomainError> {
        policy::require_admin(viewer)?;

        let category = Category::new(name)?;
        if self.categories.find_by_name(&category.name).await?.is_some() {
            return Err(duplicate(&category.name));
        }

        let name = category.name.clone();
        let saved = self.categories.save(category).await.map_err(|e| match e {
            RepoError::Constraint(_) => duplicate(&name),
            other => other.into(),
        })?;

        tracing::info!(category_id = saved.id, name = %saved.name, "Category created");
        Ok(saved)
    }

    /// Rename a category. Activation state is left untouched.
    pub async fn rename(
        &self,
        viewer: &Viewer,
        id: i32,
        name: &str,
    ) -> Result<Category, DomainError> {
        policy::require_admin(viewer)?;

        let name = Category::normalize_name(name)?;
        let mut category = self.find(id).await?;
        if let Some(existing) = self.categories.find_by_name(&name).await? {
            if existing.id != id {
                return Err(duplicate(&name));
            }
        }

        category.name = name.clone();
        self.categories.save(category).await.map_err(|e| match e {
            RepoError::Constraint(_) => duplicate(&name),
            RepoError::NotFound => DomainError::not_found("Category", id),
            other => other.into(),
        })
    }

    pub async fn activate(&self, viewer: &Viewer, id: i32) -> Result<Category, DomainError> {
        self.set_active(viewer, id, true).await
    }

    /// Soft-delete a category.
    pub async fn deactivate(&self, viewer: &Viewer, id: i32) -> Result<Category, DomainError> {
        self.set_active(viewer, id, false).await
    }

    async fn set_active(
        &self,
        viewer: &Viewer,
        id: i32,
        is_active: bool,
    ) -> Result<Category, DomainError> {
        policy::require_admin(viewer)?;

        let mut category = self.find(id).await?;
        category.is_active = is_active;
        let saved = self.categories.save(category).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::not_found("Category", id),
            other => other.into(),
        })?;

        tracing::info!(category_id = id, is_active, "Category activation changed");
        Ok(saved)
    }

    async fn find(&self, id: i32) -> Result<Category, DomainError> {
        self.categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Category", id))
    }
}

fn duplicate(name: &str) -> DomainError {
    DomainError::Duplicate(format!("Category '{name}' already exists"))
}
