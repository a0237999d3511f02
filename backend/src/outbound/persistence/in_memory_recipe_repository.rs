//! Process-local `RecipeRepository` used when no database is configured.
//!
//! Recipes live in insertion order behind a mutex. The lock is never held
//! across an await point.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{RecipeRepository, RecipeRepositoryError};
use crate::domain::{Recipe, RecipeContent, RecipeFilter, RecipeId};

/// In-memory implementation of the recipe repository port.
#[derive(Debug, Default)]
pub struct InMemoryRecipeRepository {
    store: Mutex<Vec<Recipe>>,
}

impl InMemoryRecipeRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Recipe>>, RecipeRepositoryError> {
        self.store
            .lock()
            .map_err(|_| RecipeRepositoryError::query("recipe store lock poisoned"))
    }
}

#[async_trait]
impl RecipeRepository for InMemoryRecipeRepository {
    async fn insert(&self, recipe: &Recipe) -> Result<RecipeId, RecipeRepositoryError> {
        let mut store = self.lock()?;
        if store.iter().any(|stored| stored.id() == recipe.id()) {
            return Err(RecipeRepositoryError::query("duplicate recipe id"));
        }
        store.push(recipe.clone());
        Ok(recipe.id())
    }

    async fn find_all(&self) -> Result<Vec<Recipe>, RecipeRepositoryError> {
        Ok(self.lock()?.clone())
    }

    async fn find_by_filter(
        &self,
        filter: &RecipeFilter,
    ) -> Result<Vec<Recipe>, RecipeRepositoryError> {
        Ok(self
            .lock()?
            .iter()
            .filter(|recipe| filter.matches(recipe))
            .cloned()
            .collect())
    }

    async fn update_fields(
        &self,
        id: &RecipeId,
        content: &RecipeContent,
    ) -> Result<u64, RecipeRepositoryError> {
        let mut store = self.lock()?;
        let Some(slot) = store.iter_mut().find(|recipe| recipe.id() == *id) else {
            return Ok(0);
        };
        *slot = slot.clone().with_content(content.clone());
        Ok(1)
    }

    async fn delete_by_id(&self, id: &RecipeId) -> Result<u64, RecipeRepositoryError> {
        let mut store = self.lock()?;
        let before = store.len();
        store.retain(|recipe| recipe.id() != *id);
        Ok(u64::try_from(before - store.len()).unwrap_or(u64::MAX))
    }
}
