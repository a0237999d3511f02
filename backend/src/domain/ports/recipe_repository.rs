//! Port for recipe persistence.

use async_trait::async_trait;

use crate::domain::{Recipe, RecipeContent, RecipeFilter, RecipeId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by recipe repository adapters.
    pub enum RecipeRepositoryError {
        /// Store unreachable, pool checkout failed, or the call timed out.
        Connection { message: String } =>
            "recipe repository connection failed: {message}",
        /// Statement or row decoding failed.
        Query { message: String } =>
            "recipe repository query failed: {message}",
    }
}

/// Port for reading and writing recipes.
///
/// Writes report the number of records they matched so the service can tell
/// "changed" apart from "nothing there" without a separate existence check.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Persist a new recipe and return its identifier.
    async fn insert(&self, recipe: &Recipe) -> Result<RecipeId, RecipeRepositoryError>;

    /// Every stored recipe, in store order.
    async fn find_all(&self) -> Result<Vec<Recipe>, RecipeRepositoryError>;

    /// Stored recipes matching `filter`, in store order.
    async fn find_by_filter(
        &self,
        filter: &RecipeFilter,
    ) -> Result<Vec<Recipe>, RecipeRepositoryError>;

    /// Replace the content fields of the recipe with `id`.
    ///
    /// Returns the number of records matched (0 or 1).
    async fn update_fields(
        &self,
        id: &RecipeId,
        content: &RecipeContent,
    ) -> Result<u64, RecipeRepositoryError>;

    /// Remove the recipe with `id`.
    ///
    /// Returns the number of records removed (0 or 1).
    async fn delete_by_id(&self, id: &RecipeId) -> Result<u64, RecipeRepositoryError>;
}
