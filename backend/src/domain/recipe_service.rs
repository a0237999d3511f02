//! Recipe domain service.
//!
//! Implements both recipe driving ports on top of the repository port. The
//! service assigns identifiers and publication timestamps, and turns matched
//! record counts into tagged outcomes.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::debug;

use crate::domain::ports::{
    CreateRecipeRequest, DeleteOutcome, DeleteRecipeRequest, RecipeCommand, RecipeQuery,
    RecipeRepository, RecipeRepositoryError, SearchRecipesRequest, TagSearchOutcome,
    UpdateOutcome, UpdateRecipeRequest,
};
use crate::domain::{Error, Recipe, RecipeFilter};

const INSERT_FAILED_MESSAGE: &str = "Error while inserting a new recipe";

fn map_repository_error(error: RecipeRepositoryError) -> Error {
    match error {
        RecipeRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("recipe repository unavailable: {message}"))
        }
        RecipeRepositoryError::Query { message } => {
            Error::internal(format!("recipe repository error: {message}"))
        }
    }
}

/// Recipe service implementing [`RecipeCommand`] and [`RecipeQuery`].
#[derive(Clone)]
pub struct RecipeService<R> {
    recipe_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> RecipeService<R> {
    /// Create a new service over `recipe_repo`, stamping records with `clock`.
    pub fn new(recipe_repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { recipe_repo, clock }
    }
}

#[async_trait]
impl<R> RecipeCommand for RecipeService<R>
where
    R: RecipeRepository,
{
    async fn create(&self, request: CreateRecipeRequest) -> Result<Recipe, Error> {
        let recipe = Recipe::publish(request.content, self.clock.utc());

        self.recipe_repo.insert(&recipe).await.map_err(|err| {
            debug!(error = %err, recipe_id = %recipe.id(), "recipe insert failed");
            match err {
                RecipeRepositoryError::Connection { .. } => {
                    Error::service_unavailable(INSERT_FAILED_MESSAGE)
                }
                RecipeRepositoryError::Query { .. } => Error::internal(INSERT_FAILED_MESSAGE),
            }
        })?;

        Ok(recipe)
    }

    async fn update(&self, request: UpdateRecipeRequest) -> Result<UpdateOutcome, Error> {
        let matched = self
            .recipe_repo
            .update_fields(&request.id, &request.content)
            .await
            .map_err(map_repository_error)?;

        Ok(UpdateOutcome::from_matched(matched))
    }

    async fn delete(&self, request: DeleteRecipeRequest) -> Result<DeleteOutcome, Error> {
        let removed = self
            .recipe_repo
            .delete_by_id(&request.id)
            .await
            .map_err(map_repository_error)?;

        Ok(DeleteOutcome::from_removed(removed))
    }
}

#[async_trait]
impl<R> RecipeQuery for RecipeService<R>
where
    R: RecipeRepository,
{
    async fn list(&self) -> Result<Vec<Recipe>, Error> {
        self.recipe_repo
            .find_all()
            .await
            .map_err(map_repository_error)
    }

    async fn search(&self, request: SearchRecipesRequest) -> Result<TagSearchOutcome, Error> {
        let filter = RecipeFilter::from_tag_query(request.tag);
        let recipes = self
            .recipe_repo
            .find_by_filter(&filter)
            .await
            .map_err(map_repository_error)?;

        Ok(TagSearchOutcome::from_matches(recipes))
    }
}

#[cfg(test)]
#[path = "recipe_service_tests.rs"]
mod tests;
