//! Driving port for recipe mutations.
//!
//! Create, replace-content and delete. Each write is a single store call;
//! outcomes tell the caller whether a record was matched.

use async_trait::async_trait;

use crate::domain::{Error, Recipe, RecipeContent, RecipeId};

/// Request to create a recipe from client-supplied content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRecipeRequest {
    pub content: RecipeContent,
}

/// Request to replace the content fields of a recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRecipeRequest {
    pub id: RecipeId,
    pub content: RecipeContent,
}

/// Request to remove a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteRecipeRequest {
    pub id: RecipeId,
}

/// Result of a content replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// One record matched and was rewritten.
    Updated,
    /// No record has the requested id; the store is unchanged.
    NoMatch,
}

/// Result of a delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// One record was removed.
    Deleted,
    /// No record had the requested id.
    AlreadyAbsent,
}

impl UpdateOutcome {
    /// Classify a matched-record count.
    #[must_use]
    pub fn from_matched(matched: u64) -> Self {
        if matched == 0 {
            Self::NoMatch
        } else {
            Self::Updated
        }
    }
}

impl DeleteOutcome {
    /// Classify a removed-record count.
    #[must_use]
    pub fn from_removed(removed: u64) -> Self {
        if removed == 0 {
            Self::AlreadyAbsent
        } else {
            Self::Deleted
        }
    }
}

/// Driving port for recipe write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeCommand: Send + Sync {
    /// Assign an id and publication time to `request.content` and store it.
    ///
    /// Returns the full stored record.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use recipes_api::domain::RecipeContent;
    /// # use recipes_api::domain::ports::{CreateRecipeRequest, FixtureRecipeCommand, RecipeCommand};
    /// # async fn example() -> Result<(), recipes_api::domain::Error> {
    /// let command = FixtureRecipeCommand;
    /// let recipe = command
    ///     .create(CreateRecipeRequest {
    ///         content: RecipeContent {
    ///             name: "Omelette".to_owned(),
    ///             ..RecipeContent::default()
    ///         },
    ///     })
    ///     .await?;
    /// assert_eq!(recipe.name(), "Omelette");
    /// # Ok(())
    /// # }
    /// ```
    async fn create(&self, request: CreateRecipeRequest) -> Result<Recipe, Error>;

    /// Replace the four content fields of an existing recipe.
    ///
    /// `id` and `publishedAt` are never touched. A missing record is not an
    /// error.
    async fn update(&self, request: UpdateRecipeRequest) -> Result<UpdateOutcome, Error>;

    /// Remove a recipe. Deleting a missing record is not an error.
    async fn delete(&self, request: DeleteRecipeRequest) -> Result<DeleteOutcome, Error>;
}

/// Fixture command implementation for tests that do not need persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRecipeCommand;

#[async_trait]
impl RecipeCommand for FixtureRecipeCommand {
    async fn create(&self, request: CreateRecipeRequest) -> Result<Recipe, Error> {
        Ok(Recipe::publish(request.content, chrono::Utc::now()))
    }

    async fn update(&self, _request: UpdateRecipeRequest) -> Result<UpdateOutcome, Error> {
        Ok(UpdateOutcome::NoMatch)
    }

    async fn delete(&self, _request: DeleteRecipeRequest) -> Result<DeleteOutcome, Error> {
        Ok(DeleteOutcome::AlreadyAbsent)
    }
}
