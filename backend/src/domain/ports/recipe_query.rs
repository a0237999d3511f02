//! Driving port for recipe reads.

use async_trait::async_trait;

use crate::domain::{Error, Recipe};

/// Request to search recipes by tag.
///
/// A missing tag searches for the literal empty tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRecipesRequest {
    pub tag: Option<String>,
}

/// Result of a tag search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagSearchOutcome {
    /// At least one recipe carries the tag, in store order.
    Matches(Vec<Recipe>),
    /// No recipe carries the tag.
    Empty,
}

impl TagSearchOutcome {
    /// Classify a result set.
    #[must_use]
    pub fn from_matches(recipes: Vec<Recipe>) -> Self {
        if recipes.is_empty() {
            Self::Empty
        } else {
            Self::Matches(recipes)
        }
    }
}

/// Driving port for recipe read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeQuery: Send + Sync {
    /// Every stored recipe; an empty store yields an empty list.
    async fn list(&self) -> Result<Vec<Recipe>, Error>;

    /// Recipes whose tags contain the requested tag exactly.
    async fn search(&self, request: SearchRecipesRequest) -> Result<TagSearchOutcome, Error>;
}

/// Fixture query implementation backed by an empty store.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRecipeQuery;

#[async_trait]
impl RecipeQuery for FixtureRecipeQuery {
    async fn list(&self) -> Result<Vec<Recipe>, Error> {
        Ok(Vec::new())
    }

    async fn search(&self, _request: SearchRecipesRequest) -> Result<TagSearchOutcome, Error> {
        Ok(TagSearchOutcome::Empty)
    }
}
