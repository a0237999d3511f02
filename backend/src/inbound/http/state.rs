//! Shared HTTP adapter state.
//!
//! Handlers receive this state via `actix_web::web::Data` so they depend only
//! on the recipe driving ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    FixtureRecipeCommand, FixtureRecipeQuery, RecipeCommand, RecipeQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub recipes: Arc<dyn RecipeCommand>,
    pub recipes_query: Arc<dyn RecipeQuery>,
}

impl HttpState {
    /// Construct state from the two recipe ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use recipes_api::domain::ports::{FixtureRecipeCommand, FixtureRecipeQuery};
    /// use recipes_api::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(FixtureRecipeCommand), Arc::new(FixtureRecipeQuery));
    /// let _query = state.recipes_query.clone();
    /// ```
    pub fn new(recipes: Arc<dyn RecipeCommand>, recipes_query: Arc<dyn RecipeQuery>) -> Self {
        Self {
            recipes,
            recipes_query,
        }
    }

    /// Construct state where one service implements both ports.
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: RecipeCommand + RecipeQuery + 'static,
    {
        Self::new(service.clone(), service)
    }
}

impl Default for HttpState {
    fn default() -> Self {
        Self::new(Arc::new(FixtureRecipeCommand), Arc::new(FixtureRecipeQuery))
    }
}
