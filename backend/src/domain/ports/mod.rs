//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`RecipeRepository`) are implemented by outbound adapters;
//! driving ports (`RecipeCommand`, `RecipeQuery`) are implemented by the
//! domain service and called by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod recipe_command;
mod recipe_query;
mod recipe_repository;

#[cfg(test)]
pub use recipe_command::MockRecipeCommand;
pub use recipe_command::{
    CreateRecipeRequest, DeleteOutcome, DeleteRecipeRequest, FixtureRecipeCommand, RecipeCommand,
    UpdateOutcome, UpdateRecipeRequest,
};
#[cfg(test)]
pub use recipe_query::MockRecipeQuery;
pub use recipe_query::{FixtureRecipeQuery, RecipeQuery, SearchRecipesRequest, TagSearchOutcome};
#[cfg(test)]
pub use recipe_repository::MockRecipeRepository;
pub use recipe_repository::{RecipeRepository, RecipeRepositoryError};
