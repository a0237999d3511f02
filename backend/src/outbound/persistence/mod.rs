//! Recipe persistence adapters.
//!
//! [`DieselRecipeRepository`] stores recipes in PostgreSQL via `diesel-async`
//! and a `bb8` pool. [`InMemoryRecipeRepository`] keeps them in process for
//! local runs without a database.
//!
//! Diesel row structs (`models.rs`) and the table definition (`schema.rs`)
//! stay private to this module; every database error is mapped onto
//! `RecipeRepositoryError` before it leaves.
//!
//! # Example
//!
//! ```ignore
//! use recipes_api::outbound::persistence::{DbPool, DieselRecipeRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/recipes")).await?;
//! let repo = DieselRecipeRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_recipe_repository;
mod in_memory_recipe_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_recipe_repository::{DEFAULT_QUERY_TIMEOUT, DieselRecipeRepository};
pub use in_memory_recipe_repository::InMemoryRecipeRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
