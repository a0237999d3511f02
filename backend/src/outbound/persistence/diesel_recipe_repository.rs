//! PostgreSQL-backed `RecipeRepository` implementation using Diesel ORM.
//!
//! Every call, including pool checkout, runs under a query timeout. A call
//! that exceeds it is reported as a connection failure.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{RecipeRepository, RecipeRepositoryError};
use crate::domain::{Recipe, RecipeContent, RecipeFilter, RecipeId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewRecipeRow, RecipeContentChangeset, RecipeRow};
use super::pool::{DbPool, PoolError};
use super::schema::recipes;

/// Default per-call timeout.
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(10);

/// Diesel-backed implementation of the recipe repository port.
#[derive(Clone)]
pub struct DieselRecipeRepository {
    pool: DbPool,
    query_timeout: Duration,
}

impl DieselRecipeRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            query_timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }

    /// Override the per-call timeout.
    pub fn with_query_timeout(mut self, query_timeout: Duration) -> Self {
        self.query_timeout = query_timeout;
        self
    }

    async fn bounded<T, F>(
        &self,
        operation: &'static str,
        call: F,
    ) -> Result<T, RecipeRepositoryError>
    where
        F: Future<Output = Result<T, RecipeRepositoryError>>,
    {
        match tokio::time::timeout(self.query_timeout, call).await {
            Ok(result) => result,
            Err(_) => {
                debug!(
                    operation,
                    timeout_ms = self.query_timeout.as_millis(),
                    "recipe query timed out"
                );
                Err(timeout_error(self.query_timeout))
            }
        }
    }
}

fn timeout_error(limit: Duration) -> RecipeRepositoryError {
    RecipeRepositoryError::connection(format!(
        "query timed out after {}ms",
        limit.as_millis()
    ))
}

/// Map pool errors to domain repository errors.
fn map_pool_error(error: PoolError) -> RecipeRepositoryError {
    map_basic_pool_error(error, RecipeRepositoryError::connection)
}

/// Map Diesel errors to domain repository errors.
fn map_diesel_error(error: diesel::result::Error) -> RecipeRepositoryError {
    map_basic_diesel_error(
        error,
        RecipeRepositoryError::query,
        RecipeRepositoryError::connection,
    )
}

/// Convert a database row into a domain recipe.
fn row_to_recipe(row: RecipeRow) -> Result<Recipe, RecipeRepositoryError> {
    let RecipeRow {
        id,
        name,
        tags,
        ingredients,
        instructions,
        published_at,
    } = row;

    let id = id
        .parse::<RecipeId>()
        .map_err(|err| RecipeRepositoryError::query(format!("stored recipe id {id:?}: {err}")))?;

    Ok(Recipe::from_parts(
        id,
        RecipeContent {
            name,
            tags,
            ingredients,
            instructions,
        },
        published_at,
    ))
}

fn rows_to_recipes(rows: Vec<RecipeRow>) -> Result<Vec<Recipe>, RecipeRepositoryError> {
    rows.into_iter().map(row_to_recipe).collect()
}

fn affected(count: usize) -> u64 {
    u64::try_from(count).unwrap_or(u64::MAX)
}

#[async_trait]
impl RecipeRepository for DieselRecipeRepository {
    async fn insert(&self, recipe: &Recipe) -> Result<RecipeId, RecipeRepositoryError> {
        self.bounded("insert", async {
            let mut conn = self.pool.get().await.map_err(map_pool_error)?;
            let new_row = NewRecipeRow {
                id: recipe.id().to_hex(),
                name: recipe.name(),
                tags: recipe.tags(),
                ingredients: recipe.ingredients(),
                instructions: recipe.instructions(),
                published_at: recipe.published_at(),
            };

            diesel::insert_into(recipes::table)
                .values(&new_row)
                .execute(&mut conn)
                .await
                .map(|_| recipe.id())
                .map_err(map_diesel_error)
        })
        .await
    }

    async fn find_all(&self) -> Result<Vec<Recipe>, RecipeRepositoryError> {
        self.bounded("find_all", async {
            let mut conn = self.pool.get().await.map_err(map_pool_error)?;

            let rows: Vec<RecipeRow> = recipes::table
                .order(recipes::seq.asc())
                .select(RecipeRow::as_select())
                .load(&mut conn)
                .await
                .map_err(map_diesel_error)?;

            rows_to_recipes(rows)
        })
        .await
    }

    async fn find_by_filter(
        &self,
        filter: &RecipeFilter,
    ) -> Result<Vec<Recipe>, RecipeRepositoryError> {
        self.bounded("find_by_filter", async {
            let mut conn = self.pool.get().await.map_err(map_pool_error)?;

            let rows: Vec<RecipeRow> = match filter {
                RecipeFilter::HasTag(tag) => recipes::table
                    .filter(recipes::tags.contains(vec![tag.clone()]))
                    .order(recipes::seq.asc())
                    .select(RecipeRow::as_select())
                    .load(&mut conn)
                    .await
                    .map_err(map_diesel_error)?,
            };

            rows_to_recipes(rows)
        })
        .await
    }

    async fn update_fields(
        &self,
        id: &RecipeId,
        content: &RecipeContent,
    ) -> Result<u64, RecipeRepositoryError> {
        self.bounded("update_fields", async {
            let mut conn = self.pool.get().await.map_err(map_pool_error)?;
            let changeset = RecipeContentChangeset {
                name: &content.name,
                tags: &content.tags,
                ingredients: &content.ingredients,
                instructions: &content.instructions,
            };

            diesel::update(recipes::table.filter(recipes::id.eq(id.to_hex())))
                .set(&changeset)
                .execute(&mut conn)
                .await
                .map(affected)
                .map_err(map_diesel_error)
        })
        .await
    }

    async fn delete_by_id(&self, id: &RecipeId) -> Result<u64, RecipeRepositoryError> {
        self.bounded("delete_by_id", async {
            let mut conn = self.pool.get().await.map_err(map_pool_error)?;

            diesel::delete(recipes::table.filter(recipes::id.eq(id.to_hex())))
                .execute(&mut conn)
                .await
                .map(affected)
                .map_err(map_diesel_error)
        })
        .await
    }
}
