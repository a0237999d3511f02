//! Builders for the recipe store and the HTTP state wrapped around it.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use tracing::{info, warn};

use crate::domain::RecipeService;
use crate::domain::ports::RecipeRepository;
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::{
    DbPool, DieselRecipeRepository, InMemoryRecipeRepository, PoolConfig, run_pending_migrations,
};

use super::ServerSettings;

/// Wrap a repository in a [`RecipeService`] and expose it through both ports.
pub fn http_state_for<R>(repository: Arc<R>, clock: Arc<dyn Clock>) -> HttpState
where
    R: RecipeRepository + 'static,
{
    HttpState::from_service(Arc::new(RecipeService::new(repository, clock)))
}

/// Connect the configured store and build HTTP state on top of it.
///
/// With a database URL this builds the pool, applies migrations when enabled
/// and pings the store so startup fails fast. Without one, recipes are kept
/// in memory.
///
/// # Errors
/// Returns [`std::io::Error`] when the pool cannot be built, migrations fail
/// or the store does not answer the ping.
pub async fn build_http_state(settings: &ServerSettings) -> std::io::Result<HttpState> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);

    let Some(database_url) = settings.database_url() else {
        warn!("no database configured; recipes are kept in memory and lost on restart");
        return Ok(http_state_for(
            Arc::new(InMemoryRecipeRepository::new()),
            clock,
        ));
    };

    if settings.run_migrations {
        run_pending_migrations(database_url)
            .await
            .map_err(|err| std::io::Error::other(format!("database migration failed: {err}")))?;
    }

    let pool = DbPool::new(
        PoolConfig::new(database_url).with_max_size(settings.db_max_connections()),
    )
    .await
    .map_err(|err| std::io::Error::other(format!("database pool setup failed: {err}")))?;

    pool.ping()
        .await
        .map_err(|err| std::io::Error::other(format!("database unreachable: {err}")))?;
    info!(
        max_connections = settings.db_max_connections(),
        query_timeout_ms = settings.query_timeout().as_millis(),
        "connected to recipe store"
    );

    let repository = DieselRecipeRepository::new(pool).with_query_timeout(settings.query_timeout());
    Ok(http_state_for(Arc::new(repository), clock))
}

#[cfg(test)]
mod tests {
    //! Coverage for the store selection used at startup.

    use super::*;
    use crate::domain::RecipeContent;
    use crate::domain::ports::CreateRecipeRequest;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn missing_database_url_falls_back_to_memory() {
        let settings = ServerSettings::default();

        let state = build_http_state(&settings).await.expect("in-memory state");
        let created = state
            .recipes
            .create(CreateRecipeRequest {
                content: RecipeContent {
                    name: "Toast".to_owned(),
                    ..RecipeContent::default()
                },
            })
            .await
            .expect("create succeeds");

        let listed = state.recipes_query.list().await.expect("list succeeds");
        assert_eq!(listed, vec![created]);
    }
}
