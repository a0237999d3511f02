//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the recipe and health endpoints plus the schema
//! wrappers from [`crate::inbound::http::schemas`]. The document backs Swagger
//! UI in debug builds and is exported by the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::recipes::{ConfirmationBody, RecipeRequestBody, RecipeResponseBody};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Recipes API",
        description = "Create, list, update, delete and tag-search cooking recipes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::recipes::create_recipe,
        crate::inbound::http::recipes::list_recipes,
        crate::inbound::http::recipes::update_recipe,
        crate::inbound::http::recipes::delete_recipe,
        crate::inbound::http::recipes::search_recipes,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        RecipeRequestBody,
        RecipeResponseBody,
        ConfirmationBody,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "recipes", description = "Recipe storage and search"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
