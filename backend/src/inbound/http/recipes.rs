//! Recipe HTTP handlers.
//!
//! ```text
//! POST   /recipes
//! GET    /recipes
//! PUT    /recipes/{id}
//! DELETE /recipes/{id}
//! GET    /recipes/search?tag=...
//! ```

use actix_web::{delete, get, post, put, web};
use chrono::SecondsFormat;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::{
    CreateRecipeRequest, DeleteOutcome, DeleteRecipeRequest, SearchRecipesRequest,
    TagSearchOutcome, UpdateOutcome, UpdateRecipeRequest,
};
use crate::domain::{Recipe, RecipeContent};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_recipe_id};

const ID_FIELD: FieldName = FieldName::new("id");

/// Recipe payload accepted by create and update.
///
/// Every field is optional: a missing `name` is the empty string and a
/// missing or `null` array is empty. `id` and `publishedAt` are server-owned;
/// if a client sends them they are ignored along with any other unknown field.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRequestBody {
    #[serde(default)]
    #[schema(example = "Omelette")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[schema(example = json!(["breakfast", "egg"]))]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[schema(example = json!(["egg", "butter"]))]
    pub ingredients: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[schema(example = json!(["whisk", "fry"]))]
    pub instructions: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl From<RecipeRequestBody> for RecipeContent {
    fn from(value: RecipeRequestBody) -> Self {
        Self {
            name: value.name,
            tags: value.tags,
            ingredients: value.ingredients,
            instructions: value.instructions,
        }
    }
}

/// Stored recipe as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeResponseBody {
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f6")]
    pub id: String,
    pub name: String,
    pub tags: Vec<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    #[schema(format = "date-time", example = "2024-01-12T08:30:00.123Z")]
    pub published_at: String,
}

impl From<Recipe> for RecipeResponseBody {
    fn from(value: Recipe) -> Self {
        let id = value.id().to_string();
        let published_at = value
            .published_at()
            .to_rfc3339_opts(SecondsFormat::Millis, true);
        let RecipeContent {
            name,
            tags,
            ingredients,
            instructions,
        } = value.content();
        Self {
            id,
            name,
            tags,
            ingredients,
            instructions,
            published_at,
        }
    }
}

/// Confirmation returned by update and delete.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct ConfirmationBody {
    #[schema(example = "Recipe has been updated")]
    pub message: String,
}

impl ConfirmationBody {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}

impl From<UpdateOutcome> for ConfirmationBody {
    fn from(value: UpdateOutcome) -> Self {
        match value {
            UpdateOutcome::Updated => Self::new("Recipe has been updated"),
            UpdateOutcome::NoMatch => Self::new("No recipe matched the given id"),
        }
    }
}

impl From<DeleteOutcome> for ConfirmationBody {
    fn from(value: DeleteOutcome) -> Self {
        match value {
            DeleteOutcome::Deleted => Self::new("Recipe has been deleted"),
            DeleteOutcome::AlreadyAbsent => Self::new("Recipe was already absent"),
        }
    }
}

/// Query string for tag search.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Exact, case-sensitive tag. Missing means the empty tag.
    pub tag: Option<String>,
}

fn into_bodies(recipes: Vec<Recipe>) -> Vec<RecipeResponseBody> {
    recipes.into_iter().map(RecipeResponseBody::from).collect()
}

/// Create a recipe. The server assigns `id` and `publishedAt`.
#[utoipa::path(
    post,
    path = "/recipes",
    request_body = RecipeRequestBody,
    responses(
        (status = 200, description = "Recipe created", body = RecipeResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "createRecipe"
)]
#[post("/recipes")]
pub async fn create_recipe(
    state: web::Data<HttpState>,
    payload: web::Json<RecipeRequestBody>,
) -> ApiResult<web::Json<RecipeResponseBody>> {
    let recipe = state
        .recipes
        .create(CreateRecipeRequest {
            content: payload.into_inner().into(),
        })
        .await?;

    Ok(web::Json(recipe.into()))
}

/// List every stored recipe.
#[utoipa::path(
    get,
    path = "/recipes",
    responses(
        (status = 200, description = "All recipes", body = [RecipeResponseBody]),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "listRecipes"
)]
#[get("/recipes")]
pub async fn list_recipes(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<RecipeResponseBody>>> {
    let recipes = state.recipes_query.list().await?;
    Ok(web::Json(into_bodies(recipes)))
}

/// Replace the content fields of a recipe.
///
/// Succeeds even when no recipe has the id; the message says which case
/// applied.
#[utoipa::path(
    put,
    path = "/recipes/{id}",
    params(("id" = String, Path, description = "24-character hex recipe id")),
    request_body = RecipeRequestBody,
    responses(
        (status = 200, description = "Update applied or nothing matched", body = ConfirmationBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "updateRecipe"
)]
#[put("/recipes/{id}")]
pub async fn update_recipe(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<RecipeRequestBody>,
) -> ApiResult<web::Json<ConfirmationBody>> {
    let id = parse_recipe_id(path.into_inner(), ID_FIELD)?;
    let outcome = state
        .recipes
        .update(UpdateRecipeRequest {
            id,
            content: payload.into_inner().into(),
        })
        .await?;

    Ok(web::Json(outcome.into()))
}

/// Delete a recipe. Deleting a missing recipe still succeeds.
#[utoipa::path(
    delete,
    path = "/recipes/{id}",
    params(("id" = String, Path, description = "24-character hex recipe id")),
    responses(
        (status = 200, description = "Recipe deleted or already absent", body = ConfirmationBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "deleteRecipe"
)]
#[delete("/recipes/{id}")]
pub async fn delete_recipe(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ConfirmationBody>> {
    let id = parse_recipe_id(path.into_inner(), ID_FIELD)?;
    let outcome = state.recipes.delete(DeleteRecipeRequest { id }).await?;

    Ok(web::Json(outcome.into()))
}

/// Recipes tagged with exactly `tag`. No match is an empty array.
#[utoipa::path(
    get,
    path = "/recipes/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching recipes, possibly none", body = [RecipeResponseBody]),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "searchRecipes"
)]
#[get("/recipes/search")]
pub async fn search_recipes(
    state: web::Data<HttpState>,
    query: web::Query<SearchQuery>,
) -> ApiResult<web::Json<Vec<RecipeResponseBody>>> {
    let outcome = state
        .recipes_query
        .search(SearchRecipesRequest {
            tag: query.into_inner().tag,
        })
        .await?;

    match outcome {
        TagSearchOutcome::Matches(recipes) => Ok(web::Json(into_bodies(recipes))),
        TagSearchOutcome::Empty => Ok(web::Json(Vec::new())),
    }
}

/// Register every recipe route on `cfg`.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use recipes_api::inbound::http::recipes::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(search_recipes)
        .service(create_recipe)
        .service(list_recipes)
        .service(update_recipe)
        .service(delete_recipe);
}

#[cfg(test)]
#[path = "recipes_tests.rs"]
mod tests;
