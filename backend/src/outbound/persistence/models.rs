//! Internal Diesel row structs for the `recipes` table.
//!
//! These types never leave the persistence layer.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::recipes;

/// Row struct for reading from the recipes table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct RecipeRow {
    pub id: String,
    pub name: String,
    pub tags: Vec<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub published_at: DateTime<Utc>,
}

/// Insertable struct for creating recipe records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = recipes)]
pub(crate) struct NewRecipeRow<'a> {
    pub id: String,
    pub name: &'a str,
    pub tags: &'a [String],
    pub ingredients: &'a [String],
    pub instructions: &'a [String],
    pub published_at: DateTime<Utc>,
}

/// Changeset replacing the content fields of a recipe.
///
/// `id`, `seq` and `published_at` are never updated.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = recipes)]
pub(crate) struct RecipeContentChangeset<'a> {
    pub name: &'a str,
    pub tags: &'a [String],
    pub ingredients: &'a [String],
    pub instructions: &'a [String],
}
