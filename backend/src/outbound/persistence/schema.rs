//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations` exactly.

diesel::table! {
    /// Stored recipes.
    ///
    /// `id` is the 24-character hex rendering of the recipe identifier.
    /// `seq` only records insertion order for listing.
    recipes (id) {
        /// Primary key: hex recipe identifier.
        id -> Varchar,
        /// Insertion sequence.
        seq -> Int8,
        /// Recipe name.
        name -> Text,
        /// Search labels.
        tags -> Array<Text>,
        /// Ingredient lines.
        ingredients -> Array<Text>,
        /// Instruction lines.
        instructions -> Array<Text>,
        /// Server-assigned publication time.
        published_at -> Timestamptz,
    }
}
