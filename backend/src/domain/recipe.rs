//! Recipe data model.
//!
//! A [`Recipe`] is the only entity managed by the service. Its identifier and
//! publication timestamp are assigned once by [`Recipe::publish`]; the four
//! [`RecipeContent`] fields are the only mutable part and are always replaced
//! together.

use chrono::{DateTime, SubsecRound, Utc};

use super::RecipeId;

/// Fractional-second digits kept on `publishedAt`.
const PUBLISHED_AT_PRECISION: u16 = 3;

/// The client-controlled part of a recipe.
///
/// # Examples
/// ```
/// use recipes_api::domain::RecipeContent;
///
/// let content = RecipeContent {
///     name: "Omelette".to_owned(),
///     tags: vec!["breakfast".to_owned()],
///     ingredients: vec!["egg".to_owned()],
///     instructions: vec!["whisk".to_owned(), "fry".to_owned()],
/// };
/// assert_eq!(content.tags.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeContent {
    /// Text label.
    pub name: String,
    /// Search labels, in client order.
    pub tags: Vec<String>,
    /// Ingredient lines, in client order.
    pub ingredients: Vec<String>,
    /// Instruction lines, in client order.
    pub instructions: Vec<String>,
}

/// A stored recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    id: RecipeId,
    name: String,
    tags: Vec<String>,
    ingredients: Vec<String>,
    instructions: Vec<String>,
    published_at: DateTime<Utc>,
}

impl Recipe {
    /// Create a new recipe with a freshly generated identifier.
    ///
    /// `now` is truncated to millisecond precision.
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use recipes_api::domain::{Recipe, RecipeContent};
    ///
    /// let recipe = Recipe::publish(RecipeContent::default(), Utc::now());
    /// assert_eq!(recipe.id().to_string().len(), 24);
    /// ```
    #[must_use]
    pub fn publish(content: RecipeContent, now: DateTime<Utc>) -> Self {
        let published_at = now.trunc_subsecs(PUBLISHED_AT_PRECISION);
        Self::from_parts(RecipeId::generate(published_at), content, published_at)
    }

    /// Rehydrate a recipe read back from storage.
    #[must_use]
    pub fn from_parts(id: RecipeId, content: RecipeContent, published_at: DateTime<Utc>) -> Self {
        let RecipeContent {
            name,
            tags,
            ingredients,
            instructions,
        } = content;
        Self {
            id,
            name,
            tags,
            ingredients,
            instructions,
            published_at,
        }
    }

    /// Replace the content fields, keeping `id` and `published_at`.
    #[must_use]
    pub fn with_content(self, content: RecipeContent) -> Self {
        Self::from_parts(self.id, content, self.published_at)
    }

    /// Server-assigned identifier.
    #[must_use]
    pub fn id(&self) -> RecipeId {
        self.id
    }

    /// Text label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Search labels.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Ingredient lines.
    #[must_use]
    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    /// Instruction lines.
    #[must_use]
    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }

    /// Server-assigned publication time.
    #[must_use]
    pub fn published_at(&self) -> DateTime<Utc> {
        self.published_at
    }

    /// Copy of the client-controlled fields.
    #[must_use]
    pub fn content(&self) -> RecipeContent {
        RecipeContent {
            name: self.name.clone(),
            tags: self.tags.clone(),
            ingredients: self.ingredients.clone(),
            instructions: self.instructions.clone(),
        }
    }

    /// Whether `tag` is one of this recipe's tags (exact, case-sensitive).
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate == tag)
    }
}

/// Predicate handed to the repository's filtered read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeFilter {
    /// Recipes whose tags contain this exact element.
    HasTag(String),
}

impl RecipeFilter {
    /// Build a tag predicate from an optional query value.
    ///
    /// A missing value searches for the literal empty tag; there is no
    /// "match everything" form.
    ///
    /// # Examples
    /// ```
    /// use recipes_api::domain::RecipeFilter;
    ///
    /// assert_eq!(
    ///     RecipeFilter::from_tag_query(None),
    ///     RecipeFilter::HasTag(String::new())
    /// );
    /// ```
    #[must_use]
    pub fn from_tag_query(tag: Option<String>) -> Self {
        Self::HasTag(tag.unwrap_or_default())
    }

    /// Evaluate the predicate in process, for stores without native support.
    #[must_use]
    pub fn matches(&self, recipe: &Recipe) -> bool {
        match self {
            Self::HasTag(tag) => recipe.has_tag(tag),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for recipe construction and filtering.
    use chrono::TimeZone;
    use rstest::{fixture, rstest};

    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_owned()).collect()
    }

    #[fixture]
    fn omelette() -> RecipeContent {
        RecipeContent {
            name: "Omelette".to_owned(),
            tags: strings(&["breakfast", "egg"]),
            ingredients: strings(&["egg", "butter"]),
            instructions: strings(&["whisk", "fry"]),
        }
    }

    #[fixture]
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 12, 8, 30, 0)
            .single()
            .expect("valid fixture timestamp")
            + chrono::Duration::nanoseconds(123_456_789)
    }

    #[rstest]
    fn publish_truncates_timestamp_to_millis(omelette: RecipeContent, now: DateTime<Utc>) {
        let recipe = Recipe::publish(omelette, now);
        assert_eq!(recipe.published_at().timestamp_subsec_nanos(), 123_000_000);
    }

    #[rstest]
    fn publish_keeps_content(omelette: RecipeContent, now: DateTime<Utc>) {
        let recipe = Recipe::publish(omelette.clone(), now);
        assert_eq!(recipe.content(), omelette);
    }

    #[rstest]
    fn with_content_preserves_identity(omelette: RecipeContent, now: DateTime<Utc>) {
        let recipe = Recipe::publish(omelette, now);
        let replacement = RecipeContent {
            name: "Scrambled".to_owned(),
            ..RecipeContent::default()
        };

        let updated = recipe.clone().with_content(replacement.clone());

        assert_eq!(updated.id(), recipe.id());
        assert_eq!(updated.published_at(), recipe.published_at());
        assert_eq!(updated.content(), replacement);
    }

    #[rstest]
    #[case("egg", true)]
    #[case("breakfast", true)]
    #[case("Egg", false)]
    #[case("eg", false)]
    #[case("", false)]
    fn tag_filter_is_exact(
        omelette: RecipeContent,
        now: DateTime<Utc>,
        #[case] tag: &str,
        #[case] expected: bool,
    ) {
        let recipe = Recipe::publish(omelette, now);
        let filter = RecipeFilter::from_tag_query(Some(tag.to_owned()));
        assert_eq!(filter.matches(&recipe), expected);
    }

    #[rstest]
    fn empty_tag_matches_literal_empty_tag(now: DateTime<Utc>) {
        let recipe = Recipe::publish(
            RecipeContent {
                tags: strings(&[""]),
                ..RecipeContent::default()
            },
            now,
        );
        assert!(RecipeFilter::from_tag_query(None).matches(&recipe));
    }
}
