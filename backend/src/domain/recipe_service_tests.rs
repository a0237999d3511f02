//! Tests for the recipe service.

use std::sync::Arc;

use chrono::{DateTime, Local, SubsecRound, TimeZone, Utc};
use mockall::predicate::eq;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::MockRecipeRepository;
use crate::domain::{ErrorCode, RecipeContent, RecipeId};

fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 12, 8, 30, 0)
        .single()
        .expect("valid fixture timestamp")
        + chrono::Duration::microseconds(456_789)
}

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

fn fixture_clock() -> Arc<dyn Clock> {
    Arc::new(FixtureClock {
        utc_now: fixture_timestamp(),
    })
}

fn service(repo: MockRecipeRepository) -> RecipeService<MockRecipeRepository> {
    RecipeService::new(Arc::new(repo), fixture_clock())
}

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
fn recipe_id() -> RecipeId {
    "65a1f0c2e4b0a1b2c3d4e5f6".parse().expect("valid id")
}

#[rstest]
#[tokio::test]
async fn create_assigns_id_and_clock_timestamp(omelette: RecipeContent) {
    let expected_content = omelette.clone();
    let mut repo = MockRecipeRepository::new();
    repo.expect_insert()
        .withf(move |recipe| recipe.content() == expected_content)
        .times(1)
        .return_once(|recipe| Ok(recipe.id()));

    let recipe = service(repo)
        .create(CreateRecipeRequest { content: omelette })
        .await
        .expect("create succeeds");

    assert_eq!(recipe.name(), "Omelette");
    assert_eq!(recipe.id().to_string().len(), 24);
    assert_eq!(
        recipe.published_at(),
        fixture_timestamp().trunc_subsecs(3),
        "publishedAt comes from the clock at millisecond precision"
    );
}

#[rstest]
#[tokio::test]
async fn create_generates_distinct_ids(omelette: RecipeContent) {
    let mut repo = MockRecipeRepository::new();
    repo.expect_insert()
        .times(2)
        .returning(|recipe| Ok(recipe.id()));
    let service = service(repo);

    let first = service
        .create(CreateRecipeRequest {
            content: omelette.clone(),
        })
        .await
        .expect("first create");
    let second = service
        .create(CreateRecipeRequest { content: omelette })
        .await
        .expect("second create");

    assert_ne!(first.id(), second.id());
}

#[rstest]
#[case(RecipeRepositoryError::query("duplicate key"), ErrorCode::InternalError)]
#[case(RecipeRepositoryError::connection("refused"), ErrorCode::ServiceUnavailable)]
#[tokio::test]
async fn create_failure_uses_generic_message(
    omelette: RecipeContent,
    #[case] failure: RecipeRepositoryError,
    #[case] expected: ErrorCode,
) {
    let mut repo = MockRecipeRepository::new();
    repo.expect_insert()
        .times(1)
        .return_once(move |_| Err(failure));

    let error = service(repo)
        .create(CreateRecipeRequest { content: omelette })
        .await
        .expect_err("insert fails");

    assert_eq!(error.code(), expected);
    assert_eq!(error.message(), "Error while inserting a new recipe");
}

#[rstest]
#[case(1, UpdateOutcome::Updated)]
#[case(0, UpdateOutcome::NoMatch)]
#[tokio::test]
async fn update_reports_match(
    omelette: RecipeContent,
    recipe_id: RecipeId,
    #[case] matched: u64,
    #[case] expected: UpdateOutcome,
) {
    let mut repo = MockRecipeRepository::new();
    repo.expect_update_fields()
        .with(eq(recipe_id), eq(omelette.clone()))
        .times(1)
        .return_once(move |_, _| Ok(matched));

    let outcome = service(repo)
        .update(UpdateRecipeRequest {
            id: recipe_id,
            content: omelette,
        })
        .await
        .expect("update succeeds");

    assert_eq!(outcome, expected);
}

#[rstest]
#[tokio::test]
async fn update_store_failure_is_internal(omelette: RecipeContent, recipe_id: RecipeId) {
    let mut repo = MockRecipeRepository::new();
    repo.expect_update_fields()
        .times(1)
        .return_once(|_, _| Err(RecipeRepositoryError::query("deadlock detected")));

    let error = service(repo)
        .update(UpdateRecipeRequest {
            id: recipe_id,
            content: omelette,
        })
        .await
        .expect_err("update fails");

    assert_eq!(error.code(), ErrorCode::InternalError);
}

#[rstest]
#[case(1, DeleteOutcome::Deleted)]
#[case(0, DeleteOutcome::AlreadyAbsent)]
#[tokio::test]
async fn delete_reports_removal(
    recipe_id: RecipeId,
    #[case] removed: u64,
    #[case] expected: DeleteOutcome,
) {
    let mut repo = MockRecipeRepository::new();
    repo.expect_delete_by_id()
        .with(eq(recipe_id))
        .times(1)
        .return_once(move |_| Ok(removed));

    let outcome = service(repo)
        .delete(DeleteRecipeRequest { id: recipe_id })
        .await
        .expect("delete succeeds");

    assert_eq!(outcome, expected);
}

#[rstest]
#[tokio::test]
async fn delete_store_failure_is_not_reported_as_absent(recipe_id: RecipeId) {
    let mut repo = MockRecipeRepository::new();
    repo.expect_delete_by_id()
        .times(1)
        .return_once(|_| Err(RecipeRepositoryError::connection("pool timed out")));

    let error = service(repo)
        .delete(DeleteRecipeRequest { id: recipe_id })
        .await
        .expect_err("delete fails");

    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
}

#[rstest]
#[tokio::test]
async fn list_returns_store_order(omelette: RecipeContent) {
    let first = Recipe::publish(omelette.clone(), fixture_timestamp());
    let second = Recipe::publish(omelette, fixture_timestamp());
    let stored = vec![first.clone(), second.clone()];

    let mut repo = MockRecipeRepository::new();
    repo.expect_find_all()
        .times(1)
        .return_once(move || Ok(stored));

    let listed = service(repo).list().await.expect("list succeeds");

    assert_eq!(listed, vec![first, second]);
}

#[rstest]
#[tokio::test]
async fn list_of_empty_store_is_empty() {
    let mut repo = MockRecipeRepository::new();
    repo.expect_find_all().times(1).return_once(|| Ok(Vec::new()));

    let listed = service(repo).list().await.expect("list succeeds");

    assert!(listed.is_empty());
}

#[rstest]
#[tokio::test]
async fn search_builds_exact_tag_filter(omelette: RecipeContent) {
    let stored = Recipe::publish(omelette, fixture_timestamp());
    let expected = stored.clone();

    let mut repo = MockRecipeRepository::new();
    repo.expect_find_by_filter()
        .with(eq(RecipeFilter::HasTag("egg".to_owned())))
        .times(1)
        .return_once(move |_| Ok(vec![stored]));

    let outcome = service(repo)
        .search(SearchRecipesRequest {
            tag: Some("egg".to_owned()),
        })
        .await
        .expect("search succeeds");

    assert_eq!(outcome, TagSearchOutcome::Matches(vec![expected]));
}

#[rstest]
#[tokio::test]
async fn search_without_tag_looks_for_empty_tag() {
    let mut repo = MockRecipeRepository::new();
    repo.expect_find_by_filter()
        .with(eq(RecipeFilter::HasTag(String::new())))
        .times(1)
        .return_once(|_| Ok(Vec::new()));

    let outcome = service(repo)
        .search(SearchRecipesRequest::default())
        .await
        .expect("search succeeds");

    assert_eq!(outcome, TagSearchOutcome::Empty);
}

#[rstest]
#[tokio::test]
async fn search_store_failure_is_distinct_from_empty() {
    let mut repo = MockRecipeRepository::new();
    repo.expect_find_by_filter()
        .times(1)
        .return_once(|_| Err(RecipeRepositoryError::query("relation missing")));

    let error = service(repo)
        .search(SearchRecipesRequest {
            tag: Some("egg".to_owned()),
        })
        .await
        .expect_err("search fails");

    assert_eq!(error.code(), ErrorCode::InternalError);
}
