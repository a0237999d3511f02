//! Bulk-load recipes from a JSON file into the recipe store.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::env;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use cap_std::{ambient_authority, fs::Dir};
use clap::Parser;
use mockable::DefaultClock;
use recipes_api::domain::RecipeService;
use recipes_api::domain::ports::{CreateRecipeRequest, RecipeCommand};
use recipes_api::inbound::http::recipes::RecipeRequestBody;
use recipes_api::outbound::persistence::{
    DbPool, DieselRecipeRepository, PoolConfig, run_pending_migrations,
};
use tokio::runtime::Builder;

/// `seed-recipes` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "seed-recipes",
    about = "Insert every recipe from a JSON array file into the recipe store",
    version
)]
struct CliArgs {
    /// Path to a JSON array of recipe bodies.
    #[arg(long = "file", value_name = "path")]
    file: PathBuf,
    /// Database connection URL. Falls back to `DATABASE_URL` when omitted.
    #[arg(long = "database-url", value_name = "url")]
    database_url: Option<String>,
}

fn main() -> io::Result<()> {
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main())
}

async fn async_main() -> io::Result<()> {
    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let bodies = parse_recipes(&read_file(&args.file)?, &args.file)?;

    let database_url = resolve_database_url(args.database_url)?;
    run_pending_migrations(&database_url)
        .await
        .map_err(|error| io::Error::other(format!("apply migrations: {error}")))?;
    let pool = DbPool::new(PoolConfig::new(&database_url))
        .await
        .map_err(|error| io::Error::other(format!("create database pool: {error}")))?;

    let command = RecipeService::new(
        Arc::new(DieselRecipeRepository::new(pool)),
        Arc::new(DefaultClock),
    );
    let inserted = seed(&command, bodies).await?;

    println!("inserted={inserted}");
    Ok(())
}

/// Create each recipe through the command port and return how many landed.
async fn seed(command: &dyn RecipeCommand, bodies: Vec<RecipeRequestBody>) -> io::Result<usize> {
    let mut inserted = 0;
    for (index, body) in bodies.into_iter().enumerate() {
        let name = body.name.clone();
        command
            .create(CreateRecipeRequest {
                content: body.into(),
            })
            .await
            .map_err(|error| {
                io::Error::other(format!("insert recipe #{index} ({name}): {error}"))
            })?;
        inserted += 1;
    }
    Ok(inserted)
}

fn parse_recipes(raw: &str, path: &Path) -> io::Result<Vec<RecipeRequestBody>> {
    serde_json::from_str(raw).map_err(|error| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("parse recipes file '{}': {error}", path.display()),
        )
    })
}

fn read_file(path: &Path) -> io::Result<String> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "input path must be a file"))?;
    let directory = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|error| {
        io::Error::other(format!(
            "open input parent directory '{}': {error}",
            parent.display()
        ))
    })?;
    let mut file = directory.open(Path::new(file_name)).map_err(|error| {
        io::Error::other(format!("open input file '{}': {error}", path.display()))
    })?;
    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|error| {
        io::Error::other(format!("read input file '{}': {error}", path.display()))
    })?;
    Ok(contents)
}

fn resolve_database_url(explicit: Option<String>) -> io::Result<String> {
    if let Some(value) = explicit {
        if value.trim().is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "--database-url must not be empty when provided",
            ));
        }
        return Ok(value);
    }

    let from_env = env::var("DATABASE_URL").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "database URL missing: set --database-url or DATABASE_URL",
        )
    })?;
    if from_env.trim().is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "DATABASE_URL must not be empty",
        ));
    }
    Ok(from_env)
}
