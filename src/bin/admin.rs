//! CLI administration tool for category-store.
//!
//! Drives the category and cache repositories directly, without any server.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin category-admin -- category create --name News --slug news
//! cargo run --bin category-admin -- category list --num 10 --keyword new
//! cargo run --bin category-admin -- category rename 1 "Breaking News"
//! cargo run --bin category-admin -- category delete 1
//!
//! cargo run --bin category-admin -- cache put news-page news
//! cargo run --bin category-admin -- cache get news-page
//!
//! cargo run --bin category-admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! See `category_store::config`. `DATABASE_URL` (or `DB_*`) is required;
//! `cache` commands need `REDIS_URL` (or `REDIS_HOST`).

use category_store::config::{self, Config};
use category_store::infrastructure::persistence::connect_pool;
use category_store::prelude::*;
use category_store::telemetry;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing categories.
#[derive(Parser)]
#[command(name = "category-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage categories
    Category {
        #[command(subcommand)]
        action: CategoryAction,
    },

    /// Inspect and seed the cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum CategoryAction {
    /// Create a new category
    Create {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        slug: String,
    },

    /// Show a category by id or slug
    Get { id_or_slug: String },

    /// List categories, newest first
    List {
        /// Page size (0 = all)
        #[arg(short, long, default_value_t = 20)]
        num: u64,

        /// Only ids strictly below this one
        #[arg(short, long)]
        cursor: Option<String>,

        /// Substring to match against the name
        #[arg(short, long)]
        keyword: Option<String>,
    },

    /// Change a category's name
    Rename { id: i64, name: String },

    /// Delete a category
    Delete {
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum CacheAction {
    /// Load a category and cache it under KEY
    Put { key: String, id_or_slug: String },

    /// Print the cached payload under KEY
    Get { key: String },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    telemetry::init(&config.log_level, &config.log_format);
    config.print_summary();

    let pool = Arc::new(connect_pool(&config).await?);

    match cli.command {
        Commands::Category { action } => handle_category_action(action, pool).await?,
        Commands::Cache { action } => handle_cache_action(action, pool, &config).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches category commands.
async fn handle_category_action(action: CategoryAction, pool: Arc<PgPool>) -> Result<()> {
    let repo = PgCategoryRepository::new(pool);

    match action {
        CategoryAction::Create { name, slug } => create_category(&repo, name, slug).await?,
        CategoryAction::Get { id_or_slug } => {
            let category = find_category(&repo, &id_or_slug).await?;
            print_category(&category);
        }
        CategoryAction::List {
            num,
            cursor,
            keyword,
        } => {
            let filter = Filter {
                num,
                cursor,
                keyword,
            };
            list_categories(&repo, &filter).await?;
        }
        CategoryAction::Rename { id, name } => rename_category(&repo, id, name).await?,
        CategoryAction::Delete { id, yes } => delete_category(&repo, id, yes).await?,
    }

    Ok(())
}

async fn create_category(repo: &PgCategoryRepository, name: String, slug: String) -> Result<()> {
    let mut category = Category::new(name, slug);

    match repo.store(&mut category).await {
        Ok(()) => {
            println!("{}", "✅ Category created".green().bold());
            print_category(&category);
            Ok(())
        }
        Err(RepositoryError::DuplicateKey) => {
            println!(
                "{} slug {} is already taken",
                "❌".red(),
                category.slug.bright_yellow()
            );
            Ok(())
        }
        Err(e) => Err(e).context("Failed to create category"),
    }
}

/// Numeric input is looked up by id, anything else by slug.
async fn find_category(repo: &PgCategoryRepository, id_or_slug: &str) -> Result<Category> {
    let result = match id_or_slug.parse::<i64>() {
        Ok(id) => repo.get_by_id(id).await,
        Err(_) => repo.get_by_slug(id_or_slug).await,
    };

    match result {
        Err(RepositoryError::NotFound) => anyhow::bail!("Category '{}' not found", id_or_slug),
        other => other.context("Database error"),
    }
}

/// Prints one page and the cursor for the next one.
async fn list_categories(repo: &PgCategoryRepository, filter: &Filter) -> Result<()> {
    let categories = repo
        .fetch(filter)
        .await
        .context("Failed to list categories")?;

    if categories.is_empty() {
        println!("{}", "  No categories found".yellow());
        return Ok(());
    }

    println!(
        "  {:<6} {:<30} {:<30} {:<20}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Slug".bright_white().bold(),
        "Updated".bright_white().bold()
    );
    println!("  {}", "─".repeat(86).bright_black());

    for category in &categories {
        println!(
            "  {:<6} {:<30} {:<30} {}",
            category.id.to_string().bright_black(),
            category.name.cyan(),
            category.slug,
            category
                .updated_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    if let Some(last) = categories.last()
        && filter.limit() == Some(categories.len() as i64)
    {
        println!("  Next page: {} {}", "--cursor".bright_cyan(), last.id);
    }

    Ok(())
}

async fn rename_category(repo: &PgCategoryRepository, id: i64, name: String) -> Result<()> {
    let mut category = find_category(repo, &id.to_string()).await?;
    category.name = name;

    match repo.update(&mut category).await {
        Ok(()) => {
            println!("{}", "✅ Category renamed".green().bold());
            print_category(&category);
            Ok(())
        }
        Err(RepositoryError::NoRowsAffected) => {
            anyhow::bail!("Category {} was deleted concurrently", id)
        }
        Err(e) => Err(e).context("Failed to rename category"),
    }
}

async fn delete_category(repo: &PgCategoryRepository, id: i64, skip_confirm: bool) -> Result<()> {
    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete category {}?", id))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    match repo.delete(id).await {
        Ok(()) => {
            println!("{}", "✅ Category deleted".green().bold());
            Ok(())
        }
        Err(RepositoryError::NoRowsAffected) => anyhow::bail!("Category {} not found", id),
        Err(e) => Err(e).context("Failed to delete category"),
    }
}

fn print_category(category: &Category) {
    println!("  ID:      {}", category.id.to_string().bright_black());
    println!("  Name:    {}", category.name.cyan());
    println!("  Slug:    {}", category.slug);
    println!(
        "  Created: {}",
        category.created_at.format("%Y-%m-%d %H:%M:%S")
    );
    println!(
        "  Updated: {}",
        category.updated_at.format("%Y-%m-%d %H:%M:%S")
    );
}

/// Dispatches cache commands.
async fn handle_cache_action(action: CacheAction, pool: Arc<PgPool>, config: &Config) -> Result<()> {
    let redis_url = config
        .redis_url
        .as_deref()
        .context("REDIS_URL or REDIS_HOST must be set for cache commands")?;

    let cache = RedisCacheRepository::connect(redis_url, config.cache_ttl())
        .await
        .context("Failed to connect to Redis")?;

    match action {
        CacheAction::Put { key, id_or_slug } => {
            let repo = PgCategoryRepository::new(pool);
            let category = find_category(&repo, &id_or_slug).await?;

            cache
                .set(&key, &category)
                .await
                .context("Failed to write cache")?;

            println!(
                "{} cached {} under {} for {}s",
                "✅".green(),
                category.slug.cyan(),
                key.bright_yellow(),
                cache.ttl().as_secs()
            );
        }
        CacheAction::Get { key } => match cache.get(&key).await {
            Ok(bytes) => {
                let category: Category =
                    serde_json::from_slice(&bytes).context("Cached payload is not a category")?;
                print_category(&category);
            }
            Err(RepositoryError::NotFound) => {
                println!("{} {} is not cached", "⚠️ ".yellow(), key.bright_yellow());
            }
            Err(e) => return Err(e).context("Failed to read cache"),
        },
    }

    Ok(())
}

async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM category")
                .fetch_one(pool)
                .await
                .context("Database check failed")?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  Categories: {}", count.to_string().bright_white().bold());
        }
    }

    Ok(())
}
