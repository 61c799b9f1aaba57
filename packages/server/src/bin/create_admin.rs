//! CLI for issuing admin panel credentials
//!
//! Stores an Argon2 hash of the password; the plaintext never touches the
//! database or the logs.

use anyhow::{Context, Result};
use clap::Parser;
use server_core::domains::auth::actions::create_admin;
use server_core::kernel::postgres::PostgresAdminStore;
use sqlx::postgres::PgPoolOptions;

#[derive(Parser)]
#[command(name = "create_admin")]
#[command(about = "Create an admin panel account")]
struct Cli {
    /// Login email
    #[arg(long)]
    email: String,

    /// Password (at least 12 characters)
    #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
    password: String,

    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sqlx=warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&cli.database_url)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let store = PostgresAdminStore::new(pool);
    let admin = create_admin(&cli.email, &cli.password, &store).await?;

    println!("Created admin {} ({})", admin.email, admin.id);
    Ok(())
}
