//! Standalone migration runner for the SSO database.
//!
//! Applies the schema migrations embedded in `sso-models` without starting
//! the daemon, for deployments where the operator migrates separately from
//! serving.

use clap::Parser;
use diesel::{Connection, PgConnection};
use diesel_migrations::MigrationHarness;
use log::info;
use sso_models::db::connection::MIGRATIONS;

/// Apply pending SSO schema migrations.
#[derive(Parser)]
#[command(name = "sso-migrate")]
struct Cli {
    /// PostgreSQL database URL.
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,
}

fn main() {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let mut conn =
        PgConnection::establish(&cli.database_url).expect("Cannot connect to database");

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .expect("Failed to run database migrations");

    if applied.is_empty() {
        info!("no migrations to apply");
    } else {
        for version in applied {
            info!("applied migration {version}");
        }
    }
}
