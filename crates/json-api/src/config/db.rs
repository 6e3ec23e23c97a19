//! Database Config

use clap::Args;

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string. When unset the server keeps all
    /// state in memory and loses it on restart.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}
