//! Lanchonete operational CLI.

use std::process;

use clap::{Args, Parser, Subcommand};
use tracing::{error, info};

use lanchonete_app::database;

#[derive(Debug, Parser)]
#[command(name = "lanchonete-app", about = "Lanchonete CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Database maintenance commands.
    Db(DbCommand),
}

#[derive(Debug, Args)]
struct DbCommand {
    #[command(subcommand)]
    command: DbSubcommand,
}

#[derive(Debug, Subcommand)]
enum DbSubcommand {
    /// Apply pending schema migrations.
    Migrate(MigrateArgs),
}

#[derive(Debug, Args)]
struct MigrateArgs {
    /// `PostgreSQL` connection string.
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,
}

#[tokio::main]
async fn main() {
    _ = dotenvy::dotenv();

    tracing_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Db(db) => match db.command {
            DbSubcommand::Migrate(args) => migrate(&args).await,
        },
    }
}

fn tracing_init() {
    use tracing::level_filters::LevelFilter;
    use tracing_subscriber::{EnvFilter, fmt};

    fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();
}

async fn migrate(args: &MigrateArgs) {
    let pool = match database::connect(&args.database_url).await {
        Ok(pool) => pool,
        Err(source) => {
            error!("failed to connect to database: {source}");

            process::exit(1);
        }
    };

    if let Err(source) = database::migrate(&pool).await {
        error!("failed to run migrations: {source}");

        process::exit(1);
    }

    info!("migrations applied");
}
