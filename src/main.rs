use clap::Parser;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use projects::{Menu, ProjectDb, ProjectService};

#[derive(Parser)]
#[command(name = "projects")]
#[command(about = "Interactive menu for managing project records")]
struct Cli {
    /// Database connection URL
    #[arg(long, env = "PROJECTS_DATABASE_URL", default_value = "sqlite://projects.db")]
    database_url: String,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "PROJECTS_LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let args = Cli::parse();

    // Logs go to stderr so they never interleave with menu prompts on stdout.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    let db = ProjectDb::connect(&args.database_url).await?;
    tracing::info!(database_url = %args.database_url, "connected to project store");

    let mut menu = Menu::new(
        ProjectService::new(db.clone()),
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    );
    let result = menu.run().await;
    db.close().await;

    Ok(result?)
}
