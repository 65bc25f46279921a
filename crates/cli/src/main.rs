use clap::{Parser, Subcommand};
use fertibase_domain::CliOverrides;
use std::net::SocketAddr;
use std::process::ExitCode;
use tracing::info;

mod bootstrap;
mod commands;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "fertibase")]
#[command(version)]
#[command(about = "FertiBase - product and careers catalog service")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Catalog service port
    #[arg(short = 'p', long, env = "PORT", global = true)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long, global = true)]
    bind: Option<String>,

    /// Database path (omit for an in-memory database)
    #[arg(long, env = "DATABASE_PATH", global = true)]
    database: Option<String>,

    /// Base URL of the remote catalog API
    #[arg(long, value_name = "URL", global = true)]
    remote_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the catalog HTTP service (default)
    Serve,

    /// List products, falling back to the bundled catalog
    Products {
        /// Case-insensitive filter on name and category
        #[arg(short, long)]
        search: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// Show one product
    Product {
        id: String,

        #[arg(long)]
        json: bool,
    },

    /// List open positions grouped by category
    Careers {
        /// Case-insensitive filter on job title
        #[arg(short, long)]
        search: Option<String>,

        /// Only show this category ("All" shows every category)
        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind.clone(),
        database_path: cli.database.clone(),
        remote_url: cli.remote_url.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            bootstrap::init_logging(&config, bootstrap::LogTarget::Stdout);
            serve(config).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Products { search, json } => {
            bootstrap::init_logging(&config, bootstrap::LogTarget::Stderr);
            let resolvers = di::Resolvers::new(&config)?;
            commands::list_products(&resolvers, search.as_deref().unwrap_or(""), json).await
        }
        Command::Product { id, json } => {
            bootstrap::init_logging(&config, bootstrap::LogTarget::Stderr);
            let resolvers = di::Resolvers::new(&config)?;
            commands::show_product(&resolvers, &id, json).await
        }
        Command::Careers {
            search,
            category,
            json,
        } => {
            bootstrap::init_logging(&config, bootstrap::LogTarget::Stderr);
            let resolvers = di::Resolvers::new(&config)?;
            commands::list_careers(
                &resolvers,
                search.as_deref().unwrap_or(""),
                category.as_deref().unwrap_or(""),
                json,
            )
            .await
        }
    }
}

async fn serve(config: fertibase_domain::Config) -> anyhow::Result<()> {
    info!("Starting FertiBase catalog service v{}", env!("CARGO_PKG_VERSION"));

    let pool = bootstrap::init_database(&config.database).await?;

    let repos = di::Repositories::new(pool);
    if config.database.seed_from_static {
        di::seed_from_static(&repos).await?;
    }
    let app_state = di::build_app_state(&repos);

    let web_addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.port).parse()?;

    server::start_web_server(web_addr, app_state, config.server.body_limit).await?;

    info!("Server shutdown complete");
    Ok(())
}
