//! Railfetch CLI
//!
//! Command-line interface for inspecting Railway projects and saving
//! deployment logs for troubleshooting.
//!
//! # Usage
//!
//! ```bash
//! railfetch --help
//! railfetch list-projects
//! railfetch --project-id <id> list-services
//! railfetch fetch-deployment-logs <deployment-id> --output-dir logs --debug
//! ```

#![deny(unsafe_code)]

mod output;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use api::queries::{
    list_deployments, list_environments, list_projects, list_services, DeploymentScope,
};
use api::{Config, LogResolver, QueryClient, QueryError, RailwayClient};
use clap::{Parser, Subcommand};
use output::{deployment_label, remediation, render_listing, OutputFormat, TextRecord};
use serde::Serialize;
use shared::storage::LogFileStore;

/// Railfetch - Railway project listing and deployment log fetcher
#[derive(Parser)]
#[command(name = "railfetch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Railway project ID (overrides RAILWAY_PROJECT_ID)
    #[arg(long, global = true)]
    project_id: Option<String>,

    /// Railway environment ID (overrides RAILWAY_ENVIRONMENT_ID)
    #[arg(long, global = true)]
    environment_id: Option<String>,

    /// Railway service ID (overrides RAILWAY_SERVICE_ID)
    #[arg(long, global = true)]
    service_id: Option<String>,

    /// Output format for listings
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Show full query details and debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// List all projects
    ListProjects,
    /// List environments for a project
    ListEnvironments,
    /// List services for a project
    ListServices,
    /// List recent deployments for a service
    ListDeployments {
        /// Number of deployments to fetch
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    /// Fetch logs for a specific deployment and save them to a file
    FetchDeploymentLogs {
        /// Deployment ID
        deployment_id: String,

        /// Maximum number of log lines to request
        #[arg(long, default_value_t = 1000)]
        limit: u32,

        /// Output directory for log files
        #[arg(long, default_value = "logs")]
        output_dir: PathBuf,
    },
}

/// Identifiers after applying CLI overrides on top of configured defaults.
#[derive(Debug, Default, PartialEq)]
struct Scope {
    project_id: Option<String>,
    environment_id: Option<String>,
    service_id: Option<String>,
}

impl Scope {
    fn resolve(cli: &Cli, config: &Config) -> Self {
        Self {
            project_id: cli.project_id.clone().or_else(|| config.project_id.clone()),
            environment_id: cli
                .environment_id
                .clone()
                .or_else(|| config.environment_id.clone()),
            service_id: cli.service_id.clone().or_else(|| config.service_id.clone()),
        }
    }

    fn project(&self) -> Result<&str> {
        match self.project_id.as_deref() {
            Some(id) => Ok(id),
            None => bail!("--project-id required or set RAILWAY_PROJECT_ID in .env"),
        }
    }

    fn deployment_scope(&self) -> Result<DeploymentScope<'_>> {
        match (
            self.project_id.as_deref(),
            self.environment_id.as_deref(),
            self.service_id.as_deref(),
        ) {
            (Some(project_id), Some(environment_id), Some(service_id)) => Ok(DeploymentScope {
                project_id,
                environment_id,
                service_id,
            }),
            _ => bail!(
                "--project-id, --environment-id, and --service-id required \
                 (or set RAILWAY_PROJECT_ID, RAILWAY_ENVIRONMENT_ID, and RAILWAY_SERVICE_ID in .env)"
            ),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let Some(command) = cli.command.clone() else {
        println!("Railfetch CLI v{}", env!("CARGO_PKG_VERSION"));
        println!("Use --help for usage information");
        return Ok(());
    };

    let config = Config::from_env().context("Please set RAILWAY_API_TOKEN in your .env file")?;
    let client = RailwayClient::new(&config).context("Failed to build API client")?;
    let scope = Scope::resolve(&cli, &config);

    run(command, &client, &scope, cli.format, cli.debug).await
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run<C>(
    command: Commands,
    client: &C,
    scope: &Scope,
    format: OutputFormat,
    debug: bool,
) -> Result<()>
where
    C: QueryClient + ?Sized,
{
    match command {
        Commands::ListProjects => {
            tracing::info!("Fetching projects");
            print_listing(list_projects(client).await, "project", format)
        }
        Commands::ListEnvironments => {
            let project_id = scope.project()?;
            tracing::info!(project_id, "Fetching environments");
            print_listing(
                list_environments(client, project_id).await,
                "environment",
                format,
            )
        }
        Commands::ListServices => {
            let project_id = scope.project()?;
            tracing::info!(project_id, "Fetching services");
            print_listing(list_services(client, project_id).await, "service", format)
        }
        Commands::ListDeployments { limit } => {
            let deployment_scope = scope.deployment_scope()?;
            tracing::info!(limit, "Fetching deployments");
            print_listing(
                list_deployments(client, deployment_scope, limit).await,
                "deployment",
                format,
            )
        }
        Commands::FetchDeploymentLogs {
            deployment_id,
            limit,
            output_dir,
        } => {
            match fetch_logs(client, &deployment_id, limit, output_dir, debug).await? {
                Some(path) => println!("Logs saved to: {}", path.display()),
                None => println!("{}", remediation(scope.project_id.as_deref())),
            }
            Ok(())
        }
    }
}

/// Resolves a deployment's logs and saves them under `output_dir`.
///
/// Returns `None` without touching the filesystem when no candidate
/// answered or the winning payload is empty.
async fn fetch_logs<C>(
    client: &C,
    deployment_id: &str,
    limit: u32,
    output_dir: PathBuf,
    debug: bool,
) -> Result<Option<PathBuf>>
where
    C: QueryClient + ?Sized,
{
    tracing::info!(deployment_id, "Fetching deployment logs");
    let resolved = LogResolver::new(client)
        .with_diagnostics(debug)
        .resolve(deployment_id, limit)
        .await;

    match resolved {
        Some(logs) if !logs.payload.is_empty() => {
            let path = LogFileStore::new(output_dir)
                .save(&logs.payload, &deployment_label(deployment_id))
                .context("Failed to save logs")?;
            Ok(Some(path))
        }
        Some(logs) => {
            tracing::warn!(strategy = logs.strategy, "Deployment logs were empty");
            Ok(None)
        }
        None => Ok(None),
    }
}

/// Prints a listing, degrading a failed query to the empty-listing message.
fn print_listing<T>(
    result: Result<Vec<T>, QueryError>,
    noun: &str,
    format: OutputFormat,
) -> Result<()>
where
    T: TextRecord + Serialize,
{
    let records = result.unwrap_or_else(|err| {
        match err.graphql_details() {
            Some(details) => tracing::error!(errors = %details, "GraphQL errors"),
            None => tracing::error!(error = %err, "API request failed"),
        }
        Vec::new()
    });
    println!("{}", render_listing(&records, noun, format)?);
    Ok(())
}
