use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use mep_app::{AppResult, RunOptions, RunRequest, execute_run, list_networks, project_service};

#[derive(Parser)]
#[command(name = "mep-cli")]
#[command(about = "meptrace CLI - MEP network topology extraction tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate project file syntax and structure
    Validate {
        /// Path to the project YAML file
        project_path: PathBuf,
    },
    /// List networks in a project with their eligibility
    Networks {
        /// Path to the project YAML file
        project_path: PathBuf,
    },
    /// Extract topology for every qualifying network
    Run {
        /// Path to the project YAML file
        project_path: PathBuf,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { project_path } => cmd_validate(&project_path),
        Commands::Networks { project_path } => cmd_networks(&project_path),
        Commands::Run { project_path } => cmd_run(&project_path),
    }
}

fn cmd_validate(project_path: &Path) -> AppResult<()> {
    println!("Validating project: {}", project_path.display());
    let project = project_service::load_project(project_path)?;
    project_service::validate(&project)?;
    println!("✓ Project is valid");
    Ok(())
}

fn cmd_networks(project_path: &Path) -> AppResult<()> {
    let project = project_service::load_project(project_path)?;
    let networks = list_networks(&project);

    if networks.is_empty() {
        println!("No networks found in project");
    } else {
        println!("Networks in project:");
        for net in networks {
            let verdict = match &net.disqualified {
                None => "qualifies".to_string(),
                Some(reason) => format!("skipped: {}", reason),
            };
            println!(
                "  {} - {} [{}] ({} elements, {} connectors) - {}",
                net.uid, net.name, net.category, net.element_count, net.connector_count, verdict
            );
        }
    }
    Ok(())
}

fn cmd_run(project_path: &Path) -> AppResult<()> {
    println!("Processing project: {}", project_path.display());

    let request = RunRequest {
        project_path,
        options: RunOptions::default(),
    };
    let response = execute_run(&request)?;
    let summary = response.summary;

    println!("✓ Run complete: {}", response.output_dir.display());
    println!("  Networks:      {}", summary.total_networks);
    println!("  Qualifying:    {}", summary.qualifying);
    println!("  Traversed:     {}", summary.traversed);
    println!("  Failed:        {}", summary.failed);
    if summary.store_warnings > 0 {
        println!("  Store warnings: {}", summary.store_warnings);
    }
    println!("  JSON bytes:    {}", summary.json_bytes);

    Ok(())
}
