use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use agent_batch::batch::item::load_work_items;
use agent_batch::batch::run_batch;
use agent_batch::config::AppConfig;
use agent_batch::platform::codegen::CodegenRunner;
use agent_batch::platform::dry_run::DryRunRunner;
use agent_batch::platform::AgentRunner;

#[derive(Parser)]
#[command(name = "agent-batch", about = "Create one analysis agent run per repository")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// JSON list of repositories (objects with a `name` field)
    #[arg(short, long)]
    input: Option<std::path::PathBuf>,

    /// Branch the agents commit their ratings to
    #[arg(short, long)]
    branch: Option<String>,

    /// Owner prefix for each repository target
    #[arg(long)]
    namespace: Option<String>,

    /// Render prompts and report progress without creating any runs
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the progress report
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(input) = cli.input {
        config.batch.input_path = input;
    }
    if let Some(branch) = cli.branch {
        config.batch.branch = branch;
    }
    if let Some(namespace) = cli.namespace {
        config.batch.namespace = namespace;
    }

    let runner: Box<dyn AgentRunner> = if cli.dry_run {
        Box::new(DryRunRunner::new())
    } else {
        let (org_id, token) = config.api_credentials()?;
        Box::new(CodegenRunner::new(&config.api.base_url, org_id, token))
    };

    tracing::info!(
        input = %config.batch.input_path.display(),
        dry_run = cli.dry_run,
        "Loading repositories"
    );
    let items = load_work_items(&config.batch.input_path).await?;

    let mut stdout = std::io::stdout().lock();
    run_batch(runner.as_ref(), &items, &config.batch, &mut stdout).await;

    // Individual submission failures are reported above and never change the exit status
    Ok(())
}
