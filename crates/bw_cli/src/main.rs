use clap::Parser;
use bw_core::Result;
use bw_inference::{Config, DEFAULT_BASE_URL, DEFAULT_COMPOSE_MODEL, DEFAULT_SUMMARY_MODEL};
use bw_pipeline::{handle_command, init_logging, PipelineCommands};
use tracing::{error, info};
use url::Url;

#[derive(Parser, Debug)]
#[command(author, version, about = "Summarize articles and draft a cited blog post", long_about = None)]
pub struct Cli {
    /// API key for the completion endpoint
    #[arg(long, env = "DEEPSEEK_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,
    /// Base URL of the chat-completions API
    #[arg(long, env = "DEEPSEEK_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    base_url: Url,
    #[arg(long, default_value = DEFAULT_SUMMARY_MODEL, global = true)]
    summary_model: String,
    #[arg(long, default_value = DEFAULT_COMPOSE_MODEL, global = true)]
    compose_model: String,
    /// Log at debug level
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: PipelineCommands,
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config {
        api_key: cli.api_key,
        base_url: cli.base_url,
        summary_model: cli.summary_model,
        compose_model: cli.compose_model,
    };

    let model = bw_inference::create_model(&config)?;
    info!("🧠 Completion model initialized (using {} at {})", model.name(), config.base_url);

    handle_command(cli.command, model, &config).await
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        error!("❌ {}", e);
        std::process::exit(1);
    }
}
