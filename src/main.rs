use std::io::{stderr, stdout};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tokio::runtime::Runtime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clarity::pipeline::create_agent;
use clarity::{ClarityError, Config, HeuristicAnalyzer, Pipeline, RunController, RunReport};

#[derive(Parser)]
#[command(name = "clarity")]
#[command(version, about = "AI-driven README generator for codebases")]
struct Cli {
    /// Project directory to document
    path: PathBuf,

    /// LLM provider (claude-code)
    #[arg(long)]
    provider: Option<String>,

    /// Model to use
    #[arg(long)]
    model: Option<String>,

    /// Agent timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Enable diagnostic logging on stderr
    #[arg(long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logging stays on stderr at error level by default so the single
    // JSON status line remains the only observable output.
    let filter = if cli.verbose { "debug" } else { "error" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli) {
        Ok(report) => {
            if clarity::cli::emit_success(&mut stdout(), &report).is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            let _ = clarity::cli::emit_failure(&mut stderr(), &e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<RunReport, ClarityError> {
    let mut config = Config::default();
    if let Some(provider) = cli.provider {
        config.agent.provider = provider;
    }
    if let Some(model) = cli.model {
        config.agent.model = model;
    }
    if let Some(timeout) = cli.timeout {
        config.agent.timeout_secs = timeout;
    }
    config.validate()?;

    let agent = create_agent(&config.agent)?;
    let mut controller = RunController::new(
        config,
        HeuristicAnalyzer::new(),
        Pipeline::with_agent(agent),
    );

    let rt = Runtime::new()?;
    rt.block_on(controller.execute(&cli.path))
}
