use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dotenvy::dotenv;
use log::{debug, error, info};
use std::path::{Path, PathBuf};

use sparkpage_ai::{AnthropicChat, OllamaChat, OpenAiChat};
use sparkpage_core::{
    ChatProvider, GeneratedAppData, GenerationSession, Generator, SparkError, ViewState,
};

mod render;
use render::Format;

#[derive(Parser)]
#[command(name = "sparkpage", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a landing page from a raw app idea
    Generate {
        /// The app idea, e.g. "a mobile app that helps users find and book dog-walking services"
        idea: String,

        /// AI provider to use
        #[arg(long, value_enum, default_value_t = ProviderType::Openai)]
        provider: ProviderType,

        /// Model name (uses the provider default if not specified)
        #[arg(short, long)]
        model: Option<String>,

        /// Output file path (prints to stdout if not provided)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Render a previously generated page JSON file
    Preview {
        /// Path to the saved page JSON
        input: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Html)]
        format: Format,

        /// Output file path (prints to stdout if not provided)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
enum ProviderType {
    Openai,
    Anthropic,
    Ollama,
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.to_possible_value()
            .expect("no skipped variants")
            .get_name()
            .fmt(f)
    }
}

fn make_provider(kind: ProviderType, model: Option<String>) -> Result<Box<dyn ChatProvider>> {
    match kind {
        ProviderType::Openai => {
            let provider = match model {
                Some(model) => OpenAiChat::from_env_with_model(&model)?,
                None => OpenAiChat::from_env()?,
            };
            Ok(Box::new(provider))
        }
        ProviderType::Anthropic => {
            let provider = match model {
                Some(model) => AnthropicChat::from_env_with_model(&model)?,
                None => AnthropicChat::from_env()?,
            };
            Ok(Box::new(provider))
        }
        ProviderType::Ollama => {
            let provider = match model {
                Some(model) => OllamaChat::new(model),
                None => OllamaChat::from_env(),
            };
            Ok(Box::new(provider))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenv().ok();

    // Initialize logging
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            idea,
            provider,
            model,
            output,
            format,
        } => generate(idea, provider, model, output, format).await,
        Commands::Preview {
            input,
            format,
            output,
        } => preview(&input, format, output.as_deref()),
    }
}

async fn generate(
    idea: String,
    kind: ProviderType,
    model: Option<String>,
    output: Option<PathBuf>,
    format: Format,
) -> Result<()> {
    let provider = make_provider(kind, model).context("Failed to configure provider")?;
    info!("Generating page with provider: {}", provider.name());

    let generator = Generator::new(provider);
    let mut session = GenerationSession::new();
    let token = session.begin();

    let mut state = ViewState::default();
    state.submit();

    let outcome = tokio::select! {
        outcome = generator.generate(&idea, token) => outcome,
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted, cancelling generation");
            session.cancel();
            Err(SparkError::Cancelled)
        }
    };
    session.finish();

    if let Err(ref err) = outcome {
        if !err.is_cancelled() {
            error!("Generation failed: {}", err);
        }
    }

    state.settle(outcome);
    match state {
        ViewState::Display(page) => {
            let rendered = render::render(&page, format)?;
            write_output(&rendered, output.as_deref())
        }
        ViewState::Error(message) => anyhow::bail!(message),
        _ => {
            // Cancellation surfaces nothing.
            debug!("Generation cancelled before completion");
            Ok(())
        }
    }
}

fn preview(input: &Path, format: Format, output: Option<&Path>) -> Result<()> {
    let json = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let page = GeneratedAppData::from_json(&json).context("Failed to decode page JSON")?;

    let rendered = render::render(&page, format)?;
    write_output(&rendered, output)
}

fn write_output(rendered: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote output to {}", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}
