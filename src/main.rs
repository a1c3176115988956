use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use ideagen::api::build_provider;
use ideagen::app::App;
use ideagen::config::Config;
use ideagen::error::ConfigurationError;
use ideagen::generator::SuggestionGenerator;
use ideagen::wizard::{WizardPhase, WizardState, WizardStep};
use ideagen::{catalog, env_vars, logging, ui};

/// Print a helpful error message for startup configuration problems
fn print_configuration_error(err: &ConfigurationError) {
    eprintln!("Error: {}", err);
    eprintln!();

    match err {
        ConfigurationError::MissingCredential { env_var, .. } => {
            eprintln!("Export the key before starting ideagen:");
            eprintln!("  export {}=<your key>", env_var);
            eprintln!();
            eprintln!("Run 'ideagen env' to list every variable ideagen reads.");
        }
        ConfigurationError::UnknownProvider(_) => {
            eprintln!("Set api.provider in ~/.config/ideagen/config.toml or IDEAGEN_API__PROVIDER.");
        }
        ConfigurationError::Client { .. } => {
            eprintln!("Check api.base_url and api.timeout_secs in your configuration.");
        }
    }
}

/// Build the generator, reporting configuration errors to the user
fn build_generator(config: &Config) -> Option<SuggestionGenerator> {
    match build_provider(&config.api) {
        Ok(provider) => Some(SuggestionGenerator::new(provider)),
        Err(err) => {
            tracing::error!(error = %err, "Configuration error");
            print_configuration_error(&err);
            None
        }
    }
}

#[derive(Parser)]
#[command(name = "ideagen")]
#[command(about = "Guided wizard that suggests problems worth solving for a start-up idea")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(short, long)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every option the wizard offers
    Catalog,

    /// Generate problem suggestions without the interactive wizard
    Generate(GenerateArgs),

    /// List the environment variables ideagen reads and the effective config
    Env,
}

#[derive(Args)]
struct GenerateArgs {
    /// Primary focus of the idea
    #[arg(long)]
    focus: String,

    /// Primary industry
    #[arg(long)]
    industry: String,

    /// Sub-industry of the chosen industry
    #[arg(long)]
    sub_industry: String,

    /// Technology domain
    #[arg(long)]
    technology: String,

    /// Business model
    #[arg(long)]
    business_model: String,

    /// Target audience
    #[arg(long)]
    audience: String,

    /// Market segment
    #[arg(long)]
    market_segment: String,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

impl GenerateArgs {
    /// Flag values in wizard step order
    fn values(&self) -> [(WizardStep, &str); 7] {
        [
            (WizardStep::Focus, self.focus.as_str()),
            (WizardStep::Industry, self.industry.as_str()),
            (WizardStep::SubIndustry, self.sub_industry.as_str()),
            (WizardStep::Technology, self.technology.as_str()),
            (WizardStep::BusinessModel, self.business_model.as_str()),
            (WizardStep::Audience, self.audience.as_str()),
            (WizardStep::MarketSegment, self.market_segment.as_str()),
        ]
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Load configuration first (needed for logging setup)
    let config = Config::load(cli.config.as_deref())?;

    // No subcommand runs the interactive wizard
    let is_tui_mode = cli.command.is_none();

    // Initialize logging (file-based for TUI, stderr for CLI)
    let logging_handle = logging::init_logging(&config, is_tui_mode, cli.debug)?;

    let code = match cli.command {
        Some(Commands::Catalog) => {
            cmd_catalog();
            ExitCode::SUCCESS
        }
        Some(Commands::Generate(args)) => cmd_generate(&config, args).await?,
        Some(Commands::Env) => {
            cmd_env(&config)?;
            ExitCode::SUCCESS
        }
        None => run_tui(config, logging_handle.log_file_path.clone()).await?,
    };

    // Flush buffered log lines before the process exits
    drop(logging_handle);
    Ok(code)
}

async fn run_tui(config: Config, log_file_path: Option<PathBuf>) -> Result<ExitCode> {
    // Credential problems must surface before the terminal is taken over
    let Some(generator) = build_generator(&config) else {
        return Ok(ExitCode::FAILURE);
    };

    ui::install_panic_hook();
    let mut app = App::new(config, generator);
    let result = app.run().await;

    // Print log file path on exit if logs were written
    if let Some(log_path) = log_file_path {
        if let Ok(metadata) = log_path.metadata() {
            if metadata.len() > 0 {
                eprintln!("Session log: {}", log_path.display());
            }
        }
    }

    result.map(|()| ExitCode::SUCCESS)
}

fn cmd_catalog() {
    let empty = ideagen::wizard::SelectionSet::default();

    for step in WizardStep::selecting() {
        println!("{}. {}", step.number(), step.title());
        println!("{}", "─".repeat(60));

        if *step == WizardStep::SubIndustry {
            for industry in catalog::INDUSTRIES {
                println!("  {}:", industry.name);
                for sub in industry.sub_industries {
                    println!("    - {}", sub);
                }
            }
        } else {
            for option in ideagen::wizard::options_for(*step, &empty) {
                println!("  - {}", option);
            }
        }
        println!();
    }
}

async fn cmd_generate(config: &Config, args: GenerateArgs) -> Result<ExitCode> {
    let Some(generator) = build_generator(config) else {
        return Ok(ExitCode::FAILURE);
    };

    let mut state = WizardState::new();
    let mut request = None;

    for (step, value) in args.values() {
        if !state.options().iter().any(|option| *option == value) {
            tracing::warn!(step = step.label(), value, "Value is not one of the catalog options");
        }

        let transition = state
            .select_option(step, value)
            .with_context(|| format!("Invalid --{} value", flag_name(step)))?;
        state = transition.state;
        request = transition.request;
    }

    let request = request.context("Selections did not start a generation")?;
    let outcome = generator.generate(&request.selections).await;
    let state = state.complete_generation(request.id, outcome);

    if state.phase == WizardPhase::Error {
        let message = state.error.as_deref().unwrap_or("unknown error");
        tracing::error!(error = message, "Generation failed");
        eprintln!("Error: {}", message);
        return Ok(ExitCode::FAILURE);
    }

    if args.json {
        let output = serde_json::json!({
            "selections": state.selections,
            "suggestions": state.suggestions,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).context("Failed to serialize suggestions")?
        );
    } else {
        println!("{}", state.prompt());
        println!("{}", "─".repeat(60));
        for (i, problem) in state.suggestions.iter().enumerate() {
            println!("{:>2}. {}", i + 1, problem);
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// CLI flag that carries the value for `step`
fn flag_name(step: WizardStep) -> &'static str {
    match step {
        WizardStep::Focus => "focus",
        WizardStep::Industry => "industry",
        WizardStep::SubIndustry => "sub-industry",
        WizardStep::Technology => "technology",
        WizardStep::BusinessModel => "business-model",
        WizardStep::Audience => "audience",
        WizardStep::MarketSegment | WizardStep::Results => "market-segment",
    }
}

fn cmd_env(config: &Config) -> Result<()> {
    print!("{}", env_vars::render_report(|name| std::env::var(name).ok()));

    println!("Effective configuration");
    println!("{}", "─".repeat(60));
    print!("{}", config.to_toml()?);
    Ok(())
}
