use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

use senti_cli::{
    display_banner, display_footer, display_options, display_outcome, print_about, print_help,
    read_input, Command, Outcome, Session, Spinner,
};
use senti_core::{CompletionService, MaxTokens, SentimentAnalyzer, Temperature};
use senti_openai::{OpenAiClient, OpenAiConfig};

#[derive(Parser)]
#[command(name = "senti")]
#[command(
    about = "Interactive sentiment analysis backed by a hosted completion model",
    long_about = None
)]
struct Cli {
    /// Model temperature (0.0-1.0)
    #[arg(short, long, default_value = "0.7")]
    temperature: Temperature,

    /// Maximum number of tokens to generate (50-500)
    #[arg(short, long, default_value = "200")]
    max_tokens: MaxTokens,

    /// Analyze this text once and exit
    #[arg(long)]
    text: Option<String>,

    /// Settings file holding OPENAI_API_KEY (defaults to .env)
    #[arg(long)]
    env_file: Option<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Exit status of a one-shot run: only a completed analysis succeeds
fn exit_status(outcome: &Outcome) -> u8 {
    match outcome {
        Outcome::Analysis(_) => 0,
        Outcome::Warning(_) | Outcome::Failure(_) => 1,
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    // A missing key is not fatal: every analysis reports it instead
    let config = match &cli.env_file {
        Some(path) => OpenAiConfig::from_env_file(path)
            .with_context(|| format!("cannot load settings from {}", path.display()))?,
        None => OpenAiConfig::from_env(),
    };

    let analyzer = SentimentAnalyzer::new(OpenAiClient::new(config)?);
    info!(model = analyzer.model_id(), "analyzer ready");
    let mut session = Session::new(cli.temperature, cli.max_tokens);

    // One-shot mode
    if let Some(text) = cli.text {
        session.set_text(text);
        let outcome = analyze(&session, &analyzer).await;
        display_outcome(&outcome);
        return Ok(ExitCode::from(exit_status(&outcome)));
    }

    // Interactive mode
    display_banner();
    display_options(&session.form);

    while let Some(line) = read_input()? {
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{} {}", "⚠️".yellow(), e.to_string().yellow());
                continue;
            }
        };

        match command {
            Command::Analyze(text) => {
                session.set_text(text);
                let outcome = analyze(&session, &analyzer).await;
                display_outcome(&outcome);
            }
            Command::SetTemperature(temperature) => {
                session.set_temperature(temperature);
                println!("{} Temperature set to {}", "✅".green(), temperature);
            }
            Command::SetMaxTokens(max_tokens) => {
                session.set_max_tokens(max_tokens);
                println!("{} Max tokens set to {}", "✅".green(), max_tokens);
            }
            Command::ShowOptions => display_options(&session.form),
            Command::About => print_about(),
            Command::Help => print_help(),
            Command::Quit => break,
        }
    }

    display_footer();
    Ok(ExitCode::SUCCESS)
}

/// Submit the form, with the busy indicator only while a request is in flight
async fn analyze<S: CompletionService>(
    session: &Session,
    analyzer: &SentimentAnalyzer<S>,
) -> Outcome {
    if session.form.text.trim().is_empty() {
        return session.submit(analyzer).await;
    }

    let spinner = Spinner::start("Analyzing sentiment...");
    let outcome = session.submit(analyzer).await;
    spinner.stop().await;
    outcome
}
