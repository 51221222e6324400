#![deny(unsafe_code)]

//! Pincer CLI — rule-based support chat for the terminal.

mod repl;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use pincer_config::{AppConfig, ChatConfig};
use pincer_core::{Context, Matcher, RuleStore, Session};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::io::BufReader;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Pincer — a rule-based support chat.
#[derive(Parser)]
#[command(name = "pincer", version, about, long_about = None)]
struct Cli {
    /// Path to configuration file.
    #[arg(short, long, default_value = "pincer.toml")]
    config: PathBuf,

    /// Path to the rule document, overriding the configured one.
    #[arg(short, long)]
    rules: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive chat session (the default).
    Chat,

    /// Ask a single question and print the reply.
    Ask {
        /// The input text to look up.
        input: String,

        /// Conversation context to look up under.
        #[arg(long)]
        context: Option<String>,

        /// Seed for reproducible response choice.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Validate the configuration and the rule document.
    Check {
        /// Show the resolved configuration.
        #[arg(long)]
        show: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut config, config_found) = load_config(&cli.config).await?;
    if let Some(rules) = cli.rules {
        config.rules.file = rules;
    }

    // Verbosity flags override the configured level; RUST_LOG overrides both.
    // Logs go to stderr so the chat transcript owns stdout.
    let filter = match cli.verbose {
        0 => config.logging.level.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    if !config_found {
        info!(path = %cli.config.display(), "config file not found, using defaults");
    }

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => cmd_chat(&config).await?,
        Commands::Ask {
            input,
            context,
            seed,
        } => cmd_ask(&config, &input, context, seed).await?,
        Commands::Check { show } => cmd_check(&cli.config, &config, show).await?,
    }

    Ok(())
}

/// Load the configuration, falling back to defaults when the file does not
/// exist. The second value reports whether the file was found, so the caller
/// can log after the subscriber is up.
async fn load_config(path: &Path) -> Result<(AppConfig, bool)> {
    if path.exists() {
        let config = AppConfig::load(path).await?;
        Ok((config, true))
    } else {
        Ok((AppConfig::default(), false))
    }
}

/// Build the matcher for the loaded store, applying the configured fallback
/// reply when one is set.
fn build_matcher(store: RuleStore, chat: &ChatConfig) -> Matcher {
    let matcher = Matcher::new(store);
    match &chat.fallback {
        Some(fallback) => matcher.with_fallback(fallback),
        None => matcher,
    }
}

/// Run the interactive conversation loop over stdin/stdout.
///
/// An unusable rule document degrades to an empty store (already logged by
/// the loader); an empty store means the session never starts.
async fn cmd_chat(config: &AppConfig) -> Result<()> {
    let store = RuleStore::load_or_empty(&config.rules.file).await;
    if store.is_empty() {
        bail!(
            "no usable rules at '{}'; chat not started",
            config.rules.file.display()
        );
    }

    let matcher = Arc::new(build_matcher(store, &config.chat));
    let mut session = Session::new(matcher);
    info!(rules = session.matcher().store().len(), "starting chat session");
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    repl::run(&mut session, stdin, stdout, &config.chat).await?;

    info!("chat session ended");
    Ok(())
}

/// Look up a single input and print the reply.
async fn cmd_ask(
    config: &AppConfig,
    input: &str,
    context: Option<String>,
    seed: Option<u64>,
) -> Result<()> {
    let store = RuleStore::load(&config.rules.file).await?;
    if store.is_empty() {
        bail!(
            "rule document at '{}' contains no rules",
            config.rules.file.display()
        );
    }

    let matcher = build_matcher(store, &config.chat);
    let context = context.map(Context::from).unwrap_or_default();
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let reply = matcher.respond(input, &context, &mut rng);
    debug!(next_context = %reply.next_context, "lookup complete");
    println!("{}", reply.text);
    Ok(())
}

/// Validate the configuration and the rule document it points at.
async fn cmd_check(config_path: &Path, config: &AppConfig, show: bool) -> Result<()> {
    if show {
        let toml_str =
            toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {e}"))?;
        println!("{toml_str}");
    } else {
        println!("Configuration at '{}' is valid.", config_path.display());
    }

    let store = RuleStore::load(&config.rules.file).await?;
    println!(
        "Rule document at '{}' is valid ({} rules).",
        config.rules.file.display(),
        store.len()
    );
    Ok(())
}
