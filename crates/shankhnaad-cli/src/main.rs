use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;

use shankhnaad_core::{
    ConversationTurn, ImageLocator, MediaAttachment, ShankhnaadConfig, TurnOutcome,
};
use shankhnaad_orchestrator::Orchestrator;
use shankhnaad_scripture::{chapter, format_verse, verse_literal, Corpus};

#[derive(Parser)]
#[command(name = "shankhnaad")]
#[command(about = "Spiritual guidance chat grounded in the Bhagavad-gita")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, short, default_value = "false")]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start interactive chat
    Chat,
    /// Ask a single question
    Ask {
        /// Question text
        message: String,
        /// Attach an image file to the question
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// Look up a verse ("2.47") or chapter ("chapter 2") directly
    Verse {
        /// Verse or chapter reference
        reference: String,
    },
    /// Show which providers are configured
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if cli.debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    let config = ShankhnaadConfig::load();

    match cli.command {
        Commands::Chat => run_interactive_chat(&config).await,
        Commands::Ask { message, image } => ask(&config, &message, image).await,
        Commands::Verse { reference } => lookup_verse(&reference),
        Commands::Config => show_config(&config),
    }
}

async fn ask(config: &ShankhnaadConfig, message: &str, image: Option<PathBuf>) -> anyhow::Result<()> {
    let orchestrator = Orchestrator::new(config, Corpus::bundled());

    let media = match image {
        Some(path) => Some(MediaAttachment::from_file(&path).await?),
        None => None,
    };

    let outcome = orchestrator.handle_turn(&[], message, media).await;
    print_outcome(&outcome);
    Ok(())
}

async fn run_interactive_chat(config: &ShankhnaadConfig) -> anyhow::Result<()> {
    let orchestrator = Orchestrator::new(config, Corpus::bundled());

    println!("{}", "🪷 Shankhnaad".cyan().bold());
    println!("{}", "Ask about the Gita, or request devotional artwork.".dimmed());
    println!("{}", "Type 'exit' or 'quit' to leave".dimmed());

    if !config.has_text_provider() {
        println!(
            "{}",
            "⚠ No provider API key found; text answers will be unavailable.".yellow()
        );
    }
    println!();

    let mut history: Vec<ConversationTurn> = Vec::new();

    loop {
        print!("{} ", "You:".cyan().bold());
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            println!("{}", "🙏 Hare Krishna!".cyan());
            break;
        }
        if input.is_empty() {
            continue;
        }

        let outcome = orchestrator.handle_turn(&history, input, None).await;

        println!("{}", "Shankhnaad:".green().bold());
        print_outcome(&outcome);
        println!();

        history.push(ConversationTurn::user(input));
        history.push(ConversationTurn::model(&outcome.result.text));
    }

    Ok(())
}

fn print_outcome(outcome: &TurnOutcome) {
    if outcome.result.succeeded {
        println!("{}", outcome.result.text);
    } else {
        println!("{}", outcome.result.text.red());
    }

    if let Some(image) = &outcome.image {
        match &image.locator {
            ImageLocator::Cached { path } => {
                println!("{}", format!("🖼  Image saved to {}", path.display()).green());
            }
            ImageLocator::Remote { url } => {
                println!("{}", format!("🖼  Image available at {url}").green());
            }
            ImageLocator::DataUri { .. } => {
                println!("{}", "🖼  Placeholder artwork generated (inline SVG)".yellow());
            }
        }
    }
}

fn lookup_verse(reference: &str) -> anyhow::Result<()> {
    let corpus = Corpus::bundled();

    if let Some(verse) = verse_literal(corpus.records(), reference) {
        println!("{}", format_verse(verse));
        return Ok(());
    }

    if let Some(verses) = chapter(corpus.records(), reference) {
        if verses.is_empty() {
            println!("{}", "No verses found for that chapter.".yellow());
        } else {
            for verse in verses {
                println!("{}", format_verse(verse));
                println!();
            }
        }
        return Ok(());
    }

    println!(
        "{}",
        "Not a verse reference. Try \"2.47\" or \"chapter 2\".".yellow()
    );
    Ok(())
}

fn show_config(config: &ShankhnaadConfig) -> anyhow::Result<()> {
    let describe = |configured: bool| {
        if configured {
            "configured".green()
        } else {
            "not configured".dimmed()
        }
    };

    let openrouter = config
        .providers
        .openrouter
        .as_ref()
        .is_some_and(|c| !c.api_key.trim().is_empty());
    let gemini = config
        .providers
        .gemini
        .as_ref()
        .is_some_and(|c| !c.api_key.trim().is_empty());

    println!("openrouter: {}", describe(openrouter));
    println!("gemini:     {}", describe(gemini));
    println!(
        "image:      {}",
        config
            .image
            .base_url
            .as_deref()
            .unwrap_or("default endpoint")
    );
    println!("history_window: {}", config.history_window);

    if !config.has_text_provider() {
        println!();
        println!(
            "{}",
            "Set OPENROUTER_API_KEY or GEMINI_API_KEY, or add keys to ~/.shankhnaad/config.toml."
                .yellow()
        );
    }
    Ok(())
}
